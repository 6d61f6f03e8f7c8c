use crate::{
    config::GradientConfig,
    foundation::core::{Point, Viewport},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wave {
    Sin,
    Cos,
}

/// `offset + amp * wave(freq * t)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Oscillator {
    pub wave: Wave,
    pub offset: f64,
    pub amp: f64,
    pub freq: f64,
}

impl Oscillator {
    pub const fn new(wave: Wave, offset: f64, amp: f64, freq: f64) -> Self {
        Self {
            wave,
            offset,
            amp,
            freq,
        }
    }

    pub fn sample(self, t: f64) -> f64 {
        let x = self.freq * t;
        let w = match self.wave {
            Wave::Sin => x.sin(),
            Wave::Cos => x.cos(),
        };
        self.offset + self.amp * w
    }

    pub fn min(self) -> f64 {
        self.offset - self.amp.abs()
    }

    pub fn max(self) -> f64 {
        self.offset + self.amp.abs()
    }

    pub(crate) fn is_finite(self) -> bool {
        self.offset.is_finite() && self.amp.is_finite() && self.freq.is_finite()
    }
}

/// Per-frame gradient parameters derived from the clock phase and viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub focal: Point,
    pub radius: f64,
    pub hue_a: f64,
    pub hue_b: f64,
}

impl FrameGeometry {
    pub fn at(phase: f64, viewport: Viewport, cfg: &GradientConfig) -> Self {
        let w = f64::from(viewport.width);
        let h = f64::from(viewport.height);
        // Clamp guards float rounding at the oscillator extremes.
        let fx = cfg.focal_x.sample(phase).clamp(0.0, 1.0);
        let fy = cfg.focal_y.sample(phase).clamp(0.0, 1.0);
        Self {
            focal: Point::new(w * fx, h * fy),
            radius: cfg.highlight_radius * viewport.max_side(),
            hue_a: cfg.hue_a.sample(phase),
            hue_b: cfg.hue_b.sample(phase),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/geometry.rs"]
mod tests;
