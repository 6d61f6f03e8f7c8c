use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::{clock::AnimationClock, ease::Ease},
    background::geometry::{Oscillator, Wave},
    color::Rgb8,
    foundation::{
        core::{Fps, Viewport},
        error::{AuroraError, AuroraResult},
    },
};

/// Top-level configuration. Every field has a default, so `{}` is valid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuroraConfig {
    pub viewport: Viewport,
    pub fps: Fps,
    pub seed: u64,
    pub gradient: GradientConfig,
    pub behaviors: BehaviorConfig,
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1280, 720),
            fps: Fps::default(),
            seed: 0,
            gradient: GradientConfig::default(),
            behaviors: BehaviorConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HighlightStop {
    pub offset: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    pub clock_step: f64,
    /// Fractions of the viewport width/height.
    pub focal_x: Oscillator,
    pub focal_y: Oscillator,
    /// Degrees.
    pub hue_a: Oscillator,
    pub hue_b: Oscillator,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha_a: f32,
    pub alpha_b: f32,
    /// Highlight radius as a multiple of the longer viewport side.
    pub highlight_radius: f64,
    pub highlight_stops: Vec<HighlightStop>,
    pub grain_count: u32,
    pub grain_alpha: f32,
    pub grain_size: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            clock_step: AnimationClock::DEFAULT_STEP,
            focal_x: Oscillator::new(Wave::Sin, 0.25, 0.25, 0.6),
            focal_y: Oscillator::new(Wave::Sin, 0.35, 0.18, 0.7),
            hue_a: Oscillator::new(Wave::Sin, 200.0, 40.0, 0.8),
            hue_b: Oscillator::new(Wave::Cos, 280.0, 50.0, 0.6),
            saturation: 80.0,
            lightness: 60.0,
            alpha_a: 0.85,
            alpha_b: 0.75,
            highlight_radius: 0.8,
            highlight_stops: vec![
                HighlightStop {
                    offset: 0.0,
                    alpha: 0.06,
                },
                HighlightStop {
                    offset: 0.4,
                    alpha: 0.02,
                },
                HighlightStop {
                    offset: 1.0,
                    alpha: 0.0,
                },
            ],
            grain_count: 300,
            grain_alpha: 0.004,
            grain_size: 1.0,
        }
    }
}

impl GradientConfig {
    pub fn validate(&self) -> AuroraResult<()> {
        if !self.clock_step.is_finite() || self.clock_step <= 0.0 {
            return Err(AuroraError::config("gradient.clock_step must be > 0"));
        }
        for (name, osc) in [("focal_x", self.focal_x), ("focal_y", self.focal_y)] {
            if !osc.is_finite() || osc.min() < 0.0 || osc.max() > 1.0 {
                return Err(AuroraError::config(format!(
                    "gradient.{name} must stay within [0, 1] of the viewport"
                )));
            }
        }
        for (name, osc) in [("hue_a", self.hue_a), ("hue_b", self.hue_b)] {
            if !osc.is_finite() {
                return Err(AuroraError::config(format!("gradient.{name} must be finite")));
            }
        }
        for (name, v) in [("saturation", self.saturation), ("lightness", self.lightness)] {
            if !(0.0..=100.0).contains(&v) {
                return Err(AuroraError::config(format!(
                    "gradient.{name} must be within [0, 100]"
                )));
            }
        }
        for (name, a) in [
            ("alpha_a", self.alpha_a),
            ("alpha_b", self.alpha_b),
            ("grain_alpha", self.grain_alpha),
        ] {
            if !(0.0..=1.0).contains(&a) {
                return Err(AuroraError::config(format!(
                    "gradient.{name} must be within [0, 1]"
                )));
            }
        }
        if !self.highlight_radius.is_finite() || self.highlight_radius < 0.0 {
            return Err(AuroraError::config("gradient.highlight_radius must be >= 0"));
        }
        if self.highlight_stops.is_empty()
            || !self
                .highlight_stops
                .iter()
                .all(|s| (0.0..=1.0).contains(&s.offset) && (0.0..=1.0).contains(&s.alpha))
            || !self
                .highlight_stops
                .windows(2)
                .all(|w| w[0].offset <= w[1].offset)
        {
            return Err(AuroraError::config(
                "gradient.highlight_stops must be non-empty, sorted, with offsets and alphas in [0, 1]",
            ));
        }
        if !self.grain_size.is_finite() || self.grain_size <= 0.0 {
            return Err(AuroraError::config("gradient.grain_size must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    pub preloader: PreloaderConfig,
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub anchor: AnchorConfig,
    pub focus: FocusConfig,
    pub glow: GlowConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            preloader: PreloaderConfig::default(),
            parallax: ParallaxConfig::default(),
            reveal: RevealConfig::default(),
            anchor: AnchorConfig::default(),
            focus: FocusConfig::default(),
            glow: GlowConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreloaderConfig {
    pub selector: String,
    pub remove_after: f64,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            selector: "#preloader".to_owned(),
            remove_after: 0.7,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    pub selector: String,
    /// Startup viewport widths below this disable the tilt; 0 never does.
    pub min_width: u32,
    pub range_x: f64,
    pub range_y: f64,
    pub rotate_y_per_px: f64,
    pub rotate_x_per_px: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            selector: "[data-parallax]".to_owned(),
            min_width: 0,
            range_x: 14.0,
            range_y: 10.0,
            rotate_y_per_px: 0.15,
            rotate_x_per_px: -0.12,
            duration: 0.8,
            ease: Ease::OutQuart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub selector: String,
    /// Fire when an element's top reaches this fraction of the viewport height.
    pub start_fraction: f64,
    pub offset_y: f64,
    pub duration: f64,
    pub stagger: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".card, .project-card, .strategy-card, .glass-card, .hero-left".to_owned(),
            start_fraction: 0.85,
            offset_y: 30.0,
            duration: 0.8,
            stagger: 0.06,
            ease: Ease::OutQuart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorConfig {
    pub selector: String,
    pub offset: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: ".nav-links a, .hero .btn".to_owned(),
            offset: 80.0,
            duration: 0.6,
            ease: Ease::InOutCubic,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FocusConfig {
    pub key: String,
    pub body_class: String,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            key: "Tab".to_owned(),
            body_class: "user-tab".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlowConfig {
    pub selector: String,
    pub colors: Vec<Rgb8>,
    /// Seconds per pass through `colors`.
    pub duration: f64,
    pub ease: Ease,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            selector: ".bg-logo".to_owned(),
            colors: vec![
                Rgb8::new(0x4E, 0xE0, 0xC2),
                Rgb8::new(0x7C, 0x5C, 0xFF),
                Rgb8::new(0xFF, 0x6B, 0x6B),
                Rgb8::new(0x4E, 0xE0, 0xC2),
            ],
            duration: 8.0,
            ease: Ease::InOutQuad,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> AuroraResult<()> {
        let durations = [
            ("preloader.remove_after", self.preloader.remove_after),
            ("parallax.duration", self.parallax.duration),
            ("reveal.duration", self.reveal.duration),
            ("reveal.stagger", self.reveal.stagger),
            ("anchor.duration", self.anchor.duration),
        ];
        for (name, v) in durations {
            if !v.is_finite() || v < 0.0 {
                return Err(AuroraError::config(format!(
                    "behaviors.{name} must be finite and >= 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.reveal.start_fraction) {
            return Err(AuroraError::config(
                "behaviors.reveal.start_fraction must be within [0, 1]",
            ));
        }
        if self.glow.colors.is_empty() {
            return Err(AuroraError::config("behaviors.glow.colors must not be empty"));
        }
        if !self.glow.duration.is_finite() || self.glow.duration <= 0.0 {
            return Err(AuroraError::config("behaviors.glow.duration must be > 0"));
        }
        Ok(())
    }
}

impl AuroraConfig {
    pub fn from_json_str(s: &str) -> AuroraResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> AuroraResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> AuroraResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        self.gradient.validate()?;
        self.behaviors.validate()
    }

    /// `AURORA_SEED` and `AURORA_GRAIN_COUNT` override the file values.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|k| std::env::var(k).ok());
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = lookup("AURORA_SEED").and_then(|v| v.trim().parse::<u64>().ok()) {
            self.seed = seed;
        }
        if let Some(n) = lookup("AURORA_GRAIN_COUNT").and_then(|v| v.trim().parse::<u32>().ok()) {
            self.gradient.grain_count = n;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
