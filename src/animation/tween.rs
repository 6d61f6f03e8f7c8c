use crate::{
    animation::ease::Ease,
    color::Rgb8,
    foundation::error::{AuroraError, AuroraResult},
    page::document::ElementId,
};

/// Animatable visual properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    RotationX, // degrees
    RotationY, // degrees
    Glow,
    ScrollY,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    Scalar(f64),
    Color(Rgb8),
}

impl Value {
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Color(_) => None,
        }
    }

    pub fn as_color(self) -> Option<Rgb8> {
        match self {
            Self::Color(c) => Some(c),
            Self::Scalar(_) => None,
        }
    }

    /// Exact at `t == 0` and `t == 1`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        match (a, b) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a * (1.0 - t) + b * t),
            (Self::Color(a), Self::Color(b)) => Self::Color(a.lerp(b, t)),
            // Mismatched kinds cannot blend; snap at the end of the segment.
            (a, b) => {
                if t >= 1.0 {
                    b
                } else {
                    a
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Target {
    Element(ElementId),
    Scroll,
}

/// Read/write access to the properties a [`Tween`] animates.
pub trait PropertyStore {
    /// `None` when the target no longer exists or lacks the property.
    fn read(&self, target: Target, property: Property) -> Option<Value>;

    /// Returns `false` when the target no longer exists.
    fn write(&mut self, target: Target, property: Property, value: Value) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    Once,
    Times(u32), // extra iterations after the first
    Forever,
}

impl Repeat {
    fn iterations(self) -> Option<u64> {
        match self {
            Self::Once => Some(1),
            Self::Times(n) => Some(u64::from(n) + 1),
            Self::Forever => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    pub from: Option<Value>, // None: capture when the tween starts
    pub keys: Vec<Value>,    // evenly spaced across eased progress
}

/// Time-interpolated change of one target's properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub tracks: Vec<Track>,
    pub duration: f64, // seconds per iteration
    pub delay: f64,    // seconds before the first iteration
    pub ease: Ease,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl Tween {
    pub fn new(target: Target, duration: f64) -> Self {
        Self {
            target,
            tracks: Vec::new(),
            duration,
            delay: 0.0,
            ease: Ease::OutQuad,
            repeat: Repeat::Once,
            yoyo: false,
        }
    }

    /// Animate `property` from its value at start time to `to`.
    pub fn to(mut self, property: Property, to: Value) -> Self {
        self.tracks.push(Track {
            property,
            from: None,
            keys: vec![to],
        });
        self
    }

    pub fn from_to(mut self, property: Property, from: Value, to: Value) -> Self {
        self.tracks.push(Track {
            property,
            from: Some(from),
            keys: vec![to],
        });
        self
    }

    /// Animate through `keys`; the first key is the starting value.
    pub fn keys(mut self, property: Property, mut keys: Vec<Value>) -> Self {
        let from = (!keys.is_empty()).then(|| keys.remove(0));
        self.tracks.push(Track {
            property,
            from,
            keys,
        });
        self
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn animates(&self, property: Property) -> bool {
        self.tracks.iter().any(|t| t.property == property)
    }

    pub fn validate(&self) -> AuroraResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AuroraError::validation(
                "tween duration must be finite and >= 0",
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(AuroraError::validation(
                "tween delay must be finite and >= 0",
            ));
        }
        if self.tracks.is_empty() {
            return Err(AuroraError::validation(
                "tween must animate at least one property",
            ));
        }
        if self.tracks.iter().any(|t| t.keys.is_empty()) {
            return Err(AuroraError::validation(
                "tween track must have at least one target value",
            ));
        }
        if self.repeat == Repeat::Forever && self.duration == 0.0 {
            return Err(AuroraError::validation(
                "an endlessly repeating tween needs a non-zero duration",
            ));
        }
        Ok(())
    }

    /// Eased progress in `[0, 1]` for `local` seconds after the delay, and
    /// whether the tween has completed.
    pub(crate) fn progress_at(&self, local: f64) -> (f64, bool) {
        let iterations = self.repeat.iterations();
        if self.duration <= 0.0 {
            return (self.ease.apply(1.0), true);
        }

        let pos = (local / self.duration).max(0.0);
        let iter = pos.floor() as u64;
        if let Some(total) = iterations
            && iter >= total
        {
            let last_reversed = self.yoyo && (total - 1) % 2 == 1;
            let raw = if last_reversed { 0.0 } else { 1.0 };
            return (self.ease.apply(raw), true);
        }

        let mut frac = pos - pos.floor();
        if self.yoyo && iter % 2 == 1 {
            frac = 1.0 - frac;
        }
        (self.ease.apply(frac), false)
    }
}

/// Piecewise-linear sample of `values` at eased progress `p`.
pub(crate) fn sample_values(values: &[Value], p: f64) -> Option<Value> {
    match values {
        [] => None,
        [only] => Some(*only),
        _ => {
            let segments = values.len() - 1;
            let pos = p.clamp(0.0, 1.0) * segments as f64;
            let idx = (pos.floor() as usize).min(segments - 1);
            Some(Value::lerp(values[idx], values[idx + 1], pos - idx as f64))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
