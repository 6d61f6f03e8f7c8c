/// Easing curve. Deserializes from a variant name or a power-curve name
/// (see [`Ease::from_name`]); serializes as the variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
        }
    }

    /// Parses either a variant name (`"OutQuart"`) or a power-curve name
    /// (`"power3.out"`). `powerN` has exponent `N + 1`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let by_variant = match name {
            "Linear" | "linear" | "none" => Some(Self::Linear),
            "InQuad" => Some(Self::InQuad),
            "OutQuad" => Some(Self::OutQuad),
            "InOutQuad" => Some(Self::InOutQuad),
            "InCubic" => Some(Self::InCubic),
            "OutCubic" => Some(Self::OutCubic),
            "InOutCubic" => Some(Self::InOutCubic),
            "InQuart" => Some(Self::InQuart),
            "OutQuart" => Some(Self::OutQuart),
            "InOutQuart" => Some(Self::InOutQuart),
            _ => None,
        };
        if by_variant.is_some() {
            return by_variant;
        }

        let (power, dir) = name.split_once('.').unwrap_or((name, "out"));
        let family = match power {
            "power0" => return Some(Self::Linear),
            "power1" => [Self::InQuad, Self::OutQuad, Self::InOutQuad],
            "power2" => [Self::InCubic, Self::OutCubic, Self::InOutCubic],
            "power3" => [Self::InQuart, Self::OutQuart, Self::InOutQuart],
            _ => return None,
        };
        match dir {
            "in" => Some(family[0]),
            "out" => Some(family[1]),
            "inOut" => Some(family[2]),
            _ => None,
        }
    }
}

impl<'de> serde::Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown ease \"{name}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
