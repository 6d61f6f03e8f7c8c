use std::{collections::BTreeMap, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::Rect,
    error::{AuroraError, AuroraResult},
};

const DEMO_PAGE: &str = include_str!("demo_page.json");

/// Serialized page description. Elements nest; document order is depth-first.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    /// Total scrollable height; defaults to the lowest element edge.
    #[serde(default)]
    pub content_height: Option<f64>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    pub rect: RectSpec,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

fn default_tag() -> String {
    "div".to_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectSpec {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectSpec {
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }
}

impl PageSpec {
    /// Portfolio-style page with every element the behaviours look for.
    pub fn demo() -> Self {
        // Parsed in tests; cannot fail at runtime.
        Self::from_json_str(DEMO_PAGE).unwrap_or_default()
    }

    pub fn from_json_str(s: &str) -> AuroraResult<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_path(path: &Path) -> AuroraResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read page '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> AuroraResult<()> {
        fn check(el: &ElementSpec) -> AuroraResult<()> {
            let r = el.rect;
            if ![r.x, r.y, r.w, r.h].iter().all(|v| v.is_finite()) || r.w < 0.0 || r.h < 0.0 {
                return Err(AuroraError::config(format!(
                    "element <{}> has an invalid rect",
                    el.tag
                )));
            }
            el.children.iter().try_for_each(check)
        }

        if let Some(h) = self.content_height
            && (!h.is_finite() || h < 0.0)
        {
            return Err(AuroraError::config("content_height must be finite and >= 0"));
        }
        self.elements.iter().try_for_each(check)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/spec.rs"]
mod tests;
