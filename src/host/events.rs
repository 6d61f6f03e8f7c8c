use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{FrameIndex, Point, Viewport},
    error::AuroraResult,
};

/// Input a page receives from its environment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostEvent {
    Load,
    ContentLoaded,
    Resize(Viewport),
    /// Viewport coordinates.
    PointerMove(Point),
    KeyDown(String),
    /// Click on the first element matching the selector.
    Click(String),
    /// Jump the page scroll offset (clamped).
    Scroll(f64),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptedEvent {
    pub frame: FrameIndex,
    pub event: HostEvent,
}

/// Events delivered by a headless host at fixed frames.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EventScript {
    pub events: Vec<ScriptedEvent>,
}

impl EventScript {
    pub fn new(events: Vec<ScriptedEvent>) -> Self {
        Self { events }
    }

    /// Content-loaded then load, both on frame 0, the order a browser fires
    /// them for an already-parsed page.
    pub fn page_lifecycle() -> Self {
        Self::new(vec![
            ScriptedEvent {
                frame: FrameIndex(0),
                event: HostEvent::ContentLoaded,
            },
            ScriptedEvent {
                frame: FrameIndex(0),
                event: HostEvent::Load,
            },
        ])
    }

    pub fn push(&mut self, frame: FrameIndex, event: HostEvent) -> &mut Self {
        self.events.push(ScriptedEvent { frame, event });
        self
    }

    /// Events due at `frame`, in script order.
    pub fn due(&self, frame: FrameIndex) -> impl Iterator<Item = &HostEvent> {
        self.events
            .iter()
            .filter(move |e| e.frame == frame)
            .map(|e| &e.event)
    }

    pub fn from_json_str(s: &str) -> AuroraResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> AuroraResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read event script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/events.rs"]
mod tests;
