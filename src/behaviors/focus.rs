use crate::{
    behaviors::{Behavior, PageCtx},
    config::FocusConfig,
    foundation::error::AuroraResult,
    host::events::HostEvent,
};

/// Marks the body once the user navigates with the keyboard.
#[derive(Debug)]
pub struct FocusVisible {
    key: String,
    body_class: String,
}

impl FocusVisible {
    pub fn new(cfg: &FocusConfig) -> Self {
        Self {
            key: cfg.key.clone(),
            body_class: cfg.body_class.clone(),
        }
    }
}

impl Behavior for FocusVisible {
    fn name(&self) -> &'static str {
        "focus-visible"
    }

    fn on_event(&mut self, event: &HostEvent, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        if let HostEvent::KeyDown(key) = event
            && *key == self.key
            && ctx.doc.add_body_class(&self.body_class)
        {
            tracing::debug!(class = %self.body_class, "keyboard navigation detected");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behaviors/focus.rs"]
mod tests;
