use crate::{
    animation::tween::{Property, Target},
    behaviors::{Behavior, PageCtx, TimerAction},
    config::PreloaderConfig,
    foundation::error::AuroraResult,
    host::events::HostEvent,
    page::document::{Document, ElementId},
};

/// Hides the loading overlay on load and drops it shortly after.
#[derive(Debug)]
pub struct Preloader {
    target: Option<ElementId>,
    remove_after: f64,
}

impl Preloader {
    pub fn install(cfg: &PreloaderConfig, doc: &Document) -> AuroraResult<Self> {
        let target = doc.query_selector(&cfg.selector)?;
        if target.is_none() {
            tracing::debug!(selector = %cfg.selector, "no preloader element");
        }
        Ok(Self {
            target,
            remove_after: cfg.remove_after,
        })
    }
}

impl Behavior for Preloader {
    fn name(&self) -> &'static str {
        "preloader"
    }

    fn on_event(&mut self, event: &HostEvent, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        if *event != HostEvent::Load {
            return Ok(());
        }
        let Some(id) = self.target.take() else {
            return Ok(());
        };
        if ctx.doc.element(id).is_none() {
            tracing::debug!(?id, "preloader already gone");
            return Ok(());
        }
        ctx.timeline.kill(Target::Element(id), Property::Opacity);
        if let Some(el) = ctx.doc.element_mut(id) {
            el.style.opacity = 0.0;
        }
        ctx.timers
            .schedule(ctx.now + self.remove_after, TimerAction::Remove(id));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behaviors/preloader.rs"]
mod tests;
