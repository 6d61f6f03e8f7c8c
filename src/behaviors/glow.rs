use crate::{
    animation::{
        timeline::TweenHandle,
        tween::{Property, Repeat, Target, Tween, Value},
    },
    behaviors::{Behavior, PageCtx},
    config::GlowConfig,
    foundation::error::AuroraResult,
    host::events::HostEvent,
    page::document::{Document, ElementId},
};

/// Cycles the background logo's glow colour back and forth forever.
#[derive(Debug)]
pub struct GlowCycle {
    target: Option<ElementId>,
    cfg: GlowConfig,
    handle: Option<TweenHandle>,
}

impl GlowCycle {
    pub fn install(cfg: &GlowConfig, doc: &Document) -> AuroraResult<Self> {
        let target = doc.query_selector(&cfg.selector)?;
        if target.is_none() {
            tracing::debug!(selector = %cfg.selector, "no glow element");
        }
        Ok(Self {
            target,
            cfg: cfg.clone(),
            handle: None,
        })
    }

    pub fn handle(&self) -> Option<TweenHandle> {
        self.handle
    }
}

impl Behavior for GlowCycle {
    fn name(&self) -> &'static str {
        "glow-cycle"
    }

    fn on_event(&mut self, event: &HostEvent, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        if *event != HostEvent::ContentLoaded || self.handle.is_some() {
            return Ok(());
        }
        let Some(id) = self.target else {
            return Ok(());
        };
        if ctx.doc.element(id).is_none() {
            tracing::debug!(?id, "glow element removed");
            return Ok(());
        }

        let mut keys: Vec<Value> = self.cfg.colors.iter().copied().map(Value::Color).collect();
        if keys.len() == 1 {
            keys.push(keys[0]);
        }
        self.handle = Some(
            ctx.timeline.add(
                Tween::new(Target::Element(id), self.cfg.duration)
                    .keys(Property::Glow, keys)
                    .repeat(Repeat::Forever)
                    .yoyo(true)
                    .ease(self.cfg.ease),
            )?,
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behaviors/glow.rs"]
mod tests;
