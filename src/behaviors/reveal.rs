use crate::{
    animation::tween::{Property, Target, Tween, Value},
    behaviors::{Behavior, PageCtx},
    config::RevealConfig,
    foundation::error::AuroraResult,
    host::events::HostEvent,
    page::document::{Document, ElementId},
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    id: ElementId,
    index: usize,
    opacity: f64,
    translate_y: f64,
}

/// Fades cards up into place the first time they scroll into view.
#[derive(Debug)]
pub struct ScrollReveal {
    pending: Vec<Pending>,
    cfg: RevealConfig,
}

impl ScrollReveal {
    /// Hides every match right away: opacity 0, shifted down by `offset_y`.
    pub fn install(cfg: &RevealConfig, doc: &mut Document) -> AuroraResult<Self> {
        let ids = doc.query_selector_all(&cfg.selector)?;
        if ids.is_empty() {
            tracing::debug!(selector = %cfg.selector, "no reveal elements");
        }
        let mut pending = Vec::with_capacity(ids.len());
        for (index, id) in ids.into_iter().enumerate() {
            let Some(el) = doc.element_mut(id) else {
                continue;
            };
            pending.push(Pending {
                id,
                index,
                opacity: el.style.opacity,
                translate_y: el.style.translate_y,
            });
            el.style.opacity = 0.0;
            el.style.translate_y += cfg.offset_y;
        }
        Ok(Self {
            pending,
            cfg: cfg.clone(),
        })
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn check(&mut self, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        let line = self.cfg.start_fraction * f64::from(ctx.doc.viewport().height);
        let mut fire = Vec::new();
        self.pending.retain(|p| match ctx.doc.viewport_top(p.id) {
            None => {
                tracing::debug!(id = ?p.id, "reveal element removed");
                false
            }
            Some(top) if top <= line => {
                fire.push(*p);
                false
            }
            Some(_) => true,
        });

        for p in fire {
            tracing::debug!(id = ?p.id, index = p.index, now = ctx.now, "reveal");
            ctx.timeline.add(
                Tween::new(Target::Element(p.id), self.cfg.duration)
                    .from_to(Property::Opacity, Value::Scalar(0.0), Value::Scalar(p.opacity))
                    .from_to(
                        Property::TranslateY,
                        Value::Scalar(p.translate_y + self.cfg.offset_y),
                        Value::Scalar(p.translate_y),
                    )
                    .delay(self.cfg.stagger * p.index as f64)
                    .ease(self.cfg.ease),
            )?;
        }
        Ok(())
    }
}

impl Behavior for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn on_event(&mut self, event: &HostEvent, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        match event {
            HostEvent::Scroll(_) | HostEvent::Resize(_) => self.check(ctx),
            _ => Ok(()),
        }
    }

    fn on_frame(&mut self, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.check(ctx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behaviors/reveal.rs"]
mod tests;
