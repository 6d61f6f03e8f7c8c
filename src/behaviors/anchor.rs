use crate::{
    animation::tween::{Property, Target, Tween, Value},
    behaviors::{Behavior, PageCtx},
    config::AnchorConfig,
    foundation::error::AuroraResult,
    host::events::HostEvent,
    page::{
        document::{Document, ElementId},
        selector::SelectorList,
    },
};

/// Smooth-scrolls to in-page anchors clicked in the nav or hero.
#[derive(Debug)]
pub struct AnchorScroll {
    links: Vec<ElementId>,
    cfg: AnchorConfig,
}

impl AnchorScroll {
    pub fn install(cfg: &AnchorConfig, doc: &Document) -> AuroraResult<Self> {
        let links = doc.query_selector_all(&cfg.selector)?;
        if links.is_empty() {
            tracing::debug!(selector = %cfg.selector, "no anchor links");
        }
        Ok(Self {
            links,
            cfg: cfg.clone(),
        })
    }

    /// Scroll offset that puts `target` just below the fixed nav.
    pub fn destination(&self, doc: &Document, target: ElementId) -> Option<f64> {
        let top = doc.element(target)?.rect.y0;
        Some((top - self.cfg.offset).clamp(0.0, doc.max_scroll()))
    }

    fn follow(&self, link: ElementId, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        let Some(href) = ctx.doc.element(link).and_then(|e| e.attr("href")) else {
            return Ok(());
        };
        if !href.starts_with('#') {
            return Ok(());
        }
        let Ok(list) = SelectorList::parse(href) else {
            tracing::debug!(href, "anchor href is not a valid selector");
            return Ok(());
        };
        let Some(target) = ctx.doc.select(&list).into_iter().next() else {
            tracing::debug!(href, "anchor target missing");
            return Ok(());
        };
        let Some(y) = self.destination(ctx.doc, target) else {
            return Ok(());
        };

        tracing::debug!(href, y, "smooth scroll");
        ctx.timeline.add(
            Tween::new(Target::Scroll, self.cfg.duration)
                .to(Property::ScrollY, Value::Scalar(y))
                .ease(self.cfg.ease),
        )?;
        Ok(())
    }
}

impl Behavior for AnchorScroll {
    fn name(&self) -> &'static str {
        "anchor-scroll"
    }

    fn on_event(&mut self, event: &HostEvent, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        let HostEvent::Click(selector) = event else {
            return Ok(());
        };
        let Some(clicked) = ctx.doc.query_selector(selector)? else {
            tracing::debug!(%selector, "click matched nothing");
            return Ok(());
        };
        if self.links.contains(&clicked) {
            self.follow(clicked, ctx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behaviors/anchor.rs"]
mod tests;
