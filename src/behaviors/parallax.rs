use crate::{
    animation::tween::{Property, Target, Tween, Value},
    behaviors::{Behavior, PageCtx},
    config::ParallaxConfig,
    foundation::{core::Point, error::AuroraResult},
    host::events::HostEvent,
    page::document::{Document, ElementId},
};

/// Tilts the hero card toward the pointer.
#[derive(Debug)]
pub struct ParallaxTilt {
    target: Option<ElementId>,
    cfg: ParallaxConfig,
}

impl ParallaxTilt {
    /// Disabled for good when the page starts narrower than `cfg.min_width`
    /// (never, with the default of 0).
    pub fn install(cfg: &ParallaxConfig, doc: &Document) -> AuroraResult<Self> {
        let width = doc.viewport().width;
        let target = if width < cfg.min_width {
            tracing::debug!(width, min_width = cfg.min_width, "parallax disabled on narrow viewport");
            None
        } else {
            let found = doc.query_selector(&cfg.selector)?;
            if found.is_none() {
                tracing::debug!(selector = %cfg.selector, "no parallax element");
            }
            found
        };
        Ok(Self {
            target,
            cfg: cfg.clone(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    /// Offsets `(gx, gy)` for a pointer position over a `w`×`h` viewport.
    pub fn offsets(&self, pos: Point, w: f64, h: f64) -> (f64, f64) {
        (
            (pos.x / w - 0.5) * self.cfg.range_x,
            (pos.y / h - 0.5) * self.cfg.range_y,
        )
    }
}

impl Behavior for ParallaxTilt {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn on_event(&mut self, event: &HostEvent, ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        let HostEvent::PointerMove(pos) = event else {
            return Ok(());
        };
        let Some(id) = self.target else {
            return Ok(());
        };
        if ctx.doc.element(id).is_none() {
            tracing::debug!(?id, "parallax element removed");
            self.target = None;
            return Ok(());
        }
        let vp = ctx.doc.viewport();
        if vp.is_empty() {
            return Ok(());
        }

        let (gx, gy) = self.offsets(*pos, f64::from(vp.width), f64::from(vp.height));
        ctx.timeline.add(
            Tween::new(Target::Element(id), self.cfg.duration)
                .to(Property::TranslateX, Value::Scalar(gx))
                .to(Property::TranslateY, Value::Scalar(gy))
                .to(Property::RotationY, Value::Scalar(gx * self.cfg.rotate_y_per_px))
                .to(Property::RotationX, Value::Scalar(gy * self.cfg.rotate_x_per_px))
                .ease(self.cfg.ease),
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behaviors/parallax.rs"]
mod tests;
