use crate::{
    animation::{
        timeline::Timeline,
        tween::{Property, Target},
    },
    background::animator::{GradientAnimator, RenderState},
    behaviors::{Behavior, PageCtx, TimerAction, Timers, install_all},
    config::AuroraConfig,
    foundation::{
        core::{Point, Viewport},
        error::AuroraResult,
    },
    host::{events::HostEvent, headless::PageHost},
    page::{document::Document, spec::PageSpec},
    render::{DrawSurface, FrameRGBA, cpu::CpuSurface},
};

/// The whole page: animated background plus decorative behaviours.
///
/// Each frame runs, in order: due timers, running tweens, per-frame behaviour
/// checks, then one background frame. Without a surface everything except
/// the background still runs.
pub struct PageEffects {
    state: RenderState,
    animator: GradientAnimator,
    surface: Option<Box<dyn DrawSurface>>,
    doc: Document,
    timeline: Timeline,
    timers: Timers,
    behaviors: Vec<Box<dyn Behavior>>,
    now: f64,
}

impl PageEffects {
    pub fn new(
        config: &AuroraConfig,
        page: &PageSpec,
        surface: Option<Box<dyn DrawSurface>>,
    ) -> AuroraResult<Self> {
        config.validate()?;
        page.validate()?;
        let mut doc = Document::from_spec(page, config.viewport);
        let behaviors = install_all(&config.behaviors, &mut doc)?;
        if surface.is_none() {
            tracing::debug!("no drawing surface, background disabled");
        }
        Ok(Self {
            state: RenderState::new(config.viewport, config.gradient.clock_step),
            animator: GradientAnimator::new(config.gradient.clone(), config.seed),
            surface,
            doc,
            timeline: Timeline::new(),
            timers: Timers::default(),
            behaviors,
            now: 0.0,
        })
    }

    pub fn with_cpu_surface(config: &AuroraConfig, page: &PageSpec) -> AuroraResult<Self> {
        let surface = CpuSurface::new(config.viewport)?;
        Self::new(config, page, Some(Box::new(surface)))
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn render_state(&self) -> &RenderState {
        &self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Seconds of page time elapsed.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    fn broadcast(&mut self, event: &HostEvent) -> AuroraResult<()> {
        let mut ctx = PageCtx {
            doc: &mut self.doc,
            timeline: &mut self.timeline,
            timers: &mut self.timers,
            now: self.now,
        };
        for b in &mut self.behaviors {
            b.on_event(event, &mut ctx)?;
        }
        Ok(())
    }
}

impl PageHost for PageEffects {
    fn on_resize(&mut self, viewport: Viewport) -> AuroraResult<()> {
        self.doc.set_viewport(viewport);
        match self.surface.as_deref_mut() {
            Some(surface) => self.animator.resize(&mut self.state, viewport, surface)?,
            None => self.state.viewport = viewport,
        }
        self.broadcast(&HostEvent::Resize(viewport))
    }

    fn on_frame(&mut self, dt: f64) -> AuroraResult<()> {
        self.now += dt;
        for action in self.timers.take_due(self.now) {
            match action {
                TimerAction::Remove(id) => {
                    if self.doc.remove(id) {
                        tracing::debug!(?id, now = self.now, "element removed");
                    }
                }
            }
        }
        self.timeline.advance(dt, &mut self.doc);

        let mut ctx = PageCtx {
            doc: &mut self.doc,
            timeline: &mut self.timeline,
            timers: &mut self.timers,
            now: self.now,
        };
        for b in &mut self.behaviors {
            b.on_frame(&mut ctx)?;
        }

        if let Some(surface) = self.surface.as_deref_mut() {
            self.animator.render_frame(&mut self.state, surface)?;
        }
        Ok(())
    }

    fn on_pointer_move(&mut self, pos: Point) -> AuroraResult<()> {
        self.broadcast(&HostEvent::PointerMove(pos))
    }

    fn on_load(&mut self) -> AuroraResult<()> {
        self.broadcast(&HostEvent::Load)
    }

    fn on_content_loaded(&mut self) -> AuroraResult<()> {
        self.broadcast(&HostEvent::ContentLoaded)
    }

    fn on_key_down(&mut self, key: &str) -> AuroraResult<()> {
        self.broadcast(&HostEvent::KeyDown(key.to_owned()))
    }

    fn on_click(&mut self, selector: &str) -> AuroraResult<()> {
        self.broadcast(&HostEvent::Click(selector.to_owned()))
    }

    /// A user scroll interrupts any smooth scroll in flight.
    fn on_scroll(&mut self, y: f64) -> AuroraResult<()> {
        self.timeline.kill(Target::Scroll, Property::ScrollY);
        self.doc.set_scroll_y(y);
        self.broadcast(&HostEvent::Scroll(self.doc.scroll_y()))
    }

    fn readback(&mut self) -> AuroraResult<Option<FrameRGBA>> {
        self.surface
            .as_deref_mut()
            .map(|s| s.readback())
            .transpose()
    }
}

#[cfg(test)]
#[path = "../tests/unit/effects.rs"]
mod tests;
