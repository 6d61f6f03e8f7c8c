//! Decorative page behaviours. Each one resolves its elements when installed
//! and stays inert, with a `debug` log, when they are missing.

pub(crate) mod anchor;
pub(crate) mod focus;
pub(crate) mod glow;
pub(crate) mod parallax;
pub(crate) mod preloader;
pub(crate) mod reveal;

use crate::{
    animation::timeline::Timeline,
    config::BehaviorConfig,
    foundation::error::AuroraResult,
    host::events::HostEvent,
    page::document::{Document, ElementId},
};

pub use anchor::AnchorScroll;
pub use focus::FocusVisible;
pub use glow::GlowCycle;
pub use parallax::ParallaxTilt;
pub use preloader::Preloader;
pub use reveal::ScrollReveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    Remove(ElementId),
}

/// One-shot actions due at an absolute page time.
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(f64, TimerAction)>,
}

impl Timers {
    pub fn schedule(&mut self, at: f64, action: TimerAction) {
        self.pending.push((at, action));
    }

    /// Removes and returns actions due at `now`, in scheduling order.
    pub fn take_due(&mut self, now: f64) -> Vec<TimerAction> {
        let mut due = Vec::new();
        self.pending.retain(|&(at, action)| {
            if at <= now {
                due.push(action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// What a behaviour may touch while handling an event or frame.
pub struct PageCtx<'a> {
    pub doc: &'a mut Document,
    pub timeline: &'a mut Timeline,
    pub timers: &'a mut Timers,
    /// Seconds since the page started.
    pub now: f64,
}

pub trait Behavior {
    fn name(&self) -> &'static str;

    fn on_event(&mut self, _event: &HostEvent, _ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        Ok(())
    }

    fn on_frame(&mut self, _ctx: &mut PageCtx<'_>) -> AuroraResult<()> {
        Ok(())
    }
}

/// Installs every behaviour against `doc` in page-script order.
pub fn install_all(
    cfg: &BehaviorConfig,
    doc: &mut Document,
) -> AuroraResult<Vec<Box<dyn Behavior>>> {
    let behaviors: Vec<Box<dyn Behavior>> = vec![
        Box::new(Preloader::install(&cfg.preloader, doc)?),
        Box::new(ParallaxTilt::install(&cfg.parallax, doc)?),
        Box::new(ScrollReveal::install(&cfg.reveal, doc)?),
        Box::new(AnchorScroll::install(&cfg.anchor, doc)?),
        Box::new(FocusVisible::new(&cfg.focus)),
        Box::new(GlowCycle::install(&cfg.glow, doc)?),
    ];
    for b in &behaviors {
        tracing::debug!(behavior = b.name(), "installed");
    }
    Ok(behaviors)
}

#[cfg(test)]
#[path = "../tests/unit/behaviors/harness.rs"]
pub(crate) mod harness;

#[cfg(test)]
#[path = "../tests/unit/behaviors/timers.rs"]
mod tests;
