use std::time::Instant;

use crate::{
    config::AuroraConfig,
    effects::PageEffects,
    encode::sink::{FrameSink, InMemorySink},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{AuroraError, AuroraResult},
    },
    host::{events::EventScript, headless::HeadlessHost},
    page::{document::Document, spec::PageSpec},
    render::FrameRGBA,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// Frames run, including warm-up frames before the range.
    pub frames_total: u64,
    /// Frames pushed to the sink.
    pub frames_written: u64,
    pub elapsed_secs: f64,
}

/// Renders `range` into `sink` on the CPU surface.
///
/// The canvas accumulates, so frames `0..range.start` are run first and
/// discarded.
#[tracing::instrument(skip_all, fields(start = range.start.0, end = range.end.0))]
pub fn render_range(
    config: &AuroraConfig,
    page: &PageSpec,
    range: FrameRange,
    script: &EventScript,
    sink: &mut dyn FrameSink,
) -> AuroraResult<RenderStats> {
    if range.is_empty() {
        return Err(AuroraError::validation("render range must be non-empty"));
    }
    if config.viewport.is_empty() {
        return Err(AuroraError::validation("viewport must be non-empty"));
    }

    let started = Instant::now();
    let mut effects = PageEffects::with_cpu_surface(config, page)?;
    let host = HeadlessHost::new(config.viewport, config.fps);
    let written = host.run(&mut effects, range, script, sink)?;

    let stats = RenderStats {
        frames_total: range.end.0,
        frames_written: written,
        elapsed_secs: started.elapsed().as_secs_f64(),
    };
    tracing::info!(
        frames = stats.frames_written,
        warmup = range.start.0,
        elapsed_secs = stats.elapsed_secs,
        "render complete"
    );
    Ok(stats)
}

/// Renders frames `0..=frame` and returns the last one.
pub fn render_frame(
    config: &AuroraConfig,
    page: &PageSpec,
    frame: FrameIndex,
    script: &EventScript,
) -> AuroraResult<FrameRGBA> {
    let end = frame
        .0
        .checked_add(1)
        .ok_or_else(|| AuroraError::validation("frame index out of range"))?;
    let range = FrameRange::new(frame, FrameIndex(end))?;
    let mut sink = InMemorySink::new();
    render_range(config, page, range, script, &mut sink)?;
    sink.frames
        .pop()
        .map(|(_, f)| f)
        .ok_or_else(|| AuroraError::render("no frame was rendered"))
}

/// Runs the page without drawing and returns the final document.
#[tracing::instrument(skip_all, fields(frames = frames))]
pub fn simulate(
    config: &AuroraConfig,
    page: &PageSpec,
    frames: u64,
    script: &EventScript,
) -> AuroraResult<Document> {
    let mut effects = PageEffects::new(config, page, None)?;
    let host = HeadlessHost::new(config.viewport, config.fps);
    host.simulate(&mut effects, frames, script)?;
    Ok(effects.document().clone())
}
