use crate::{
    foundation::{
        core::{FrameIndex, Fps},
        error::{AuroraError, AuroraResult},
    },
    render::FrameRGBA,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Receives rendered frames in strictly increasing index order.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> AuroraResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> AuroraResult<()>;
    fn end(&mut self) -> AuroraResult<()>;
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub config: Option<SinkConfig>,
    pub frames: Vec<(FrameIndex, FrameRGBA)>,
    pub ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&FrameRGBA> {
        self.frames.last().map(|(_, f)| f)
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> AuroraResult<()> {
        self.config = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> AuroraResult<()> {
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> AuroraResult<()> {
        self.ended = true;
        Ok(())
    }
}

pub(crate) fn check_order(prev: Option<FrameIndex>, next: FrameIndex) -> AuroraResult<()> {
    match prev {
        Some(p) if next <= p => Err(AuroraError::encode(format!(
            "frame {} pushed after frame {}",
            next.0, p.0
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
