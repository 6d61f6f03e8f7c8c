use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    encode::sink::{FrameSink, SinkConfig, check_order},
    foundation::{
        core::FrameIndex,
        error::{AuroraError, AuroraResult},
    },
    render::{FrameRGBA, composite::flatten_to_opaque_rgba8},
};

/// Writes `frame_000000.png`, `frame_000001.png`, ... into a directory.
pub struct PngSequenceSink {
    dir: PathBuf,
    bg_rgba: [u8; 4],
    last: Option<FrameIndex>,
    written: u64,
    scratch: Vec<u8>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, bg_rgba: [u8; 4]) -> Self {
        Self {
            dir: dir.into(),
            bg_rgba,
            last: None,
            written: 0,
            scratch: Vec::new(),
        }
    }

    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", idx.0))
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> AuroraResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.last = None;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> AuroraResult<()> {
        check_order(self.last, idx)?;
        let path = self.frame_path(idx);
        write_png(&path, frame, self.bg_rgba, &mut self.scratch)?;
        self.last = Some(idx);
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> AuroraResult<()> {
        tracing::info!(frames = self.written, dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

/// Flattens `frame` over `bg_rgba` and saves it as an opaque PNG.
pub fn save_png(path: &Path, frame: &FrameRGBA, bg_rgba: [u8; 4]) -> AuroraResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(path, frame, bg_rgba, &mut Vec::new())
}

fn write_png(
    path: &Path,
    frame: &FrameRGBA,
    bg_rgba: [u8; 4],
    scratch: &mut Vec<u8>,
) -> AuroraResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(AuroraError::encode("cannot write an empty frame as png"));
    }
    scratch.resize(frame.data.len(), 0);
    flatten_to_opaque_rgba8(&mut scratch[..], &frame.data, frame.premultiplied, bg_rgba)?;
    image::save_buffer_with_format(
        path,
        &scratch[..],
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| AuroraError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
