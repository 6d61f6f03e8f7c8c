use std::{
    ffi::OsString,
    io::{ErrorKind, Write as _},
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    encode::sink::{FrameSink, SinkConfig, check_order},
    foundation::{
        core::FrameIndex,
        error::{AuroraError, AuroraResult},
    },
    render::{FrameRGBA, composite::flatten_to_opaque_rgba8},
};

/// Streams frames into the system `ffmpeg` as raw RGBA and lets it write an
/// H.264 MP4 (yuv420p, so both sides must be even).
///
/// The process is spawned on `begin` and reaped on `end`.
pub struct FfmpegSink {
    out_path: PathBuf,
    bg_rgba: [u8; 4],
    overwrite: bool,
    pipe: Option<Pipe>,
    last: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(out_path: impl Into<PathBuf>, bg_rgba: [u8; 4]) -> Self {
        Self {
            out_path: out_path.into(),
            bg_rgba,
            overwrite: true,
            pipe: None,
            last: None,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    fn command_args(&self, cfg: &SinkConfig) -> Vec<OsString> {
        let size = format!("{}x{}", cfg.width, cfg.height);
        let rate = format!("{}/{}", cfg.fps.num, cfg.fps.den);
        let mut args: Vec<OsString> = vec![if self.overwrite { "-y" } else { "-n" }.into()];
        for a in [
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            size.as_str(),
            "-r",
            rate.as_str(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ] {
            args.push(a.into());
        }
        args.push(self.out_path.clone().into_os_string());
        args
    }

    fn prepare_output(&self) -> AuroraResult<()> {
        if let Some(parent) = self.out_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        if !self.overwrite && self.out_path.exists() {
            return Err(AuroraError::validation(format!(
                "output file '{}' already exists",
                self.out_path.display()
            )));
        }
        Ok(())
    }
}

fn check_mp4_size(cfg: &SinkConfig) -> AuroraResult<()> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(AuroraError::validation("mp4 width/height must be non-zero"));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(AuroraError::validation(format!(
            "mp4 width/height must be even for yuv420p, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

/// A running `ffmpeg` child plus the opaque frame buffer written to its stdin.
struct Pipe {
    child: Child,
    stdin: ChildStdin,
    width: u32,
    height: u32,
    scratch: Vec<u8>,
}

impl Pipe {
    fn spawn(args: &[OsString], out: &Path, width: u32, height: u32) -> AuroraResult<Self> {
        tracing::debug!(out = %out.display(), "spawning ffmpeg");
        let mut child = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    AuroraError::encode("ffmpeg is required for MP4 output but is not on PATH")
                }
                _ => AuroraError::encode(format!("failed to spawn ffmpeg: {e}")),
            })?;
        let Some(stdin) = child.stdin.take() else {
            return Err(AuroraError::encode("ffmpeg stdin was not piped"));
        };
        Ok(Self {
            child,
            stdin,
            width,
            height,
            scratch: vec![0u8; (width as usize) * (height as usize) * 4],
        })
    }

    fn write(&mut self, frame: &FrameRGBA, bg_rgba: [u8; 4]) -> AuroraResult<()> {
        if (frame.width, frame.height) != (self.width, self.height) {
            return Err(AuroraError::validation(format!(
                "frame is {}x{}, mp4 stream is {}x{}",
                frame.width, frame.height, self.width, self.height
            )));
        }
        flatten_to_opaque_rgba8(&mut self.scratch, &frame.data, frame.premultiplied, bg_rgba)?;
        self.stdin
            .write_all(&self.scratch)
            .map_err(|e| AuroraError::encode(format!("ffmpeg stdin write failed: {e}")))
    }

    /// Closes stdin so ffmpeg sees EOF, then waits for it.
    fn close(self) -> AuroraResult<()> {
        let Self { child, stdin, .. } = self;
        drop(stdin);
        let output = child
            .wait_with_output()
            .map_err(|e| AuroraError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        if output.status.success() {
            return Ok(());
        }
        Err(AuroraError::encode(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )))
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> AuroraResult<()> {
        check_mp4_size(&cfg)?;
        self.prepare_output()?;
        let args = self.command_args(&cfg);
        self.pipe = Some(Pipe::spawn(&args, &self.out_path, cfg.width, cfg.height)?);
        self.last = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> AuroraResult<()> {
        check_order(self.last, idx)?;
        let Some(pipe) = self.pipe.as_mut() else {
            return Err(AuroraError::encode("ffmpeg sink received a frame before begin"));
        };
        pipe.write(frame, self.bg_rgba)?;
        self.last = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> AuroraResult<()> {
        let Some(pipe) = self.pipe.take() else {
            return Ok(());
        };
        pipe.close()?;
        tracing::info!(out = %self.out_path.display(), "mp4 written");
        Ok(())
    }
}
