use crate::{
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::{FrameIndex, FrameRange, Fps, Point, Viewport},
        error::AuroraResult,
    },
    host::events::{EventScript, HostEvent},
    render::FrameRGBA,
};

/// Callbacks a page receives from whatever environment drives it.
pub trait PageHost {
    fn on_resize(&mut self, viewport: Viewport) -> AuroraResult<()>;

    /// One display refresh, `dt` seconds after the previous one.
    fn on_frame(&mut self, dt: f64) -> AuroraResult<()>;

    fn on_pointer_move(&mut self, pos: Point) -> AuroraResult<()>;

    fn on_load(&mut self) -> AuroraResult<()> {
        Ok(())
    }

    fn on_content_loaded(&mut self) -> AuroraResult<()> {
        Ok(())
    }

    fn on_key_down(&mut self, _key: &str) -> AuroraResult<()> {
        Ok(())
    }

    fn on_click(&mut self, _selector: &str) -> AuroraResult<()> {
        Ok(())
    }

    fn on_scroll(&mut self, _y: f64) -> AuroraResult<()> {
        Ok(())
    }

    /// Pixels of the last rendered frame, if the page draws at all.
    fn readback(&mut self) -> AuroraResult<Option<FrameRGBA>> {
        Ok(None)
    }

    fn dispatch(&mut self, event: &HostEvent) -> AuroraResult<()> {
        match event {
            HostEvent::Load => self.on_load(),
            HostEvent::ContentLoaded => self.on_content_loaded(),
            HostEvent::Resize(vp) => self.on_resize(*vp),
            HostEvent::PointerMove(p) => self.on_pointer_move(*p),
            HostEvent::KeyDown(key) => self.on_key_down(key),
            HostEvent::Click(selector) => self.on_click(selector),
            HostEvent::Scroll(y) => self.on_scroll(*y),
        }
    }
}

/// Drives a [`PageHost`] at a fixed frame rate without a window.
#[derive(Clone, Copy, Debug)]
pub struct HeadlessHost {
    viewport: Viewport,
    fps: Fps,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport, fps: Fps) -> Self {
        Self { viewport, fps }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Runs frames `0..range.end`; frames inside `range` are read back into
    /// `sink`. Earlier frames still run since each frame paints over the last.
    /// Returns the number of frames pushed.
    pub fn run(
        &self,
        handler: &mut dyn PageHost,
        range: FrameRange,
        script: &EventScript,
        sink: &mut dyn FrameSink,
    ) -> AuroraResult<u64> {
        let dt = self.fps.frame_duration_secs();
        handler.on_resize(self.viewport)?;
        sink.begin(SinkConfig {
            width: self.viewport.width,
            height: self.viewport.height,
            fps: self.fps,
        })?;

        let mut pushed = 0u64;
        for f in 0..range.end.0 {
            let idx = FrameIndex(f);
            for event in script.due(idx) {
                tracing::debug!(frame = f, ?event, "dispatch");
                handler.dispatch(event)?;
            }
            handler.on_frame(dt)?;

            if range.contains(idx) {
                match handler.readback()? {
                    Some(frame) => {
                        sink.push_frame(idx, &frame)?;
                        pushed += 1;
                    }
                    None => tracing::debug!(frame = f, "page has no surface, nothing to push"),
                }
            }
        }
        sink.end()?;
        Ok(pushed)
    }

    /// Runs frames `0..frames` without reading anything back.
    pub fn simulate(
        &self,
        handler: &mut dyn PageHost,
        frames: u64,
        script: &EventScript,
    ) -> AuroraResult<()> {
        let dt = self.fps.frame_duration_secs();
        handler.on_resize(self.viewport)?;
        for f in 0..frames {
            for event in script.due(FrameIndex(f)) {
                handler.dispatch(event)?;
            }
            handler.on_frame(dt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
