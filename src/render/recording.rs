use crate::{
    color::Rgba,
    foundation::{
        core::{Rect, Viewport},
        error::AuroraResult,
    },
    render::{DrawSurface, FrameRGBA, LinearGradient, RadialGradient},
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize(Viewport),
    Linear(LinearGradient),
    Radial(RadialGradient),
    Rect { rect: Rect, color: Rgba },
}

/// Surface that records calls instead of drawing. Readback is transparent.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            calls: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Rgba)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Rect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> AuroraResult<()> {
        self.viewport = viewport;
        self.calls.push(DrawCall::Resize(viewport));
        Ok(())
    }

    fn fill_linear(&mut self, gradient: &LinearGradient) -> AuroraResult<()> {
        self.calls.push(DrawCall::Linear(gradient.clone()));
        Ok(())
    }

    fn fill_radial(&mut self, gradient: &RadialGradient) -> AuroraResult<()> {
        self.calls.push(DrawCall::Radial(gradient.clone()));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> AuroraResult<()> {
        self.calls.push(DrawCall::Rect { rect, color });
        Ok(())
    }

    fn readback(&mut self) -> AuroraResult<FrameRGBA> {
        Ok(FrameRGBA::empty(self.viewport))
    }
}
