pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod recording;

use crate::{
    color::Rgba,
    foundation::{
        core::{Point, Rect, Viewport},
        error::AuroraResult,
    },
};

/// Read-back pixels of a surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            data: vec![0; viewport.pixel_count() * 4],
            premultiplied: true,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Gradient along the segment `start -> end`; offsets outside the stops pad.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
}

/// Gradient from `center` (offset 0) out to `radius` (offset 1).
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f64,
    pub stops: Vec<ColorStop>,
}

/// Immediate-mode 2D drawing primitives. All fills composite source-over.
pub trait DrawSurface {
    fn viewport(&self) -> Viewport;

    /// Sets the pixel size; existing content is discarded.
    fn resize(&mut self, viewport: Viewport) -> AuroraResult<()>;

    /// Fills the whole surface.
    fn fill_linear(&mut self, gradient: &LinearGradient) -> AuroraResult<()>;

    /// Fills the whole surface.
    fn fill_radial(&mut self, gradient: &RadialGradient) -> AuroraResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> AuroraResult<()>;

    fn readback(&mut self) -> AuroraResult<FrameRGBA>;
}

/// Premultiplied colour of `stops` at `t`, interpolated in premultiplied space.
pub(crate) fn sample_stops(stops: &[ColorStop], t: f32) -> [f32; 4] {
    fn premul(c: Rgba) -> [f32; 4] {
        let a = c.a.clamp(0.0, 1.0);
        [
            f32::from(c.r) * a,
            f32::from(c.g) * a,
            f32::from(c.b) * a,
            a * 255.0,
        ]
    }

    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; 4];
    };
    if t.is_nan() || t <= first.offset {
        return premul(first.color);
    }
    if t >= last.offset {
        return premul(last.color);
    }

    let idx = stops.partition_point(|s| s.offset <= t).max(1);
    let (Some(a), Some(b)) = (stops.get(idx - 1), stops.get(idx)) else {
        return premul(last.color);
    };
    let span = b.offset - a.offset;
    if span <= 0.0 {
        return premul(b.color);
    }
    let u = (t - a.offset) / span;
    let (pa, pb) = (premul(a.color), premul(b.color));
    [
        pa[0] + (pb[0] - pa[0]) * u,
        pa[1] + (pb[1] - pa[1]) * u,
        pa[2] + (pb[2] - pa[2]) * u,
        pa[3] + (pb[3] - pa[3]) * u,
    ]
}

#[cfg(test)]
#[path = "../tests/unit/render/stops.rs"]
mod tests;
