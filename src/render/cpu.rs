use crate::{
    color::Rgba,
    foundation::{
        core::{Rect, Viewport},
        error::{AuroraError, AuroraResult},
    },
    render::{
        DrawSurface, FrameRGBA, LinearGradient, RadialGradient,
        composite::{over_f32, over_in_place},
        sample_stops,
    },
};

/// CPU drawing surface backed by a premultiplied RGBA8 `vello_cpu::Pixmap`.
///
/// Gradients are shaded per pixel centre. Solid rects are batched into a
/// `vello_cpu::RenderContext` and composited in one pass before the next
/// gradient fill or readback.
pub struct CpuSurface {
    viewport: Viewport,
    pixmap: Option<CpuPixmap>,
    pending: Option<vello_cpu::RenderContext>,
}

struct CpuPixmap {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    pub fn new(viewport: Viewport) -> AuroraResult<Self> {
        let mut s = Self {
            viewport: Viewport::default(),
            pixmap: None,
            pending: None,
        };
        s.resize(viewport)?;
        Ok(s)
    }

    fn flush_pending(&mut self) -> AuroraResult<()> {
        let Some(mut ctx) = self.pending.take() else {
            return Ok(());
        };
        let Some(target) = self.pixmap.as_mut() else {
            return Ok(());
        };

        let mut layer = vello_cpu::Pixmap::new(target.width, target.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut layer);
        over_in_place(
            target.pixmap.data_as_u8_slice_mut(),
            layer.data_as_u8_slice(),
            1.0,
        )
    }

    fn shade(&mut self, color_at: impl Fn(f64, f64) -> Option<[f32; 4]>) -> AuroraResult<()> {
        self.flush_pending()?;
        let Some(target) = self.pixmap.as_mut() else {
            return Ok(());
        };
        let width = usize::from(target.width);
        let data = target.pixmap.data_as_u8_slice_mut();
        for (i, px) in data.chunks_exact_mut(4).enumerate() {
            let x = (i % width) as f64 + 0.5;
            let y = (i / width) as f64 + 0.5;
            let Some(src) = color_at(x, y) else {
                continue;
            };
            let out = over_f32([px[0], px[1], px[2], px[3]], src);
            px.copy_from_slice(&out);
        }
        Ok(())
    }
}

impl DrawSurface for CpuSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> AuroraResult<()> {
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| AuroraError::render("surface width exceeds u16"))?;
        let height: u16 = viewport
            .height
            .try_into()
            .map_err(|_| AuroraError::render("surface height exceeds u16"))?;

        self.pending = None;
        self.viewport = viewport;
        self.pixmap = (!viewport.is_empty()).then(|| CpuPixmap {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        });
        Ok(())
    }

    fn fill_linear(&mut self, gradient: &LinearGradient) -> AuroraResult<()> {
        let d = gradient.end - gradient.start;
        let len2 = d.hypot2();
        if len2 <= 0.0 || !len2.is_finite() {
            return Ok(());
        }
        let start = gradient.start;
        let stops = gradient.stops.as_slice();
        self.shade(|x, y| {
            let t = ((x - start.x) * d.x + (y - start.y) * d.y) / len2;
            Some(sample_stops(stops, t as f32))
        })
    }

    fn fill_radial(&mut self, gradient: &RadialGradient) -> AuroraResult<()> {
        let r = gradient.radius;
        if r <= 0.0 || !r.is_finite() {
            return Ok(());
        }
        let c = gradient.center;
        if !(c.x.is_finite() && c.y.is_finite()) {
            return Err(AuroraError::validation("radial gradient center must be finite"));
        }
        let stops = gradient.stops.as_slice();
        self.shade(|x, y| {
            let t = (x - c.x).hypot(y - c.y) / r;
            Some(sample_stops(stops, t as f32))
        })
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> AuroraResult<()> {
        let Some(target) = self.pixmap.as_ref() else {
            return Ok(());
        };
        let (w, h) = (target.width, target.height);
        let ctx = self
            .pending
            .get_or_insert_with(|| vello_cpu::RenderContext::new(w, h));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r,
            color.g,
            color.b,
            color.alpha_u8(),
        ));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
        Ok(())
    }

    fn readback(&mut self) -> AuroraResult<FrameRGBA> {
        self.flush_pending()?;
        let Some(target) = self.pixmap.as_ref() else {
            return Ok(FrameRGBA::empty(self.viewport));
        };
        Ok(FrameRGBA {
            width: self.viewport.width,
            height: self.viewport.height,
            data: target.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
