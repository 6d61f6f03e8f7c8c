use crate::{
    animation::clock::AnimationClock,
    background::geometry::FrameGeometry,
    color::{Rgb8, hsl_to_rgb},
    config::GradientConfig,
    foundation::{
        core::{Point, Rect, Viewport},
        error::AuroraResult,
        math::Rng64,
    },
    render::{ColorStop, DrawSurface, LinearGradient, RadialGradient},
};

/// Mutable per-run state handed to every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub viewport: Viewport,
    pub clock: AnimationClock,
}

impl RenderState {
    pub fn new(viewport: Viewport, step: f64) -> Self {
        Self {
            viewport,
            clock: AnimationClock::new(step),
        }
    }
}

/// Draws the aurora background: a diagonal two-hue wash, a drifting soft
/// highlight and a sparse grain pass. Frames accumulate on the surface.
#[derive(Clone, Debug)]
pub struct GradientAnimator {
    config: GradientConfig,
    seed: u64,
}

impl GradientAnimator {
    pub fn new(config: GradientConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    pub fn resize(
        &self,
        state: &mut RenderState,
        viewport: Viewport,
        surface: &mut dyn DrawSurface,
    ) -> AuroraResult<()> {
        state.viewport = viewport;
        surface.resize(viewport)
    }

    /// Advances the clock one step and draws one frame.
    pub fn render_frame(
        &self,
        state: &mut RenderState,
        surface: &mut dyn DrawSurface,
    ) -> AuroraResult<FrameGeometry> {
        let phase = state.clock.advance();
        let viewport = state.viewport;
        let geom = FrameGeometry::at(phase, viewport, &self.config);
        if viewport.is_empty() {
            return Ok(geom);
        }
        tracing::trace!(
            tick = state.clock.ticks(),
            phase,
            focal_x = geom.focal.x,
            focal_y = geom.focal.y,
            "aurora frame"
        );

        let cfg = &self.config;
        let (w, h) = (f64::from(viewport.width), f64::from(viewport.height));

        let a = hsl_to_rgb(geom.hue_a, cfg.saturation, cfg.lightness);
        let b = hsl_to_rgb(geom.hue_b, cfg.saturation, cfg.lightness);
        surface.fill_linear(&LinearGradient {
            start: Point::ZERO,
            end: Point::new(w, h),
            stops: vec![
                ColorStop::new(0.0, a.with_alpha(cfg.alpha_a)),
                ColorStop::new(1.0, b.with_alpha(cfg.alpha_b)),
            ],
        })?;

        surface.fill_radial(&RadialGradient {
            center: geom.focal,
            radius: geom.radius,
            stops: cfg
                .highlight_stops
                .iter()
                .map(|s| ColorStop::new(s.offset, Rgb8::WHITE.with_alpha(s.alpha)))
                .collect(),
        })?;

        let grain = Rgb8::WHITE.with_alpha(cfg.grain_alpha);
        let mut rng = Rng64::for_tick(self.seed, state.clock.ticks());
        for _ in 0..cfg.grain_count {
            let x = rng.next_f64_01() * w;
            let y = rng.next_f64_01() * h;
            surface.fill_rect(
                Rect::new(x, y, x + cfg.grain_size, y + cfg.grain_size),
                grain,
            )?;
        }
        Ok(geom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/animator.rs"]
mod tests;
