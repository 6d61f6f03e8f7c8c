use super::*;
use crate::render::recording::{DrawCall, RecordingSurface};

fn setup(vp: Viewport) -> (GradientAnimator, RenderState, RecordingSurface) {
    let cfg = GradientConfig::default();
    let state = RenderState::new(vp, cfg.clock_step);
    (GradientAnimator::new(cfg, 7), state, RecordingSurface::new(vp))
}

#[test]
fn frame_draws_wash_highlight_and_grain_in_order() {
    let vp = Viewport::new(320, 200);
    let (anim, mut state, mut surface) = setup(vp);
    anim.render_frame(&mut state, &mut surface).unwrap();

    assert!(matches!(surface.calls[0], DrawCall::Linear(_)));
    assert!(matches!(surface.calls[1], DrawCall::Radial(_)));
    assert_eq!(surface.calls.len(), 2 + 300);

    let DrawCall::Linear(lin) = &surface.calls[0] else {
        unreachable!()
    };
    assert_eq!(lin.start, Point::ZERO);
    assert_eq!(lin.end, Point::new(320.0, 200.0));
    assert_eq!(lin.stops.len(), 2);
    assert_eq!(lin.stops[0].color.a, 0.85);
    assert_eq!(lin.stops[1].color.a, 0.75);

    let DrawCall::Radial(rad) = &surface.calls[1] else {
        unreachable!()
    };
    assert_eq!(rad.radius, 0.8 * 320.0);
    let alphas: Vec<f32> = rad.stops.iter().map(|s| s.color.a).collect();
    assert_eq!(alphas, vec![0.06, 0.02, 0.0]);
}

#[test]
fn grain_rects_are_unit_sized_and_inside_surface() {
    let vp = Viewport::new(64, 48);
    let (anim, mut state, mut surface) = setup(vp);
    anim.render_frame(&mut state, &mut surface).unwrap();

    let rects: Vec<_> = surface.rects().collect();
    assert_eq!(rects.len(), 300);
    for (r, c) in rects {
        assert!((r.width() - 1.0).abs() < 1e-9 && (r.height() - 1.0).abs() < 1e-9);
        assert!((0.0..64.0).contains(&r.x0) && (0.0..48.0).contains(&r.y0));
        assert_eq!((c.r, c.g, c.b, c.a), (255, 255, 255, 0.004));
    }
}

#[test]
fn grain_differs_between_frames_but_repeats_per_seed() {
    let vp = Viewport::new(100, 100);
    let (anim, mut state, mut surface) = setup(vp);
    anim.render_frame(&mut state, &mut surface).unwrap();
    let first: Vec<Rect> = surface.rects().map(|(r, _)| *r).collect();
    surface.clear();
    anim.render_frame(&mut state, &mut surface).unwrap();
    let second: Vec<Rect> = surface.rects().map(|(r, _)| *r).collect();
    assert_ne!(first, second);

    let (anim2, mut state2, mut surface2) = setup(vp);
    anim2.render_frame(&mut state2, &mut surface2).unwrap();
    let again: Vec<Rect> = surface2.rects().map(|(r, _)| *r).collect();
    assert_eq!(first, again);
}

#[test]
fn clock_advances_one_step_per_frame() {
    let (anim, mut state, mut surface) = setup(Viewport::new(8, 8));
    for _ in 0..40 {
        anim.render_frame(&mut state, &mut surface).unwrap();
    }
    assert_eq!(state.clock.ticks(), 40);
    assert_eq!(state.clock.phase(), 40.0 * 0.005);
}

#[test]
fn resize_updates_state_and_surface() {
    let (anim, mut state, mut surface) = setup(Viewport::new(8, 8));
    anim.resize(&mut state, Viewport::new(30, 12), &mut surface)
        .unwrap();
    assert_eq!(state.viewport, Viewport::new(30, 12));
    assert_eq!(surface.viewport(), Viewport::new(30, 12));
    assert_eq!(surface.calls, vec![DrawCall::Resize(Viewport::new(30, 12))]);
}

#[test]
fn empty_viewport_draws_nothing_but_still_ticks() {
    let (anim, mut state, mut surface) = setup(Viewport::new(0, 0));
    anim.render_frame(&mut state, &mut surface).unwrap();
    assert!(surface.calls.is_empty());
    assert_eq!(state.clock.ticks(), 1);
}
