use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn phase_zero_at_full_hd() {
    let g = FrameGeometry::at(0.0, Viewport::new(1920, 1080), &GradientConfig::default());
    assert!(approx(g.focal.x, 480.0), "{:?}", g.focal);
    assert!(approx(g.focal.y, 378.0), "{:?}", g.focal);
    assert!(approx(g.radius, 0.8 * 1920.0));
    assert!(approx(g.hue_a, 200.0));
    assert!(approx(g.hue_b, 330.0));
}

#[test]
fn focal_point_stays_inside_viewport() {
    let cfg = GradientConfig::default();
    let vp = Viewport::new(1280, 720);
    let mut t = 0.0;
    while t < 200.0 {
        let g = FrameGeometry::at(t, vp, &cfg);
        assert!((0.0..=1280.0).contains(&g.focal.x), "t={t} {:?}", g.focal);
        assert!((0.0..=720.0).contains(&g.focal.y), "t={t} {:?}", g.focal);
        t += 0.037;
    }
}

#[test]
fn cosine_focal_y_is_selectable() {
    let cfg = GradientConfig {
        focal_y: Oscillator::new(Wave::Cos, 0.35, 0.18, 0.7),
        ..GradientConfig::default()
    };
    let g = FrameGeometry::at(0.0, Viewport::new(1920, 1080), &cfg);
    assert!(approx(g.focal.y, 0.53 * 1080.0));
}

#[test]
fn oscillator_bounds() {
    let o = Oscillator::new(Wave::Sin, 0.25, -0.25, 3.0);
    assert_eq!((o.min(), o.max()), (0.0, 0.5));
    assert!(approx(o.sample(0.0), 0.25));
}
