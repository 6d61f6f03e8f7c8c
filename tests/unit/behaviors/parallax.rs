use super::*;
use crate::{behaviors::harness::Harness, config::ParallaxConfig};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn pointer_offsets_scale_from_viewport_centre() {
    let h = Harness::demo(1000, 500);
    let p = ParallaxTilt::install(&ParallaxConfig::default(), &h.doc).unwrap();
    let (gx, gy) = p.offsets(Point::new(1000.0, 0.0), 1000.0, 500.0);
    assert!(approx(gx, 7.0) && approx(gy, -5.0));
    let (gx, gy) = p.offsets(Point::new(500.0, 250.0), 1000.0, 500.0);
    assert!(approx(gx, 0.0) && approx(gy, 0.0));
}

#[test]
fn pointer_move_tweens_card_to_tilt() {
    let mut h = Harness::demo(1000, 500);
    let mut p = ParallaxTilt::install(&ParallaxConfig::default(), &h.doc).unwrap();
    assert!(p.is_enabled());
    let card = h.doc.query_selector("[data-parallax]").unwrap().unwrap();

    h.send(&mut p, HostEvent::PointerMove(Point::new(1000.0, 500.0)));
    h.run(&mut p, 1.0);

    let s = h.doc.element(card).unwrap().style;
    assert!(approx(s.translate_x, 7.0), "{s:?}");
    assert!(approx(s.translate_y, 5.0), "{s:?}");
    assert!(approx(s.rotation_y, 7.0 * 0.15), "{s:?}");
    assert!(approx(s.rotation_x, -5.0 * 0.12), "{s:?}");
}

#[test]
fn new_pointer_move_overrides_running_tilt() {
    let mut h = Harness::demo(1000, 500);
    let mut p = ParallaxTilt::install(&ParallaxConfig::default(), &h.doc).unwrap();
    let card = h.doc.query_selector("[data-parallax]").unwrap().unwrap();

    h.send(&mut p, HostEvent::PointerMove(Point::new(1000.0, 500.0)));
    h.run(&mut p, 0.2);
    h.send(&mut p, HostEvent::PointerMove(Point::new(0.0, 0.0)));
    assert_eq!(h.timeline.len(), 1);
    h.run(&mut p, 1.0);

    let s = h.doc.element(card).unwrap().style;
    assert!(approx(s.translate_x, -7.0) && approx(s.translate_y, -5.0));
}

#[test]
fn phone_width_still_tilts_by_default() {
    let mut h = Harness::demo(375, 667);
    let mut p = ParallaxTilt::install(&ParallaxConfig::default(), &h.doc).unwrap();
    assert!(p.is_enabled());
    let card = h.doc.query_selector("[data-parallax]").unwrap().unwrap();

    h.send(&mut p, HostEvent::PointerMove(Point::new(375.0, 667.0)));
    h.run(&mut p, 1.0);

    let s = h.doc.element(card).unwrap().style;
    assert!(approx(s.translate_x, 7.0), "{s:?}");
    assert!(approx(s.rotation_y, 7.0 * 0.15), "{s:?}");
}

#[test]
fn configured_min_width_disables_tilt_below_it() {
    let cfg = ParallaxConfig {
        min_width: 768,
        ..ParallaxConfig::default()
    };
    let mut h = Harness::demo(767, 900);
    let mut p = ParallaxTilt::install(&cfg, &h.doc).unwrap();
    assert!(!p.is_enabled());
    h.send(&mut p, HostEvent::PointerMove(Point::new(10.0, 10.0)));
    assert!(h.timeline.is_empty());

    let h = Harness::demo(768, 900);
    assert!(ParallaxTilt::install(&cfg, &h.doc).unwrap().is_enabled());
}
