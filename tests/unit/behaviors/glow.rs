use super::*;
use crate::{behaviors::harness::Harness, color::Rgb8};

fn glow(h: &Harness) -> Option<Rgb8> {
    let id = h.doc.query_selector(".bg-logo").unwrap().unwrap();
    h.doc.element(id).unwrap().style.glow
}

#[test]
fn content_loaded_starts_endless_yoyo_cycle() {
    let cfg = GlowConfig::default();
    let c = &cfg.colors;
    let mut h = Harness::demo(1280, 720);
    let mut g = GlowCycle::install(&cfg, &h.doc).unwrap();

    h.send(&mut g, HostEvent::Load);
    assert!(g.handle().is_none());
    h.send(&mut g, HostEvent::ContentLoaded);
    let handle = g.handle().unwrap();

    h.step(&mut g, 0.0);
    assert_eq!(glow(&h), Some(c[0]));

    // power1.inOut is 0.125 at a quarter pass: 3 segments, 0.375 into the first.
    h.step(&mut g, 2.0);
    assert_eq!(glow(&h), Some(c[0].lerp(c[1], 0.375)));

    h.step(&mut g, 2.0);
    assert_eq!(glow(&h), Some(c[1].lerp(c[2], 0.5)));

    h.step(&mut g, 4.0);
    assert_eq!(glow(&h), Some(Rgb8::new(0x4E, 0xE0, 0xC2)));

    // Second pass runs backwards.
    h.step(&mut g, 4.0);
    assert_eq!(glow(&h), Some(c[1].lerp(c[2], 0.5)));
    h.step(&mut g, 4.0);
    assert_eq!(glow(&h), Some(c[0]));

    h.step(&mut g, 1000.0);
    assert!(h.timeline.is_active(handle));
}

#[test]
fn repeated_content_loaded_does_not_restart() {
    let mut h = Harness::demo(1280, 720);
    let mut g = GlowCycle::install(&GlowConfig::default(), &h.doc).unwrap();
    h.send(&mut g, HostEvent::ContentLoaded);
    let first = g.handle();
    h.send(&mut g, HostEvent::ContentLoaded);
    assert_eq!(g.handle(), first);
    assert_eq!(h.timeline.len(), 1);
}

#[test]
fn single_colour_holds_steady() {
    let cfg = GlowConfig {
        colors: vec![Rgb8::new(1, 2, 3)],
        ..GlowConfig::default()
    };
    let mut h = Harness::demo(1280, 720);
    let mut g = GlowCycle::install(&cfg, &h.doc).unwrap();
    h.send(&mut g, HostEvent::ContentLoaded);
    h.step(&mut g, 3.0);
    assert_eq!(glow(&h), Some(Rgb8::new(1, 2, 3)));
}

#[test]
fn missing_logo_is_skipped() {
    let cfg = GlowConfig {
        selector: ".no-logo".to_owned(),
        ..GlowConfig::default()
    };
    let mut h = Harness::demo(1280, 720);
    let mut g = GlowCycle::install(&cfg, &h.doc).unwrap();
    h.send(&mut g, HostEvent::ContentLoaded);
    assert!(g.handle().is_none());
    assert!(h.timeline.is_empty());
}
