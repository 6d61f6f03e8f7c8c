use super::*;
use crate::{behaviors::harness::Harness, config::RevealConfig};

fn ids(h: &Harness, selector: &str) -> Vec<ElementId> {
    h.doc.query_selector_all(selector).unwrap()
}

#[test]
fn install_hides_and_shifts_every_match() {
    let mut h = Harness::demo(1280, 720);
    let r = ScrollReveal::install(&RevealConfig::default(), &mut h.doc).unwrap();
    assert_eq!(r.pending(), 9);
    for id in ids(&h, ".card, .glass-card") {
        let s = h.doc.element(id).unwrap().style;
        assert_eq!((s.opacity, s.translate_y), (0.0, 30.0));
    }
}

#[test]
fn elements_above_the_fold_reveal_on_first_frame() {
    let mut h = Harness::demo(1280, 720);
    let mut r = ScrollReveal::install(&RevealConfig::default(), &mut h.doc).unwrap();
    h.step(&mut r, 1.0 / 60.0);
    // hero-left and the glass card sit at y=160, the rest below 612.
    assert_eq!(r.pending(), 7);
    assert_eq!(h.timeline.len(), 2);

    h.run(&mut r, 1.0);
    let hero = ids(&h, ".hero-left")[0];
    let s = h.doc.element(hero).unwrap().style;
    assert_eq!((s.opacity, s.translate_y), (1.0, 0.0));
    let card = ids(&h, ".card")[0];
    assert_eq!(h.doc.element(card).unwrap().style.opacity, 0.0);
}

#[test]
fn trigger_line_is_85_percent_of_viewport() {
    let mut h = Harness::demo(1280, 720);
    let mut r = ScrollReveal::install(&RevealConfig::default(), &mut h.doc).unwrap();
    h.step(&mut r, 0.0);

    // Cards at y=900: top 900-287=613 is just below the 612 line.
    h.doc.set_scroll_y(287.0);
    h.send(&mut r, HostEvent::Scroll(287.0));
    assert_eq!(r.pending(), 7);

    h.doc.set_scroll_y(288.0);
    h.send(&mut r, HostEvent::Scroll(288.0));
    assert_eq!(r.pending(), 4);
}

#[test]
fn stagger_delays_later_elements() {
    let mut h = Harness::demo(1280, 720);
    let mut r = ScrollReveal::install(&RevealConfig::default(), &mut h.doc).unwrap();
    h.doc.set_scroll_y(400.0);
    h.step(&mut r, 0.0);
    let cards = ids(&h, ".card");

    // Card indices 2, 3, 4 start after 0.12 s, 0.18 s and 0.24 s.
    h.step(&mut r, 0.15);
    let o: Vec<f64> = cards
        .iter()
        .map(|id| h.doc.element(*id).unwrap().style.opacity)
        .collect();
    assert!(o[0] > 0.0, "{o:?}");
    assert_eq!(o[1], 0.0);
    assert_eq!(o[2], 0.0);

    h.run(&mut r, 1.2);
    for id in &cards {
        assert_eq!(h.doc.element(*id).unwrap().style.opacity, 1.0);
    }
}

#[test]
fn reveal_fires_once() {
    let mut h = Harness::demo(1280, 720);
    let mut r = ScrollReveal::install(&RevealConfig::default(), &mut h.doc).unwrap();
    h.step(&mut r, 0.0);
    h.run(&mut r, 1.0);
    h.doc.set_scroll_y(0.0);
    h.step(&mut r, 0.0);
    assert!(h.timeline.is_empty());
}

#[test]
fn removed_elements_are_dropped_quietly() {
    let mut h = Harness::demo(1280, 720);
    let mut r = ScrollReveal::install(&RevealConfig::default(), &mut h.doc).unwrap();
    let about = h.doc.get_element_by_id("about").unwrap();
    h.doc.remove(about);
    h.step(&mut r, 0.0);
    assert_eq!(r.pending(), 4);
}
