use super::*;
use crate::{config::BehaviorConfig, foundation::core::Viewport, page::spec::PageSpec};

#[test]
fn timers_fire_once_in_schedule_order() {
    let mut t = Timers::default();
    t.schedule(0.5, TimerAction::Remove(ElementId(2)));
    t.schedule(0.2, TimerAction::Remove(ElementId(1)));
    t.schedule(0.9, TimerAction::Remove(ElementId(3)));

    assert!(t.take_due(0.1).is_empty());
    assert_eq!(
        t.take_due(0.5),
        vec![
            TimerAction::Remove(ElementId(2)),
            TimerAction::Remove(ElementId(1))
        ]
    );
    assert_eq!(t.len(), 1);
    assert!(t.take_due(0.5).is_empty());
    assert_eq!(t.take_due(1.0).len(), 1);
    assert!(t.is_empty());
}

#[test]
fn install_all_wires_every_behavior() {
    let mut doc = Document::from_spec(&PageSpec::demo(), Viewport::new(1280, 720));
    let all = install_all(&BehaviorConfig::default(), &mut doc).unwrap();
    let names: Vec<_> = all.iter().map(|b| b.name()).collect();
    assert_eq!(
        names,
        vec![
            "preloader",
            "parallax",
            "scroll-reveal",
            "anchor-scroll",
            "focus-visible",
            "glow-cycle"
        ]
    );
}

#[test]
fn empty_page_installs_inert_behaviors() {
    let mut doc = Document::from_spec(&PageSpec::default(), Viewport::new(1280, 720));
    assert!(install_all(&BehaviorConfig::default(), &mut doc).is_ok());
}

#[test]
fn bad_selector_in_config_is_an_error() {
    let mut cfg = BehaviorConfig::default();
    cfg.reveal.selector = ".card,,".to_owned();
    let mut doc = Document::from_spec(&PageSpec::demo(), Viewport::new(1280, 720));
    assert!(install_all(&cfg, &mut doc).is_err());
}
