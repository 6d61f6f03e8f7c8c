use super::*;

#[test]
fn script_json_uses_snake_case_variants() {
    let script = EventScript::from_json_str(
        r##"[
            { "frame": 0, "event": "load" },
            { "frame": 0, "event": "content_loaded" },
            { "frame": 2, "event": { "resize": { "width": 800, "height": 600 } } },
            { "frame": 3, "event": { "pointer_move": { "x": 10.0, "y": 20.0 } } },
            { "frame": 4, "event": { "key_down": "Tab" } },
            { "frame": 5, "event": { "click": ".nav-links a" } },
            { "frame": 6, "event": { "scroll": 400.0 } }
        ]"##,
    )
    .unwrap();

    assert_eq!(script.events.len(), 7);
    assert_eq!(
        script.events[2].event,
        HostEvent::Resize(Viewport::new(800, 600))
    );
    assert_eq!(
        script.events[3].event,
        HostEvent::PointerMove(Point::new(10.0, 20.0))
    );
    assert_eq!(script.events[4].event, HostEvent::KeyDown("Tab".to_owned()));
}

#[test]
fn due_events_keep_script_order() {
    let mut script = EventScript::default();
    script
        .push(FrameIndex(1), HostEvent::KeyDown("a".to_owned()))
        .push(FrameIndex(0), HostEvent::Load)
        .push(FrameIndex(1), HostEvent::KeyDown("b".to_owned()));

    let due: Vec<_> = script.due(FrameIndex(1)).cloned().collect();
    assert_eq!(
        due,
        vec![
            HostEvent::KeyDown("a".to_owned()),
            HostEvent::KeyDown("b".to_owned())
        ]
    );
    assert_eq!(script.due(FrameIndex(9)).count(), 0);
}

#[test]
fn lifecycle_fires_content_loaded_before_load() {
    let script = EventScript::page_lifecycle();
    let due: Vec<_> = script.due(FrameIndex(0)).cloned().collect();
    assert_eq!(due, vec![HostEvent::ContentLoaded, HostEvent::Load]);
}

#[test]
fn malformed_script_is_a_serde_error() {
    let err = EventScript::from_json_str(r#"[{ "frame": 0, "event": "explode" }]"#).unwrap_err();
    assert!(err.to_string().starts_with("serialization error: "));
}

#[test]
fn bundled_demo_script_parses() {
    let script = EventScript::from_json_str(include_str!("../../../demos/script.json")).unwrap();
    assert_eq!(script.events.len(), 6);
    assert_eq!(
        script.due(FrameIndex(10)).next(),
        Some(&HostEvent::PointerMove(Point::new(1000.0, 200.0)))
    );
    assert_eq!(
        script.due(FrameIndex(30)).next(),
        Some(&HostEvent::Click(".nav-links a".to_owned()))
    );
}
