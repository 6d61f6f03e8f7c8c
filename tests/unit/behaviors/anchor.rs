use super::*;
use crate::{
    behaviors::harness::Harness, config::AnchorConfig, foundation::core::Viewport,
    page::spec::PageSpec,
};

fn click(h: &mut Harness, a: &mut AnchorScroll, selector: &str) {
    h.send(a, HostEvent::Click(selector.to_owned()));
}

#[test]
fn nav_link_scrolls_to_section_minus_offset() {
    let mut h = Harness::demo(1280, 720);
    let mut a = AnchorScroll::install(&AnchorConfig::default(), &h.doc).unwrap();

    click(&mut h, &mut a, ".nav-links a");
    assert_eq!(h.timeline.len(), 1);
    h.run(&mut a, 0.3);
    let mid = h.doc.scroll_y();
    assert!(mid > 0.0 && mid < 720.0, "{mid}");
    h.run(&mut a, 0.5);
    assert_eq!(h.doc.scroll_y(), 720.0);
}

#[test]
fn hero_button_targets_projects() {
    let mut h = Harness::demo(1280, 720);
    let mut a = AnchorScroll::install(&AnchorConfig::default(), &h.doc).unwrap();
    click(&mut h, &mut a, ".hero .btn");
    h.run(&mut a, 1.0);
    assert_eq!(h.doc.scroll_y(), 1620.0);
}

#[test]
fn external_links_and_unbound_elements_are_ignored() {
    let mut h = Harness::demo(1280, 720);
    let mut a = AnchorScroll::install(&AnchorConfig::default(), &h.doc).unwrap();
    click(&mut h, &mut a, r#"a[href="https://example.com/cv.pdf"]"#);
    click(&mut h, &mut a, ".card");
    click(&mut h, &mut a, "#nothing-here");
    assert!(h.timeline.is_empty());
}

#[test]
fn destination_is_clamped_to_scroll_range() {
    let page = PageSpec::from_json_str(
        r##"{
            "content_height": 1000,
            "elements": [
                { "tag": "nav", "classes": ["nav-links"], "rect": { "x": 0, "y": 0, "w": 100, "h": 40 },
                  "children": [
                    { "tag": "a", "attrs": { "href": "#far" }, "rect": { "x": 0, "y": 0, "w": 50, "h": 40 } },
                    { "tag": "a", "attrs": { "href": "#top" }, "rect": { "x": 50, "y": 0, "w": 50, "h": 40 } },
                    { "tag": "a", "attrs": { "href": "#ghost" }, "rect": { "x": 50, "y": 0, "w": 50, "h": 40 } }
                  ] },
                { "id": "top", "rect": { "x": 0, "y": 40, "w": 100, "h": 100 } },
                { "id": "far", "rect": { "x": 0, "y": 900, "w": 100, "h": 100 } }
            ]
        }"##,
    )
    .unwrap();
    let mut h = Harness::with_page(&page, Viewport::new(800, 720));
    let mut a = AnchorScroll::install(&AnchorConfig::default(), &h.doc).unwrap();

    let far = h.doc.get_element_by_id("far").unwrap();
    let top = h.doc.get_element_by_id("top").unwrap();
    assert_eq!(a.destination(&h.doc, far), Some(280.0));
    assert_eq!(a.destination(&h.doc, top), Some(0.0));

    click(&mut h, &mut a, r##"a[href="#ghost"]"##);
    assert!(h.timeline.is_empty());
}
