use std::collections::HashMap;

use super::*;
use crate::{
    animation::{
        ease::Ease,
        tween::{Property, Repeat, Target},
    },
    color::Rgb8,
    page::document::ElementId,
};

#[derive(Default)]
struct MapStore {
    values: HashMap<(Target, Property), Value>,
    gone: Vec<Target>,
}

impl PropertyStore for MapStore {
    fn read(&self, target: Target, property: Property) -> Option<Value> {
        if self.gone.contains(&target) {
            return None;
        }
        Some(
            self.values
                .get(&(target, property))
                .copied()
                .unwrap_or(Value::Scalar(0.0)),
        )
    }

    fn write(&mut self, target: Target, property: Property, value: Value) -> bool {
        if self.gone.contains(&target) {
            return false;
        }
        self.values.insert((target, property), value);
        true
    }
}

impl MapStore {
    fn scalar(&self, target: Target, property: Property) -> f64 {
        self.read(target, property)
            .and_then(Value::as_scalar)
            .unwrap()
    }
}

const EL: Target = Target::Element(ElementId(0));

#[test]
fn to_tween_captures_start_value_and_lands_on_target() {
    let mut store = MapStore::default();
    store.write(EL, Property::Opacity, Value::Scalar(0.2));
    let mut tl = Timeline::new();
    let h = tl
        .add(
            Tween::new(EL, 1.0)
                .to(Property::Opacity, Value::Scalar(1.0))
                .ease(Ease::Linear),
        )
        .unwrap();

    tl.advance(0.5, &mut store);
    assert!((store.scalar(EL, Property::Opacity) - 0.6).abs() < 1e-9);
    assert!(tl.is_active(h));

    tl.advance(0.5, &mut store);
    assert_eq!(store.scalar(EL, Property::Opacity), 1.0);
    assert!(!tl.is_active(h));
    assert!(tl.is_empty());
}

#[test]
fn delay_holds_values_untouched() {
    let mut store = MapStore::default();
    store.write(EL, Property::TranslateY, Value::Scalar(30.0));
    let mut tl = Timeline::new();
    tl.add(
        Tween::new(EL, 1.0)
            .to(Property::TranslateY, Value::Scalar(0.0))
            .delay(0.5)
            .ease(Ease::Linear),
    )
    .unwrap();

    tl.advance(0.25, &mut store);
    assert_eq!(store.scalar(EL, Property::TranslateY), 30.0);
    tl.advance(0.75, &mut store);
    assert!((store.scalar(EL, Property::TranslateY) - 15.0).abs() < 1e-9);
}

#[test]
fn cancel_stops_updates() {
    let mut store = MapStore::default();
    let mut tl = Timeline::new();
    let h = tl
        .add(
            Tween::new(Target::Scroll, 1.0)
                .to(Property::ScrollY, Value::Scalar(100.0))
                .ease(Ease::Linear),
        )
        .unwrap();
    tl.advance(0.5, &mut store);
    let mid = store.scalar(Target::Scroll, Property::ScrollY);
    assert!(tl.cancel(h));
    assert!(!tl.cancel(h));
    tl.advance(0.5, &mut store);
    assert_eq!(store.scalar(Target::Scroll, Property::ScrollY), mid);
}

#[test]
fn overlapping_tween_overwrites_previous() {
    let mut tl = Timeline::new();
    let first = tl
        .add(Tween::new(EL, 1.0).to(Property::TranslateX, Value::Scalar(10.0)))
        .unwrap();
    let other_prop = tl
        .add(Tween::new(EL, 1.0).to(Property::Opacity, Value::Scalar(1.0)))
        .unwrap();
    let second = tl
        .add(Tween::new(EL, 1.0).to(Property::TranslateX, Value::Scalar(-10.0)))
        .unwrap();
    assert!(!tl.is_active(first));
    assert!(tl.is_active(other_prop));
    assert!(tl.is_active(second));
    assert_eq!(tl.len(), 2);
}

#[test]
fn overwrite_keeps_non_overlapping_tracks_running() {
    let mut store = MapStore::default();
    let mut tl = Timeline::new();
    let reveal = tl
        .add(
            Tween::new(EL, 1.0)
                .from_to(Property::Opacity, Value::Scalar(0.0), Value::Scalar(1.0))
                .from_to(Property::TranslateY, Value::Scalar(30.0), Value::Scalar(0.0)),
        )
        .unwrap();
    tl.advance(0.25, &mut store);

    tl.add(Tween::new(EL, 0.5).to(Property::TranslateY, Value::Scalar(-4.0)))
        .unwrap();
    assert!(tl.is_active(reveal));
    assert_eq!(tl.len(), 2);

    tl.advance(1.0, &mut store);
    assert!(tl.is_empty());
    assert_eq!(store.scalar(EL, Property::Opacity), 1.0);
    assert_eq!(store.scalar(EL, Property::TranslateY), -4.0);
}

#[test]
fn removed_target_drops_tween() {
    let mut store = MapStore::default();
    let mut tl = Timeline::new();
    let h = tl
        .add(Tween::new(EL, 1.0).to(Property::Opacity, Value::Scalar(0.0)))
        .unwrap();
    store.gone.push(EL);
    tl.advance(0.1, &mut store);
    assert!(!tl.is_active(h));
}

#[test]
fn forever_yoyo_color_keys_cycle() {
    let mut store = MapStore::default();
    let a = Rgb8::new(0, 0, 0);
    let b = Rgb8::new(200, 200, 200);
    let mut tl = Timeline::new();
    tl.add(
        Tween::new(EL, 2.0)
            .keys(Property::Glow, vec![Value::Color(a), Value::Color(b)])
            .ease(Ease::Linear)
            .repeat(Repeat::Forever)
            .yoyo(true),
    )
    .unwrap();

    tl.advance(1.0, &mut store);
    assert_eq!(
        store.read(EL, Property::Glow),
        Some(Value::Color(Rgb8::new(100, 100, 100)))
    );
    tl.advance(1.5, &mut store);
    assert_eq!(
        store.read(EL, Property::Glow),
        Some(Value::Color(Rgb8::new(150, 150, 150)))
    );
    tl.advance(100.0, &mut store);
    assert_eq!(tl.len(), 1);
}

#[test]
fn invalid_tween_is_rejected() {
    let mut tl = Timeline::new();
    assert!(tl.add(Tween::new(EL, -1.0)).is_err());
    assert!(tl.is_empty());
}

#[test]
fn kill_stops_only_the_named_property() {
    let mut tl = Timeline::new();
    let scroll = tl
        .add(Tween::new(Target::Scroll, 1.0).to(Property::ScrollY, Value::Scalar(100.0)))
        .unwrap();
    let fade = tl
        .add(Tween::new(EL, 1.0).to(Property::Opacity, Value::Scalar(0.0)))
        .unwrap();

    assert_eq!(tl.kill(Target::Scroll, Property::ScrollY), 1);
    assert!(!tl.is_active(scroll));
    assert!(tl.is_active(fade));
    assert_eq!(tl.kill(EL, Property::TranslateX), 0);
}
