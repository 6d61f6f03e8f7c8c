use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::tween::{Property, PropertyStore, Target, Value},
    color::Rgb8,
    foundation::{
        core::{Rect, Viewport},
        error::AuroraResult,
    },
    page::{
        selector::SelectorList,
        spec::{ElementSpec, PageSpec},
    },
};

/// Index of an element in document order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub usize);

/// Visual state the behaviours animate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation_x: f64, // degrees
    pub rotation_y: f64, // degrees
    pub glow: Option<Rgb8>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            glow: None,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Element {
    pub id: ElementId,
    pub tag: String,
    pub dom_id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub parent: Option<ElementId>,
    pub rect: Rect, // document space, transforms excluded
    pub style: Style,
    pub removed: bool,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// In-memory page: a flat list of boxes with fixed rectangles plus scroll state.
#[derive(Clone, Debug)]
pub struct Document {
    viewport: Viewport,
    scroll_y: f64,
    content_height: f64,
    body_classes: BTreeSet<String>,
    elements: Vec<Element>,
}

/// Serializable view of a [`Document`] for diagnostics.
#[derive(Debug, serde::Serialize)]
pub struct DocumentSnapshot<'a> {
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub body_classes: Vec<&'a str>,
    pub elements: Vec<&'a Element>,
}

impl Document {
    pub fn from_spec(spec: &PageSpec, viewport: Viewport) -> Self {
        fn flatten(spec: &ElementSpec, parent: Option<ElementId>, out: &mut Vec<Element>) {
            let id = ElementId(out.len());
            out.push(Element {
                id,
                tag: spec.tag.clone(),
                dom_id: spec.id.clone(),
                classes: spec.classes.clone(),
                attrs: spec.attrs.clone(),
                parent,
                rect: spec.rect.to_rect(),
                style: Style::default(),
                removed: false,
            });
            for child in &spec.children {
                flatten(child, Some(id), out);
            }
        }

        let mut elements = Vec::new();
        for spec in &spec.elements {
            flatten(spec, None, &mut elements);
        }

        let content_height = spec.content_height.unwrap_or_else(|| {
            elements
                .iter()
                .map(|e| e.rect.y1)
                .fold(f64::from(viewport.height), f64::max)
        });

        Self {
            viewport,
            scroll_y: 0.0,
            content_height,
            body_classes: BTreeSet::new(),
            elements,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.set_scroll_y(self.scroll_y);
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_height - f64::from(self.viewport.height)).max(0.0)
    }

    /// Sets the scroll offset, clamped to the scrollable range.
    pub fn set_scroll_y(&mut self, y: f64) {
        let y = if y.is_finite() { y } else { 0.0 };
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Live (non-removed) element by index.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0).filter(|e| !e.removed)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0).filter(|e| !e.removed)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.removed)
    }

    pub fn get_element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.elements()
            .find(|e| e.dom_id.as_deref() == Some(dom_id))
            .map(|e| e.id)
    }

    pub fn query_selector(&self, selector: &str) -> AuroraResult<Option<ElementId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self.select(&list).into_iter().next())
    }

    /// Matches in document order.
    pub fn query_selector_all(&self, selector: &str) -> AuroraResult<Vec<ElementId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self.select(&list))
    }

    pub fn select(&self, list: &SelectorList) -> Vec<ElementId> {
        self.elements()
            .filter(|e| list.matches(self, e))
            .map(|e| e.id)
            .collect()
    }

    /// Removes the element and its descendants.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if self.element(id).is_none() {
            return false;
        }
        // Depth-first order: every descendant follows its parent.
        let mut doomed = vec![id];
        for el in &self.elements[id.0 + 1..] {
            if el.parent.is_some_and(|p| doomed.contains(&p)) {
                doomed.push(el.id);
            }
        }
        for d in doomed {
            self.elements[d.0].removed = true;
        }
        true
    }

    /// Top edge relative to the viewport at the current scroll offset.
    pub fn viewport_top(&self, id: ElementId) -> Option<f64> {
        self.element(id).map(|e| e.rect.y0 - self.scroll_y)
    }

    pub fn add_body_class(&mut self, class: &str) -> bool {
        self.body_classes.insert(class.to_owned())
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn snapshot(&self) -> DocumentSnapshot<'_> {
        DocumentSnapshot {
            viewport: self.viewport,
            scroll_y: self.scroll_y,
            body_classes: self.body_classes.iter().map(String::as_str).collect(),
            elements: self.elements().collect(),
        }
    }
}

impl PropertyStore for Document {
    fn read(&self, target: Target, property: Property) -> Option<Value> {
        let id = match target {
            Target::Scroll => {
                return (property == Property::ScrollY).then_some(Value::Scalar(self.scroll_y));
            }
            Target::Element(id) => id,
        };
        let s = &self.element(id)?.style;
        match property {
            Property::Opacity => Some(Value::Scalar(s.opacity)),
            Property::TranslateX => Some(Value::Scalar(s.translate_x)),
            Property::TranslateY => Some(Value::Scalar(s.translate_y)),
            Property::RotationX => Some(Value::Scalar(s.rotation_x)),
            Property::RotationY => Some(Value::Scalar(s.rotation_y)),
            Property::Glow => s.glow.map(Value::Color),
            Property::ScrollY => None,
        }
    }

    fn write(&mut self, target: Target, property: Property, value: Value) -> bool {
        let id = match target {
            Target::Scroll => {
                if let Some(y) = value.as_scalar() {
                    self.set_scroll_y(y);
                }
                return true;
            }
            Target::Element(id) => id,
        };
        let Some(el) = self.element_mut(id) else {
            return false;
        };
        let s = &mut el.style;
        match (property, value) {
            (Property::Opacity, Value::Scalar(v)) => s.opacity = v.clamp(0.0, 1.0),
            (Property::TranslateX, Value::Scalar(v)) => s.translate_x = v,
            (Property::TranslateY, Value::Scalar(v)) => s.translate_y = v,
            (Property::RotationX, Value::Scalar(v)) => s.rotation_x = v,
            (Property::RotationY, Value::Scalar(v)) => s.rotation_y = v,
            (Property::Glow, Value::Color(c)) => s.glow = Some(c),
            (property, value) => {
                tracing::trace!(?property, ?value, "ignoring mismatched property write");
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/document.rs"]
mod tests;
