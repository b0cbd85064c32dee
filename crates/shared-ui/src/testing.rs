//! Headless rendering with click dispatch, for component tests.

use std::any::Any;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{AttributeValue, ElementId, Mutation};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

/// A rebuilt `VirtualDom` plus every mutation it has emitted, so elements
/// can be found by their dynamic attributes and clicked.
pub struct TestDom {
    dom: VirtualDom,
    edits: Vec<Mutation>,
}

impl TestDom {
    pub fn new(app: fn() -> Element) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let edits = dom.rebuild_to_vec().edits;
        Self { dom, edits }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Elements that registered a click listener, in creation order.
    pub fn click_targets(&self) -> Vec<ElementId> {
        self.edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if *name == "click" => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Most recently created element whose `attr` was set to `value`.
    pub fn find_by_attribute(&self, attr: &str, value: &str) -> Option<ElementId> {
        self.edits.iter().rev().find_map(|edit| match edit {
            Mutation::SetAttribute {
                name,
                value: AttributeValue::Text(text),
                id,
                ..
            } if *name == attr && text == value => Some(*id),
            _ => None,
        })
    }

    /// Dispatch a click to `target` and apply the resulting re-render.
    pub fn click(&mut self, target: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = dioxus_core::Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, target);
        let edits = self.dom.render_immediate_to_vec().edits;
        self.edits.extend(edits);
    }

    /// Click the element carrying `aria-label="{label}"`.
    pub fn click_labelled(&mut self, label: &str) {
        let target = self
            .find_by_attribute("aria-label", label)
            .unwrap_or_else(|| panic!("no element labelled {label:?}"));
        self.click(target);
    }
}
