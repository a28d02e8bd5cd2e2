//! Helpers for driving components in a headless `VirtualDom`.

use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

use dioxus::dioxus_core::{
    AttributeValue, ElementId, NoOpMutations, Template, TemplateAttribute, TemplateNode,
    VirtualDom, WriteMutations,
};
use dioxus::html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};
use dioxus::prelude::Event;

/// Records what a renderer would have been asked to build.
#[derive(Debug, Default)]
pub struct DomRecorder {
    /// `(name, value)` for attributes baked into templates.
    pub static_attrs: Vec<(&'static str, &'static str)>,
    /// `(element, name, value)` for text attributes set at runtime.
    pub attrs: Vec<(ElementId, &'static str, String)>,
    pub texts: Vec<String>,
    pub listeners: Vec<(&'static str, ElementId)>,
}

impl DomRecorder {
    fn walk(&mut self, node: &TemplateNode) {
        match node {
            TemplateNode::Element {
                attrs, children, ..
            } => {
                for attr in attrs.iter() {
                    if let TemplateAttribute::Static { name, value, .. } = attr {
                        self.static_attrs.push((*name, *value));
                    }
                }
                for child in children.iter() {
                    self.walk(child);
                }
            }
            TemplateNode::Text { text } => self.texts.push(text.to_string()),
            _ => {}
        }
    }

    pub fn has_attr(&self, name: &str, value: &str) -> bool {
        self.static_attrs.iter().any(|(n, v)| *n == name && *v == value)
            || self.attrs.iter().any(|(_, n, v)| *n == name && v == value)
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t == text)
    }

    /// The element with a `click` listener whose runtime class contains `fragment`.
    pub fn clickable_with_class(&self, fragment: &str) -> Option<ElementId> {
        self.listeners
            .iter()
            .filter(|(name, _)| *name == "click")
            .map(|(_, id)| *id)
            .find(|id| {
                self.attrs
                    .iter()
                    .any(|(el, name, value)| el == id && *name == "class" && value.contains(fragment))
            })
    }
}

impl WriteMutations for DomRecorder {
    fn append_children(&mut self, _id: ElementId, _m: usize) {}

    fn assign_node_id(&mut self, _path: &'static [u8], _id: ElementId) {}

    fn create_placeholder(&mut self, _id: ElementId) {}

    fn create_text_node(&mut self, value: &str, _id: ElementId) {
        self.texts.push(value.to_string());
    }

    fn load_template(&mut self, template: Template, index: usize, _id: ElementId) {
        if let Some(root) = template.roots.get(index) {
            self.walk(root);
        }
    }

    fn replace_node_with(&mut self, _id: ElementId, _m: usize) {}

    fn replace_placeholder_with_nodes(&mut self, _path: &'static [u8], _m: usize) {}

    fn insert_nodes_after(&mut self, _id: ElementId, _m: usize) {}

    fn insert_nodes_before(&mut self, _id: ElementId, _m: usize) {}

    fn set_attribute(
        &mut self,
        name: &'static str,
        _ns: Option<&'static str>,
        value: &AttributeValue,
        id: ElementId,
    ) {
        if let AttributeValue::Text(text) = value {
            self.attrs.push((id, name, text.clone()));
        }
    }

    fn set_node_text(&mut self, value: &str, _id: ElementId) {
        self.texts.push(value.to_string());
    }

    fn create_event_listener(&mut self, name: &'static str, id: ElementId) {
        self.listeners.push((name, id));
    }

    fn remove_event_listener(&mut self, _name: &'static str, _id: ElementId) {}

    fn remove_node(&mut self, _id: ElementId) {}

    fn push_root(&mut self, _id: ElementId) {}
}

/// Dispatch a bubbling mouse click to `element`.
pub fn click(dom: &VirtualDom, element: ElementId) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, element);
}

/// Drive tasks and re-renders until `duration` of (tokio) time has passed.
pub async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::timeout_at(deadline, dom.wait_for_work())
        .await
        .is_ok()
    {
        dom.render_immediate(&mut NoOpMutations);
    }
}
