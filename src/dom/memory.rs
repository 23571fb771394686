use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{Document, Element};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    top: f64,
    scroll_requests: usize,
    children: Vec<MemoryElement>,
    parent: Weak<RefCell<Node>>,
}

/// An element living in a [`MemoryDocument`].
///
/// Clones share the same node, so a handle given to a feature and a handle
/// kept by the host observe the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Node::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        Element::set_attribute(&self, name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append(child);
        self
    }

    pub fn append(&self, child: MemoryElement) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.get(property).cloned()
    }

    pub fn set_top(&self, top: f64) {
        self.0.borrow_mut().top = top;
    }

    /// How many times [`Element::scroll_into_view`] was requested on this element.
    pub fn scroll_requests(&self) -> usize {
        self.0.borrow().scroll_requests
    }

    pub fn ptr_eq(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// This element followed by all of its descendants, depth first.
    fn subtree(&self) -> Vec<MemoryElement> {
        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(element) = stack.pop() {
            let node = element.0.borrow();
            stack.extend(node.children.iter().rev().cloned());
            drop(node);
            out.push(element);
        }
        out
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        if name == "id" {
            return self.id();
        }
        if name == "class" {
            let node = self.0.borrow();
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        match name {
            "id" => node.id = Some(value.to_string()),
            "class" => node.classes = value.split_whitespace().map(str::to_string).collect(),
            _ => {
                node.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn top(&self) -> f64 {
        self.0.borrow().top
    }

    fn scroll_into_view(&self) {
        self.0.borrow_mut().scroll_requests += 1;
    }

    fn child_by_tag(&self, tag: &str) -> Option<Self> {
        self.subtree().into_iter().skip(1).find(|e| e.tag() == tag)
    }

    fn is_first_child(&self) -> bool {
        let Some(parent) = self.0.borrow().parent.upgrade() else {
            return true;
        };
        parent
            .borrow()
            .children
            .first()
            .is_none_or(|first| first.ptr_eq(self))
    }
}

/// A document held entirely in memory, rooted at its `<body>`.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    body: MemoryElement,
}

impl MemoryDocument {
    pub fn new(body: MemoryElement) -> Self {
        Self { body }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(MemoryElement::new("body"))
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn body(&self) -> Option<MemoryElement> {
        Some(self.body.clone())
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.body
            .subtree()
            .into_iter()
            .find(|e| e.id().as_deref() == Some(id))
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        self.body
            .subtree()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<MemoryElement> {
        self.body
            .subtree()
            .into_iter()
            .filter(|e| e.tag() == tag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDocument {
        let body = MemoryElement::new("body")
            .with_child(
                MemoryElement::new("nav").with_child(
                    MemoryElement::new("li")
                        .with_class("nav-item")
                        .with_child(MemoryElement::new("a").with_attribute("href", "#home")),
                ),
            )
            .with_child(MemoryElement::new("section").with_id("home"))
            .with_child(MemoryElement::new("section").with_id("about"));
        MemoryDocument::new(body)
    }

    #[test]
    fn lookups_follow_document_order() {
        let doc = sample();
        let sections = doc.elements_by_tag("section");
        let ids: Vec<_> = sections.iter().filter_map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "about"]);

        let about = doc.element_by_id("about").unwrap();
        assert!(about.ptr_eq(&sections[1]));
        assert!(doc.element_by_id("missing").is_none());
    }

    #[test]
    fn child_lookup_skips_the_element_itself() {
        let doc = sample();
        let item = doc.first_by_class("nav-item").unwrap();
        let link = item.child_by_tag("a").unwrap();
        assert_eq!(link.attribute("href").as_deref(), Some("#home"));
        assert!(link.child_by_tag("a").is_none());
    }

    #[test]
    fn classes_behave_like_a_set() {
        let el = MemoryElement::new("div").with_class("a");
        el.add_class("a");
        el.toggle_class("b");
        assert_eq!(el.attribute("class").as_deref(), Some("a b"));
        el.toggle_class("b");
        el.remove_class("a");
        assert!(el.attribute("class").is_none());
    }

    #[test]
    fn first_child_tracks_the_parent() {
        let logo = MemoryElement::new("li").with_class("logo");
        let home = MemoryElement::new("li");
        let _list = MemoryElement::new("ul").with_child(logo.clone()).with_child(home.clone());

        assert!(logo.is_first_child());
        assert!(!home.is_first_child());
        assert!(MemoryElement::new("li").is_first_child());
    }
}
