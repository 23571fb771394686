//! The document-structure contract the page features are written against.
//!
//! A host (the browser, the native preview, a test fixture) implements
//! [`Document`] and [`Element`]; every feature only ever sees element handles
//! through these traits and degrades to a no-op when a lookup comes back empty.

pub mod memory;

pub use memory::{MemoryDocument, MemoryElement};

/// A cheap, clonable handle to one element of the host document.
///
/// Mutating methods take `&self`: handles are references into a document the
/// host owns, the same way DOM nodes are.
pub trait Element: Clone {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn set_style(&self, property: &str, value: &str);

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn toggle_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Distance from the viewport top to the element's top edge, in pixels.
    fn top(&self) -> f64;

    /// Smoothly scrolls the viewport so the element is visible.
    fn scroll_into_view(&self);

    /// First descendant with the given tag name.
    fn child_by_tag(&self, tag: &str) -> Option<Self>;

    /// Whether no element sibling precedes this one. Detached elements count
    /// as first.
    fn is_first_child(&self) -> bool;
}

pub trait Document {
    type Element: Element;

    fn body(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// All elements with tag name `tag`, in document order.
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Element>;

    fn first_by_class(&self, class: &str) -> Option<Self::Element> {
        self.elements_by_class(class).into_iter().next()
    }
}
