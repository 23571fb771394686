use tracing::trace;

use crate::constants::*;
use crate::dom::{Document, Element};

/// In-page links (`href="#..."`) that scroll smoothly to their target.
pub struct AnchorNavigator<E> {
    links: Vec<E>,
}

impl<E: Element> AnchorNavigator<E> {
    pub fn from_document<D: Document<Element = E>>(doc: &D) -> Self {
        let links = doc
            .elements_by_tag(LINK_TAG)
            .into_iter()
            .filter(|a| a.attribute("href").is_some_and(|h| h.starts_with('#')))
            .collect();
        Self { links }
    }

    pub fn links(&self) -> &[E] {
        &self.links
    }

    /// Scrolls to the element the link points at. Returns `false` when the
    /// fragment is empty or names no element.
    pub fn follow<D: Document<Element = E>>(&self, doc: &D, link: &E) -> bool {
        let Some(href) = link.attribute("href") else {
            return false;
        };
        let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return false;
        };
        let Some(target) = doc.element_by_id(id) else {
            trace!(id, "anchor target not found");
            return false;
        };

        target.scroll_into_view();
        true
    }
}
