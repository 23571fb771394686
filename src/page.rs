use tracing::info;

use crate::anchor::AnchorNavigator;
use crate::carousel::{Carousel, CarouselParts};
use crate::config::PageConfig;
use crate::dom::{Document, Element};
use crate::language::{LanguageParts, LanguageToggle};
use crate::preferences::PreferenceStore;
use crate::scroll_spy::ScrollSpy;

/// Every interactive feature of the page, bound to one document.
pub struct Page<E, S> {
    pub anchors: AnchorNavigator<E>,
    pub language: LanguageToggle<E, S>,
    pub carousel: Carousel<E>,
    pub scroll_spy: ScrollSpy<E>,
}

impl<E: Element, S: PreferenceStore> Page<E, S> {
    /// Looks up each feature's elements by the page conventions, restores
    /// the saved language and starts the carousel.
    pub fn bind<D: Document<Element = E>>(doc: &D, store: S, config: &PageConfig) -> Self {
        let anchors = AnchorNavigator::from_document(doc);
        let language = LanguageToggle::new(
            LanguageParts::from_document(doc),
            store,
            config.preference_key.clone(),
        );
        let carousel = Carousel::new(CarouselParts::from_document(doc), config.auto_advance_period());
        let scroll_spy = ScrollSpy::from_document(doc, config.scroll_spy_offset, config.carousel_home_offset);

        language.restore();

        info!(
            anchors = anchors.links().len(),
            slides = carousel.len(),
            "page bound"
        );

        Self {
            anchors,
            language,
            carousel,
            scroll_spy,
        }
    }
}
