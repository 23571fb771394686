use tracing::{debug, warn};

use crate::constants::*;
use crate::dom::{Document, Element};
use crate::preferences::PreferenceStore;

/// Element handles the language toggle is bound to.
#[derive(Debug, Clone)]
pub struct LanguageParts<E> {
    pub body: Option<E>,
    pub selector: Option<E>,
    pub dropdown: Option<E>,
    pub options: Vec<E>,
    pub label: Option<E>,
}

impl<E: Element> LanguageParts<E> {
    pub fn from_document<D: Document<Element = E>>(doc: &D) -> Self {
        Self {
            body: doc.body(),
            selector: doc.element_by_id(LANGUAGE_SELECTOR_ID),
            dropdown: doc.element_by_id(LANGUAGE_OPTIONS_ID),
            options: doc.elements_by_class(LANGUAGE_OPTION_CLASS),
            label: doc.first_by_class(CURRENT_LANGUAGE_CLASS),
        }
    }
}

/// Dropdown letting the visitor pick a page language, remembered in a
/// [`PreferenceStore`].
pub struct LanguageToggle<E, S> {
    parts: LanguageParts<E>,
    store: S,
    key: String,
}

impl<E: Element, S: PreferenceStore> LanguageToggle<E, S> {
    pub fn new(parts: LanguageParts<E>, store: S, key: impl Into<String>) -> Self {
        Self {
            parts,
            store,
            key: key.into(),
        }
    }

    pub fn toggle_dropdown(&self) {
        if let Some(dropdown) = &self.parts.dropdown {
            dropdown.toggle_class(SHOW_CLASS);
        }
    }

    /// Closes the dropdown; bound to clicks anywhere on the page.
    pub fn dismiss(&self) {
        if let Some(dropdown) = &self.parts.dropdown {
            dropdown.remove_class(SHOW_CLASS);
        }
    }

    pub fn is_open(&self) -> bool {
        self.parts
            .dropdown
            .as_ref()
            .is_some_and(|d| d.has_class(SHOW_CLASS))
    }

    /// Applies the language of option `index`. Returns `true` when the page
    /// language changed.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(option) = self.parts.options.get(index) else {
            return false;
        };
        let Some(lang) = option.attribute(LANG_ATTRIBUTE).filter(|l| !l.is_empty()) else {
            return false;
        };
        if self.current_language().as_deref() == Some(lang.as_str()) {
            return false;
        }

        if let Some(body) = &self.parts.body {
            body.set_attribute(LANG_ATTRIBUTE, &lang);
        }
        if let Some(label) = &self.parts.label {
            label.set_text(&option.text());
        }
        if let Err(e) = self.store.set(&self.key, &lang) {
            warn!("Could not save language preference: {}", e);
        }

        debug!(lang = %lang, "language selected");
        true
    }

    /// Applies the saved preference, if any. Returns the restored tag.
    pub fn restore(&self) -> Option<String> {
        let saved = match self.store.get(&self.key) {
            Ok(saved) => saved.filter(|l| !l.is_empty())?,
            Err(e) => {
                warn!("Could not read language preference: {}", e);
                return None;
            }
        };

        if let Some(body) = &self.parts.body {
            body.set_attribute(LANG_ATTRIBUTE, &saved);
        }

        let option = self
            .parts
            .options
            .iter()
            .find(|o| o.attribute(LANG_ATTRIBUTE).as_deref() == Some(saved.as_str()));
        if let (Some(label), Some(option)) = (&self.parts.label, option) {
            label.set_text(&option.text());
        }

        debug!(lang = %saved, "language preference restored");
        Some(saved)
    }

    pub fn current_language(&self) -> Option<String> {
        self.parts.body.as_ref()?.attribute(LANG_ATTRIBUTE)
    }

    pub fn parts(&self) -> &LanguageParts<E> {
        &self.parts
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
