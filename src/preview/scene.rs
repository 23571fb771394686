use showcase::constants::*;
use showcase::dom::{Element, MemoryDocument, MemoryElement};

/// One entry of the language dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub tag: String,
    pub name: String,
}

/// Parses `tag:Name`; a bare tag doubles as its name.
pub fn parse_language(s: &str) -> Result<LanguageChoice, String> {
    let (tag, name) = s.split_once(':').unwrap_or((s, s));
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(format!("missing language tag in {s:?}"));
    }
    Ok(LanguageChoice {
        tag: tag.to_string(),
        name: name.trim().to_string(),
    })
}

/// Builds the page markup the preview hosts, following the same ids and
/// classes as the real site.
pub fn build_document(slide_count: usize, languages: &[LanguageChoice]) -> MemoryDocument {
    let container = MemoryElement::new("div").with_id(CAROUSEL_CONTAINER_ID);
    for i in 0..slide_count {
        container.append(
            MemoryElement::new("div")
                .with_class(CAROUSEL_SLIDE_CLASS)
                .with_attribute("data-index", &i.to_string()),
        );
    }

    let indicators = MemoryElement::new("div").with_class("carousel-indicators");
    for i in 0..slide_count {
        let indicator = MemoryElement::new("span").with_class(CAROUSEL_INDICATOR_CLASS);
        if i == 0 {
            indicator.add_class(ACTIVE_CLASS);
        }
        indicators.append(indicator);
    }

    let carousel = MemoryElement::new("div")
        .with_class(CAROUSEL_REGION_CLASS)
        .with_child(container)
        .with_child(indicators)
        .with_child(MemoryElement::new("button").with_id(PREV_BUTTON_ID).with_text("<"))
        .with_child(MemoryElement::new("button").with_id(NEXT_BUTTON_ID).with_text(">"));

    let options = MemoryElement::new("div").with_id(LANGUAGE_OPTIONS_ID);
    for language in languages {
        options.append(
            MemoryElement::new("div")
                .with_class(LANGUAGE_OPTION_CLASS)
                .with_attribute(LANG_ATTRIBUTE, &language.tag)
                .with_text(&language.name),
        );
    }
    let default_label = languages.first().map(|l| l.name.as_str()).unwrap_or("");
    let selector = MemoryElement::new("div")
        .with_id(LANGUAGE_SELECTOR_ID)
        .with_child(MemoryElement::new("span").with_class(CURRENT_LANGUAGE_CLASS).with_text(default_label));

    let body = MemoryElement::new("body")
        .with_child(
            MemoryElement::new("header")
                .with_child(selector)
                .with_child(options),
        )
        .with_child(MemoryElement::new("section").with_id("home").with_child(carousel));

    MemoryDocument::new(body)
}
