use tracing::trace;

use crate::constants::*;
use crate::dom::{Document, Element};

/// Which navigation item a scroll position highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveNav {
    /// The carousel is still in view; the nav item heading its list wins.
    Home,
    /// Id of the last section scrolled past the offset, empty when it has none.
    Section(String),
    /// No section has reached the offset yet.
    None,
}

/// Highlights the navigation item of the section currently in view.
pub struct ScrollSpy<E> {
    sections: Vec<E>,
    nav_items: Vec<E>,
    carousel: Option<E>,
    section_offset: f64,
    home_offset: f64,
}

impl<E: Element> ScrollSpy<E> {
    pub fn new(
        sections: Vec<E>,
        nav_items: Vec<E>,
        carousel: Option<E>,
        section_offset: f64,
        home_offset: f64,
    ) -> Self {
        Self {
            sections,
            nav_items,
            carousel,
            section_offset,
            home_offset,
        }
    }

    pub fn from_document<D: Document<Element = E>>(doc: &D, section_offset: f64, home_offset: f64) -> Self {
        Self::new(
            doc.elements_by_tag(SECTION_TAG),
            doc.elements_by_class(NAV_ITEM_CLASS),
            doc.first_by_class(CAROUSEL_REGION_CLASS),
            section_offset,
            home_offset,
        )
    }

    /// The carousel override is checked first and always wins over sections.
    /// Otherwise the last section past the offset is current, even when it
    /// has no id; an empty id then matches bare `href="#"` links.
    pub fn resolve(&self) -> ActiveNav {
        if let Some(carousel) = &self.carousel {
            if carousel.top() > self.home_offset {
                return ActiveNav::Home;
            }
        }

        self.sections
            .iter()
            .filter(|s| s.top() <= self.section_offset)
            .last()
            .map_or(ActiveNav::None, |s| {
                ActiveNav::Section(s.attribute("id").unwrap_or_default())
            })
    }

    /// Recomputes the active item and updates the nav classes.
    pub fn on_scroll(&self) -> ActiveNav {
        let active = self.resolve();

        for item in &self.nav_items {
            item.remove_class(ACTIVE_CLASS);
        }

        match &active {
            ActiveNav::Home => {
                if let Some(home) = self.nav_items.iter().find(|i| i.is_first_child()) {
                    home.add_class(ACTIVE_CLASS);
                }
            }
            // Nothing reached behaves like an id-less section: only bare "#" links match
            ActiveNav::Section(_) | ActiveNav::None => {
                let id = match &active {
                    ActiveNav::Section(id) => id.as_str(),
                    _ => "",
                };
                let target = format!("#{id}");
                for item in &self.nav_items {
                    let href = item.child_by_tag(LINK_TAG).and_then(|a| a.attribute("href"));
                    if href.as_deref() == Some(target.as_str()) {
                        item.add_class(ACTIVE_CLASS);
                    }
                }
            }
        }

        trace!(?active, "scroll spy updated");
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryElement;

    fn section(id: &str, top: f64) -> MemoryElement {
        let s = MemoryElement::new("section").with_id(id);
        s.set_top(top);
        s
    }

    #[test]
    fn last_reached_section_wins() {
        let spy = ScrollSpy::new(
            vec![section("a", -400.0), section("b", 90.0), section("c", 300.0)],
            Vec::new(),
            None,
            SCROLL_SPY_OFFSET,
            CAROUSEL_HOME_OFFSET,
        );
        assert_eq!(spy.resolve(), ActiveNav::Section("b".into()));
    }

    #[test]
    fn threshold_is_inclusive() {
        let spy = ScrollSpy::new(vec![section("a", 100.0)], Vec::new(), None, 100.0, -150.0);
        assert_eq!(spy.resolve(), ActiveNav::Section("a".into()));
    }

    #[test]
    fn nothing_reached_yet() {
        let spy = ScrollSpy::new(vec![section("a", 500.0)], Vec::new(), None, 100.0, -150.0);
        assert_eq!(spy.resolve(), ActiveNav::None);
    }

    #[test]
    fn carousel_in_view_overrides_sections() {
        let carousel = MemoryElement::new("div");
        carousel.set_top(-149.0);
        let spy = ScrollSpy::new(vec![section("a", 0.0)], Vec::new(), Some(carousel.clone()), 100.0, -150.0);
        assert_eq!(spy.resolve(), ActiveNav::Home);

        carousel.set_top(-150.0);
        assert_eq!(spy.resolve(), ActiveNav::Section("a".into()));
    }

    fn nav_list(hrefs: &[&str]) -> (MemoryElement, Vec<MemoryElement>) {
        let list = MemoryElement::new("ul");
        let items: Vec<_> = hrefs
            .iter()
            .map(|href| {
                MemoryElement::new("li")
                    .with_class(NAV_ITEM_CLASS)
                    .with_child(MemoryElement::new("a").with_attribute("href", href))
            })
            .collect();
        for item in &items {
            list.append(item.clone());
        }
        (list, items)
    }

    fn active(items: &[MemoryElement]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.has_class(ACTIVE_CLASS))
            .map(|(n, _)| n)
            .collect()
    }

    #[test]
    fn idless_last_section_clears_the_earlier_match() {
        let (_list, items) = nav_list(&["#", "#about"]);
        let unnamed = MemoryElement::new("section");
        unnamed.set_top(50.0);
        let spy = ScrollSpy::new(vec![section("about", -500.0), unnamed], items.clone(), None, 100.0, -150.0);

        assert_eq!(spy.on_scroll(), ActiveNav::Section(String::new()));
        assert_eq!(active(&items), vec![0]);
    }

    #[test]
    fn scrolling_moves_the_highlight() {
        let (_list, items) = nav_list(&["#about", "#contact"]);
        let about = section("about", 0.0);
        let contact = section("contact", 600.0);
        let spy = ScrollSpy::new(vec![about.clone(), contact.clone()], items.clone(), None, 100.0, -150.0);

        spy.on_scroll();
        assert_eq!(active(&items), vec![0]);

        about.set_top(-700.0);
        contact.set_top(-100.0);
        spy.on_scroll();
        assert_eq!(active(&items), vec![1]);
    }

    #[test]
    fn stale_highlight_is_cleared_when_nothing_matches() {
        let (_list, items) = nav_list(&["#about", "#contact"]);
        let about = section("about", 0.0);
        let spy = ScrollSpy::new(vec![about.clone(), section("faq", 900.0)], items.clone(), None, 100.0, -150.0);

        spy.on_scroll();
        assert_eq!(active(&items), vec![0]);

        about.set_top(400.0);
        assert_eq!(spy.on_scroll(), ActiveNav::None);
        assert!(active(&items).is_empty());
    }

    #[test]
    fn home_goes_to_the_item_heading_its_list() {
        let list = MemoryElement::new("ul").with_child(MemoryElement::new("li").with_class("logo"));
        let items: Vec<_> = ["#home", "#about"]
            .iter()
            .map(|href| {
                MemoryElement::new("li")
                    .with_class(NAV_ITEM_CLASS)
                    .with_child(MemoryElement::new("a").with_attribute("href", href))
            })
            .collect();
        for item in &items {
            list.append(item.clone());
        }
        let carousel = MemoryElement::new("div");
        carousel.set_top(0.0);
        let spy = ScrollSpy::new(Vec::new(), items.clone(), Some(carousel.clone()), 100.0, -150.0);

        assert_eq!(spy.on_scroll(), ActiveNav::Home);
        assert!(active(&items).is_empty());

        let (_list, headed) = nav_list(&["#home", "#about"]);
        headed[1].add_class(ACTIVE_CLASS);
        let spy = ScrollSpy::new(Vec::new(), headed.clone(), Some(carousel), 100.0, -150.0);
        spy.on_scroll();
        assert_eq!(active(&headed), vec![0]);
    }
}
