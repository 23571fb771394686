//! Browser host: binds the page features to the live DOM.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Storage};

use crate::carousel::CarouselEvent;
use crate::config::PageConfig;
use crate::dom::{Document, Element};
use crate::page::Page;
use crate::preferences::{PreferenceStore, StoreError};

/// How often the carousel clock is fed; the period itself is measured.
const CLOCK_TICK_MS: u32 = 100;

#[derive(Debug, Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn raw(&self) -> &web_sys::Element {
        &self.0
    }
}

impl Element for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            debug!(name, ?e, "set_attribute rejected");
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            if let Err(e) = html.style().set_property(property, value) {
                debug!(property, ?e, "set_property rejected");
            }
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            debug!(class, ?e, "add_1 rejected");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            debug!(class, ?e, "remove_1 rejected");
        }
    }

    fn toggle_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().toggle(class) {
            debug!(class, ?e, "toggle rejected");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn child_by_tag(&self, tag: &str) -> Option<Self> {
        self.0.query_selector(tag).ok().flatten().map(WebElement)
    }

    fn is_first_child(&self) -> bool {
        self.0.previous_element_sibling().is_none()
    }
}

#[derive(Debug, Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    fn select_all(&self, selector: &str) -> Vec<WebElement> {
        let Ok(list) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn body(&self) -> Option<WebElement> {
        self.0.body().map(|b| WebElement(b.into()))
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        self.select_all(&format!(".{class}"))
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<WebElement> {
        self.select_all(tag)
    }
}

/// `window.localStorage`.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    pub fn open(window: &web_sys::Window) -> Self {
        Self(window.local_storage().ok().flatten())
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.0
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}

type SharedPage = Rc<RefCell<Page<WebElement, LocalStore>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| mount(&window)).forget();
    } else {
        mount(&window);
    }
    Ok(())
}

fn mount(window: &web_sys::Window) {
    let Some(document) = window.document() else {
        return;
    };
    let doc = WebDocument(document.clone());
    let page: SharedPage = Rc::new(RefCell::new(Page::bind(
        &doc,
        LocalStore::open(window),
        &PageConfig::default(),
    )));

    wire_anchors(&page, &doc);
    wire_language(&page, &document);
    wire_carousel(&page, window);
    wire_scroll_spy(&page, window);
}

fn wire_anchors(page: &SharedPage, doc: &WebDocument) {
    let links = page.borrow().anchors.links().to_vec();
    for link in links {
        let page = Rc::clone(page);
        let doc = doc.clone();
        let target = link.clone();
        EventListener::new(link.raw(), "click", move |event| {
            event.prevent_default();
            page.borrow().anchors.follow(&doc, &target);
        })
        .forget();
    }
}

fn wire_language(page: &SharedPage, document: &web_sys::Document) {
    let (selector, options) = {
        let page = page.borrow();
        let parts = page.language.parts();
        (parts.selector.clone(), parts.options.clone())
    };

    if let Some(selector) = selector {
        let page = Rc::clone(page);
        EventListener::new(selector.raw(), "click", move |event| {
            event.stop_propagation();
            page.borrow().language.toggle_dropdown();
        })
        .forget();
    }

    {
        let page = Rc::clone(page);
        EventListener::new(document, "click", move |_| page.borrow().language.dismiss()).forget();
    }

    for (index, option) in options.into_iter().enumerate() {
        let page = Rc::clone(page);
        EventListener::new(option.raw(), "click", move |_| {
            page.borrow_mut().language.select(index);
        })
        .forget();
    }
}

fn wire_carousel(page: &SharedPage, window: &web_sys::Window) {
    let parts = page.borrow().carousel.parts().clone();

    let bind = |element: &WebElement, name: &'static str, event: CarouselEvent| {
        let page = Rc::clone(page);
        EventListener::new(element.raw(), name, move |_| page.borrow_mut().carousel.handle(event)).forget();
    };

    if let Some(prev) = &parts.prev {
        bind(prev, "click", CarouselEvent::Previous);
    }
    if let Some(next) = &parts.next {
        bind(next, "click", CarouselEvent::Next);
    }
    for (i, indicator) in parts.indicators.iter().enumerate() {
        bind(indicator, "click", CarouselEvent::Indicator(i));
    }
    if let Some(region) = &parts.region {
        bind(region, "mouseenter", CarouselEvent::PointerEnter);
        bind(region, "mouseleave", CarouselEvent::PointerLeave);
    }

    let Some(performance) = window.performance() else {
        warn!("performance clock unavailable, carousel will not auto-advance");
        return;
    };
    let last = Cell::new(performance.now());
    let page = Rc::clone(page);
    Interval::new(CLOCK_TICK_MS, move || {
        let now = performance.now();
        let dt = Duration::from_secs_f64(((now - last.replace(now)) / 1000.0).max(0.0));
        page.borrow_mut().carousel.update(dt);
    })
    .forget();
}

fn wire_scroll_spy(page: &SharedPage, window: &web_sys::Window) {
    let page = Rc::clone(page);
    EventListener::new(window, "scroll", move |_| {
        page.borrow().scroll_spy.on_scroll();
    })
    .forget();
}
