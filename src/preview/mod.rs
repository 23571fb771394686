//! Native window hosting the page carousel and language toggle over an
//! in-memory document, for checking slide sets without a browser.

pub mod layout;
pub mod scene;
pub mod slide;
pub mod texture_loader;

use std::time::Duration;

use raylib::prelude::*;
use showcase::PageConfig;
use showcase::carousel::{CarouselEvent, parse_translate_x};
use showcase::constants::*;
use showcase::dom::{Document, Element, MemoryDocument, MemoryElement};
use showcase::page::Page;
use showcase::preferences::FileStore;
use tracing::debug;

use crate::preview::layout::*;
use crate::preview::scene::{LanguageChoice, build_document};
use crate::preview::slide::Slide;

/// How quickly the strip catches up with its target offset (per second).
const SLIDE_EASE_RATE: f32 = 8.0;

pub struct Preview {
    document: MemoryDocument,
    page: Page<MemoryElement, FileStore>,
    slides: Vec<Slide>,
    languages: usize,

    hovering: bool,
    offset: f32, // Displayed strip offset in percent, eased toward the container transform
}

impl Preview {
    pub fn new(slides: Vec<Slide>, languages: &[LanguageChoice], store: FileStore, config: &PageConfig) -> Self {
        let document = build_document(slides.len(), languages);
        let page = Page::bind(&document, store, config);
        Self {
            document,
            page,
            slides,
            languages: languages.len(),
            hovering: false,
            offset: 0.0,
        }
    }

    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        while !rl.window_should_close() {
            let dt = rl.get_frame_time();
            let layout = Layout::new(
                rl.get_screen_width() as f32,
                rl.get_screen_height() as f32,
                self.slides.len(),
                self.languages,
            );

            self.handle_input(rl, &layout);
            self.page.carousel.update(Duration::from_secs_f32(dt.max(0.0)));
            self.ease_strip(dt);

            let mut d = rl.begin_drawing(thread);
            self.draw(&mut d, &layout);
        }
    }

    fn handle_input(&mut self, rl: &RaylibHandle, layout: &Layout) {
        let mouse = rl.get_mouse_position();

        let inside = contains(&layout.region, mouse);
        if inside != self.hovering {
            self.hovering = inside;
            let event = if inside {
                CarouselEvent::PointerEnter
            } else {
                CarouselEvent::PointerLeave
            };
            self.page.carousel.handle(event);
        }

        if !rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            return;
        }

        let hit = layout.hit(mouse, self.page.language.is_open());
        debug!(?hit, "click");
        match hit {
            // The selector swallows its click, so the dropdown is not dismissed
            Hit::Selector => {
                self.page.language.toggle_dropdown();
                return;
            }
            Hit::Option(i) => {
                self.page.language.select(i);
            }
            Hit::Previous => self.page.carousel.handle(CarouselEvent::Previous),
            Hit::Next => self.page.carousel.handle(CarouselEvent::Next),
            Hit::Indicator(i) => self.page.carousel.handle(CarouselEvent::Indicator(i)),
            Hit::Nothing => {}
        }
        self.page.language.dismiss();
    }

    fn ease_strip(&mut self, dt: f32) {
        let target = self
            .document
            .element_by_id(CAROUSEL_CONTAINER_ID)
            .and_then(|c| c.style(TRANSFORM_PROPERTY))
            .and_then(|t| parse_translate_x(&t))
            .unwrap_or(self.offset);
        let t = (dt * SLIDE_EASE_RATE).min(1.0);
        self.offset += (target - self.offset) * t;
    }

    fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        d.clear_background(Color::BLACK);

        for (i, slide) in self.slides.iter().enumerate() {
            let frame = layout.slide_frame(i, self.offset);
            if frame.x + frame.width <= layout.region.x || frame.x >= layout.region.x + layout.region.width {
                continue;
            }
            slide.draw(d, frame);
        }

        self.draw_controls(d, layout);
        self.draw_top_bar(d, layout);
    }

    fn draw_controls(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        let parts = self.page.carousel.parts();

        for (rect, label) in [(layout.prev, "<"), (layout.next, ">")] {
            d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 120));
            d.draw_text(
                label,
                (rect.x + rect.width * 0.5 - 6.0) as i32,
                (rect.y + rect.height * 0.5 - 12.0) as i32,
                24,
                Color::WHITE,
            );
        }

        for (center, indicator) in layout.indicators.iter().zip(parts.indicators.iter()) {
            if indicator.has_class(ACTIVE_CLASS) {
                d.draw_circle(center.x as i32, center.y as i32, INDICATOR_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_lines(center.x as i32, center.y as i32, INDICATOR_RADIUS, Color::LIGHTGRAY);
            }
        }

        if !self.page.carousel.is_running() {
            d.draw_text("paused", 12, (layout.region.y + 8.0) as i32, 18, Color::LIGHTGRAY);
        }
    }

    fn draw_top_bar(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        d.draw_rectangle(0, 0, layout.region.width as i32, TOP_BAR_HEIGHT as i32, Color::DARKGRAY);

        let lang = self.page.language.current_language().unwrap_or_else(|| "-".to_string());
        d.draw_text(&format!("data-lang: {lang}"), 12, 11, 18, Color::RAYWHITE);

        let label = self
            .document
            .first_by_class(CURRENT_LANGUAGE_CLASS)
            .map(|l| l.text())
            .unwrap_or_default();
        let selector = layout.selector;
        d.draw_rectangle_rec(selector, Color::GRAY);
        d.draw_text(&label, selector.x as i32 + 10, selector.y as i32 + 6, 18, Color::WHITE);

        if !self.page.language.is_open() {
            return;
        }
        for (rect, option) in layout.options.iter().zip(self.page.language.parts().options.iter()) {
            d.draw_rectangle_rec(*rect, Color::new(40, 40, 40, 230));
            d.draw_text(&option.text(), rect.x as i32 + 10, rect.y as i32 + 6, 18, Color::WHITE);
        }
    }
}
