use raylib::prelude::*;

pub const WINDOW_WIDTH: i32 = 960;
pub const WINDOW_HEIGHT: i32 = 580;
pub const FPS: u32 = 60;

pub const TOP_BAR_HEIGHT: f32 = 40.0;
pub const BUTTON_WIDTH: f32 = 44.0;
pub const BUTTON_HEIGHT: f32 = 64.0;
pub const BUTTON_MARGIN: f32 = 12.0;
pub const INDICATOR_RADIUS: f32 = 7.0;
pub const INDICATOR_SPACING: f32 = 26.0;
pub const INDICATOR_BOTTOM_MARGIN: f32 = 24.0;
pub const LANGUAGE_BOX_WIDTH: f32 = 160.0;
pub const LANGUAGE_ROW_HEIGHT: f32 = 30.0;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Selector,
    Option(usize),
    Previous,
    Next,
    Indicator(usize),
    Nothing,
}

/// Screen geometry of one frame, recomputed when the window is resized.
pub struct Layout {
    pub region: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub indicators: Vec<Vector2>,
    pub selector: Rectangle,
    pub options: Vec<Rectangle>,
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

impl Layout {
    pub fn new(width: f32, height: f32, slides: usize, languages: usize) -> Self {
        let region = Rectangle::new(0.0, TOP_BAR_HEIGHT, width, (height - TOP_BAR_HEIGHT).max(0.0));
        let middle = region.y + region.height * 0.5 - BUTTON_HEIGHT * 0.5;

        let prev = Rectangle::new(BUTTON_MARGIN, middle, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next = Rectangle::new(width - BUTTON_MARGIN - BUTTON_WIDTH, middle, BUTTON_WIDTH, BUTTON_HEIGHT);

        let strip_width = INDICATOR_SPACING * slides.saturating_sub(1) as f32;
        let first_x = width * 0.5 - strip_width * 0.5;
        let indicator_y = region.y + region.height - INDICATOR_BOTTOM_MARGIN;
        let indicators = (0..slides)
            .map(|i| Vector2::new(first_x + i as f32 * INDICATOR_SPACING, indicator_y))
            .collect();

        let selector = Rectangle::new(
            width - LANGUAGE_BOX_WIDTH - 5.0,
            5.0,
            LANGUAGE_BOX_WIDTH,
            LANGUAGE_ROW_HEIGHT,
        );
        let options = (0..languages)
            .map(|i| {
                Rectangle::new(
                    selector.x,
                    selector.y + LANGUAGE_ROW_HEIGHT * (i + 1) as f32,
                    LANGUAGE_BOX_WIDTH,
                    LANGUAGE_ROW_HEIGHT,
                )
            })
            .collect();

        Self {
            region,
            prev,
            next,
            indicators,
            selector,
            options,
        }
    }

    /// The open dropdown is drawn above the carousel, so it is tested first.
    pub fn hit(&self, point: Vector2, dropdown_open: bool) -> Hit {
        if contains(&self.selector, point) {
            return Hit::Selector;
        }
        if dropdown_open {
            if let Some(i) = self.options.iter().position(|r| contains(r, point)) {
                return Hit::Option(i);
            }
        }
        if contains(&self.prev, point) {
            return Hit::Previous;
        }
        if contains(&self.next, point) {
            return Hit::Next;
        }
        let reach = INDICATOR_RADIUS + 3.0;
        if let Some(i) = self
            .indicators
            .iter()
            .position(|c| (c.x - point.x).powi(2) + (c.y - point.y).powi(2) <= reach * reach)
        {
            return Hit::Indicator(i);
        }
        Hit::Nothing
    }

    /// Frame of slide `index` when the strip is translated by `offset` percent.
    pub fn slide_frame(&self, index: usize, offset: f32) -> Rectangle {
        let x = self.region.x + (index as f32 * 100.0 + offset) / 100.0 * self.region.width;
        Rectangle::new(x, self.region.y, self.region.width, self.region.height)
    }
}
