pub const AUTO_ADVANCE_PERIOD_MS: u64 = 5000;       // Time each slide stays before auto-advance (milliseconds)
pub const SCROLL_SPY_OFFSET: f64 = 100.0;          // A section is current once its top is this close to the viewport top (px)
pub const CAROUSEL_HOME_OFFSET: f64 = -150.0;      // Carousel forces "home" active while its top is above this (px)
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

// Document conventions
pub const CAROUSEL_CONTAINER_ID: &str = "carouselContainer";
pub const CAROUSEL_SLIDE_CLASS: &str = "carousel-slide";
pub const CAROUSEL_INDICATOR_CLASS: &str = "carousel-indicator";
pub const CAROUSEL_REGION_CLASS: &str = "image-carousel";
pub const PREV_BUTTON_ID: &str = "prevButton";
pub const NEXT_BUTTON_ID: &str = "nextButton";

pub const LANGUAGE_SELECTOR_ID: &str = "languageSelector";
pub const LANGUAGE_OPTIONS_ID: &str = "languageOptions";
pub const LANGUAGE_OPTION_CLASS: &str = "language-option";
pub const CURRENT_LANGUAGE_CLASS: &str = "current-language";
pub const LANG_ATTRIBUTE: &str = "data-lang";

pub const SECTION_TAG: &str = "section";
pub const NAV_ITEM_CLASS: &str = "nav-item";
pub const LINK_TAG: &str = "a";

pub const ACTIVE_CLASS: &str = "active";
pub const SHOW_CLASS: &str = "show";
pub const TRANSFORM_PROPERTY: &str = "transform";
