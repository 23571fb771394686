//! Auto-advancing image carousel.
//!
//! The controller owns the current index and the auto-advance schedule. It
//! never owns the slide elements; it only moves the container and flags the
//! active indicator. Time is supplied by the host through [`Carousel::update`].

pub mod engine;
pub mod slide;
pub mod state;

pub use engine::{Carousel, CarouselParts};
pub use slide::{parse_translate_x, translate_x, wrap_index};
pub use state::{AutoAdvance, CarouselEvent, CarouselState};
