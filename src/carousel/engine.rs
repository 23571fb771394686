use std::time::Duration;

use tracing::{debug, trace};

use crate::carousel::slide::{translate_x, wrap_index};
use crate::carousel::state::{AutoAdvance, CarouselEvent, CarouselState};
use crate::constants::*;
use crate::dom::{Document, Element};

/// Element handles a [`Carousel`] is bound to. Any of them may be missing.
#[derive(Debug, Clone)]
pub struct CarouselParts<E> {
    pub container: Option<E>,
    pub slides: Vec<E>,
    pub indicators: Vec<E>,
    pub prev: Option<E>,
    pub next: Option<E>,
    /// Region whose hover pauses auto-advance.
    pub region: Option<E>,
}

impl<E> Default for CarouselParts<E> {
    fn default() -> Self {
        Self {
            container: None,
            slides: Vec::new(),
            indicators: Vec::new(),
            prev: None,
            next: None,
            region: None,
        }
    }
}

impl<E: Element> CarouselParts<E> {
    pub fn from_document<D: Document<Element = E>>(doc: &D) -> Self {
        Self {
            container: doc.element_by_id(CAROUSEL_CONTAINER_ID),
            slides: doc.elements_by_class(CAROUSEL_SLIDE_CLASS),
            indicators: doc.elements_by_class(CAROUSEL_INDICATOR_CLASS),
            prev: doc.element_by_id(PREV_BUTTON_ID),
            next: doc.element_by_id(NEXT_BUTTON_ID),
            region: doc.first_by_class(CAROUSEL_REGION_CLASS),
        }
    }
}

pub struct Carousel<E> {
    parts: CarouselParts<E>,

    current_index: usize,
    auto_advance: Option<AutoAdvance>,
    period: Duration,
}

impl<E: Element> Carousel<E> {
    /// Binds to `parts` and starts auto-advancing every `period`.
    pub fn new(parts: CarouselParts<E>, period: Duration) -> Self {
        if parts.container.is_none() {
            debug!("carousel container not found, slides will not move");
        }
        if parts.slides.len() != parts.indicators.len() {
            debug!(
                slides = parts.slides.len(),
                indicators = parts.indicators.len(),
                "carousel indicator count does not match slide count"
            );
        }

        let mut carousel = Self {
            parts,
            current_index: 0,
            auto_advance: None,
            period,
        };
        carousel.start_auto_slide();

        debug!(slides = carousel.len(), period_ms = period.as_millis() as u64, "carousel bound");
        carousel
    }

    pub fn go_to_slide(&mut self, index: isize) {
        let Some(index) = wrap_index(index, self.parts.slides.len()) else {
            return;
        };

        self.current_index = index;

        if let Some(container) = &self.parts.container {
            container.set_style(TRANSFORM_PROPERTY, &translate_x(index));
        }

        for (i, indicator) in self.parts.indicators.iter().enumerate() {
            if i == index {
                indicator.add_class(ACTIVE_CLASS);
            } else {
                indicator.remove_class(ACTIVE_CLASS);
            }
        }

        trace!(index, "carousel moved");
    }

    /// Starts auto-advance. Does nothing if it is already running.
    pub fn start_auto_slide(&mut self) {
        if self.auto_advance.is_none() {
            self.auto_advance = Some(AutoAdvance::default());
        }
    }

    pub fn stop_auto_slide(&mut self) {
        self.auto_advance = None;
    }

    /// Restarts the period so the next advance is a full period away.
    pub fn reset_auto_slide(&mut self) {
        self.stop_auto_slide();
        self.start_auto_slide();
    }

    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Previous if self.parts.prev.is_some() => {
                self.go_to_slide(self.current_index as isize - 1);
                self.reset_auto_slide();
            }
            CarouselEvent::Next if self.parts.next.is_some() => {
                self.go_to_slide(self.current_index as isize + 1);
                self.reset_auto_slide();
            }
            CarouselEvent::Indicator(i) if i < self.parts.indicators.len() => {
                self.go_to_slide(i as isize);
                self.reset_auto_slide();
            }
            CarouselEvent::PointerEnter if self.parts.region.is_some() => self.stop_auto_slide(),
            CarouselEvent::PointerLeave if self.parts.region.is_some() => self.start_auto_slide(),
            _ => trace!(?event, "carousel event without a bound target ignored"),
        }
    }

    /// Advances the clock by `dt`, moving forward once per elapsed period.
    /// Returns how many periods elapsed.
    pub fn update(&mut self, dt: Duration) -> u32 {
        let Some(timer) = self.auto_advance.as_mut() else {
            return 0;
        };
        let fired = timer.tick(dt, self.period);
        for _ in 0..fired {
            self.go_to_slide(self.current_index as isize + 1);
        }
        fired
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.parts.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.slides.is_empty()
    }

    pub fn state(&self) -> CarouselState {
        if self.auto_advance.is_some() {
            CarouselState::Running
        } else {
            CarouselState::Paused
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == CarouselState::Running
    }

    /// Time left before the next auto-advance, `None` while paused.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.auto_advance.as_ref().map(|t| t.remaining(self.period))
    }

    pub fn parts(&self) -> &CarouselParts<E> {
        &self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryElement;

    fn parts(n: usize) -> CarouselParts<MemoryElement> {
        CarouselParts {
            container: Some(MemoryElement::new("div")),
            slides: (0..n).map(|_| MemoryElement::new("div")).collect(),
            indicators: (0..n).map(|_| MemoryElement::new("span")).collect(),
            prev: Some(MemoryElement::new("button")),
            next: Some(MemoryElement::new("button")),
            region: Some(MemoryElement::new("div")),
        }
    }

    #[test]
    fn starts_running_at_first_slide() {
        let carousel = Carousel::new(parts(3), Duration::from_secs(5));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.state(), CarouselState::Running);
        assert_eq!(carousel.time_until_advance(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn start_while_running_keeps_the_countdown() {
        let mut carousel = Carousel::new(parts(3), Duration::from_secs(5));
        carousel.update(Duration::from_secs(2));
        carousel.start_auto_slide();
        assert_eq!(carousel.time_until_advance(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut carousel = Carousel::new(parts(0), Duration::from_secs(5));
        carousel.go_to_slide(4);
        carousel.handle(CarouselEvent::Next);
        carousel.update(Duration::from_secs(20));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_empty());
        assert!(carousel.parts().container.as_ref().unwrap().style(TRANSFORM_PROPERTY).is_none());
    }

    #[test]
    fn missing_container_still_tracks_index_and_indicators() {
        let mut p = parts(2);
        p.container = None;
        let mut carousel = Carousel::new(p, Duration::from_secs(5));
        carousel.go_to_slide(1);
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.parts().indicators[1].has_class(ACTIVE_CLASS));
    }
}
