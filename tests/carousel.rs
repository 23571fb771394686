use std::time::Duration;

use showcase::carousel::{Carousel, CarouselEvent, CarouselParts, CarouselState};
use showcase::constants::*;
use showcase::dom::{Element, MemoryElement};

const PERIOD: Duration = Duration::from_millis(5000);

struct Fixture {
    container: MemoryElement,
    indicators: Vec<MemoryElement>,
    carousel: Carousel<MemoryElement>,
}

fn fixture(n: usize) -> Fixture {
    let container = MemoryElement::new("div").with_id(CAROUSEL_CONTAINER_ID);
    let indicators: Vec<_> = (0..n)
        .map(|_| MemoryElement::new("span").with_class(CAROUSEL_INDICATOR_CLASS))
        .collect();
    let parts = CarouselParts {
        container: Some(container.clone()),
        slides: (0..n).map(|_| MemoryElement::new("div")).collect(),
        indicators: indicators.clone(),
        prev: Some(MemoryElement::new("button")),
        next: Some(MemoryElement::new("button")),
        region: Some(MemoryElement::new("div")),
    };
    Fixture {
        container,
        indicators,
        carousel: Carousel::new(parts, PERIOD),
    }
}

fn active(indicators: &[MemoryElement]) -> Vec<usize> {
    indicators
        .iter()
        .enumerate()
        .filter(|(_, el)| el.has_class(ACTIVE_CLASS))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn every_valid_index_is_reached_with_one_active_indicator() {
    let mut f = fixture(4);
    for i in 0..4 {
        f.carousel.go_to_slide(i as isize);
        assert_eq!(f.carousel.current_index(), i);
        assert_eq!(active(&f.indicators), vec![i]);
        assert_eq!(
            f.container.style(TRANSFORM_PROPERTY),
            Some(format!("translateX(-{}%)", i * 100))
        );
    }
}

#[test]
fn out_of_range_targets_wrap_around() {
    let mut f = fixture(3);
    f.carousel.go_to_slide(-1);
    assert_eq!(f.carousel.current_index(), 2);
    f.carousel.go_to_slide(3);
    assert_eq!(f.carousel.current_index(), 0);
}

#[test]
fn next_three_times_wraps_back_to_first() {
    let mut f = fixture(3);
    assert_eq!(f.carousel.current_index(), 0);

    f.carousel.handle(CarouselEvent::Next);
    assert_eq!(f.carousel.current_index(), 1);
    assert_eq!(active(&f.indicators), vec![1]);

    f.carousel.handle(CarouselEvent::Next);
    f.carousel.handle(CarouselEvent::Next);
    assert_eq!(f.carousel.current_index(), 0);
    assert_eq!(active(&f.indicators), vec![0]);
}

#[test]
fn previous_from_first_goes_to_last() {
    let mut f = fixture(3);
    f.carousel.handle(CarouselEvent::Previous);
    assert_eq!(f.carousel.current_index(), 2);
    assert_eq!(f.container.style(TRANSFORM_PROPERTY).as_deref(), Some("translateX(-200%)"));
}

#[test]
fn indicator_click_jumps_directly() {
    let mut f = fixture(5);
    f.carousel.handle(CarouselEvent::Indicator(3));
    assert_eq!(f.carousel.current_index(), 3);
    assert_eq!(active(&f.indicators), vec![3]);

    f.carousel.handle(CarouselEvent::Indicator(9));
    assert_eq!(f.carousel.current_index(), 3);
}

#[test]
fn auto_advance_moves_forward_every_period() {
    let mut f = fixture(2);
    assert_eq!(f.carousel.update(Duration::from_millis(4999)), 0);
    assert_eq!(f.carousel.current_index(), 0);
    assert_eq!(f.carousel.update(Duration::from_millis(1)), 1);
    assert_eq!(f.carousel.current_index(), 1);
    f.carousel.update(PERIOD);
    assert_eq!(f.carousel.current_index(), 0);
}

#[test]
fn stopping_twice_is_harmless() {
    let mut f = fixture(3);
    f.carousel.stop_auto_slide();
    assert_eq!(f.carousel.state(), CarouselState::Paused);
    assert_eq!(f.carousel.time_until_advance(), None);
    f.carousel.stop_auto_slide();
    assert_eq!(f.carousel.time_until_advance(), None);

    f.carousel.update(PERIOD * 3);
    assert_eq!(f.carousel.current_index(), 0);
}

#[test]
fn reset_waits_a_full_period() {
    let mut f = fixture(3);
    f.carousel.update(Duration::from_millis(3000));
    f.carousel.reset_auto_slide();

    f.carousel.update(Duration::from_millis(2000));
    assert_eq!(f.carousel.current_index(), 0);
    f.carousel.update(Duration::from_millis(2999));
    assert_eq!(f.carousel.current_index(), 0);
    f.carousel.update(Duration::from_millis(1));
    assert_eq!(f.carousel.current_index(), 1);
}

#[test]
fn manual_navigation_restarts_the_countdown() {
    let mut f = fixture(3);
    f.carousel.update(Duration::from_millis(4000));
    f.carousel.handle(CarouselEvent::Next);
    assert_eq!(f.carousel.time_until_advance(), Some(PERIOD));

    f.carousel.update(Duration::from_millis(4000));
    assert_eq!(f.carousel.current_index(), 1);
}

#[test]
fn hover_pauses_and_leaving_resumes_from_a_full_period() {
    let mut f = fixture(3);
    f.carousel.update(Duration::from_millis(4000));

    f.carousel.handle(CarouselEvent::PointerEnter);
    assert_eq!(f.carousel.state(), CarouselState::Paused);
    f.carousel.update(Duration::from_secs(60));
    assert_eq!(f.carousel.current_index(), 0);

    f.carousel.handle(CarouselEvent::PointerLeave);
    assert_eq!(f.carousel.state(), CarouselState::Running);
    assert_eq!(f.carousel.time_until_advance(), Some(PERIOD));
}

#[test]
fn manual_navigation_while_hovering_resumes() {
    let mut f = fixture(3);
    f.carousel.handle(CarouselEvent::PointerEnter);
    f.carousel.handle(CarouselEvent::Next);
    assert!(f.carousel.is_running());
}

#[test]
fn missing_controls_ignore_their_events() {
    let container = MemoryElement::new("div");
    let parts = CarouselParts {
        container: Some(container.clone()),
        slides: (0..3).map(|_| MemoryElement::new("div")).collect(),
        ..CarouselParts::default()
    };
    let mut carousel = Carousel::new(parts, PERIOD);

    carousel.handle(CarouselEvent::Next);
    carousel.handle(CarouselEvent::Previous);
    carousel.handle(CarouselEvent::Indicator(1));
    carousel.handle(CarouselEvent::PointerEnter);
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.is_running());
    assert!(container.style(TRANSFORM_PROPERTY).is_none());

    carousel.update(PERIOD);
    assert_eq!(carousel.current_index(), 1);
}
