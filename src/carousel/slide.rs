/// Wraps an unconstrained target index into `0..len`.
///
/// Below zero goes to the last slide and past the end goes to the first; this
/// is wrap-around, not modular arithmetic, so `-5` also lands on the last slide.
/// Returns `None` when there are no slides.
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if index < 0 {
        Some(len - 1)
    } else if index as usize >= len {
        Some(0)
    } else {
        Some(index as usize)
    }
}

/// Transform placing slide `index` in view: each slide is one full width.
pub fn translate_x(index: usize) -> String {
    format!("translateX(-{}%)", index * 100)
}

/// Horizontal offset in percent encoded by a [`translate_x`] value.
pub fn parse_translate_x(transform: &str) -> Option<f32> {
    transform
        .trim()
        .strip_prefix("translateX(")?
        .strip_suffix("%)")?
        .parse()
        .ok()
}
