/// Returns `count` evenly spaced values over the closed interval `[start, end]`.
///
/// Both endpoints are included exactly: the first value is `start` and the
/// last is `end`, independent of accumulated rounding. A `count` of 1 yields
/// `[start]` and 0 yields an empty vector.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let step = (end - start) / last as f64;
            (0..count)
                .map(|i| if i == last { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
