// Pure reductions: min/avg/max with one-decimal rounding and the >=2-sample
// rule. Order-independent, so the descending fetch order never matters.

use crate::models::Aggregate;

/// Reduce a value slice to min/avg/max rounded to one decimal. Fewer than two
/// samples is not enough signal for a range; returns None.
pub fn aggregate_values(values: &[f64]) -> Option<Aggregate> {
    if values.len() < 2 {
        return None;
    }
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(Aggregate {
        min: round1(min),
        avg: round1(avg),
        max: round1(max),
        sample_count: values.len(),
    })
}

/// Round to one decimal place.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
