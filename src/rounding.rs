//! Decimal rounding helpers
//!
//! Rounding works on the exact binary value of the input, the way the
//! published reference tables were produced: a product such as
//! `10.5 * 11.58 / 100 / 2` is stored just below 0.60795 and rounds down.
//! Only exact ties go to even. Truncation always floors.

/// Round `value` to `places` decimal places.
///
/// Precision formatting rounds the exact value of the float, so no scaling
/// step can turn a value just below a halfway point into a tie.
pub fn round_to(value: f64, places: usize) -> f64 {
    // Formatting a finite float always yields a parseable decimal
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Floor `value` to `places` decimal places.
pub fn truncate_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).floor() / scale
}
