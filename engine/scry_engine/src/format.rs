//! Precision-aware value formatting.

use scry_eval::Value;

/// Appended to a float rendering when rounding discarded information.
pub const LOSSY_MARKER: char = '~';

/// Render one binding's value for the report.
///
/// Finite floats are rounded to `precision` decimal digits and rendered in
/// fixed-point with exactly that many fractional digits; if the rounded
/// value is not numerically equal to the original, the lossy marker is
/// appended. Everything else (ints, strings, bools, non-finite floats)
/// renders via its natural `Display` form, never with a marker.
pub fn format_value(value: &Value, precision: u32) -> String {
    match value {
        Value::Float(x) if x.is_finite() => {
            let rounded = round_to(*x, precision);
            let digits = usize::try_from(precision).unwrap_or(usize::MAX);
            let mut text = format!("{rounded:.digits$}");
            if rounded != *x {
                text.push(LOSSY_MARKER);
            }
            text
        }
        other => other.to_string(),
    }
}

/// Round half-away-from-zero to `precision` decimal digits.
fn round_to(x: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    if factor.is_finite() {
        (x * factor).round() / factor
    } else {
        // Precision beyond f64's exponent range cannot discard anything.
        x
    }
}
