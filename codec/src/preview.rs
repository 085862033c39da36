//! Human-readable fixture previews.

use std::fmt::Write;

use crate::types::ValuePair;

/// Number of source entries shown in a preview.
pub const PREVIEW_LEN: usize = 4;

/// Renders pairs as `[[a, b], [c, d]]`.
///
/// Floats use their shortest round-trip form, so the text reflects the exact
/// stored values. Exponents carry a sign and at least two digits (`1e-05`).
#[must_use]
pub fn format_pairs(pairs: &[ValuePair]) -> String {
    let mut out = String::from("[");
    for (idx, [re, im]) in pairs.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "[{}, {}]", format_float(*re), format_float(*im));
    }
    out.push(']');
    out
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}
