//! Phone number display formatting.
//!
//! # Invariants
//! - Output only contains ASCII digits and single spaces.
//! - At most `PHONE_GROUPED_DIGITS` digits are kept once grouping applies;
//!   extra trailing digits are dropped.
//! - Reformatting already grouped output yields the same string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digit count that triggers pair grouping.
pub const PHONE_GROUPED_DIGITS: usize = 10;

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]+").expect("valid non-digit regex"));

/// Returns the ASCII digit sequence of `input`, in order.
pub fn phone_digits(input: &str) -> String {
    NON_DIGIT_RE.replace_all(input, "").into_owned()
}

/// Formats free-form phone input for display.
///
/// Non-digits are stripped. With at least `PHONE_GROUPED_DIGITS` digits the
/// leading ones are rendered as space-separated pairs (`01 23 45 67 89`);
/// shorter input is returned as the bare digit sequence.
pub fn format_phone(input: &str) -> String {
    let digits = phone_digits(input);
    if digits.len() < PHONE_GROUPED_DIGITS {
        return digits;
    }
    // ASCII only, so byte offsets are char boundaries.
    (0..PHONE_GROUPED_DIGITS)
        .step_by(2)
        .map(|start| &digits[start..start + 2])
        .collect::<Vec<_>>()
        .join(" ")
}
