//! Minimal email shape check.
//!
//! Matches `local@domain.tld` where each segment is one or more characters
//! that are neither whitespace nor `@`. Deliverability and domain existence
//! are not checked.
//!
//! Whitespace is the browser set: Unicode space separators, ASCII controls
//! `\t \n \x0B \x0C \r`, line/paragraph separators and U+FEFF. U+0085 is not
//! whitespace here.

use once_cell::sync::Lazy;
use regex::Regex;

const SEGMENT_CLASS: &str = r"[^@\t\n\x0B\x0C\r\p{Zs}\x{2028}\x{2029}\x{FEFF}]+";

static EMAIL_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{SEGMENT_CLASS}@{SEGMENT_CLASS}\.{SEGMENT_CLASS}$"
    ))
    .expect("valid email regex")
});

/// Returns whether `input` has the shape `local@domain.tld`.
///
/// Never fails: empty or malformed input returns `false`.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_SHAPE_RE.is_match(input)
}
