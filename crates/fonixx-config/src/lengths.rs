//! CSS length validation for values written into inline styles.

use regex::Regex;
use std::sync::LazyLock;

/// A bare `0` or a non-negative number with a unit.
static LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[0-9]*\.?[0-9]+(px|rem|em|pt|%|vh|vw|ch|ex))$").unwrap()
});

/// Validate that a string is a single plain CSS length.
pub fn validate_length(s: &str) -> bool {
    LENGTH_RE.is_match(s.trim())
}
