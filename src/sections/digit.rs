//! Digit section - requires at least one decimal digit.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

// Unicode-aware: matches any decimal digit, not only 0-9.
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

pub fn has_digit(password: &str) -> bool {
    DIGIT_RE.is_match(password)
}

/// Checks if the password contains a number.
///
/// # Returns
/// - `Some(reason)` if no digit is present
/// - `None` otherwise
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !has_digit(password.expose_secret()) {
        return Some(Criterion::Digit.message().to_string());
    }
    None
}
