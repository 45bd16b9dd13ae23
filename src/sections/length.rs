//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

pub const MIN_LENGTH: usize = 8;

/// Counts characters, not bytes.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if !meets_min_length(password.expose_secret()) {
        return Some(Criterion::Length.message().to_string());
    }
    None
}
