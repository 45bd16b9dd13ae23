//! Special character section - requires one symbol from a fixed set.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

/// The only characters that count as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Checks if the password contains one of `!@#$%^&*`.
///
/// # Returns
/// - `Some(reason)` if none of the special characters is present
/// - `None` otherwise
pub fn special_section(password: &SecretString) -> SectionResult {
    if !has_special(password.expose_secret()) {
        return Some(Criterion::Special.message().to_string());
    }
    None
}
