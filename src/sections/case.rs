//! Case section - requires both an uppercase and a lowercase letter.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

/// Only ASCII letters count; `É` alone does not satisfy the uppercase half.
pub fn has_mixed_case(password: &str) -> bool {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    has_upper && has_lower
}

/// Checks if the password mixes uppercase and lowercase letters.
///
/// # Returns
/// - `Some(reason)` if either case is missing
/// - `None` if both are present
pub fn case_section(password: &SecretString) -> SectionResult {
    if !has_mixed_case(password.expose_secret()) {
        return Some(Criterion::CaseMix.message().to_string());
    }
    None
}
