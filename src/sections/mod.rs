//! Password evaluation sections
//!
//! Each section checks one criterion of password strength.

mod case;
mod digit;
mod length;
mod special;

pub use case::{case_section, has_mixed_case};
pub use digit::{digit_section, has_digit};
pub use length::{length_section, meets_min_length, MIN_LENGTH};
pub use special::{has_special, special_section, SPECIAL_CHARS};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
