//! Password strength scoring library
//!
//! Scores passwords against four criteria (length, mixed case, digit,
//! special character) and generates random passwords that satisfy them.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced, cancellable async scorer
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-score` command line shell
//!
//! # Environment Variables
//!
//! - `PWD_GENERATE_LENGTH`: Default length for [`GeneratorConfig::from_env`]
//!   (default: `12`)
//! - `PWD_GENERATE_MAX_ATTEMPTS`: Draw cap for [`GeneratorConfig::from_env`]
//!   (default: `10000`)
//!
//! # Example
//!
//! ```rust
//! use pwd_score::{check_password_strength, generate_strong_password, StrengthLevel};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = check_password_strength(&password);
//! assert_eq!(result.score, 4);
//! assert_eq!(result.strength(), StrengthLevel::Strong);
//!
//! let weak = pwd_score::check("abcdefgh");
//! assert_eq!(weak.score, 1);
//! assert_eq!(weak.messages.len(), 3);
//!
//! let generated = generate_strong_password(12).expect("length is valid");
//! assert_eq!(generated.expose_secret().len(), 12);
//! ```

mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use evaluator::{check, check_password_strength};
pub use generator::{
    generate, generate_strong_password, generate_with_rng, GeneratorConfig, GeneratorError,
    ALPHABET, DEFAULT_LENGTH, DEFAULT_MAX_ATTEMPTS, LENGTH_ENV, MAX_ATTEMPTS_ENV,
    MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH,
};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use types::{Criterion, ScoreResult, StrengthLevel, MAX_SCORE};

#[cfg(feature = "async")]
pub use evaluator::{check_password_strength_tx, DEBOUNCE};
