//! Strong password generator
//!
//! Draws uniformly random candidates from a fixed alphabet and keeps the
//! first one that mixes cases and contains a digit and a special character.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use std::str::FromStr;
use thiserror::Error;

use crate::types::Criterion;

/// Characters a generated password is drawn from.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

pub const DEFAULT_LENGTH: usize = 12;

/// Shortest length that can hold an uppercase, a lowercase, a digit and a symbol.
pub const MIN_GENERATED_LENGTH: usize = 4;

/// Longest password the generator will build.
pub const MAX_GENERATED_LENGTH: usize = 4096;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

pub const LENGTH_ENV: &str = "PWD_GENERATE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "PWD_GENERATE_MAX_ATTEMPTS";

/// Criteria every accepted candidate must meet. Length is fixed by the caller.
const REQUIRED: [Criterion; 3] = [Criterion::CaseMix, Criterion::Digit, Criterion::Special];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {length} is too short, at least {min} characters are required")]
    LengthTooShort { length: usize, min: usize },
    #[error("Password length {length} is too long, at most {max} characters are allowed")]
    LengthTooLong { length: usize, max: usize },
    #[error("No candidate met every criterion after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

/// Generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    /// Upper bound on draws before giving up.
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Builds a config from the environment.
    ///
    /// Priority for each field:
    /// 1. Environment variable (`PWD_GENERATE_LENGTH`, `PWD_GENERATE_MAX_ATTEMPTS`)
    /// 2. Built-in default
    ///
    /// Values that fail to parse fall back to the default.
    pub fn from_env() -> Self {
        Self {
            length: env_or(LENGTH_ENV, DEFAULT_LENGTH),
            max_attempts: env_or(MAX_ATTEMPTS_ENV, DEFAULT_MAX_ATTEMPTS),
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Generates a strong password of `length` characters using the thread RNG.
///
/// # Errors
///
/// Returns error if:
/// - `length` is below [`MIN_GENERATED_LENGTH`]
/// - `length` is above [`MAX_GENERATED_LENGTH`]
/// - [`DEFAULT_MAX_ATTEMPTS`] draws all fail (never observed in practice)
///
/// # Example
///
/// ```rust
/// use secrecy::ExposeSecret;
///
/// let password = pwd_score::generate_strong_password(12).unwrap();
/// assert_eq!(password.expose_secret().len(), 12);
/// assert_eq!(pwd_score::check(password.expose_secret()).score, 4);
/// ```
pub fn generate_strong_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate(&GeneratorConfig::default().with_length(length))
}

/// Generates a password with the given settings using the thread RNG.
pub fn generate(config: &GeneratorConfig) -> Result<SecretString, GeneratorError> {
    generate_with_rng(&mut rand::thread_rng(), config)
}

/// Generates a password drawing randomness from `rng`.
///
/// Each draw is an independent uniform sample of `config.length` characters
/// from [`ALPHABET`]. Rejected candidates are zeroized on drop.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<SecretString, GeneratorError> {
    if config.length < MIN_GENERATED_LENGTH {
        return Err(GeneratorError::LengthTooShort {
            length: config.length,
            min: MIN_GENERATED_LENGTH,
        });
    }
    if config.length > MAX_GENERATED_LENGTH {
        return Err(GeneratorError::LengthTooLong {
            length: config.length,
            max: MAX_GENERATED_LENGTH,
        });
    }

    for _attempt in 1..=config.max_attempts {
        let candidate = draw(rng, config.length);
        if is_acceptable(candidate.expose_secret()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt = _attempt, length = config.length, "generated password accepted");
            return Ok(candidate);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(
        "Password generation gave up after {} attempts (length {})",
        config.max_attempts,
        config.length
    );

    Err(GeneratorError::AttemptsExhausted {
        attempts: config.max_attempts,
    })
}

fn draw<R: Rng>(rng: &mut R, length: usize) -> SecretString {
    let candidate: String = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    SecretString::new(candidate.into())
}

fn is_acceptable(candidate: &str) -> bool {
    REQUIRED.iter().all(|c| c.is_met(candidate))
}
