//! Password scorer - runs every section in order and tallies the result.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    case_section, digit_section, length_section, special_section, SectionResult,
};
use crate::types::{Criterion, ScoreResult};

/// Debounce applied by [`check_password_strength_tx`] before scoring.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Scores a password against the four criteria.
///
/// Sections run in the fixed order length, case, digit, special. Each
/// satisfied section adds one point; each failed one contributes its message.
/// Never fails: the empty password scores 0 with all four messages.
pub fn check_password_strength(password: &SecretString) -> ScoreResult {
    let sections: [(Criterion, fn(&SecretString) -> SectionResult); 4] = [
        (Criterion::Length, length_section),
        (Criterion::CaseMix, case_section),
        (Criterion::Digit, digit_section),
        (Criterion::Special, special_section),
    ];

    let mut score = 0u8;
    let mut messages = Vec::new();
    let mut unmet = Vec::new();

    for (criterion, section_fn) in sections {
        match section_fn(password) {
            Some(reason) => {
                messages.push(reason);
                unmet.push(criterion);
            }
            None => score += 1,
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score, unmet = unmet.len(), "password checked");

    ScoreResult {
        score,
        messages,
        unmet,
    }
}

/// Convenience wrapper for callers holding a plain `&str`.
pub fn check(password: &str) -> ScoreResult {
    check_password_strength(&SecretString::new(password.into()))
}

/// Async version that sends the result via channel.
///
/// Waits [`DEBOUNCE`] first so a shell scoring on every keystroke can cancel
/// stale requests. Nothing is sent if `token` is cancelled by then.
#[cfg(feature = "async")]
pub async fn check_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password check cancelled");
        return;
    }

    let result = check_password_strength(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StrengthLevel, MAX_SCORE};

    #[test]
    fn test_check_empty_password() {
        let result = check("");
        assert_eq!(result.score, 0);
        assert_eq!(result.messages.len(), 4);
        assert_eq!(result.unmet, Criterion::ALL.to_vec());
        assert_eq!(result.strength(), StrengthLevel::Critical);
    }

    #[test]
    fn test_check_strong_password() {
        let result = check("Abcdefg1!");
        assert_eq!(result.score, 4);
        assert!(result.messages.is_empty());
        assert!(result.is_strong());
    }

    #[test]
    fn test_check_length_only() {
        let result = check("abcdefgh");
        assert_eq!(result.score, 1);
        assert_eq!(
            result.messages,
            vec![
                "Include both uppercase and lowercase letters".to_string(),
                "Add at least one number (0-9)".to_string(),
                "Include at least one special character (!@#$%^&*)".to_string(),
            ]
        );
        assert_eq!(result.strength(), StrengthLevel::VeryWeak);
    }

    #[test]
    fn test_check_messages_follow_criterion_order() {
        let result = check("a1");
        assert_eq!(
            result.unmet,
            vec![Criterion::Length, Criterion::CaseMix, Criterion::Special]
        );
        let expected: Vec<String> = result
            .unmet
            .iter()
            .map(|c| c.message().to_string())
            .collect();
        assert_eq!(result.messages, expected);
    }

    #[test]
    fn test_check_known_scores() {
        let cases = [
            ("", 0),
            ("a", 0),
            ("password", 1),
            ("PASSWORD1", 2),
            ("Password", 2),
            ("Pass1!", 3),
            ("pass word 123 !!", 3),
            ("\u{00DC}n\u{00EF}c\u{00F8}d\u{00E9}\u{0663}&x", 3),
            ("Abcdefg1!", 4),
            ("        ", 1),
        ];

        for (pwd, expected) in cases {
            let result = check(pwd);
            assert_eq!(result.score, expected, "score mismatch for {pwd:?}");
            assert_eq!(result.messages.len(), usize::from(MAX_SCORE - expected));
        }
    }

    #[test]
    fn test_check_is_deterministic() {
        assert_eq!(check("Moderate1"), check("Moderate1"));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::types::MAX_SCORE;
    use proptest::prelude::*;

    /// Expected score computed straight from the byte classes.
    fn expected_score(pwd: &str) -> u8 {
        let bytes = pwd.as_bytes();
        let length = pwd.chars().count() >= 8;
        let case = bytes.iter().any(u8::is_ascii_uppercase)
            && bytes.iter().any(u8::is_ascii_lowercase);
        let digit = bytes.iter().any(u8::is_ascii_digit);
        let special = bytes.iter().any(|b| b"!@#$%^&*".contains(b));
        [length, case, digit, special].iter().filter(|&&met| met).count() as u8
    }

    proptest! {
        // Printable ASCII plus accented letters, so ASCII digits are the only digits.
        #[test]
        fn score_counts_satisfied_criteria(pwd in "[ -~\u{00E9}\u{00C9}\u{00DF}]{0,24}") {
            let result = check(&pwd);
            prop_assert_eq!(result.score, expected_score(&pwd));
        }

        #[test]
        fn messages_cover_every_unmet_criterion(pwd in any::<String>()) {
            let result = check(&pwd);
            prop_assert!(result.score <= MAX_SCORE);
            prop_assert_eq!(result.messages.len(), usize::from(MAX_SCORE - result.score));

            let expected: Vec<String> = result
                .unmet
                .iter()
                .map(|c| c.message().to_string())
                .collect();
            prop_assert_eq!(&result.messages, &expected);

            let order: Vec<usize> = result
                .unmet
                .iter()
                .map(|c| Criterion::ALL.iter().position(|a| a == c).unwrap_or(usize::MAX))
                .collect();
            prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
