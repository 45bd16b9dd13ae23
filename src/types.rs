//! Value types shared by the scorer and the generator.

use std::fmt;

/// Highest score a password can reach, one point per criterion.
pub const MAX_SCORE: u8 = 4;

/// A single pass/fail rule applied to a password.
///
/// Variants are declared in evaluation order; [`Criterion::ALL`] preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// At least 8 characters.
    Length,
    /// Both an uppercase and a lowercase ASCII letter.
    CaseMix,
    /// At least one decimal digit.
    Digit,
    /// At least one of `!@#$%^&*`.
    Special,
}

impl Criterion {
    /// All criteria in the fixed evaluation order.
    pub const ALL: [Criterion; 4] = [
        Criterion::Length,
        Criterion::CaseMix,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Feedback shown when the criterion is not met.
    pub fn message(self) -> &'static str {
        match self {
            Criterion::Length => "Password should be at least 8 characters long",
            Criterion::CaseMix => "Include both uppercase and lowercase letters",
            Criterion::Digit => "Add at least one number (0-9)",
            Criterion::Special => "Include at least one special character (!@#$%^&*)",
        }
    }

    /// Short checklist label.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "8+ characters",
            Criterion::CaseMix => "Upper & lowercase letters",
            Criterion::Digit => "Contains numbers",
            Criterion::Special => "Special characters",
        }
    }

    /// Evaluates this criterion against a plain password.
    pub fn is_met(self, password: &str) -> bool {
        use crate::sections::{has_digit, has_mixed_case, has_special, meets_min_length};

        match self {
            Criterion::Length => meets_min_length(password),
            Criterion::CaseMix => has_mixed_case(password),
            Criterion::Digit => has_digit(password),
            Criterion::Special => has_special(password),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strength bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Critical,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl StrengthLevel {
    /// Maps a score to its level. Scores above [`MAX_SCORE`] saturate to `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::Critical,
            1 => StrengthLevel::VeryWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Moderate,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrengthLevel::Critical => "Critical",
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StrengthLevel::Critical => "💀",
            StrengthLevel::VeryWeak => "⚠️",
            StrengthLevel::Weak => "🔓",
            StrengthLevel::Moderate => "🔒",
            StrengthLevel::Strong => "🔐",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of scoring a password.
///
/// `messages` and `unmet` follow [`Criterion::ALL`] order and always have
/// `MAX_SCORE - score` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub messages: Vec<String>,
    pub unmet: Vec<Criterion>,
}

impl ScoreResult {
    pub fn strength(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }

    /// Score as a percentage of [`MAX_SCORE`].
    pub fn percent(&self) -> u8 {
        self.score.min(MAX_SCORE) * 25
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        !self.unmet.contains(&criterion)
    }

    /// Every criterion paired with whether it was satisfied, in evaluation order.
    pub fn checklist(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.is_met(c)))
    }

    pub fn is_strong(&self) -> bool {
        self.score == MAX_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_level_from_score() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Critical);
        assert_eq!(StrengthLevel::from_score(1), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(9), StrengthLevel::Strong);
    }

    #[test]
    fn test_strength_level_display() {
        assert_eq!(StrengthLevel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLevel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_checklist_reports_unmet() {
        let result = ScoreResult {
            score: 2,
            messages: vec![
                Criterion::Digit.message().to_string(),
                Criterion::Special.message().to_string(),
            ],
            unmet: vec![Criterion::Digit, Criterion::Special],
        };

        let checklist: Vec<_> = result.checklist().collect();
        assert_eq!(
            checklist,
            vec![
                (Criterion::Length, true),
                (Criterion::CaseMix, true),
                (Criterion::Digit, false),
                (Criterion::Special, false),
            ]
        );
        assert_eq!(result.percent(), 50);
        assert_eq!(result.strength(), StrengthLevel::Weak);
        assert!(!result.is_strong());
    }

    #[test]
    fn test_criterion_order_and_messages() {
        let messages: Vec<_> = Criterion::ALL.iter().map(|c| c.message()).collect();
        assert!(messages[0].contains("8 characters"));
        assert!(messages[1].contains("uppercase and lowercase"));
        assert!(messages[2].contains("number"));
        assert!(messages[3].contains("!@#$%^&*"));
    }
}
