//! Admission validation for reported scores.
//!
//! Both sides of a match must pass here independently before the match may
//! be marked played. The validator only accepts or rejects; it never clamps
//! or coerces.

use std::fmt;
use std::num::IntErrorKind;

use crate::rules::{error_codes, MAX_SCORE};

/// Rejection reasons for a candidate score. Each carries the offending
/// input so callers can surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The input was empty.
    Empty,
    /// The input is not a base-10 integer. Stray whitespace, partial
    /// numerics ("12a") and floating-point-looking input all land here.
    NotANumber(String),
    /// The value is below zero.
    Negative(String),
    /// The value exceeds `MAX_SCORE`.
    OverLimit(String),
}

impl ScoreError {
    /// Stable machine-readable code for API surfaces.
    pub fn code(&self) -> &'static str {
        match self {
            ScoreError::Empty => error_codes::EMPTY_SCORE,
            ScoreError::NotANumber(_) => error_codes::NON_NUMERIC_SCORE,
            ScoreError::Negative(_) => error_codes::NEGATIVE_SCORE,
            ScoreError::OverLimit(_) => error_codes::SCORE_OVER_LIMIT,
        }
    }
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreError::Empty => write!(f, "Score cannot be empty"),
            ScoreError::NotANumber(raw) => {
                write!(f, "Score must be a whole number, got {:?}", raw)
            }
            ScoreError::Negative(raw) => write!(f, "Score cannot be negative, got {}", raw),
            ScoreError::OverLimit(raw) => {
                write!(f, "Score cannot exceed {}, got {}", MAX_SCORE, raw)
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Score validation utility.
pub struct ScoreValidator;

impl ScoreValidator {
    /// Validate a raw text score for one side of a match.
    ///
    /// Accepts exactly the base-10 integers in `0..=MAX_SCORE` and returns
    /// the parsed value. No trimming is performed, so surrounding
    /// whitespace is a rejection. Pure function, no I/O.
    pub fn validate(raw: &str) -> Result<u8, ScoreError> {
        if raw.is_empty() {
            return Err(ScoreError::Empty);
        }

        let value = match raw.parse::<i64>() {
            Ok(value) => value,
            Err(err) => {
                // A digit string too long for i64 is still an integer, just
                // a hopeless one; classify by its sign like any other.
                return Err(match err.kind() {
                    IntErrorKind::PosOverflow => ScoreError::OverLimit(raw.to_string()),
                    IntErrorKind::NegOverflow => ScoreError::Negative(raw.to_string()),
                    _ => ScoreError::NotANumber(raw.to_string()),
                });
            }
        };

        if value < 0 {
            return Err(ScoreError::Negative(raw.to_string()));
        }
        if value > i64::from(MAX_SCORE) {
            return Err(ScoreError::OverLimit(raw.to_string()));
        }

        Ok(value as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_full_range() {
        for n in 0..=99u8 {
            assert_eq!(ScoreValidator::validate(&n.to_string()), Ok(n));
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(ScoreValidator::validate(""), Err(ScoreError::Empty));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in ["abc", "12a", "1.5", "0x10", "--3", "1 2", "½"] {
            assert_eq!(
                ScoreValidator::validate(raw),
                Err(ScoreError::NotANumber(raw.to_string())),
                "expected non-numeric rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn test_rejects_whitespace_padding() {
        for raw in [" 7", "7 ", " 7 ", "\t3", "4\n"] {
            assert!(
                matches!(ScoreValidator::validate(raw), Err(ScoreError::NotANumber(_))),
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(ScoreValidator::validate("-1"), Err(ScoreError::Negative("-1".to_string())));
        assert_eq!(
            ScoreValidator::validate("-99999999999999999999"),
            Err(ScoreError::Negative("-99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_rejects_over_limit() {
        assert_eq!(ScoreValidator::validate("100"), Err(ScoreError::OverLimit("100".to_string())));
        // Overflows i64 but is clearly a huge positive number.
        assert_eq!(
            ScoreValidator::validate("99999999999999999999"),
            Err(ScoreError::OverLimit("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_plus_sign_parses() {
        // An explicit plus sign is still a base-10 integer.
        assert_eq!(ScoreValidator::validate("+5"), Ok(5));
    }

    #[test]
    fn test_reason_codes_are_distinct() {
        let codes = [
            ScoreError::Empty.code(),
            ScoreError::NotANumber(String::new()).code(),
            ScoreError::Negative(String::new()).code(),
            ScoreError::OverLimit(String::new()).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_valid_range_accepted(n in 0i64..=99) {
            prop_assert_eq!(ScoreValidator::validate(&n.to_string()), Ok(n as u8));
        }

        #[test]
        fn prop_out_of_range_rejected(n in proptest::sample::select(vec![-1000i64, -100, -1, 100, 101, 1000, i64::MAX])) {
            prop_assert!(ScoreValidator::validate(&n.to_string()).is_err());
        }

        #[test]
        fn prop_never_panics(raw in ".*") {
            let _ = ScoreValidator::validate(&raw);
        }
    }
}
