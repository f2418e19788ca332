//! Outcome model: the learner's self-reported result for one review.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::SchedulerError;

/// A closed classification of a review attempt.
///
/// Serialized as SCREAMING_SNAKE_CASE: EASY / SOSO / FAIL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Solved without trouble. Advances one stage.
    Easy,

    /// Solved, but shakily. Never changes the stage.
    Soso,

    /// Could not solve. Demotes one stage (floor at stage 1).
    Fail,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Easy, Outcome::Soso, Outcome::Fail];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Easy => "EASY",
            Outcome::Soso => "SOSO",
            Outcome::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EASY" => Ok(Outcome::Easy),
            "SOSO" => Ok(Outcome::Soso),
            "FAIL" => Ok(Outcome::Fail),
            _ => Err(SchedulerError::InvalidOutcome(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn outcome_serializes_as_required_names() {
        let s = serde_json::to_string(&Outcome::Easy).unwrap();
        assert_eq!(s, "\"EASY\"");

        let s = serde_json::to_string(&Outcome::Soso).unwrap();
        assert_eq!(s, "\"SOSO\"");

        let s = serde_json::to_string(&Outcome::Fail).unwrap();
        assert_eq!(s, "\"FAIL\"");
    }

    #[rstest]
    #[case::upper("EASY", Outcome::Easy)]
    #[case::lower("soso", Outcome::Soso)]
    #[case::padded(" Fail ", Outcome::Fail)]
    fn parses_case_insensitively(#[case] text: &str, #[case] expected: Outcome) {
        assert_eq!(text.parse::<Outcome>().unwrap(), expected);
    }

    #[test]
    fn unknown_text_is_invalid_outcome() {
        let err = "PERFECT".parse::<Outcome>().unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidOutcome(ref s) if s == "PERFECT"));
    }
}
