//! Evaluation result: the mutation the caller must persist after one review.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::stage::{Stage, StageFlag};

/// A single column write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMutation {
    pub flag: StageFlag,
    pub value: bool,
}

impl StageMutation {
    pub fn set(flag: StageFlag) -> Self {
        Self { flag, value: true }
    }

    pub fn clear(flag: StageFlag) -> Self {
        Self { flag, value: false }
    }
}

/// Output of the evaluator.
///
/// Pure data: applying it exactly once is the caller's job (there is no
/// deduplication key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Stage the task is at once the mutations are applied.
    pub next_stage: Stage,

    pub next_last_reviewed: NaiveDate,

    /// Empty when the stage does not change.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stage_mutations: Vec<StageMutation>,
}
