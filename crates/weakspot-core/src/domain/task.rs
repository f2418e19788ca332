//! Task snapshot: the persisted state of one practice problem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::evaluation::EvaluationResult;
use super::ids::TaskId;
use super::stage::{Stage, StageFlags};

/// One practice problem of one learner.
///
/// Design:
/// - `question_name` / `image_url` are display-only.
/// - The stage is derived from `flags`, never stored on its own.
/// - Only the evaluator (via [`TaskSnapshot::apply`]) touches `flags` and
///   `last_reviewed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub question_name: String,
    pub image_url: String,
    pub priority_score: u32,
    pub flags: StageFlags,

    /// `None` means never reviewed.
    pub last_reviewed: Option<NaiveDate>,
}

impl TaskSnapshot {
    /// A freshly registered task: stage 1, never reviewed.
    pub fn new(
        id: TaskId,
        question_name: impl Into<String>,
        image_url: impl Into<String>,
        priority_score: u32,
    ) -> Self {
        Self {
            id,
            question_name: question_name.into(),
            image_url: image_url.into(),
            priority_score,
            flags: StageFlags::default(),
            last_reviewed: None,
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.flags = stage.to_flags();
        self
    }

    pub fn with_last_reviewed(mut self, date: NaiveDate) -> Self {
        self.last_reviewed = Some(date);
        self
    }

    pub fn current_stage(&self) -> Stage {
        self.flags.stage()
    }

    pub fn is_graduated(&self) -> bool {
        self.flags.stage3
    }

    pub fn reviewed_on(&self, day: NaiveDate) -> bool {
        self.last_reviewed == Some(day)
    }

    /// Returns the task as it looks after `result` is persisted.
    pub fn apply(&self, result: &EvaluationResult) -> TaskSnapshot {
        let mut next = self.clone();
        for mutation in &result.stage_mutations {
            next.flags.set(mutation.flag, mutation.value);
        }
        next.last_reviewed = Some(result.next_last_reviewed);
        next
    }
}
