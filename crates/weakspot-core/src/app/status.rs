//! Status - 進捗の集計（克服率）

use serde::{Deserialize, Serialize};

use crate::domain::{Stage, TaskSnapshot};

/// Counts of tasks per stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub stage1: usize,
    pub stage2: usize,
    pub stage3: usize,
    pub graduated: usize,
}

impl ProgressSummary {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a TaskSnapshot>) -> Self {
        let mut summary = Self::default();
        for task in tasks {
            match task.current_stage() {
                Stage::One => summary.stage1 += 1,
                Stage::Two => summary.stage2 += 1,
                Stage::Three => summary.stage3 += 1,
                Stage::Graduated => summary.graduated += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.stage1 + self.stage2 + self.stage3 + self.graduated
    }

    /// Share of graduated tasks in `0.0..=1.0` (0.0 with no tasks).
    pub fn mastery_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.graduated as f64 / total as f64,
        }
    }
}
