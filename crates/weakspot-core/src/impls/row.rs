//! TaskRow - 外部ストアの 1 行（列名はストアのスキーマそのまま）
//!
//! 変換時にフラグの不整合は修復しません。そのまま `TaskSnapshot` に載せ、
//! evaluator が `InvalidState` で報告します。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_text::{format_review_date, parse_flexible_date};
use crate::domain::{StageFlags, TaskId, TaskSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub id: TaskId,

    #[serde(default)]
    pub question_name: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub priority_score: u32,

    #[serde(default)]
    pub stage1_done: bool,

    #[serde(default)]
    pub stage2_done: bool,

    #[serde(default)]
    pub stage3_done: bool,

    /// Free text; empty when never reviewed.
    #[serde(default)]
    pub last_review_date: String,
}

impl TaskRow {
    /// `current_year` fills in partial `MM/DD` dates.
    pub fn into_snapshot(self, current_year: i32) -> TaskSnapshot {
        let last_reviewed: Option<NaiveDate> =
            parse_flexible_date(&self.last_review_date, current_year);
        TaskSnapshot {
            id: self.id,
            question_name: self.question_name,
            image_url: self.image_url,
            priority_score: self.priority_score,
            flags: StageFlags {
                stage1: self.stage1_done,
                stage2: self.stage2_done,
                stage3: self.stage3_done,
            },
            last_reviewed,
        }
    }
}

impl From<TaskSnapshot> for TaskRow {
    fn from(task: TaskSnapshot) -> Self {
        Self {
            id: task.id,
            question_name: task.question_name,
            image_url: task.image_url,
            priority_score: task.priority_score,
            stage1_done: task.flags.stage1,
            stage2_done: task.flags.stage2,
            stage3_done: task.flags.stage3,
            last_review_date: task.last_reviewed.map(format_review_date).unwrap_or_default(),
        }
    }
}
