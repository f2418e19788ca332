//! Errors - スケジューリング core のエラー型
//!
//! すべて呼び出し側のデータ不整合・プログラミングミスを表します。
//! core は I/O をしないので transient なエラーは存在せず、リトライは無意味です。

use chrono::NaiveDate;
use thiserror::Error;

use super::ids::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// Graduated task, or stage flags that contradict each other.
    #[error("invalid state for {task_id}: {reason}")]
    InvalidState { task_id: TaskId, reason: String },

    #[error("invalid outcome: {0:?} (expected EASY, SOSO or FAIL)")]
    InvalidOutcome(String),

    #[error("date out of range: cannot schedule after {0}")]
    DateOutOfRange(NaiveDate),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
