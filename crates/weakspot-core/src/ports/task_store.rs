//! TaskStore port - 外部の行指向ストア（スプレッドシート等）の抽象化
//!
//! core はこの port に依存しません。`ReviewService` が注入して使います。
//!
//! # 設計原則
//! - 行ごとに version を持ち、`compare_and_swap` で楽観ロックする
//! - 同じ task への同時提出は片方が `Conflict` になり、何も書かれない
//! - リトライはしない（呼び出し側が読み直して判断する）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{TaskId, TaskSnapshot};

/// A row together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub value: T,
    pub version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),

    #[error("task already exists: {0}")]
    AlreadyExists(TaskId),

    #[error("concurrent update on {task_id}: expected version {expected}, found {actual}")]
    Conflict {
        task_id: TaskId,
        expected: u64,
        actual: u64,
    },

    #[error("store backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Add a newly registered task (version 0).
    async fn insert(&self, task: TaskSnapshot) -> Result<(), StoreError>;

    async fn get(&self, task_id: TaskId) -> Result<Versioned<TaskSnapshot>, StoreError>;

    /// All rows of the learner, in no particular order.
    async fn list(&self) -> Result<Vec<TaskSnapshot>, StoreError>;

    /// Replace the row only if it is still at `expected_version`.
    ///
    /// Returns the new version.
    async fn compare_and_swap(
        &self,
        task: TaskSnapshot,
        expected_version: u64,
    ) -> Result<u64, StoreError>;
}
