//! InMemoryTaskStore - 開発・テスト用のストア
//!
//! # 実装詳細
//! - HashMap<TaskId, Versioned<TaskSnapshot>> を tokio の Mutex で保護
//! - compare_and_swap はロック内で version を比較してから書き込む

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{TaskId, TaskSnapshot};
use crate::ports::{StoreError, TaskStore, Versioned};

#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    rows: Arc<Mutex<HashMap<TaskId, Versioned<TaskSnapshot>>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing rows, each at version 0.
    pub fn with_tasks(tasks: impl IntoIterator<Item = TaskSnapshot>) -> Self {
        let rows = tasks
            .into_iter()
            .map(|task| (task.id, Versioned { value: task, version: 0 }))
            .collect();
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    /// Rows sorted by id (stable output for dumps).
    pub async fn snapshot(&self) -> Vec<TaskSnapshot> {
        let rows = self.rows.lock().await;
        let mut tasks: Vec<TaskSnapshot> = rows.values().map(|row| row.value.clone()).collect();
        tasks.sort_by_key(|task| task.id);
        tasks
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: TaskSnapshot) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        if rows.contains_key(&task.id) {
            return Err(StoreError::AlreadyExists(task.id));
        }
        rows.insert(task.id, Versioned { value: task, version: 0 });
        Ok(())
    }

    async fn get(&self, task_id: TaskId) -> Result<Versioned<TaskSnapshot>, StoreError> {
        let rows = self.rows.lock().await;
        rows.get(&task_id).cloned().ok_or(StoreError::NotFound(task_id))
    }

    async fn list(&self) -> Result<Vec<TaskSnapshot>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows.values().map(|row| row.value.clone()).collect())
    }

    async fn compare_and_swap(
        &self,
        task: TaskSnapshot,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        let mut rows = self.rows.lock().await;
        let row = rows.get_mut(&task.id).ok_or(StoreError::NotFound(task.id))?;
        if row.version != expected_version {
            return Err(StoreError::Conflict {
                task_id: task.id,
                expected: expected_version,
                actual: row.version,
            });
        }
        row.value = task;
        row.version += 1;
        Ok(row.version)
    }
}
