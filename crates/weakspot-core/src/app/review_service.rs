//! ReviewService - policy と ports のワイヤリング
//!
//! # 流れ
//! 1. `todays_queue`: store から全件読み、selector で今日のキューを作る
//! 2. `submit`: 1 件読み（version 付き）、evaluator で判定、compare_and_swap で書く
//!
//! policy は純粋関数のまま。時計・ストア・ID 採番はここで注入します。

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use super::status::ProgressSummary;
use crate::domain::{EvaluationResult, Outcome, SchedulerError, Stage, TaskId, TaskSnapshot};
use crate::policy::{ReviewPolicy, ThreeStagePolicy, select_queue};
use crate::ports::{Clock, IdGenerator, StoreError, TaskStore, UlidGenerator};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What one submitted review did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub previous_stage: Stage,
    pub result: EvaluationResult,
    /// The row as persisted.
    pub task: TaskSnapshot,
}

pub struct ReviewService {
    store: Arc<dyn TaskStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    policy: Arc<dyn ReviewPolicy>,
}

impl ReviewService {
    /// Uses the three-stage policy and ULID ids.
    pub fn new(store: Arc<dyn TaskStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            ids: Arc::new(UlidGenerator),
            policy: Arc::new(ThreeStagePolicy),
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn ReviewPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Register a new weak problem. Both the name and the image are required.
    pub async fn register(
        &self,
        question_name: &str,
        image_url: &str,
        priority_score: u32,
    ) -> Result<TaskSnapshot, ServiceError> {
        let question_name = question_name.trim();
        let image_url = image_url.trim();
        if question_name.is_empty() {
            return Err(SchedulerError::MissingField("questionName").into());
        }
        if image_url.is_empty() {
            return Err(SchedulerError::MissingField("imageUrl").into());
        }

        let task = TaskSnapshot::new(
            self.ids.generate_task_id(),
            question_name,
            image_url,
            priority_score,
        );
        self.store.insert(task.clone()).await?;

        info!(task_id = %task.id, question = %task.question_name, priority_score, "registered task");
        Ok(task)
    }

    pub async fn todays_queue(&self, min_score: u32) -> Result<Vec<TaskSnapshot>, ServiceError> {
        let today = self.today();
        let tasks = self.store.list().await?;
        let queue = select_queue(&tasks, min_score, today);

        info!(%today, min_score, total = tasks.len(), queued = queue.len(), "built review queue");
        Ok(queue)
    }

    /// Apply one review. On any error nothing is written.
    pub async fn submit(&self, task_id: TaskId, outcome: Outcome) -> Result<Submission, ServiceError> {
        let today = self.today();
        let row = self.store.get(task_id).await?;
        let previous_stage = row.value.current_stage();

        let result = self
            .policy
            .evaluate(&row.value, outcome, today)
            .inspect_err(|e| warn!(%task_id, %outcome, error = %e, "rejected review"))?;

        let task = row.value.apply(&result);
        self.store.compare_and_swap(task.clone(), row.version).await?;

        info!(
            %task_id,
            %outcome,
            from = %previous_stage,
            to = %result.next_stage,
            last_reviewed = %result.next_last_reviewed,
            "review recorded"
        );

        Ok(Submission {
            previous_stage,
            result,
            task,
        })
    }

    pub async fn progress(&self) -> Result<ProgressSummary, ServiceError> {
        let tasks = self.store.list().await?;
        Ok(ProgressSummary::from_tasks(&tasks))
    }
}
