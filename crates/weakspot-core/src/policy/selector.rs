//! Priority selector: builds the day's review queue.

use std::cmp::Reverse;

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::TaskSnapshot;

/// Filter and rank `tasks` into today's queue.
///
/// - graduated tasks are dropped
/// - tasks with `priority_score < min_score` are dropped
/// - tasks already reviewed on `today` are dropped (a never-reviewed task is kept)
///
/// Order: `priority_score` descending, then `TaskId` ascending (registration
/// order), so equal scores come out the same way whatever the input order.
pub fn select_queue(tasks: &[TaskSnapshot], min_score: u32, today: NaiveDate) -> Vec<TaskSnapshot> {
    let mut queue: Vec<TaskSnapshot> = tasks
        .iter()
        .filter(|task| is_due(task, min_score, today))
        .cloned()
        .collect();

    queue.sort_by_key(|task| (Reverse(task.priority_score), task.id));
    queue
}

fn is_due(task: &TaskSnapshot, min_score: u32, today: NaiveDate) -> bool {
    if task.is_graduated() {
        return false;
    }
    if let Some(reason) = task.flags.violation() {
        // kept as-is; the evaluator rejects it when the learner answers
        warn!(task_id = %task.id, reason, "inconsistent stage flags");
    }
    task.priority_score >= min_score && !task.reviewed_on(today)
}
