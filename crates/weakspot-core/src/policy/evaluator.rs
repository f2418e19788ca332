//! Outcome evaluator: the three-stage scheduling policy.
//!
//! | stage | EASY            | SOSO         | FAIL              |
//! |-------|-----------------|--------------|-------------------|
//! | 1     | set stage1Done  | date = today+1 | (none)          |
//! | 2     | set stage2Done  | (none)       | clear stage1Done  |
//! | 3     | set stage3Done  | (none)       | clear stage2Done  |
//!
//! Every row except stage-1 SOSO records `today` as the last review date.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    EvaluationResult, Outcome, SchedulerError, Stage, StageFlag, StageMutation, TaskSnapshot,
};

/// Trait for turning one review into a mutation.
///
/// Policies are pure functions: given the task, the outcome and the caller's
/// `today`, they return the mutation without reading a clock or a store.
pub trait ReviewPolicy: Send + Sync {
    fn evaluate(
        &self,
        task: &TaskSnapshot,
        outcome: Outcome,
        today: NaiveDate,
    ) -> Result<EvaluationResult, SchedulerError>;
}

/// The fixed three-stage / three-outcome policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeStagePolicy;

impl ReviewPolicy for ThreeStagePolicy {
    fn evaluate(
        &self,
        task: &TaskSnapshot,
        outcome: Outcome,
        today: NaiveDate,
    ) -> Result<EvaluationResult, SchedulerError> {
        evaluate(task, outcome, today)
    }
}

/// Evaluate one review of `task`.
///
/// Fails fast with `InvalidState` for graduated tasks and for flag
/// combinations that break `stageN+1 => stageN`; nothing must be persisted
/// in that case.
pub fn evaluate(
    task: &TaskSnapshot,
    outcome: Outcome,
    today: NaiveDate,
) -> Result<EvaluationResult, SchedulerError> {
    if let Some(reason) = task.flags.violation() {
        return Err(SchedulerError::InvalidState {
            task_id: task.id,
            reason: reason.to_string(),
        });
    }

    let stage = task.current_stage();
    let (next_stage, mutation) = transition(stage, outcome).ok_or_else(|| {
        SchedulerError::InvalidState {
            task_id: task.id,
            reason: "task has already graduated".to_string(),
        }
    })?;

    let next_last_reviewed = match (stage, outcome) {
        (Stage::One, Outcome::Soso) => today
            .succ_opt()
            .ok_or(SchedulerError::DateOutOfRange(today))?,
        _ => today,
    };

    debug!(
        task_id = %task.id,
        %stage,
        %outcome,
        %next_stage,
        %next_last_reviewed,
        "evaluated review"
    );

    Ok(EvaluationResult {
        next_stage,
        next_last_reviewed,
        stage_mutations: mutation.into_iter().collect(),
    })
}

/// Stage transition table. `None` for a graduated task.
fn transition(stage: Stage, outcome: Outcome) -> Option<(Stage, Option<StageMutation>)> {
    let row = match (stage, outcome) {
        (Stage::Graduated, _) => return None,

        (Stage::One, Outcome::Easy) => (Stage::Two, Some(StageMutation::set(StageFlag::Stage1Done))),
        (Stage::Two, Outcome::Easy) => (Stage::Three, Some(StageMutation::set(StageFlag::Stage2Done))),
        (Stage::Three, Outcome::Easy) => {
            (Stage::Graduated, Some(StageMutation::set(StageFlag::Stage3Done)))
        }

        (stage, Outcome::Soso) => (stage, None),

        (Stage::One, Outcome::Fail) => (Stage::One, None),
        (Stage::Two, Outcome::Fail) => (Stage::One, Some(StageMutation::clear(StageFlag::Stage1Done))),
        (Stage::Three, Outcome::Fail) => {
            (Stage::Two, Some(StageMutation::clear(StageFlag::Stage2Done)))
        }
    };
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StageFlags, TaskId};
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task_at(stage: Stage) -> TaskSnapshot {
        TaskSnapshot::new(TaskId::from_raw(7), "合不合 第1回 2(5)", "img/7.jpg", 50).with_stage(stage)
    }

    #[rstest]
    #[case::one_easy(Stage::One, Outcome::Easy, Stage::Two, 0)]
    #[case::one_soso(Stage::One, Outcome::Soso, Stage::One, 1)]
    #[case::one_fail(Stage::One, Outcome::Fail, Stage::One, 0)]
    #[case::two_easy(Stage::Two, Outcome::Easy, Stage::Three, 0)]
    #[case::two_soso(Stage::Two, Outcome::Soso, Stage::Two, 0)]
    #[case::two_fail(Stage::Two, Outcome::Fail, Stage::One, 0)]
    #[case::three_easy(Stage::Three, Outcome::Easy, Stage::Graduated, 0)]
    #[case::three_soso(Stage::Three, Outcome::Soso, Stage::Three, 0)]
    #[case::three_fail(Stage::Three, Outcome::Fail, Stage::Two, 0)]
    fn policy_table(
        #[case] from: Stage,
        #[case] outcome: Outcome,
        #[case] to: Stage,
        #[case] days_ahead: u64,
    ) {
        let today = day(2024, 6, 1);
        let task = task_at(from);

        let result = evaluate(&task, outcome, today).unwrap();
        assert_eq!(result.next_stage, to);
        assert_eq!(
            result.next_last_reviewed,
            today.checked_add_days(chrono::Days::new(days_ahead)).unwrap()
        );

        // applying the mutations must land on the stage the result reports
        let applied = task.apply(&result);
        assert_eq!(applied.current_stage(), to);
        assert_eq!(applied.flags.violation(), None);
    }

    #[rstest]
    #[case::one(Stage::One)]
    #[case::two(Stage::Two)]
    #[case::three(Stage::Three)]
    fn soso_never_touches_flags(#[case] stage: Stage) {
        let task = task_at(stage);
        let result = evaluate(&task, Outcome::Soso, day(2024, 6, 1)).unwrap();
        assert!(result.stage_mutations.is_empty());
        assert_eq!(task.apply(&result).flags, task.flags);
    }

    #[test]
    fn stage_one_easy_sets_stage1_done() {
        let result = evaluate(&task_at(Stage::One), Outcome::Easy, day(2024, 6, 1)).unwrap();
        assert_eq!(
            result.stage_mutations,
            vec![StageMutation::set(StageFlag::Stage1Done)]
        );
    }

    #[test]
    fn stage_three_fail_only_clears_stage2() {
        let result = evaluate(&task_at(Stage::Three), Outcome::Fail, day(2024, 6, 1)).unwrap();
        assert_eq!(
            result.stage_mutations,
            vec![StageMutation::clear(StageFlag::Stage2Done)]
        );
    }

    #[test]
    fn stage_one_soso_cooldown_crosses_month_end() {
        let result = evaluate(&task_at(Stage::One), Outcome::Soso, day(2024, 2, 29)).unwrap();
        assert_eq!(result.next_last_reviewed, day(2024, 3, 1));
    }

    #[rstest]
    #[case::easy(Outcome::Easy)]
    #[case::soso(Outcome::Soso)]
    #[case::fail(Outcome::Fail)]
    fn graduated_task_is_invalid_state(#[case] outcome: Outcome) {
        let err = evaluate(&task_at(Stage::Graduated), outcome, day(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidState { .. }));
    }

    #[test]
    fn conflicting_flags_are_invalid_state() {
        let mut task = task_at(Stage::One);
        task.flags = StageFlags {
            stage1: false,
            stage2: true,
            stage3: false,
        };

        let err = evaluate(&task, Outcome::Easy, day(2024, 6, 1)).unwrap_err();
        match err {
            SchedulerError::InvalidState { task_id, reason } => {
                assert_eq!(task_id, task.id);
                assert!(reason.contains("stage2Done"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn graduated_without_stage1_is_invalid_state() {
        let mut task = task_at(Stage::One);
        task.flags.stage3 = true;
        assert!(evaluate(&task, Outcome::Soso, day(2024, 6, 1)).is_err());
    }

    #[test]
    fn cooldown_overflow_is_reported() {
        let err = evaluate(&task_at(Stage::One), Outcome::Soso, NaiveDate::MAX).unwrap_err();
        assert_eq!(err, SchedulerError::DateOutOfRange(NaiveDate::MAX));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let task = task_at(Stage::Two);
        let a = evaluate(&task, Outcome::Fail, day(2024, 6, 1)).unwrap();
        let b = ThreeStagePolicy.evaluate(&task, Outcome::Fail, day(2024, 6, 1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn priority_score_is_never_mutated() {
        let task = task_at(Stage::Two);
        for outcome in Outcome::ALL {
            let result = evaluate(&task, outcome, day(2024, 6, 1)).unwrap();
            assert_eq!(task.apply(&result).priority_score, task.priority_score);
        }
    }
}
