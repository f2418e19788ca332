//! Scheduling policy: outcome evaluation and queue selection.
//!
//! Both halves are pure and synchronous. They never read a clock or a store;
//! callers pass `today` and the task snapshots in.

mod evaluator;
mod selector;

pub use evaluator::{ReviewPolicy, ThreeStagePolicy, evaluate};
pub use selector::select_queue;
