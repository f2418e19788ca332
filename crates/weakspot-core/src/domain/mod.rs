//! Domain model (ids, stages, outcomes, task snapshots, errors).

pub mod errors;
pub mod evaluation;
pub mod ids;
pub mod outcome;
pub mod stage;
pub mod task;

pub use errors::SchedulerError;
pub use evaluation::{EvaluationResult, StageMutation};
pub use ids::TaskId;
pub use outcome::Outcome;
pub use stage::{Stage, StageFlag, StageFlags};
pub use task::TaskSnapshot;
