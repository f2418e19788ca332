//! Ports - 外部システムへのインターフェース
//!
//! 各 trait は外部ストア・時計・ID 採番を抽象化し、実装の詳細を隠蔽します。

pub mod clock;
pub mod id_generator;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, SequentialIdGenerator, UlidGenerator};
pub use self::task_store::{StoreError, TaskStore, Versioned};
