//! IdGenerator port - TaskId 生成の抽象化
//!
//! テスト容易性のために trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: 現在時刻 + 乱数の ULID（本番用）
//! - **SequentialIdGenerator**: 1, 2, 3, ... と採番（テスト用、決定的）

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use ulid::Ulid;

use crate::domain::TaskId;

pub trait IdGenerator: Send + Sync {
    fn generate_task_id(&self) -> TaskId;
}

/// ULID の先頭 48bit は生成時刻なので、登録順 = ID 順になる
#[derive(Debug, Default)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn generate_task_id(&self) -> TaskId {
        let timestamp_ms = Utc::now().timestamp_millis().max(0) as u64;
        TaskId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}

#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_task_id(&self) -> TaskId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        TaskId::from_raw(u128::from(n))
    }
}
