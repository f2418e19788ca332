//! weakspot-core
//!
//! 間違えた算数の問題を、3 段階の間隔反復で出し直すためのスケジューラ。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, stage, outcome, task, evaluation, errors）
//! - **policy**: 純粋なスケジューリング規則（evaluate, select_queue）
//! - **ports**: 抽象化レイヤー（TaskStore, Clock, IdGenerator）
//! - **impls**: 実装（InMemoryTaskStore, 外部ストアの行形式と日付テキスト）
//! - **app**: アプリケーション層（ReviewService, ProgressSummary）
//! - **config**: TOML 設定

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod policy;
pub mod ports;

pub use app::{ProgressSummary, ReviewService, ServiceError, Submission};
pub use config::{ConfigError, WeakspotConfig};
pub use domain::{
    EvaluationResult, Outcome, SchedulerError, Stage, StageFlag, StageFlags, StageMutation, TaskId,
    TaskSnapshot,
};
pub use policy::{evaluate, select_queue};
