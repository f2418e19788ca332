//! App - アプリケーション層
//!
//! ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **ReviewService**: 登録・今日のキュー・復習結果の提出
//! - **ProgressSummary**: 段階ごとの件数と克服率

pub mod review_service;
pub mod status;

pub use self::review_service::{ReviewService, ServiceError, Submission};
pub use self::status::ProgressSummary;
