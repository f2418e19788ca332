//! 実装（開発用のストアと、外部ストアの行形式）

pub mod date_text;
pub mod inmem_store;
pub mod row;

pub use self::date_text::{format_review_date, parse_flexible_date};
pub use self::inmem_store::InMemoryTaskStore;
pub use self::row::TaskRow;
