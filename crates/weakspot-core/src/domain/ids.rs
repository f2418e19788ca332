//! Domain identifiers (strongly-typed IDs).
//!
//! TaskId は ULID ベースの ID です。
//! - **時刻でソート可能**: 登録順に並ぶので、selector の tie-break キーに使える
//! - **分散生成可能**: 調整なしで生成できる

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Display / parse で使うプレフィックス
const PREFIX: &str = "task-";

/// Identifier of a practice problem (one row in the external store).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Ulid);

impl TaskId {
    /// ULID から TaskId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// テスト・fixture 用: u128 から TaskId を作成
    pub fn from_raw(value: u128) -> Self {
        Self(Ulid::from(value))
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for TaskId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.0)
    }
}

/// Accepts both `task-<ulid>` and a bare ULID.
impl FromStr for TaskId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(PREFIX).unwrap_or(s);
        Ulid::from_string(raw).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix_and_parses_back() {
        let id = TaskId::from_ulid(Ulid::new());
        let text = id.to_string();
        assert!(text.starts_with("task-"));

        let back: TaskId = text.parse().unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn bare_ulid_is_accepted() {
        let ulid = Ulid::new();
        let id: TaskId = ulid.to_string().parse().unwrap();
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("task-not-a-ulid".parse::<TaskId>().is_err());
    }

    #[test]
    fn ids_sort_by_raw_value() {
        assert!(TaskId::from_raw(1) < TaskId::from_raw(2));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TaskId::from_raw(42);
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, format!("\"{}\"", id.as_ulid()));

        let back: TaskId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, id);
    }
}
