//! Clock port - 「今日」の抽象化
//!
//! policy は `today` を引数で受け取るだけで時計を読みません。
//! 「学習者にとっての今日」を決めるのはこの port の役目です。
//!
//! # 実装
//! - **SystemClock**: 固定 UTC オフセットで現在日付を返す（本番用、既定は UTC+9）
//! - **FixedClock**: 常に同じ日付を返す（テスト・CLI の `--today` 用）

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// Clock は学習者のタイムゾーンでの現在日付を提供
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock pinned to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// `None` when the offset is outside ±23 hours.
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(hours.checked_mul(3600)?)?;
        Some(Self { offset })
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        // UTC+9 の固定オフセット
        Self {
            offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600).unwrap_or(Utc.fix()),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Always returns the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
