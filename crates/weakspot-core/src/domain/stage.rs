//! Stage - 習熟段階
//!
//! 外部ストアは段階を 3 つの boolean 列（stage1Done / stage2Done / stage3Done）で
//! 持っています。内部では `Stage` という単一の enum で扱い、境界で相互変換します。
//!
//! # 状態遷移
//! - One -> Two -> Three -> Graduated（EASY で 1 段階進む）
//! - Three -> Two, Two -> One（FAIL で 1 段階戻る、One が下限）
//! - Graduated は終端

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mastery checkpoint of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// First attempt.
    One,
    /// Retention check.
    Two,
    /// Final check.
    Three,
    /// Terminal: permanently out of scheduling.
    Graduated,
}

impl Stage {
    /// Numeric label (1, 2, 3), `None` once graduated.
    pub fn number(&self) -> Option<u8> {
        match self {
            Stage::One => Some(1),
            Stage::Two => Some(2),
            Stage::Three => Some(3),
            Stage::Graduated => None,
        }
    }

    /// Canonical flag encoding of this stage.
    pub fn to_flags(self) -> StageFlags {
        match self {
            Stage::One => StageFlags::default(),
            Stage::Two => StageFlags {
                stage1: true,
                ..StageFlags::default()
            },
            Stage::Three => StageFlags {
                stage1: true,
                stage2: true,
                stage3: false,
            },
            Stage::Graduated => StageFlags {
                stage1: true,
                stage2: true,
                stage3: true,
            },
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "stage {n}"),
            None => f.write_str("graduated"),
        }
    }
}

/// One of the three persisted completion columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StageFlag {
    Stage1Done,
    Stage2Done,
    Stage3Done,
}

/// The three completion flags exactly as the external store keeps them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageFlags {
    pub stage1: bool,
    pub stage2: bool,
    pub stage3: bool,
}

impl StageFlags {
    /// Derives the stage by checking flags from highest to lowest.
    ///
    /// Lenient: conflicting combinations still map to a stage. Use
    /// [`StageFlags::violation`] to detect them.
    pub fn stage(&self) -> Stage {
        if self.stage3 {
            Stage::Graduated
        } else if self.stage2 {
            Stage::Three
        } else if self.stage1 {
            Stage::Two
        } else {
            Stage::One
        }
    }

    /// Describes a broken `stageN+1 => stageN` invariant, if any.
    pub fn violation(&self) -> Option<&'static str> {
        if self.stage3 && !self.stage2 {
            Some("stage3Done is set but stage2Done is not")
        } else if self.stage2 && !self.stage1 {
            Some("stage2Done is set but stage1Done is not")
        } else {
            None
        }
    }

    pub fn get(&self, flag: StageFlag) -> bool {
        match flag {
            StageFlag::Stage1Done => self.stage1,
            StageFlag::Stage2Done => self.stage2,
            StageFlag::Stage3Done => self.stage3,
        }
    }

    pub fn set(&mut self, flag: StageFlag, value: bool) {
        match flag {
            StageFlag::Stage1Done => self.stage1 = value,
            StageFlag::Stage2Done => self.stage2 = value,
            StageFlag::Stage3Done => self.stage3 = value,
        }
    }
}

impl From<Stage> for StageFlags {
    fn from(stage: Stage) -> Self {
        stage.to_flags()
    }
}
