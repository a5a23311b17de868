use std::fmt;

use crate::model::{Rank, Suit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuError {
    /// 牌文字列・手牌文字列のパースエラー
    Parse { input: String, message: String },
    /// 枚数配列の本数がスート数と不一致
    SuitCount { expected: usize, actual: usize },
    /// 枚数配列の長さがスートのランク数と不一致
    RankCount {
        suit: Suit,
        expected: usize,
        actual: usize,
    },
    /// スートの範囲外のランク
    Rank { suit: Suit, rank: Rank },
}

impl fmt::Display for HuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuError::Parse { input, message } => {
                write!(f, "parse error on '{}': {}", input, message)
            }
            HuError::SuitCount { expected, actual } => {
                write!(f, "expected {} count rows, got {}", expected, actual)
            }
            HuError::RankCount {
                suit,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "count row for suit '{}' must have {} ranks, got {}",
                    suit, expected, actual
                )
            }
            HuError::Rank { suit, rank } => {
                write!(f, "rank {} out of range for suit '{}'", rank, suit)
            }
        }
    }
}

impl std::error::Error for HuError {}

pub type HuResult<T> = Result<T, HuError>;
