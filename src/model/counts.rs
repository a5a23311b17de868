use super::*;
use crate::errors::{HuError, HuResult};

pub type RankRow = [usize; RANK];

// スートごとの所持枚数表
// 全スートを最大ランク数で確保し, ランク数の少ない字牌スートは後方を常に0で埋める
// 枚数は評価中に変化しないスナップショットとして扱う
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HandCounts {
    rows: [RankRow; SUIT],
}

impl HandCounts {
    pub fn new() -> Self {
        Self::default()
    }

    // スートごとの枚数配列から生成
    // 配列はSuit::ALLの並び順で, 各配列の長さはスートのランク数と一致していること
    pub fn from_rows(rows: &[Vec<usize>]) -> HuResult<Self> {
        if rows.len() != SUIT {
            return Err(HuError::SuitCount {
                expected: SUIT,
                actual: rows.len(),
            });
        }
        let mut hc = Self::default();
        for (&suit, row) in Suit::ALL.iter().zip(rows) {
            if row.len() != suit.ranks() {
                return Err(HuError::RankCount {
                    suit,
                    expected: suit.ranks(),
                    actual: row.len(),
                });
            }
            hc.rows[suit.index()][..row.len()].copy_from_slice(row);
        }
        Ok(hc)
    }

    // 牌のリストから枚数表を生成
    pub fn from_tiles(tiles: &[Tile]) -> HuResult<Self> {
        let mut hc = Self::default();
        for &t in tiles {
            hc.add(t)?;
        }
        Ok(hc)
    }

    pub fn add(&mut self, t: Tile) -> HuResult<()> {
        let Tile(suit, rank) = t;
        if rank >= suit.ranks() {
            return Err(HuError::Rank { suit, rank });
        }
        self.rows[suit.index()][rank] += 1;
        Ok(())
    }

    #[inline]
    pub fn count(&self, t: Tile) -> usize {
        self.rows[t.0.index()][t.1]
    }

    // スートの枚数配列 (論理長に切り詰めたもの)
    #[inline]
    pub fn row(&self, suit: Suit) -> &[usize] {
        &self.rows[suit.index()][..suit.ranks()]
    }

    // 判定用の作業コピー
    #[inline]
    pub fn table(&self) -> [RankRow; SUIT] {
        self.rows
    }

    // 所持枚数の合計
    pub fn total(&self) -> usize {
        self.rows.iter().flatten().sum()
    }
}

#[test]
fn test_from_rows() {
    let rows = vec![
        vec![2, 0, 0, 0],
        vec![0, 0, 3],
        vec![1, 1, 1, 0, 0, 0, 0, 0, 0],
        vec![0; 9],
        vec![0; 9],
    ];
    let hc = HandCounts::from_rows(&rows).unwrap();
    assert_eq!(hc.count(Tile(Suit::Wind, 0)), 2);
    assert_eq!(hc.count(Tile(Suit::Dragon, 2)), 3);
    assert_eq!(hc.row(Suit::Dragon), &[0, 0, 3]);
    assert_eq!(hc.total(), 8);
}

#[test]
fn test_from_rows_validation() {
    let rows = vec![vec![0; 4], vec![0; 3]];
    assert_eq!(
        HandCounts::from_rows(&rows),
        Err(HuError::SuitCount {
            expected: SUIT,
            actual: 2
        })
    );

    // 風牌のランク数は4
    let rows = vec![vec![0; 5], vec![0; 3], vec![0; 9], vec![0; 9], vec![0; 9]];
    assert_eq!(
        HandCounts::from_rows(&rows),
        Err(HuError::RankCount {
            suit: Suit::Wind,
            expected: 4,
            actual: 5
        })
    );
}

#[test]
fn test_from_tiles() {
    let tiles = tiles_from_string("m555m55").unwrap();
    let hc = HandCounts::from_tiles(&tiles).unwrap();
    assert_eq!(hc.count(Tile(Suit::Character, 4)), 5); // 枚数上限は検証しない
    assert_eq!(hc.total(), 5);

    let mut hc = HandCounts::new();
    assert_eq!(
        hc.add(Tile(Suit::Dragon, 3)),
        Err(HuError::Rank {
            suit: Suit::Dragon,
            rank: 3
        })
    );
}
