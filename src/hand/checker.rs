use super::fan::{evaluate, Fan};
use super::win::is_win_hand;
use crate::model::HandCounts;

// 手牌スナップショットを保持して和了判定と役評価を提供
// 判定はすべて内部コピー上で行われるため保持中の手牌が書き換わることはない
#[derive(Debug, Default)]
pub struct HuChecker {
    hand: HandCounts,
}

impl HuChecker {
    pub fn new() -> Self {
        Self::default()
    }

    // 保持する手牌を置き換え
    pub fn set_hand(&mut self, hand: HandCounts) {
        self.hand = hand;
    }

    pub fn hand(&self) -> &HandCounts {
        &self.hand
    }

    // 和了形判定
    pub fn is_hu(&self) -> bool {
        is_win_hand(&self.hand)
    }

    // 成立する役の評価
    pub fn evaluate(&self) -> Vec<Fan> {
        evaluate(&self.hand)
    }
}

#[test]
fn test_checker() {
    use crate::model::tiles_from_string;

    let mut checker = HuChecker::new();
    assert!(!checker.is_hu());
    assert_eq!(checker.evaluate().len(), 1);

    let tiles = tiles_from_string("m111222333444m99").unwrap();
    checker.set_hand(HandCounts::from_tiles(&tiles).unwrap());
    assert!(checker.is_hu());
    assert_eq!(checker.evaluate().iter().map(|f| f.weight).sum::<usize>(), 30);

    // 手牌の置き換えで前の状態は破棄される
    checker.set_hand(HandCounts::new());
    assert!(!checker.is_hu());
}

#[test]
fn test_order_independence() {
    use rand::prelude::*;

    use crate::model::tiles_from_string;

    let mut tiles = tiles_from_string("m123456789p123s55").unwrap();
    let base = HandCounts::from_tiles(&tiles).unwrap();
    let hu = is_win_hand(&base);
    let fans = evaluate(&base);
    assert!(hu);

    // 牌の並び順を変えても枚数表が同じなら結果は変わらない
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(1);
    for _ in 0..10 {
        tiles.shuffle(&mut rng);
        let mut checker = HuChecker::new();
        checker.set_hand(HandCounts::from_tiles(&tiles).unwrap());
        assert_eq!(hu, checker.is_hu());
        assert_eq!(fans, checker.evaluate());
    }
}
