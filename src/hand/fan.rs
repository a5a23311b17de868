use serde::Serialize;

use crate::model::*;

// [役定義]
pub struct FanDefine {
    pub name: &'static str,             // 役名
    pub weight: usize,                  // 翻数
    pub func: fn(&HandCounts) -> bool,  // 判定関数
}

// 判定は表の並び順で行う
pub const FAN_DEFINES: &[FanDefine] = &[
    FanDefine { name: "清一色", weight: 24, func: is_pure_suit },
    FanDefine { name: "混一色", weight: 6, func: is_mixed_suit },
    FanDefine { name: "碰碰胡", weight: 6, func: is_all_triplets },
    FanDefine { name: "断幺九", weight: 2, func: is_all_simples },
    FanDefine { name: "平和", weight: 2, func: is_all_runs },
];

// どの役も成立しない場合の最低役
pub const FAN_FALLBACK: FanDefine = FanDefine {
    name: "鸡胡",
    weight: 1,
    func: always,
};

fn always(_: &HandCounts) -> bool {
    true
}

// 成立した役
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fan {
    pub name: String,
    pub weight: usize,
}

impl Fan {
    fn from_define(d: &FanDefine) -> Self {
        Self {
            name: d.name.to_string(),
            weight: d.weight,
        }
    }
}

// 成立する役をすべて収集 (各判定は和了判定から独立)
// 手牌が14枚でない場合と何も成立しない場合は最低役のみを返却
pub fn evaluate(hand: &HandCounts) -> Vec<Fan> {
    let mut res = vec![];
    if hand.total() == HAND {
        for d in FAN_DEFINES {
            if (d.func)(hand) {
                res.push(Fan::from_define(d));
            }
        }
    }
    if res.is_empty() {
        res.push(Fan::from_define(&FAN_FALLBACK));
    }
    res
}

// [役判定]

// 数牌のうち牌のあるスートの数
fn count_numeric_suits(hand: &HandCounts) -> usize {
    Suit::ALL
        .iter()
        .filter(|s| s.is_numeric() && hand.row(**s).iter().sum::<usize>() > 0)
        .count()
}

// 字牌の所持枚数
fn count_honors(hand: &HandCounts) -> usize {
    Suit::ALL
        .iter()
        .filter(|s| s.is_honor())
        .map(|&s| hand.row(s).iter().sum::<usize>())
        .sum()
}

// 清一色: 数牌1スートのみで構成
fn is_pure_suit(hand: &HandCounts) -> bool {
    count_numeric_suits(hand) == 1 && count_honors(hand) == 0
}

// 混一色: 数牌1スートと字牌で構成
fn is_mixed_suit(hand: &HandCounts) -> bool {
    count_numeric_suits(hand) == 1 && count_honors(hand) > 0
}

// 碰碰胡: 雀頭1組を除いて全ランクの枚数が3の倍数
// 雀頭はスート走査順で最初に枚数を3で割って2余るランクから取り, 2組目は取らない
fn is_all_triplets(hand: &HandCounts) -> bool {
    let mut tbl = hand.table();
    let mut eye = false;
    for suit in Suit::ALL {
        for ni in 0..suit.ranks() {
            if !eye && tbl[suit.index()][ni] % 3 == 2 {
                tbl[suit.index()][ni] -= 2;
                eye = true;
            }
        }
    }
    eye && tbl.iter().flatten().all(|&n| n % 3 == 0)
}

// 断幺九: 1,9牌と字牌を含まない
fn is_all_simples(hand: &HandCounts) -> bool {
    if count_honors(hand) != 0 {
        return false;
    }
    Suit::ALL.iter().filter(|s| s.is_numeric()).all(|&s| {
        let row = hand.row(s);
        row[0] == 0 && row[s.ranks() - 1] == 0
    })
}

// 平和: 雀頭1組と順子4組で構成
// 雀頭はスート走査順で最初に2枚以上あるランクから取り, 残りは順子のみを貪欲に数える
// 雀頭の選び直しは行わない
fn is_all_runs(hand: &HandCounts) -> bool {
    let mut tbl = hand.table();
    let mut eye = false;
    'outer: for suit in Suit::ALL {
        for ni in 0..suit.ranks() {
            if tbl[suit.index()][ni] >= 2 {
                tbl[suit.index()][ni] -= 2;
                eye = true;
                break 'outer;
            }
        }
    }
    eye && tbl.iter().map(count_runs).sum::<usize>() == (HAND - 2) / 3
}

// 順子のみを左から貪欲に抜き取って組数を返却 (刻子は数えない)
fn count_runs(row: &RankRow) -> usize {
    let mut row = *row;
    let mut n = 0;
    let mut i = 0;
    while i < RANK {
        if i + 2 < RANK && row[i] > 0 && row[i + 1] > 0 && row[i + 2] > 0 {
            row[i] -= 1;
            row[i + 1] -= 1;
            row[i + 2] -= 1;
            n += 1;
            continue;
        }
        i += 1;
    }
    n
}

#[cfg(test)]
fn hand(exp: &str) -> HandCounts {
    HandCounts::from_tiles(&tiles_from_string(exp).unwrap()).unwrap()
}

#[cfg(test)]
fn names(hand: &HandCounts) -> Vec<String> {
    evaluate(hand).iter().map(|f| f.name.clone()).collect()
}

#[test]
fn test_fan_pure_suit() {
    // 刻子x4 + 雀頭が1スートに収まる形
    let h = hand("m111222333444m99");
    assert_eq!(names(&h), ["清一色", "碰碰胡"]);
    assert_eq!(
        evaluate(&h).iter().map(|f| f.weight).sum::<usize>(),
        24 + 6
    );
}

#[test]
fn test_fan_mixed_suit() {
    assert_eq!(names(&hand("m111222333444f11")), ["混一色", "碰碰胡"]);
    // 数牌が2スートあると混一色にならない
    assert_eq!(names(&hand("m111222333p444f11")), ["碰碰胡"]);
}

#[test]
fn test_fan_all_triplets() {
    // 数牌3スート + 風牌の雀頭
    assert_eq!(names(&hand("m222333p555s444f11")), ["碰碰胡"]);
    // 雀頭候補が2組あると不成立
    assert_eq!(names(&hand("m1199p456s789j1123")), ["鸡胡"]);
}

#[test]
fn test_fan_all_simples() {
    assert_eq!(names(&hand("m222333444555s66")), ["碰碰胡", "断幺九"]);
    // 9牌があると不成立
    assert_eq!(names(&hand("m111222333444m99")), ["清一色", "碰碰胡"]);
}

#[test]
fn test_fan_all_runs() {
    // 順子x4 + 雀頭 (雀頭以外に2枚以上のランクがない形)
    assert_eq!(names(&hand("m123456789p123s55")), ["平和"]);
    // 走査順で最初の2枚が本来の雀頭と異なると順子が崩れて不成立
    assert_eq!(names(&hand("m123345567789m99")), ["清一色"]);
}

#[test]
fn test_fan_fallback() {
    // 和了形でも構成役がなければ最低役のみ
    assert_eq!(names(&hand("m123456p789s99j111")), ["鸡胡"]);
    // 14枚未満は常に最低役のみ
    assert_eq!(names(&hand("m2235")), ["鸡胡"]);
    assert_eq!(names(&HandCounts::new()), ["鸡胡"]);
}

#[test]
fn test_fan_fallback_exclusive() {
    let exps = [
        "m111222333444m99",
        "m123456789p123s55",
        "m111222333444f11",
        "m222333444555s66",
        "m123456p789s99j111",
        "m2235",
        "",
    ];
    for exp in exps {
        let fans = names(&hand(exp));
        if fans.contains(&"鸡胡".to_string()) {
            assert_eq!(fans.len(), 1, "fallback must be exclusive: {}", exp);
        }
        assert!(!fans.is_empty());
    }
}
