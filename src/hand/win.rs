use crate::model::*;

// [完成形判定 (面子, 雀頭)]

// 1スートの枚数配列が刻子と順子のみで完全に分解できるかの判定
// 各ランクで刻子を先に抜き取り, 続けて同じランクから始まる順子を試す貪欲法
// バックトラックは行わない
// スート種別は区別しないため字牌スートでも連続ランクは順子として抜き取られる
pub fn is_melds(row: &RankRow) -> bool {
    let mut row = *row;
    let mut i = 0;
    while i < RANK {
        if row[i] >= 3 {
            row[i] -= 3;
            continue;
        }
        if i + 2 < RANK && row[i] > 0 && row[i + 1] > 0 && row[i + 2] > 0 {
            row[i] -= 1;
            row[i + 1] -= 1;
            row[i + 2] -= 1;
            continue;
        }
        i += 1;
    }
    row.iter().all(|&n| n == 0)
}

// [和了形判定]

// 2枚以上あるランクを雀頭候補として順に外し, 残り全スートが面子のみに
// 分解できた時点で成立とする (最初に見つかった候補で打ち切り)
pub fn is_win_hand(hand: &HandCounts) -> bool {
    let mut tbl = hand.table();
    for suit in Suit::ALL {
        let si = suit.index();
        for ni in 0..suit.ranks() {
            if tbl[si][ni] >= 2 {
                tbl[si][ni] -= 2;
                let ok = tbl.iter().all(is_melds);
                tbl[si][ni] += 2;
                if ok {
                    return true;
                }
            }
        }
    }
    false
}

// 雀頭として成立する牌のリストを返却
// 和了形でない場合は空のリストを返却
pub fn calc_eyes(hand: &HandCounts) -> Vec<Tile> {
    let mut tbl = hand.table();
    let mut res = vec![];
    for suit in Suit::ALL {
        let si = suit.index();
        for ni in 0..suit.ranks() {
            if tbl[si][ni] >= 2 {
                tbl[si][ni] -= 2;
                if tbl.iter().all(is_melds) {
                    res.push(Tile(suit, ni));
                }
                tbl[si][ni] += 2;
            }
        }
    }
    res
}

#[cfg(test)]
fn hand(exp: &str) -> HandCounts {
    HandCounts::from_tiles(&tiles_from_string(exp).unwrap()).unwrap()
}

#[test]
fn test_is_melds() {
    assert!(is_melds(&[0; RANK])); // 空
    assert!(is_melds(&[3, 0, 0, 0, 0, 0, 0, 0, 0])); // 刻子
    assert!(is_melds(&[1, 1, 1, 0, 0, 0, 0, 0, 0])); // 順子
    assert!(is_melds(&[3, 1, 1, 1, 0, 0, 0, 0, 3]));
    assert!(is_melds(&[2, 2, 2, 0, 0, 0, 0, 0, 0])); // 順子x2
    assert!(is_melds(&[1, 1, 2, 1, 1, 0, 0, 0, 0])); // 123 + 345

    assert!(!is_melds(&[2, 0, 0, 0, 0, 0, 0, 0, 0])); // 対子のみ
    assert!(!is_melds(&[0, 2, 1, 0, 1, 0, 0, 0, 0]));
    assert!(!is_melds(&[1, 1, 0, 1, 1, 1, 0, 0, 0]));
    assert!(!is_melds(&[0, 0, 0, 0, 0, 0, 0, 1, 2])); // 右端は順子を作れない
}

#[test]
fn test_is_melds_greedy() {
    // 刻子を先に抜くため4枚は刻子+順子の頭として処理される
    assert!(is_melds(&[4, 1, 1, 0, 0, 0, 0, 0, 0]));
    assert!(is_melds(&[4, 4, 4, 0, 0, 0, 0, 0, 0]));
}

#[test]
fn test_is_win_hand() {
    // 刻子x4 + 幺九牌の雀頭
    assert!(is_win_hand(&hand("m111222333444m99")));
    // 順子x4 + 雀頭 (3スート)
    assert!(is_win_hand(&hand("m123456789p123s55")));
    // 字牌の刻子と雀頭を含む
    assert!(is_win_hand(&hand("m123456p789s99j111")));
    // 風牌の雀頭 + 数牌3スートの刻子
    assert!(is_win_hand(&hand("m222333p555s444f11")));

    // 分解不能
    assert!(!is_win_hand(&hand("m2235")));
    // 空の手牌
    assert!(!is_win_hand(&HandCounts::new()));
    // 13枚 (聴牌形)
    assert!(!is_win_hand(&hand("m1112345678999")));
    // 雀頭候補が複数あっても分解できない
    assert!(!is_win_hand(&hand("m1199p456s789j1123")));
}

#[test]
fn test_calc_eyes() {
    assert_eq!(
        calc_eyes(&hand("m111222333444m99")),
        vec![Tile(Suit::Character, 8)]
    );
    // 雀頭候補が複数成立する形 (m22を外すと111 234 345 345が残る)
    assert_eq!(
        calc_eyes(&hand("m11122233344455")),
        vec![Tile(Suit::Character, 1), Tile(Suit::Character, 4)]
    );
    assert_eq!(calc_eyes(&hand("m2235")), vec![]);
}
