// 型エイリアス
pub type Rank = usize; // スート内の牌位置 (0始まり)

// Number
pub const SUIT: usize = 5; // スートの数
pub const RANK: usize = 9; // ランク数の最大値 (数牌スート)
pub const HAND: usize = 14; // 完成形の手牌枚数
