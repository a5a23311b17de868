// 牌と手牌のデータモデル
mod counts;
mod define;
mod tile;

pub use self::{counts::*, define::*, tile::*};
