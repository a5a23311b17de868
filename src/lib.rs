#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下の警告は無効化
#![allow(clippy::needless_range_loop)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::vec_init_then_push)]

pub mod app;
pub mod errors;
pub mod hand;
pub mod model;
pub mod util;

pub use errors::{HuError, HuResult};
pub use hand::{calc_eyes, evaluate, is_win_hand, Fan, HuChecker};
pub use model::{HandCounts, Suit, Tile};
