// 手牌の和了判定と役評価を行うモジュール
mod checker;
mod fan;
mod win;

pub use self::{
    checker::HuChecker,
    fan::{evaluate, Fan, FanDefine, FAN_DEFINES, FAN_FALLBACK},
    win::{calc_eyes, is_melds, is_win_hand},
};
