// 共通ユーティリティ
mod log;
pub mod misc;
