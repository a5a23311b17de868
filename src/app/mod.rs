// アプリケーションモード
mod calculator;

pub use self::calculator::CalculatorApp;
