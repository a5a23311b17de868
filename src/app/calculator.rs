use std::fmt::Write;
use std::fs::File;
use std::io::{self, BufRead};

use crate::hand::{calc_eyes, evaluate, is_win_hand};
use crate::model::*;
use crate::util::misc::*;

use crate::{debug, error};

// 式の形式: 手牌[/検証値]
//   手牌: "m111222333444m99" のようなスート文字と数字の並び
//   検証値: "和了(0|1),翻数合計"
#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
    json: bool,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
            json: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-j" => self.json = true,
                "-f" => file_path = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if (file_path.is_empty() && exp.is_empty()) || (!file_path.is_empty() && !exp.is_empty()) {
            print_usage();
            return;
        }

        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
                return;
            }
        }

        if !file_path.is_empty() {
            if let Err(e) = self.run_from_file(&file_path) {
                error!("{}", e);
            }
        }
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res {
        let mut calculator = Calculator::new(self.detail, self.json);
        calculator.parse(exp)?;
        calculator.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

#[derive(Debug)]
struct Calculator {
    detail: bool,
    json: bool,
    hand: HandCounts,
    // 検証値
    verify: bool,
    hu: bool,
    weight: usize,
}

impl Calculator {
    fn new(detail: bool, json: bool) -> Self {
        Self {
            detail,
            json,
            hand: HandCounts::new(),
            verify: false,
            hu: false,
            weight: 0,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').collect::<Vec<&str>>()[0]; // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        if !exps.is_empty() {
            self.parse_hand(exps[0])?;
        }
        if exps.len() > 1 {
            self.parse_verify(exps[1])?;
        }

        if self.detail {
            debug!("{:?}", self);
        }

        Ok(())
    }

    fn parse_hand(&mut self, input: &str) -> Res {
        let tiles = tiles_from_string(input)?;
        self.hand = HandCounts::from_tiles(&tiles)?;
        Ok(())
    }

    fn parse_verify(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        if exps.len() != 2 {
            Err(format!("invalid verify info: {}", input))?;
        }
        self.hu = exps[0].parse::<usize>()? == 1;
        self.weight = exps[1].parse::<usize>()?;
        self.verify = true;
        Ok(())
    }

    fn run(&self) -> Verify {
        let hu = is_win_hand(&self.hand);
        let fans = evaluate(&self.hand);
        let weight: usize = fans.iter().map(|f| f.weight).sum();

        if self.json {
            let out = serde_json::json!({
                "hu": hu,
                "fans": fans,
                "weight": weight,
            });
            println!("{}", out);
        } else {
            let mut s = "".to_string();
            for f in &fans {
                let _ = write!(s, "{}({}), ", f.name, f.weight);
            }
            println!("fans: {}", s);
            println!("hu: {}, weight: {}", hu, weight);
            if hu {
                println!("eyes: {}", vec_to_string(&calc_eyes(&self.hand)));
            }
        }

        let verify = if self.verify {
            if hu == self.hu && weight == self.weight {
                Verify::Ok
            } else {
                Verify::Error
            }
        } else {
            Verify::Skip
        };
        println!("verify: {:?}", verify);
        verify
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run C EXPRESSION [-d] [-j]
    $ cargo run C -f FILE [-d] [-j]
Options
    -d: print debug info
    -j: print result in json format
    -f: read expressions from file instead of a commandline expression
"
    );
}

#[test]
fn test_calculator() {
    let file = File::open("tests/hu_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false, false);
            calculator.parse(&e).unwrap();
            assert_ne!(Verify::Error, calculator.run());
        }
    }
}
