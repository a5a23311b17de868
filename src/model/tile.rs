use std::fmt;

use serde::{de, ser};

use super::*;
use crate::errors::{HuError, HuResult};

// [Suit]
// 走査はALLの並び順で固定 (最初に見つかった雀頭を採用する判定に影響)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Wind,      // 風牌 (4種)
    Dragon,    // 三元牌 (3種)
    Character, // 萬子 (9種)
    Dot,       // 筒子 (9種)
    Bamboo,    // 索子 (9種)
}

use Suit::*;

impl Suit {
    pub const ALL: [Suit; SUIT] = [Wind, Dragon, Character, Dot, Bamboo];

    // スート内のランク数
    #[inline]
    pub fn ranks(self) -> usize {
        match self {
            Wind => 4,
            Dragon => 3,
            _ => RANK,
        }
    }

    // ALL内の位置
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    // 字牌スート
    #[inline]
    pub fn is_honor(self) -> bool {
        matches!(self, Wind | Dragon)
    }

    // 数牌スート
    #[inline]
    pub fn is_numeric(self) -> bool {
        !self.is_honor()
    }

    pub fn from_char(c: char) -> HuResult<Self> {
        Ok(match c {
            'f' => Wind,
            'j' => Dragon,
            'm' => Character,
            'p' => Dot,
            's' => Bamboo,
            _ => {
                return Err(HuError::Parse {
                    input: c.to_string(),
                    message: "unknown suit".to_string(),
                })
            }
        })
    }

    pub fn to_char(self) -> char {
        ['f', 'j', 'm', 'p', 's'][self.index()]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// [Tile]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tile(pub Suit, pub Rank); // (suit, rank index)

impl Tile {
    pub fn new(suit: Suit, rank: Rank) -> HuResult<Self> {
        if rank >= suit.ranks() {
            return Err(HuError::Rank { suit, rank });
        }
        Ok(Self(suit, rank))
    }

    // "m1"のような表記から生成 (数字は1始まり)
    pub fn from_symbol(s: &str) -> HuResult<Self> {
        let parse_err = |message: &str| HuError::Parse {
            input: s.to_string(),
            message: message.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(parse_err("tile symbol len is not 2"));
        }
        let suit = Suit::from_char(chars[0])?;
        let n = chars[1]
            .to_digit(10)
            .ok_or_else(|| parse_err("rank is not a digit"))? as usize;
        if n == 0 {
            return Err(parse_err("rank 0 is not allowed"));
        }
        Tile::new(suit, n - 1)
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.0.is_numeric() && (self.1 == 0 || self.1 == self.0.ranks() - 1)
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0.is_honor()
    }

    // 中張牌
    #[inline]
    pub fn is_simple(&self) -> bool {
        self.0.is_numeric() && !self.is_terminal()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1 + 1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// "m123f11"のような表記から牌のリストを生成
pub fn tiles_from_string(exp: &str) -> HuResult<Vec<Tile>> {
    let mut res = vec![];
    let mut suit = None;
    for c in exp.chars() {
        if let Some(n) = c.to_digit(10) {
            let suit = suit.ok_or_else(|| HuError::Parse {
                input: exp.to_string(),
                message: "suit not specified".to_string(),
            })?;
            if n == 0 {
                return Err(HuError::Parse {
                    input: exp.to_string(),
                    message: "rank 0 is not allowed".to_string(),
                });
            }
            res.push(Tile::new(suit, n as usize - 1)?);
        } else {
            suit = Some(Suit::from_char(c)?);
        }
    }
    Ok(res)
}

#[test]
fn test_tile_symbol() {
    assert_eq!(Tile::from_symbol("m1").unwrap(), Tile(Character, 0));
    assert_eq!(Tile::from_symbol("f4").unwrap(), Tile(Wind, 3));
    assert_eq!(Tile(Bamboo, 8).to_string(), "s9");
    assert!(Tile::from_symbol("f5").is_err()); // 風牌は4種まで
    assert!(Tile::from_symbol("j4").is_err());
    assert!(Tile::from_symbol("x1").is_err());
    assert!(Tile::from_symbol("m0").is_err());
    assert!(Tile::from_symbol("m10").is_err());
}

#[test]
fn test_tile_predicates() {
    assert!(Tile(Character, 0).is_terminal());
    assert!(Tile(Character, 8).is_terminal());
    assert!(Tile(Character, 4).is_simple());
    assert!(!Tile(Wind, 0).is_terminal()); // 字牌は幺九牌扱いしない
    assert!(Tile(Dragon, 2).is_honor());
    assert!(!Tile(Dot, 1).is_honor());
}

#[test]
fn test_tiles_from_string() {
    let tiles = tiles_from_string("m19p5f12j3").unwrap();
    assert_eq!(
        tiles,
        vec![
            Tile(Character, 0),
            Tile(Character, 8),
            Tile(Dot, 4),
            Tile(Wind, 0),
            Tile(Wind, 1),
            Tile(Dragon, 2),
        ]
    );
    assert!(tiles_from_string("123").is_err()); // スート未指定
    assert!(tiles_from_string("m0").is_err());
    assert!(tiles_from_string("q1").is_err());
}

#[test]
fn test_tile_serde() {
    let t = Tile(Dot, 6);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "\"p7\"");
    let t2: Tile = serde_json::from_str(&json).unwrap();
    assert_eq!(t, t2);
}
