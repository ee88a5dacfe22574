//! Cosmetic appearance values the lobby can assign to players.

use serde::Deserialize;
use std::fmt;

/// Player body color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
    Red,
    Blue,
    Green,
    Pink,
    Orange,
    Yellow,
    Black,
    White,
    Purple,
    Brown,
    Cyan,
    Lime,
}

impl ColorType {
    pub fn name(self) -> &'static str {
        match self {
            ColorType::Red => "Red",
            ColorType::Blue => "Blue",
            ColorType::Green => "Green",
            ColorType::Pink => "Pink",
            ColorType::Orange => "Orange",
            ColorType::Yellow => "Yellow",
            ColorType::Black => "Black",
            ColorType::White => "White",
            ColorType::Purple => "Purple",
            ColorType::Brown => "Brown",
            ColorType::Cyan => "Cyan",
            ColorType::Lime => "Lime",
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
