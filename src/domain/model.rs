use serde::{Deserialize, Serialize};
use std::fmt;

/// One character of the input word with its code point and binary rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCode {
    pub character: char,
    pub code: u32,
    pub binary: String,
}

impl fmt::Display for CharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} -> {}", self.character, self.code, self.binary)
    }
}

/// An I Ching line: broken for a 0 bit, solid for a 1 bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    Yin,
    Yang,
}

impl Line {
    pub fn from_bit(bit: char) -> Option<Self> {
        match bit {
            '0' => Some(Line::Yin),
            '1' => Some(Line::Yang),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Line::Yin => '⚋',
            Line::Yang => '⚊',
        }
    }
}
