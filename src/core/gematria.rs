use crate::core::binary::to_padded_binary;
use serde::{Deserialize, Serialize};

/// Numeric value of the Hebrew letter Chet.
pub const CHET: u32 = 8;
/// Numeric value of the Hebrew letter Yod.
pub const YOD: u32 = 10;

pub const LIFE_FORCE_WIDTH: usize = 6;

/// The "life force" of the word Chai: Chet plus Yod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeForce {
    chet: u32,
    yod: u32,
}

impl LifeForce {
    pub const fn chai() -> Self {
        Self {
            chet: CHET,
            yod: YOD,
        }
    }

    pub const fn value(&self) -> u32 {
        self.chet + self.yod
    }

    pub fn binary(&self) -> String {
        to_padded_binary(self.value(), LIFE_FORCE_WIDTH)
    }
}

impl Default for LifeForce {
    fn default() -> Self {
        Self::chai()
    }
}
