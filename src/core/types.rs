//! Core value types used throughout the chart engine

use serde::{Deserialize, Serialize};

use crate::core::error::{ChartError, Result};

/// A flying star value, restricted to 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Star(u8);

impl Star {
    /// Construct a star from a raw value.
    ///
    /// Panics when `n` is outside 1-9: an out-of-range star is a caller
    /// contract violation, not a recoverable runtime condition.
    pub const fn new(n: u8) -> Self {
        assert!(n >= 1 && n <= 9, "star value out of range 1-9");
        Self(n)
    }

    /// Checked constructor for values arriving from the outside world.
    pub fn try_new(n: u8) -> Result<Self> {
        if (1..=9).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ChartError::StarOutOfRange(n))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next star in the forward cycle (9 wraps to 1).
    pub const fn succ(self) -> Self {
        if self.0 >= 9 { Self(1) } else { Self(self.0 + 1) }
    }

    /// Previous star in the backward cycle (1 wraps to 9).
    pub const fn pred(self) -> Self {
        if self.0 <= 1 { Self(9) } else { Self(self.0 - 1) }
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three-fold division within a trigram's arc of the compass ring
/// (地元 / 天元 / 人元).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yuan {
    Earth,
    Heaven,
    Human,
}

impl Yuan {
    pub const ALL: [Yuan; 3] = [Yuan::Earth, Yuan::Heaven, Yuan::Human];

    /// Position within a trigram's three mountains (0 = Earth, 2 = Human).
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Yin/yang parity deciding the flight direction for a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Yang stars fly forward, yin stars fly backward.
    pub const fn is_forward(self) -> bool {
        matches!(self, Polarity::Yang)
    }
}
