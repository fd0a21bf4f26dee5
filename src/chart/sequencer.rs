//! Circular star propagation along the fixed flight path

use serde::{Deserialize, Serialize};

use crate::chart::palace::FLIGHT_PATH;
use crate::core::types::Star;

/// A full assignment of the stars 1-9 to the nine grid slots. Always a
/// cyclic permutation: one flight seeds the center and steps around the
/// flight path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart([Star; 9]);

impl Chart {
    /// Star at a grid slot (0-8, row-major display order).
    pub fn get(&self, slot: usize) -> Star {
        self.0[slot]
    }

    /// Raw values in slot order, mainly for tests and rendering.
    pub fn values(&self) -> [u8; 9] {
        self.0.map(Star::value)
    }
}

/// Fly a seed star around the grid.
///
/// The seed lands in the center, then each following slot of the flight path
/// takes the next star: ascending with 9 wrapping to 1 when `forward`,
/// descending with 1 wrapping to 9 otherwise.
pub fn fly(seed: Star, forward: bool) -> Chart {
    let mut slots = [seed; 9];
    let mut current = seed;
    for &slot in FLIGHT_PATH.iter() {
        slots[slot] = current;
        current = if forward { current.succ() } else { current.pred() };
    }
    Chart(slots)
}
