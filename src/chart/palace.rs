//! The nine palaces of the Luoshu grid and the fixed flight path

use crate::core::types::Star;

/// One cell of the 3x3 display grid.
#[derive(Debug, Clone, Copy)]
pub struct Palace {
    /// Chinese label shown in the cell.
    pub label: &'static str,
    /// Original Luoshu number of the cell; used to settle the polarity of a
    /// 5 entering the center from this palace.
    pub base: Star,
}

/// The nine palaces in row-major display order.
pub const PALACES: [Palace; 9] = [
    Palace { label: "巽", base: Star::new(4) },
    Palace { label: "離", base: Star::new(9) },
    Palace { label: "坤", base: Star::new(2) },
    Palace { label: "震", base: Star::new(3) },
    Palace { label: "中宮", base: Star::new(5) },
    Palace { label: "兌", base: Star::new(7) },
    Palace { label: "艮", base: Star::new(8) },
    Palace { label: "坎", base: Star::new(1) },
    Palace { label: "乾", base: Star::new(6) },
];

/// Grid slot of the center palace.
pub const CENTER_SLOT: usize = 4;

/// Order in which every flight visits the grid slots: center first, then
/// 乾, 兌, 艮, 離, 坎, 坤, 震, 巽.
pub const FLIGHT_PATH: [usize; 9] = [4, 8, 5, 6, 1, 7, 2, 3, 0];
