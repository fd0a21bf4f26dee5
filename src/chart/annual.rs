//! Year to annual star mapping

use crate::core::types::Star;

/// Annual star for a calendar year.
///
/// The cycle has length 9 and is anchored at year 2000, which maps to star
/// 9. `rem_euclid` keeps the offset in 0..=8 for years before 2000 as well.
pub fn annual_star(year: i32) -> Star {
    let offset = (year - 2000).rem_euclid(9);
    let mut star = 9 - offset;
    if star <= 0 {
        star += 9;
    }
    if star > 9 {
        star -= 9;
    }
    Star::new(star as u8)
}
