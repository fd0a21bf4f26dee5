//! The twenty-four mountains of the compass ring
//!
//! Each trigram owns a 45-degree arc of the ring, split into three mountains
//! of 15 degrees (one per yuan). Ring index 0 is 壬; the facing mountain is
//! always the one diametrically opposite, twelve positions away.

use serde::{Deserialize, Serialize};

use crate::compass::trigram::Trigram;
use crate::core::error::{ChartError, Result};
use crate::core::types::{Star, Yuan};

/// One of the 24 compass mountains, in ring order starting from 壬.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mountain {
    Ren,  // 壬
    Zi,   // 子
    Gui,  // 癸
    Chou, // 丑
    Gen,  // 艮
    Yin,  // 寅
    Jia,  // 甲
    Mao,  // 卯
    Yi,   // 乙
    Chen, // 辰
    Xun,  // 巽
    Si,   // 巳
    Bing, // 丙
    Wu,   // 午
    Ding, // 丁
    Wei,  // 未
    Kun,  // 坤
    Shen, // 申
    Geng, // 庚
    You,  // 酉
    Xin,  // 辛
    Xu,   // 戌
    Qian, // 乾
    Hai,  // 亥
}

impl Mountain {
    /// All 24 mountains in ring order.
    pub const ALL: [Mountain; 24] = [
        Mountain::Ren,
        Mountain::Zi,
        Mountain::Gui,
        Mountain::Chou,
        Mountain::Gen,
        Mountain::Yin,
        Mountain::Jia,
        Mountain::Mao,
        Mountain::Yi,
        Mountain::Chen,
        Mountain::Xun,
        Mountain::Si,
        Mountain::Bing,
        Mountain::Wu,
        Mountain::Ding,
        Mountain::Wei,
        Mountain::Kun,
        Mountain::Shen,
        Mountain::Geng,
        Mountain::You,
        Mountain::Xin,
        Mountain::Xu,
        Mountain::Qian,
        Mountain::Hai,
    ];

    /// Mountain at a ring index.
    ///
    /// Panics when `idx` is outside 0-23; the index comes from a bounded
    /// selection and an out-of-range value is a contract violation.
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < 24, "mountain index out of range 0-23: {idx}");
        Self::ALL[idx]
    }

    /// Checked lookup for indices arriving from the outside world.
    pub fn try_from_index(idx: usize) -> Result<Self> {
        if idx < 24 {
            Ok(Self::ALL[idx])
        } else {
            Err(ChartError::MountainIndexOutOfRange(idx))
        }
    }

    /// Look a mountain up by its Chinese name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| ChartError::UnknownMountain(name.to_string()))
    }

    /// Ring index of this mountain (0-23).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Chinese name of the mountain.
    pub const fn name(self) -> &'static str {
        match self {
            Mountain::Ren => "壬",
            Mountain::Zi => "子",
            Mountain::Gui => "癸",
            Mountain::Chou => "丑",
            Mountain::Gen => "艮",
            Mountain::Yin => "寅",
            Mountain::Jia => "甲",
            Mountain::Mao => "卯",
            Mountain::Yi => "乙",
            Mountain::Chen => "辰",
            Mountain::Xun => "巽",
            Mountain::Si => "巳",
            Mountain::Bing => "丙",
            Mountain::Wu => "午",
            Mountain::Ding => "丁",
            Mountain::Wei => "未",
            Mountain::Kun => "坤",
            Mountain::Shen => "申",
            Mountain::Geng => "庚",
            Mountain::You => "酉",
            Mountain::Xin => "辛",
            Mountain::Xu => "戌",
            Mountain::Qian => "乾",
            Mountain::Hai => "亥",
        }
    }

    /// Trigram owning this mountain's arc.
    pub const fn trigram(self) -> Trigram {
        match self {
            Mountain::Ren | Mountain::Zi | Mountain::Gui => Trigram::Kan,
            Mountain::Chou | Mountain::Gen | Mountain::Yin => Trigram::Gen,
            Mountain::Jia | Mountain::Mao | Mountain::Yi => Trigram::Zhen,
            Mountain::Chen | Mountain::Xun | Mountain::Si => Trigram::Xun,
            Mountain::Bing | Mountain::Wu | Mountain::Ding => Trigram::Li,
            Mountain::Wei | Mountain::Kun | Mountain::Shen => Trigram::Kun,
            Mountain::Geng | Mountain::You | Mountain::Xin => Trigram::Dui,
            Mountain::Xu | Mountain::Qian | Mountain::Hai => Trigram::Qian,
        }
    }

    /// Yuan of this mountain within its trigram's arc.
    pub const fn yuan(self) -> Yuan {
        Yuan::ALL[self.index() % 3]
    }

    /// Substitute star of this mountain, per the classic substitution verse.
    pub const fn substitute_star(self) -> Star {
        let n = match self {
            // 子癸甲申 take 貪狼 (1)
            Mountain::Zi | Mountain::Gui | Mountain::Jia | Mountain::Shen => 1,
            // 壬卯乙未坤 take 巨門 (2)
            Mountain::Ren
            | Mountain::Mao
            | Mountain::Yi
            | Mountain::Wei
            | Mountain::Kun => 2,
            // 乾亥辰巽巳戌 take 武曲 (6)
            Mountain::Chen
            | Mountain::Xun
            | Mountain::Si
            | Mountain::Xu
            | Mountain::Qian
            | Mountain::Hai => 6,
            // 酉辛丑艮丙 take 破軍 (7)
            Mountain::Chou
            | Mountain::Gen
            | Mountain::Bing
            | Mountain::You
            | Mountain::Xin => 7,
            // 寅午庚丁 take 右弼 (9)
            Mountain::Yin | Mountain::Wu | Mountain::Ding | Mountain::Geng => 9,
        };
        Star::new(n)
    }

    /// The facing mountain: diametrically opposite on the ring.
    pub fn facing(self) -> Mountain {
        Self::from_index((self.index() + 12) % 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_order_matches_index() {
        for (i, mountain) in Mountain::ALL.iter().enumerate() {
            assert_eq!(mountain.index(), i);
            assert_eq!(Mountain::from_index(i), *mountain);
        }
    }

    #[test]
    fn test_three_mountains_per_trigram_one_per_yuan() {
        for trigram in Trigram::ALL {
            let members: Vec<Mountain> = Mountain::ALL
                .iter()
                .copied()
                .filter(|m| m.trigram() == trigram)
                .collect();
            assert_eq!(members.len(), 3, "{:?} must own three mountains", trigram);
            assert_eq!(members[0].yuan(), Yuan::Earth);
            assert_eq!(members[1].yuan(), Yuan::Heaven);
            assert_eq!(members[2].yuan(), Yuan::Human);
        }
    }

    #[test]
    fn test_facing_is_opposite() {
        for mountain in Mountain::ALL {
            let facing = mountain.facing();
            assert_eq!(facing.index(), (mountain.index() + 12) % 24);
            // Facing the facing lands back on the sitting mountain
            assert_eq!(facing.facing(), mountain);
        }
        assert_eq!(Mountain::Zi.facing(), Mountain::Wu);
        assert_eq!(Mountain::Qian.facing(), Mountain::Xun);
    }

    #[test]
    fn test_substitute_star_table() {
        // Spot checks against the substitution verse
        assert_eq!(Mountain::Ren.substitute_star().value(), 2);
        assert_eq!(Mountain::Zi.substitute_star().value(), 1);
        assert_eq!(Mountain::Gen.substitute_star().value(), 7);
        assert_eq!(Mountain::Yin.substitute_star().value(), 9);
        assert_eq!(Mountain::Wu.substitute_star().value(), 9);
        assert_eq!(Mountain::Kun.substitute_star().value(), 2);
        assert_eq!(Mountain::Qian.substitute_star().value(), 6);
        // No mountain substitutes to 5
        for mountain in Mountain::ALL {
            assert_ne!(mountain.substitute_star().value(), 5);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Mountain::from_name("子").unwrap(), Mountain::Zi);
        assert_eq!(Mountain::from_name("亥").unwrap(), Mountain::Hai);
        assert!(Mountain::from_name("福").is_err());
    }

    #[test]
    fn test_try_from_index_bounds() {
        assert!(Mountain::try_from_index(23).is_ok());
        assert!(Mountain::try_from_index(24).is_err());
    }

    #[test]
    #[should_panic(expected = "mountain index out of range")]
    fn test_from_index_out_of_range_panics() {
        let _ = Mountain::from_index(24);
    }
}
