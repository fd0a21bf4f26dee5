//! The eight trigrams: Luoshu numbers, palace slots, and yin/yang parity
//!
//! Every peripheral palace of the Luoshu grid belongs to one trigram; the
//! center (Luoshu 5) has no trigram and is handled separately by the
//! resolver's center-star rule.

use serde::{Deserialize, Serialize};

use crate::compass::mountain::Mountain;
use crate::core::types::{Polarity, Yuan};

/// The eight trigrams in Luoshu-number order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// 坎 (1)
    Kan,
    /// 坤 (2)
    Kun,
    /// 震 (3)
    Zhen,
    /// 巽 (4)
    Xun,
    /// 乾 (6)
    Qian,
    /// 兌 (7)
    Dui,
    /// 艮 (8)
    Gen,
    /// 離 (9)
    Li,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Kan,
        Trigram::Kun,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Gen,
        Trigram::Li,
    ];

    /// Luoshu number of this trigram.
    pub const fn number(self) -> u8 {
        match self {
            Trigram::Kan => 1,
            Trigram::Kun => 2,
            Trigram::Zhen => 3,
            Trigram::Xun => 4,
            Trigram::Qian => 6,
            Trigram::Dui => 7,
            Trigram::Gen => 8,
            Trigram::Li => 9,
        }
    }

    /// Trigram for a Luoshu number. `None` for 5, the center.
    pub const fn from_number(n: u8) -> Option<Trigram> {
        match n {
            1 => Some(Trigram::Kan),
            2 => Some(Trigram::Kun),
            3 => Some(Trigram::Zhen),
            4 => Some(Trigram::Xun),
            6 => Some(Trigram::Qian),
            7 => Some(Trigram::Dui),
            8 => Some(Trigram::Gen),
            9 => Some(Trigram::Li),
            _ => None,
        }
    }

    /// Chinese name of the trigram.
    pub const fn name(self) -> &'static str {
        match self {
            Trigram::Kan => "坎",
            Trigram::Kun => "坤",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Qian => "乾",
            Trigram::Dui => "兌",
            Trigram::Gen => "艮",
            Trigram::Li => "離",
        }
    }

    /// Fixed grid slot of this trigram's palace in the 3x3 display grid
    /// (row-major; the center slot 4 belongs to no trigram).
    pub const fn palace_slot(self) -> usize {
        match self {
            Trigram::Xun => 0,
            Trigram::Li => 1,
            Trigram::Kun => 2,
            Trigram::Zhen => 3,
            Trigram::Dui => 5,
            Trigram::Gen => 6,
            Trigram::Kan => 7,
            Trigram::Qian => 8,
        }
    }

    /// Yin/yang parity of this trigram's stars, per yuan.
    ///
    /// Kan, Zhen, Dui and Li carry yang/yin/yin over Earth/Heaven/Human;
    /// Kun, Xun, Qian and Gen carry the mirrored yin/yang/yang.
    pub const fn polarity(self, yuan: Yuan) -> Polarity {
        let triple = match self {
            Trigram::Kan | Trigram::Zhen | Trigram::Dui | Trigram::Li => {
                [Polarity::Yang, Polarity::Yin, Polarity::Yin]
            }
            Trigram::Kun | Trigram::Xun | Trigram::Qian | Trigram::Gen => {
                [Polarity::Yin, Polarity::Yang, Polarity::Yang]
            }
        };
        triple[yuan.index()]
    }

    /// The three mountains of this trigram's compass arc, ordered by yuan.
    pub const fn mountains(self) -> [Mountain; 3] {
        match self {
            Trigram::Kan => [Mountain::Ren, Mountain::Zi, Mountain::Gui],
            Trigram::Gen => [Mountain::Chou, Mountain::Gen, Mountain::Yin],
            Trigram::Zhen => [Mountain::Jia, Mountain::Mao, Mountain::Yi],
            Trigram::Xun => [Mountain::Chen, Mountain::Xun, Mountain::Si],
            Trigram::Li => [Mountain::Bing, Mountain::Wu, Mountain::Ding],
            Trigram::Kun => [Mountain::Wei, Mountain::Kun, Mountain::Shen],
            Trigram::Dui => [Mountain::Geng, Mountain::You, Mountain::Xin],
            Trigram::Qian => [Mountain::Xu, Mountain::Qian, Mountain::Hai],
        }
    }
}
