//! Seed star and flight direction resolution
//!
//! The mountain and water charts each start from the raw star the period
//! chart placed in the sitting or facing palace. This module decides which
//! star actually enters the center (the substitute star when substitution
//! mode is on) and whether it flies forward or backward.
//!
//! Direction comes from three mutually exclusive rules tried in declared
//! order: a substituted 1 always flies forward; a 5 takes its polarity from
//! the host palace's own Luoshu trigram; everything else takes the polarity
//! of its own trigram.

use serde::{Deserialize, Serialize};

use crate::compass::trigram::Trigram;
use crate::core::types::{Star, Yuan};

/// Seed star and flight direction for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub seed: Star,
    pub forward: bool,
}

/// Resolve the center star and direction for a mountain or water chart.
///
/// `raw` is the period chart's star at the palace, `yuan` the mountain's
/// yuan, and `palace_base` the palace's original Luoshu number.
pub fn resolve(raw: Star, yuan: Yuan, substitution: bool, palace_base: Star) -> Resolution {
    let seed = substitute_seed(raw, yuan, substitution);
    let forward = rule_substituted_one(seed, substitution)
        .or_else(|| rule_center_star(seed, yuan, palace_base))
        .unwrap_or_else(|| rule_trigram_polarity(seed, yuan));
    Resolution { seed, forward }
}

/// Substitute star lookup. A 5 has no substitute and passes through
/// untouched regardless of mode; any other star substitutes through the
/// mountain of its own trigram at the given yuan.
fn substitute_seed(raw: Star, yuan: Yuan, substitution: bool) -> Star {
    if !substitution || raw.value() == 5 {
        return raw;
    }
    match Trigram::from_number(raw.value()) {
        Some(trigram) => trigram.mountains()[yuan.index()].substitute_star(),
        None => raw,
    }
}

/// Rule A: a substituted 1 flies forward unconditionally, overriding the
/// polarity table.
fn rule_substituted_one(seed: Star, substitution: bool) -> Option<bool> {
    (substitution && seed.value() == 1).then_some(true)
}

/// Rule B: a 5 entering the center has no trigram of its own, so its
/// polarity is read from the trigram whose Luoshu number is the host
/// palace's base.
fn rule_center_star(seed: Star, yuan: Yuan, palace_base: Star) -> Option<bool> {
    if seed.value() != 5 {
        return None;
    }
    Some(trigram_forward(palace_base, yuan))
}

/// Rule C: default polarity lookup through the seed star's own trigram.
fn rule_trigram_polarity(seed: Star, yuan: Yuan) -> bool {
    trigram_forward(seed, yuan)
}

fn trigram_forward(star: Star, yuan: Yuan) -> bool {
    Trigram::from_number(star.value())
        .map(|t| t.polarity(yuan).is_forward())
        .unwrap_or(true)
}
