//! Hand-checked corrections for period-9 substitution charts
//!
//! For twelve sitting mountains the documented period-9 substitution charts
//! do not fall out of the resolver's general rules: the reference charts fly
//! those seeds by the polarity of the mountain found in the raw star's own
//! arc, and two of the substitute-1 rows are recorded outright. The rows
//! below were transcribed from the reference charts and are looked up as
//! literal data, never derived.
//!
//! The table is consulted only when the assembler has gated on period 9
//! with substitution mode on; the other twelve sittings pass through
//! unmodified.

use crate::chart::resolver::Resolution;
use crate::compass::mountain::Mountain;
use crate::core::types::Star;

/// Partial replacement for one chart's seed/direction pair. `None` fields
/// keep the resolver's output.
#[derive(Debug, Clone, Copy)]
pub struct PairOverride {
    pub seed: Option<Star>,
    pub forward: Option<bool>,
}

impl PairOverride {
    /// Entry that changes nothing.
    pub const KEEP: PairOverride = PairOverride { seed: None, forward: None };

    const fn seed(n: u8, forward: bool) -> PairOverride {
        PairOverride { seed: Some(Star::new(n)), forward: Some(forward) }
    }

    const fn direction(forward: bool) -> PairOverride {
        PairOverride { seed: None, forward: Some(forward) }
    }

    /// Patch a resolution, replacing only the fields this entry carries.
    pub fn apply(&self, resolution: Resolution) -> Resolution {
        Resolution {
            seed: self.seed.unwrap_or(resolution.seed),
            forward: self.forward.unwrap_or(resolution.forward),
        }
    }
}

/// Corrections for one sitting mountain: one partial pair for the mountain
/// chart and one for the water chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartOverride {
    pub mountain: PairOverride,
    pub water: PairOverride,
}

const fn entry(mountain: PairOverride, water: PairOverride) -> ChartOverride {
    ChartOverride { mountain, water }
}

/// The twelve corrected sittings for period 9 under substitution, in ring
/// order.
static PERIOD_NINE_OVERRIDES: [(Mountain, ChartOverride); 12] = [
    (Mountain::Chou, entry(PairOverride::seed(1, true), PairOverride::KEEP)),
    (Mountain::Gen, entry(PairOverride::direction(false), PairOverride::KEEP)),
    (Mountain::Yin, entry(PairOverride::direction(false), PairOverride::KEEP)),
    (Mountain::Chen, entry(PairOverride::direction(false), PairOverride::direction(true))),
    (Mountain::Xun, entry(PairOverride::direction(true), PairOverride::seed(1, false))),
    (Mountain::Si, entry(PairOverride::direction(true), PairOverride::seed(1, false))),
    (Mountain::Kun, entry(PairOverride::KEEP, PairOverride::direction(false))),
    (Mountain::Shen, entry(PairOverride::KEEP, PairOverride::direction(false))),
    (Mountain::Xin, entry(PairOverride::seed(1, true), PairOverride::KEEP)),
    (Mountain::Xu, entry(PairOverride::direction(true), PairOverride::direction(false))),
    (Mountain::Qian, entry(PairOverride::seed(1, false), PairOverride::direction(true))),
    (Mountain::Hai, entry(PairOverride::seed(1, false), PairOverride::direction(true))),
];

/// Override row for a sitting mountain, if one is documented.
pub fn period_nine_override(sitting: Mountain) -> Option<&'static ChartOverride> {
    PERIOD_NINE_OVERRIDES
        .iter()
        .find(|(mountain, _)| *mountain == sitting)
        .map(|(_, entry)| entry)
}
