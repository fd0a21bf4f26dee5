//! Builds the four charts for one computation request
//!
//! The assembler is the engine's only public entry point: a pure function
//! from an input tuple to a fully populated result. Every table it consults
//! is an immutable constant, so concurrent callers need no coordination.

use serde::{Deserialize, Serialize};

use crate::chart::annual::annual_star;
use crate::chart::overrides::period_nine_override;
use crate::chart::palace::PALACES;
use crate::chart::resolver::resolve;
use crate::chart::sequencer::{fly, Chart};
use crate::compass::mountain::Mountain;
use crate::core::types::Star;

/// One chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationInput {
    /// Construction period (1-9), seeding the period chart.
    pub period: Star,
    /// Sitting mountain; the facing mountain is derived from it.
    pub sitting: Mountain,
    /// Calendar year for the annual chart.
    pub year: i32,
    /// Substitute-star mode (替卦).
    pub substitution: bool,
}

/// The four charts plus the resolved sitting/facing records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationResult {
    pub input: ComputationInput,
    pub sitting: Mountain,
    pub facing: Mountain,
    /// Grid slot of the sitting mountain's palace.
    pub sitting_slot: usize,
    /// Grid slot of the facing mountain's palace.
    pub facing_slot: usize,
    pub period_chart: Chart,
    pub mountain_chart: Chart,
    pub water_chart: Chart,
    pub annual_chart: Chart,
}

/// Compute all four charts for a request.
pub fn compute(input: ComputationInput) -> ComputationResult {
    let sitting = input.sitting;
    let facing = sitting.facing();

    let period_chart = fly(input.period, true);

    let sitting_slot = sitting.trigram().palace_slot();
    let facing_slot = facing.trigram().palace_slot();

    let mut mountain = resolve(
        period_chart.get(sitting_slot),
        sitting.yuan(),
        input.substitution,
        PALACES[sitting_slot].base,
    );
    let mut water = resolve(
        period_chart.get(facing_slot),
        facing.yuan(),
        input.substitution,
        PALACES[facing_slot].base,
    );

    if input.period.value() == 9 && input.substitution {
        if let Some(patch) = period_nine_override(sitting) {
            mountain = patch.mountain.apply(mountain);
            water = patch.water.apply(water);
        }
    }

    tracing::debug!(
        sitting = sitting.name(),
        facing = facing.name(),
        mountain_seed = mountain.seed.value(),
        mountain_forward = mountain.forward,
        water_seed = water.seed.value(),
        water_forward = water.forward,
        "resolved chart seeds"
    );

    ComputationResult {
        sitting,
        facing,
        sitting_slot,
        facing_slot,
        period_chart,
        mountain_chart: fly(mountain.seed, mountain.forward),
        water_chart: fly(water.seed, water.forward),
        annual_chart: fly(annual_star(input.year), true),
        input,
    }
}
