//! Integration tests for the full chart pipeline
//!
//! These tests drive the assembler end to end and pin down the documented
//! reference charts:
//! - the period-9 子山午向 regression fixture
//! - substitution-mode charts with and without an exception row
//! - the gating contract of the period-9 exception table

use xuankong::chart::palace::PALACES;
use xuankong::chart::{compute, fly, resolve, ComputationInput};
use xuankong::compass::mountain::Mountain;
use xuankong::core::types::Star;

fn input(period: u8, sitting: Mountain, year: i32, substitution: bool) -> ComputationInput {
    ComputationInput {
        period: Star::new(period),
        sitting,
        year,
        substitution,
    }
}

// ============================================================================
// Reference chart fixtures
// ============================================================================

/// Period 9, 子 sitting (facing 午), year 2024, substitution off.
#[test]
fn test_zi_sitting_period_nine_reference_charts() {
    let result = compute(input(9, Mountain::Zi, 2024, false));

    assert_eq!(result.sitting, Mountain::Zi);
    assert_eq!(result.facing, Mountain::Wu);
    assert_eq!(result.sitting_slot, 7); // 坎 palace
    assert_eq!(result.facing_slot, 1); // 離 palace

    assert_eq!(result.period_chart.values(), [8, 4, 6, 7, 9, 2, 3, 5, 1]);
    assert_eq!(result.mountain_chart.values(), [6, 1, 8, 7, 5, 3, 2, 9, 4]);
    assert_eq!(result.water_chart.values(), [3, 8, 1, 2, 4, 6, 7, 9, 5]);
    assert_eq!(result.annual_chart.values(), [2, 7, 9, 1, 3, 5, 8, 4, 6]);
}

/// Period 9, 乾 sitting, substitution on: this sitting carries an exception
/// row (mountain chart from 1 backward, water chart from 7 forward).
#[test]
fn test_qian_sitting_period_nine_substitution_charts() {
    let result = compute(input(9, Mountain::Qian, 2024, true));

    assert_eq!(result.facing, Mountain::Xun);
    assert_eq!(result.sitting_slot, 8); // 乾 palace
    assert_eq!(result.facing_slot, 0); // 巽 palace

    assert_eq!(result.period_chart.values(), [8, 4, 6, 7, 9, 2, 3, 5, 1]);
    assert_eq!(result.mountain_chart.values(), [2, 6, 4, 3, 1, 8, 7, 5, 9]);
    assert_eq!(result.water_chart.values(), [6, 2, 4, 5, 7, 9, 1, 3, 8]);
    assert_eq!(result.annual_chart.values(), [2, 7, 9, 1, 3, 5, 8, 4, 6]);
}

/// Period 9, 午 sitting, substitution on: no exception row, so the general
/// resolver rules stand. The sitting palace's raw 4 substitutes through 巽
/// to 6 flying forward; the facing palace's raw 5 keeps its value and flies
/// backward by the 坎 palace's polarity.
#[test]
fn test_wu_sitting_period_nine_substitution_without_override() {
    let result = compute(input(9, Mountain::Wu, 2024, true));

    assert_eq!(result.mountain_chart, fly(Star::new(6), true));
    assert_eq!(result.water_chart, fly(Star::new(5), false));
}

// ============================================================================
// Exception table gating
// ============================================================================

/// Outside period 9 with substitution, the assembler must match the plain
/// resolver/sequencer pipeline for every sitting mountain.
#[test]
fn test_exception_table_inert_outside_its_gate() {
    for sitting in Mountain::ALL {
        for (period, substitution) in [(9u8, false), (8, true), (8, false), (1, true)] {
            let result = compute(input(period, sitting, 2024, substitution));

            let facing = sitting.facing();
            let period_chart = fly(Star::new(period), true);
            let sitting_slot = sitting.trigram().palace_slot();
            let facing_slot = facing.trigram().palace_slot();

            let mountain = resolve(
                period_chart.get(sitting_slot),
                sitting.yuan(),
                substitution,
                PALACES[sitting_slot].base,
            );
            let water = resolve(
                period_chart.get(facing_slot),
                facing.yuan(),
                substitution,
                PALACES[facing_slot].base,
            );

            assert_eq!(
                result.mountain_chart,
                fly(mountain.seed, mountain.forward),
                "mountain chart diverged for {:?} period {} substitution {}",
                sitting,
                period,
                substitution,
            );
            assert_eq!(
                result.water_chart,
                fly(water.seed, water.forward),
                "water chart diverged for {:?} period {} substitution {}",
                sitting,
                period,
                substitution,
            );
        }
    }
}

// ============================================================================
// Cross-cutting properties
// ============================================================================

/// Every chart of every result is a permutation of 1-9.
#[test]
fn test_all_charts_are_permutations() {
    for sitting in [Mountain::Ren, Mountain::Chou, Mountain::Wu, Mountain::Hai] {
        for period in 1..=9u8 {
            for substitution in [false, true] {
                let result = compute(input(period, sitting, 2026, substitution));
                for chart in [
                    result.period_chart,
                    result.mountain_chart,
                    result.water_chart,
                    result.annual_chart,
                ] {
                    let mut values = chart.values().to_vec();
                    values.sort_unstable();
                    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
                }
            }
        }
    }
}

/// The result serializes to JSON with the fields the rendering layer reads.
#[test]
fn test_result_serializes_for_rendering() {
    let result = compute(input(9, Mountain::Zi, 2024, false));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["sitting"], "Zi");
    assert_eq!(json["facing"], "Wu");
    assert_eq!(json["sitting_slot"], 7);
    assert_eq!(json["period_chart"][4], 9);
    assert_eq!(json["annual_chart"][0], 2);
}
