//! Flying Star chart CLI
//!
//! Computes the four charts for a sitting mountain and prints them as a
//! 3x3 text grid, or as JSON for downstream rendering layers.

use clap::Parser;

use xuankong::chart::palace::PALACES;
use xuankong::chart::{compute, ComputationInput, ComputationResult};
use xuankong::compass::mountain::Mountain;
use xuankong::core::error::Result;
use xuankong::core::types::Star;

/// Xuan Kong Flying Star chart generator
#[derive(Parser, Debug)]
#[command(name = "xuankong")]
#[command(about = "Compute Xuan Kong Flying Star charts")]
struct Args {
    /// Sitting mountain: Chinese name (e.g. 子) or ring index 0-23
    #[arg(long, default_value = "子")]
    sitting: String,

    /// Construction period (1-9)
    #[arg(long, default_value_t = 9)]
    period: u8,

    /// Calendar year for the annual chart
    #[arg(long, default_value_t = 2024)]
    year: i32,

    /// Use substitute-star (replacement) charts
    #[arg(long)]
    substitution: bool,

    /// Emit the result as JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

const CHINESE_NUMS: [&str; 10] =
    ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("xuankong=info")
        .init();

    let args = Args::parse();

    let sitting = parse_sitting(&args.sitting)?;
    let period = Star::try_new(args.period)?;

    let input = ComputationInput {
        period,
        sitting,
        year: args.year,
        substitution: args.substitution,
    };

    tracing::info!(
        sitting = sitting.name(),
        period = period.value(),
        year = args.year,
        substitution = args.substitution,
        "computing charts"
    );

    let result = compute(input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render(&result);
    }

    Ok(())
}

/// Accept either a Chinese mountain name or a ring index.
fn parse_sitting(raw: &str) -> Result<Mountain> {
    let raw = raw.trim();
    if let Ok(idx) = raw.parse::<usize>() {
        Mountain::try_from_index(idx)
    } else {
        Mountain::from_name(raw)
    }
}

fn render(result: &ComputationResult) {
    let substitution_tag = if result.input.substitution { "  替卦" } else { "" };
    println!(
        "{}山{}向  {}運  {}年{}",
        result.sitting.name(),
        result.facing.name(),
        CHINESE_NUMS[result.input.period.value() as usize],
        result.input.year,
        substitution_tag,
    );

    let sep = "+-----------+-----------+-----------+";
    println!("{sep}");
    for row in 0..3usize {
        let slots = [row * 3, row * 3 + 1, row * 3 + 2];

        let stars: Vec<String> = slots
            .iter()
            .map(|&slot| {
                format!(
                    " {}       {} ",
                    result.mountain_chart.get(slot),
                    result.water_chart.get(slot),
                )
            })
            .collect();
        println!("|{}|{}|{}|", stars[0], stars[1], stars[2]);

        let annuals: Vec<String> = slots
            .iter()
            .map(|&slot| format!("    ({})    ", result.annual_chart.get(slot)))
            .collect();
        println!("|{}|{}|{}|", annuals[0], annuals[1], annuals[2]);

        let labels: Vec<String> = slots
            .iter()
            .map(|&slot| {
                let base = result.period_chart.get(slot).value() as usize;
                let marker = if slot == result.sitting_slot {
                    " 坐"
                } else if slot == result.facing_slot {
                    " 向"
                } else {
                    ""
                };
                format!(" {} {}{}", CHINESE_NUMS[base], PALACES[slot].label, marker)
            })
            .collect();
        println!("|{:<11}|{:<11}|{:<11}|", labels[0], labels[1], labels[2]);
        println!("{sep}");
    }

    println!("山星 左上  向星 右上  流年 (中)  運星 下段");
}
