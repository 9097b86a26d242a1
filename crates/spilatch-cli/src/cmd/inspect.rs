// crates/spilatch-cli/src/cmd/inspect.rs

use anyhow::Context;
use clap::Args;
use spilatch_core::{digitize, edge_indices, Edge, Level};
use spilatch_core::validate::validate_group_size;

use crate::cmd::args::{CaptureArgs, ThresholdArgs};
use crate::io::capture;

#[derive(Args)]
pub struct InspectArgs {
    /// Capture table to inspect
    pub file: String,

    #[command(flatten)]
    pub capture: CaptureArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Group size to check the edge counts against
    #[arg(long, default_value_t = spilatch_core::config::defaults::GROUP_SIZE)]
    pub group_size: usize,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    validate_group_size(args.group_size)?;

    let ch = capture::load_channels(&args.file, args.capture.format())?;
    let start = args.thresholds.start();

    let clk = digitize(&ch.clock, args.thresholds.clock(), start)
        .with_context(|| format!("digitize clock column of {}", args.file))?;
    let dat = digitize(&ch.data, args.thresholds.data(), start)
        .with_context(|| format!("digitize data column of {}", args.file))?;

    let rising = edge_indices(&clk, Edge::Rising).len();
    let falling = edge_indices(&clk, Edge::Falling).len();

    eprintln!("--- inspect ---");
    eprintln!("file            = {}", args.file);
    eprintln!("rows            = {}", ch.clock.len());
    eprintln!("--- clock ---");
    eprintln!("min_v / max_v   = {}", range_str(&ch.clock));
    eprintln!("high_fraction   = {:.4}", high_fraction(&clk));
    eprintln!("rising_edges    = {} ({})", rising, fit_str(rising, args.group_size));
    eprintln!("falling_edges   = {} ({})", falling, fit_str(falling, args.group_size));
    eprintln!("--- data ---");
    eprintln!("min_v / max_v   = {}", range_str(&ch.data));
    eprintln!("high_fraction   = {:.4}", high_fraction(&dat));

    Ok(())
}

fn range_str(v: &[f64]) -> String {
    if v.is_empty() {
        return "n/a".to_string();
    }
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for &x in v {
        lo = lo.min(x);
        hi = hi.max(x);
    }
    format!("{:.4} / {:.4}", lo, hi)
}

fn high_fraction(levels: &[Level]) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }
    let highs = levels.iter().filter(|&&l| l == Level::High).count();
    (highs as f64) / (levels.len() as f64)
}

fn fit_str(edges: usize, group_size: usize) -> String {
    if edges % group_size == 0 {
        format!("{} words of {}", edges / group_size, group_size)
    } else {
        format!("{} bits left over for groups of {}", edges % group_size, group_size)
    }
}
