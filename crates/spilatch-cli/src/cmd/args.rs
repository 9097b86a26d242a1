// crates/spilatch-cli/src/cmd/args.rs

use clap::{Args, ValueEnum};
use spilatch_core::config::defaults::{GROUP_SIZE, LOGIC_3V3};
use spilatch_core::{BitOrder, DecodeConfig, Edge, Hysteresis, Level, Radix, StartPolicy};

use crate::io::capture::CaptureFormat;

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum EdgeArg {
    Rising,
    Falling,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum OrderArg {
    Msb,
    Lsb,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum RadixArg {
    Hex,
    Dec,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LevelArg {
    Low,
    High,
}

/// How to read the capture table.
#[derive(Args, Debug, Clone)]
pub struct CaptureArgs {
    /// Field separator
    #[arg(long, default_value_t = ';')]
    pub sep: char,

    /// Decimal separator used in numeric fields
    #[arg(long, default_value_t = ',')]
    pub decimal: char,

    /// Zero-based column holding the clock voltage (column 0 is usually time)
    #[arg(long, default_value_t = 1)]
    pub clk_col: usize,

    /// Zero-based column holding the data (MOSI or MISO) voltage
    #[arg(long, default_value_t = 2)]
    pub data_col: usize,
}

impl CaptureArgs {
    pub fn format(&self) -> CaptureFormat {
        CaptureFormat {
            sep: self.sep,
            decimal: self.decimal,
            clk_col: self.clk_col,
            data_col: self.data_col,
        }
    }
}

/// Hysteresis thresholds. Per-channel flags override --low/--high.
#[derive(Args, Debug, Clone)]
pub struct ThresholdArgs {
    /// Falling threshold (volts) for both channels
    #[arg(long, default_value_t = LOGIC_3V3.low)]
    pub low: f64,

    /// Rising threshold (volts) for both channels
    #[arg(long, default_value_t = LOGIC_3V3.high)]
    pub high: f64,

    #[arg(long)]
    pub clk_low: Option<f64>,
    #[arg(long)]
    pub clk_high: Option<f64>,
    #[arg(long)]
    pub data_low: Option<f64>,
    #[arg(long)]
    pub data_high: Option<f64>,

    /// Level to assume when the first sample sits between the thresholds.
    /// Without it such a capture is rejected.
    #[arg(long, value_enum)]
    pub assume_start: Option<LevelArg>,
}

impl ThresholdArgs {
    pub fn clock(&self) -> Hysteresis {
        Hysteresis::new(
            self.clk_low.unwrap_or(self.low),
            self.clk_high.unwrap_or(self.high),
        )
    }

    pub fn data(&self) -> Hysteresis {
        Hysteresis::new(
            self.data_low.unwrap_or(self.low),
            self.data_high.unwrap_or(self.high),
        )
    }

    pub fn start(&self) -> StartPolicy {
        match self.assume_start {
            None => StartPolicy::Strict,
            Some(LevelArg::Low) => StartPolicy::Assume(Level::Low),
            Some(LevelArg::High) => StartPolicy::Assume(Level::High),
        }
    }
}

/// Latch and grouping options.
#[derive(Args, Debug, Clone)]
pub struct FramingArgs {
    /// Clock edge on which data is sampled
    #[arg(long, value_enum, default_value_t = EdgeArg::Rising)]
    pub edge: EdgeArg,

    /// Bits per decoded word (1..=64)
    #[arg(long, default_value_t = GROUP_SIZE)]
    pub group_size: usize,

    /// Bit order inside a word
    #[arg(long, value_enum, default_value_t = OrderArg::Msb)]
    pub order: OrderArg,

    /// Output radix
    #[arg(long, value_enum, default_value_t = RadixArg::Hex)]
    pub radix: RadixArg,
}

pub fn edge(e: EdgeArg) -> Edge {
    match e {
        EdgeArg::Rising => Edge::Rising,
        EdgeArg::Falling => Edge::Falling,
    }
}

pub fn decode_config(th: &ThresholdArgs, fr: &FramingArgs) -> DecodeConfig {
    DecodeConfig {
        clock_thresholds: th.clock(),
        data_thresholds: th.data(),
        start: th.start(),
        edge: edge(fr.edge),
        group_size: fr.group_size,
        bit_order: match fr.order {
            OrderArg::Msb => BitOrder::MsbFirst,
            OrderArg::Lsb => BitOrder::LsbFirst,
        },
        radix: match fr.radix {
            RadixArg::Hex => Radix::Hex,
            RadixArg::Dec => Radix::Dec,
        },
    }
}
