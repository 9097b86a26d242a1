// crates/spilatch-core/src/config/params.rs

use crate::signal::bitgroup::{BitOrder, Radix};
use crate::signal::latch::Edge;
use crate::signal::level::Level;

/// Two-threshold (Schmitt-trigger) digitization window, in volts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hysteresis {
    /// Inclusive: at or below this a High channel falls to Low.
    pub low: f64,
    /// Inclusive: at or above this a Low channel rises to High.
    pub high: f64,
}

impl Hysteresis {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl Default for Hysteresis {
    fn default() -> Self {
        super::defaults::LOGIC_3V3
    }
}

/// What to do when the very first sample lands inside the dead band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// Fail with `SpiError::AmbiguousStart`.
    #[default]
    Strict,
    /// Start from a caller-supplied level.
    Assume(Level),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecodeConfig {
    pub clock_thresholds: Hysteresis,
    pub data_thresholds: Hysteresis,
    pub start: StartPolicy,

    pub edge: Edge,

    pub group_size: usize,
    pub bit_order: BitOrder,
    pub radix: Radix,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        super::defaults::default_config()
    }
}
