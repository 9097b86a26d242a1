// crates/spilatch-core/src/config/defaults.rs

use crate::config::params::{DecodeConfig, Hysteresis, StartPolicy};
use crate::signal::bitgroup::{BitOrder, Radix};
use crate::signal::latch::Edge;

/// 3.3V CMOS logic: VIL max 0.8V, VIH min 2.0V.
pub const LOGIC_3V3: Hysteresis = Hysteresis::new(0.8, 2.0);

pub const GROUP_SIZE: usize = 8;

/// Mode 0 capture: sample MOSI/MISO on the rising SCLK edge, bytes MSB first.
pub fn default_config() -> DecodeConfig {
    DecodeConfig {
        clock_thresholds: LOGIC_3V3,
        data_thresholds: LOGIC_3V3,
        start: StartPolicy::Strict,
        edge: Edge::Rising,
        group_size: GROUP_SIZE,
        bit_order: BitOrder::MsbFirst,
        radix: Radix::Hex,
    }
}
