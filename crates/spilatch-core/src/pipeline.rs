// crates/spilatch-core/src/pipeline.rs

use crate::config::params::DecodeConfig;
use crate::error::{Result, SpiError};
use crate::signal::bitgroup::{group_words, DecodedValue, Radix};
use crate::signal::digitize::digitize;
use crate::signal::latch::latch;
use crate::validate::validate_config;

/// Everything one capture decode produced, for callers that report more than
/// the rendered values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureDecode {
    pub samples: usize,
    pub group_size: usize,
    /// One bit per qualifying clock edge.
    pub bits: Vec<u8>,
    pub words: Vec<u64>,
}

impl CaptureDecode {
    pub fn values(&self, radix: Radix) -> Vec<DecodedValue> {
        self.words
            .iter()
            .map(|&w| DecodedValue::render(w, radix))
            .collect()
    }

    pub fn payload(&self) -> Vec<u8> {
        crate::checksum::payload_bytes(&self.words, self.group_size)
    }
}

/// Run digitize -> latch -> group on a clock/data channel pair.
pub fn decode_capture_words(clock: &[f64], data: &[f64], cfg: &DecodeConfig) -> Result<CaptureDecode> {
    if clock.len() != data.len() {
        return Err(SpiError::LengthMismatch {
            clock: clock.len(),
            data: data.len(),
        });
    }
    validate_config(cfg)?;

    let clk = digitize(clock, cfg.clock_thresholds, cfg.start)?;
    let dat = digitize(data, cfg.data_thresholds, cfg.start)?;

    let bits = latch(&clk, &dat, cfg.edge)?;
    let words = group_words(&bits, cfg.group_size, cfg.bit_order)?;

    log::debug!(
        "decode_capture: samples={} bits={} words={} group_size={} order={:?}",
        clock.len(),
        bits.len(),
        words.len(),
        cfg.group_size,
        cfg.bit_order
    );

    Ok(CaptureDecode {
        samples: clock.len(),
        group_size: cfg.group_size,
        bits,
        words,
    })
}

/// Decode a capture straight to rendered values (hex strings or integers,
/// per `cfg.radix`).
pub fn decode_capture(clock: &[f64], data: &[f64], cfg: &DecodeConfig) -> Result<Vec<DecodedValue>> {
    Ok(decode_capture_words(clock, data, cfg)?.values(cfg.radix))
}
