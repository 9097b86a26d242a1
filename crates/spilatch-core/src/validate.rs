use crate::config::params::{DecodeConfig, Hysteresis};
use crate::error::{Result, SpiError};

pub const MAX_GROUP_SIZE: usize = 64;

pub fn validate_thresholds(th: Hysteresis) -> Result<()> {
    if !th.low.is_finite() || !th.high.is_finite() {
        return Err(SpiError::Validation(format!(
            "thresholds must be finite: low={} high={}",
            th.low, th.high
        )));
    }
    // Inverted pair would let a sample satisfy both transitions.
    if th.low > th.high {
        return Err(SpiError::InvalidThresholds { low: th.low, high: th.high });
    }
    Ok(())
}

pub fn validate_group_size(group_size: usize) -> Result<()> {
    if group_size == 0 || group_size > MAX_GROUP_SIZE {
        return Err(SpiError::InvalidGroupSize(group_size));
    }
    Ok(())
}

pub fn validate_config(cfg: &DecodeConfig) -> Result<()> {
    validate_thresholds(cfg.clock_thresholds)?;
    validate_thresholds(cfg.data_thresholds)?;
    validate_group_size(cfg.group_size)?;
    Ok(())
}
