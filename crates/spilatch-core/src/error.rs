use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpiError>;

#[derive(Debug, Error, PartialEq)]
pub enum SpiError {
    #[error("length mismatch: clock has {clock} samples, data has {data}")]
    LengthMismatch { clock: usize, data: usize },

    #[error("cannot group {group_size} bits in a {len} long stream without leaving any bit out")]
    Indivisible { len: usize, group_size: usize },

    #[error("ambiguous first sample: {value} lies between thresholds {low} and {high}")]
    AmbiguousStart { value: f64, low: f64, high: f64 },

    #[error("invalid thresholds: low={low} must not exceed high={high}")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("group size must be in 1..=64, got {0}")]
    InvalidGroupSize(usize),

    #[error("bit {index} is {value}, expected 0 or 1")]
    InvalidBit { index: usize, value: u8 },

    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },

    #[error("validation error: {0}")]
    Validation(String),
}
