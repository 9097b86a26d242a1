//! Offline SPI decoding from analog scope captures.
//!
//! Pipeline: [`digitize`] each channel with hysteresis, [`latch`] the data
//! line on the selected clock edge, then [`decode`] the bit stream into
//! fixed-size words. [`decode_capture`] runs all three from a
//! [`DecodeConfig`].

pub mod error;
pub mod validate;

pub mod checksum;
pub mod config;
pub mod pipeline;
pub mod signal;

pub use crate::config::params::{DecodeConfig, Hysteresis, StartPolicy};
pub use crate::error::{Result, SpiError};
pub use crate::pipeline::{decode_capture, decode_capture_words, CaptureDecode};
pub use crate::signal::bitgroup::{decode, expand_word, group_words, BitOrder, DecodedValue, Radix};
pub use crate::signal::digitize::digitize;
pub use crate::signal::latch::{edge_indices, latch, Edge};
pub use crate::signal::level::Level;
