// crates/spilatch-core/src/signal/latch.rs

use crate::error::{Result, SpiError};
use crate::signal::level::Level;

/// Clock transition on which the data line is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Edge {
    /// Low -> High.
    #[default]
    Rising,
    /// High -> Low.
    Falling,
}

impl Edge {
    #[inline]
    pub fn matches(self, prev: Level, cur: Level) -> bool {
        match self {
            Edge::Rising => prev == Level::Low && cur == Level::High,
            Edge::Falling => prev == Level::High && cur == Level::Low,
        }
    }
}

/// Indices `i` (always >= 1) where `clock[i-1] -> clock[i]` is a qualifying edge.
pub fn edge_indices(clock: &[Level], edge: Edge) -> Vec<usize> {
    clock
        .windows(2)
        .enumerate()
        .filter(|(_, w)| edge.matches(w[0], w[1]))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Sample `data` at every qualifying `clock` edge.
///
/// The bit taken is `data[i]` at the edge index itself. Lengths must match;
/// the check runs before any latching so no partial stream is ever returned.
pub fn latch(clock: &[Level], data: &[Level], edge: Edge) -> Result<Vec<u8>> {
    if clock.len() != data.len() {
        return Err(SpiError::LengthMismatch {
            clock: clock.len(),
            data: data.len(),
        });
    }

    let bits: Vec<u8> = edge_indices(clock, edge)
        .into_iter()
        .map(|i| data[i].bit())
        .collect();

    log::debug!(
        "latch: samples={} edge={:?} bits={}",
        clock.len(),
        edge,
        bits.len()
    );

    Ok(bits)
}
