// crates/spilatch-core/src/signal/bitgroup.rs

use std::fmt;

use crate::error::{Result, SpiError};
use crate::validate::validate_group_size;

/// Which end of a group carries the most significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// First bit of the group is the MSB (SPI default).
    #[default]
    MsbFirst,
    /// First bit of the group is the LSB.
    LsbFirst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Radix {
    /// `0x`-prefixed lowercase hex string.
    #[default]
    Hex,
    /// Raw unsigned integer.
    Dec,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedValue {
    Int(u64),
    Hex(String),
}

impl DecodedValue {
    pub fn render(word: u64, radix: Radix) -> Self {
        match radix {
            Radix::Hex => DecodedValue::Hex(format!("{:#x}", word)),
            Radix::Dec => DecodedValue::Int(word),
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Int(v) => write!(f, "{}", v),
            DecodedValue::Hex(s) => f.write_str(s),
        }
    }
}

/// Fold one group into its value: bit `j` of the accumulation order is
/// weighted by `2^j`. MSB-first walks the group back to front so both orders
/// share the same fold.
#[inline]
fn fold_group(group: &[u8], order: BitOrder) -> u64 {
    let acc = |v: u64, (j, &b): (usize, &u8)| v | (u64::from(b) << j);
    match order {
        BitOrder::MsbFirst => group.iter().rev().enumerate().fold(0, acc),
        BitOrder::LsbFirst => group.iter().enumerate().fold(0, acc),
    }
}

/// Split `bits` into consecutive `group_size` chunks and return each chunk's value.
///
/// Fails before decoding anything if the stream does not divide evenly or
/// contains anything other than 0/1.
pub fn group_words(bits: &[u8], group_size: usize, order: BitOrder) -> Result<Vec<u64>> {
    validate_group_size(group_size)?;

    if bits.len() % group_size != 0 {
        return Err(SpiError::Indivisible {
            len: bits.len(),
            group_size,
        });
    }
    if let Some((index, &value)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
        return Err(SpiError::InvalidBit { index, value });
    }

    Ok(bits
        .chunks_exact(group_size)
        .map(|g| fold_group(g, order))
        .collect())
}

/// [`group_words`] followed by rendering in the requested radix.
pub fn decode(
    bits: &[u8],
    group_size: usize,
    order: BitOrder,
    radix: Radix,
) -> Result<Vec<DecodedValue>> {
    let words = group_words(bits, group_size, order)?;
    Ok(words
        .into_iter()
        .map(|w| DecodedValue::render(w, radix))
        .collect())
}

/// Inverse of the group fold: the `group_size` bits that decode to `word`.
///
/// Bits of `word` above `group_size` are ignored.
pub fn expand_word(word: u64, group_size: usize, order: BitOrder) -> Result<Vec<u8>> {
    validate_group_size(group_size)?;
    let bit = |j: usize| ((word >> j) & 1) as u8;
    Ok(match order {
        BitOrder::MsbFirst => (0..group_size).rev().map(bit).collect(),
        BitOrder::LsbFirst => (0..group_size).map(bit).collect(),
    })
}
