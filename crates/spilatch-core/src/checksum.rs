// crates/spilatch-core/src/checksum.rs

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// Serialize decoded words into a byte payload.
///
/// Each word takes the minimum whole number of bytes that holds `group_size`
/// bits, little-endian. For the usual 8-bit groups this is exactly the byte
/// stream seen on the wire.
pub fn payload_bytes(words: &[u64], group_size: usize) -> Vec<u8> {
    let width = group_size.div_ceil(8).clamp(1, 8);
    let mut out = Vec::with_capacity(words.len() * width);
    for w in words {
        out.extend_from_slice(&w.to_le_bytes()[..width]);
    }
    out
}

/// Short hex id (blake3, first 16 bytes) used to compare decodes across runs.
pub fn payload_id_hex(payload: &[u8]) -> String {
    let h = blake3_16(payload);
    let mut s = String::with_capacity(32);
    for b in h {
        s.push_str(&format!("{:02x}", b));
    }
    s
}
