// crates/spilatch-cli/src/io/bin.rs

use anyhow::Context;

/// Write the decoded payload (one byte per word for groups up to 8 bits).
pub fn write_payload_file(path: &str, payload: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, payload).with_context(|| format!("write payload bin: {path}"))?;
    Ok(())
}
