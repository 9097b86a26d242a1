// crates/spilatch-cli/src/io/jsonl.rs

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use serde::Serialize;
use spilatch_core::DecodedValue;

/// Hex words serialize as JSON strings, decimal words as JSON numbers.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum JsonWord<'a> {
    Int(u64),
    Hex(&'a str),
}

impl<'a> From<&'a DecodedValue> for JsonWord<'a> {
    fn from(v: &'a DecodedValue) -> Self {
        match v {
            DecodedValue::Int(n) => JsonWord::Int(*n),
            DecodedValue::Hex(s) => JsonWord::Hex(s),
        }
    }
}

/// One decoded capture, as written to the JSONL log.
/// Format: {"file":"..","samples":N,"bits":N,"words":[..],"crc32":"xxxxxxxx","id":".."}
#[derive(Serialize, Debug)]
pub struct DecodeRecord<'a> {
    pub file: &'a str,
    pub samples: usize,
    pub bits: usize,
    pub words: Vec<JsonWord<'a>>,
    pub crc32: String,
    pub id: &'a str,
}

impl<'a> DecodeRecord<'a> {
    pub fn new(
        file: &'a str,
        samples: usize,
        bits: usize,
        values: &'a [DecodedValue],
        crc32: u32,
        id: &'a str,
    ) -> Self {
        Self {
            file,
            samples,
            bits,
            words: values.iter().map(JsonWord::from).collect(),
            crc32: format!("{:08x}", crc32),
            id,
        }
    }
}

/// JSONL sink that flushes after every record, so records for files already
/// reported survive an early exit.
pub struct JsonlWriter {
    path: String,
    out: BufWriter<File>,
}

impl JsonlWriter {
    pub fn create(path: &str) -> anyhow::Result<Self> {
        let f = File::create(path).with_context(|| format!("create decode jsonl: {path}"))?;
        Ok(Self {
            path: path.to_string(),
            out: BufWriter::new(f),
        })
    }

    pub fn append(&mut self, r: &DecodeRecord<'_>) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, r)
            .with_context(|| format!("serialize decode record: {}", self.path))?;
        self.out.write_all(b"\n")?;
        self.out
            .flush()
            .with_context(|| format!("write decode jsonl: {}", self.path))?;
        Ok(())
    }
}
