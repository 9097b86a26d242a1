// crates/spilatch-cli/src/cmd/decode.rs

use anyhow::{bail, Context};
use clap::Args;
use spilatch_core::checksum::{crc32, payload_id_hex};
use spilatch_core::{decode_capture_words, CaptureDecode, DecodeConfig};

use crate::cmd::args::{decode_config, CaptureArgs, FramingArgs, ThresholdArgs};
use crate::io::{bin, capture, jsonl};

#[derive(Args)]
pub struct DecodeArgs {
    /// Capture tables to decode, processed independently
    #[arg(required = true)]
    pub files: Vec<String>,

    #[command(flatten)]
    pub capture: CaptureArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    #[command(flatten)]
    pub framing: FramingArgs,

    /// Also write one JSON record per decoded file
    #[arg(long)]
    pub jsonl: Option<String>,

    /// Write the decoded words as raw bytes (single input, --group-size <= 8)
    #[arg(long)]
    pub bin: Option<String>,

    /// Stop at the first file that fails instead of skipping it
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let cfg = decode_config(&args.thresholds, &args.framing);

    if args.bin.is_some() {
        if args.files.len() != 1 {
            bail!("--bin takes exactly one input file, got {}", args.files.len());
        }
        if cfg.group_size > 8 {
            bail!("--bin needs --group-size <= 8, got {}", cfg.group_size);
        }
    }

    let fmt = args.capture.format();
    let mut jsonl_out = match args.jsonl.as_deref() {
        Some(path) => Some(jsonl::JsonlWriter::create(path)?),
        None => None,
    };
    let mut failed: usize = 0;

    for file in &args.files {
        let report = match decode_file(file, fmt, &cfg) {
            Ok(r) => r,
            Err(e) => {
                if args.fail_fast {
                    return Err(e);
                }
                eprintln!("error: {e:#}");
                failed += 1;
                continue;
            }
        };

        let values = report.values(cfg.radix);
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        println!("Decoded data from {file}:");
        println!("  -> [{}]", rendered.join(", "));

        let payload = report.payload();
        let c = crc32(&payload);
        let id = payload_id_hex(&payload);

        eprintln!(
            "decode ok: file={} samples={} bits={} words={} crc32={:08x} id={}",
            file,
            report.samples,
            report.bits.len(),
            report.words.len(),
            c,
            id
        );

        if let Some(w) = jsonl_out.as_mut() {
            w.append(&jsonl::DecodeRecord::new(
                file,
                report.samples,
                report.bits.len(),
                &values,
                c,
                &id,
            ))?;
        }

        if let Some(path) = args.bin.as_deref() {
            bin::write_payload_file(path, &payload)?;
            eprintln!("wrote payload: {} ({} bytes)", path, payload.len());
        }
    }

    if failed > 0 {
        bail!("{} of {} file(s) failed to decode", failed, args.files.len());
    }
    Ok(())
}

fn decode_file(
    file: &str,
    fmt: capture::CaptureFormat,
    cfg: &DecodeConfig,
) -> anyhow::Result<CaptureDecode> {
    let ch = capture::load_channels(file, fmt)?;
    let report = decode_capture_words(&ch.clock, &ch.data, cfg)
        .with_context(|| format!("decode {file}"))?;
    Ok(report)
}
