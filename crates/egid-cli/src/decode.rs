//! # Decode Subcommand
//!
//! Single-ID and batch decoding with JSON output.

use std::io::BufRead;

use clap::Args;
use serde_json::{json, Value};

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// National ID number to decode. Omit when using --stdin.
    pub id: Option<String>,

    /// Read IDs line by line from stdin and emit one JSON object per
    /// line. Blank lines are skipped; surrounding whitespace is trimmed
    /// before validation.
    #[arg(long, conflicts_with = "id")]
    pub stdin: bool,

    /// Pretty-print JSON output (single-ID mode only).
    #[arg(long)]
    pub pretty: bool,
}

/// Run the decode subcommand.
pub fn run(args: &DecodeArgs) -> anyhow::Result<()> {
    if args.stdin {
        let stdin = std::io::stdin();
        return run_batch(stdin.lock());
    }

    let id = args
        .id
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("provide an ID to decode, or --stdin for batch mode"))?;

    let decoded = egid_core::decode(id)?;
    let fields = decoded.to_fields();
    let output = if args.pretty {
        serde_json::to_string_pretty(&fields)?
    } else {
        serde_json::to_string(&fields)?
    };
    println!("{output}");

    Ok(())
}

/// Decode every line of the reader, one JSON object per line.
///
/// Failures are reported in-band so one unreadable ID does not abort the
/// rest of the batch.
fn run_batch(reader: impl BufRead) -> anyhow::Result<()> {
    let mut total = 0usize;
    let mut failed = 0usize;

    for line in reader.lines() {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        total += 1;
        let record = batch_record(raw);
        if record["valid"] == Value::Bool(false) {
            failed += 1;
        }
        println!("{}", serde_json::to_string(&record)?);
    }

    tracing::info!(total, failed, "batch decode finished");
    Ok(())
}

/// Build the per-line JSON record for batch mode.
fn batch_record(raw: &str) -> Value {
    match egid_core::decode(raw) {
        Ok(decoded) => {
            let mut record = serde_json::Map::new();
            record.insert("valid".to_owned(), Value::Bool(true));
            for (key, value) in decoded.to_fields() {
                record.insert(key.to_owned(), Value::String(value));
            }
            Value::Object(record)
        }
        Err(err) => json!({
            "valid": false,
            "national_id": raw,
            "error": err.to_string(),
        }),
    }
}
