//! # Governorates Subcommand
//!
//! Prints the fixed governorate code table as JSON, keyed by code.

use std::collections::BTreeMap;

use clap::Args;
use egid_core::Governorate;

/// Arguments for the governorates subcommand.
#[derive(Args, Debug)]
pub struct GovernoratesArgs {
    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the governorates subcommand.
pub fn run(args: &GovernoratesArgs) -> anyhow::Result<()> {
    let table = code_table();
    let output = if args.pretty {
        serde_json::to_string_pretty(&table)?
    } else {
        serde_json::to_string(&table)?
    };
    println!("{output}");
    Ok(())
}

fn code_table() -> BTreeMap<&'static str, &'static str> {
    Governorate::all()
        .iter()
        .map(|g| (g.code(), g.name()))
        .collect()
}
