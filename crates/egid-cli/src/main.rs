//! # egid CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Egyptian national ID toolkit.
///
/// Decodes 14-digit national ID numbers into birth date, governorate,
/// sequence, and gender, and inspects the governorate code table.
#[derive(Parser, Debug)]
#[command(name = "egid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode a national ID (or a batch from stdin) to JSON.
    Decode(egid_cli::decode::DecodeArgs),
    /// Print the governorate code table.
    Governorates(egid_cli::governorates::GovernoratesArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(args) => egid_cli::decode::run(&args),
        Commands::Governorates(args) => egid_cli::governorates::run(&args),
    }
}
