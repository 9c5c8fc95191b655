//! # egid-cli — National ID Command-Line Interface
//!
//! Thin command-line surface over `egid-core`. Takes the same strings an
//! OCR pipeline would hand over and prints the structured decode result
//! as JSON, one record per ID.
//!
//! ## Subcommands
//!
//! - `decode` — Decode a single ID, or a line-delimited batch from stdin
//! - `governorates` — Print the governorate code table
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from handler logic.
//! - Handler functions delegate to `egid-core` — no decoding rules here.
//! - Batch mode never aborts mid-stream: per-record failures become
//!   per-record JSON output, matching how an extraction pipeline reports
//!   unreadable IDs without dropping the rest of the batch.

pub mod decode;
pub mod governorates;
