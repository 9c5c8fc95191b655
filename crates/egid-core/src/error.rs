//! # Error Types — Decode Failure Taxonomy
//!
//! Defines [`DecodeError`], the exhaustive set of reasons a national ID
//! string can be rejected. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every rejection is a normal, expected outcome reported as a value.
//!   Nothing here panics and nothing is logged-and-swallowed.
//! - There is no retry policy: decoding is deterministic over an immutable
//!   input, so a failed input fails forever.
//! - An unknown governorate code is deliberately NOT in this taxonomy.
//!   The code table varies over time, so unrecognized codes decode
//!   successfully with an unknown marker instead of failing.

use thiserror::Error;

/// The exhaustive failure taxonomy for national ID decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not exactly 14 ASCII decimal digits.
    ///
    /// Covers wrong length, empty input, whitespace, Arabic-Indic digits,
    /// and any other non-digit character an OCR stage may emit.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Leading century digit is neither `2` (1900s) nor `3` (2000s).
    #[error("unknown century code: {0}")]
    InvalidCenturyCode(char),

    /// Month component is outside 1..=12.
    #[error("invalid month: {0:02}")]
    InvalidMonth(u8),

    /// Day component is outside 1..=31.
    ///
    /// The encoding is not calendar-validated: day 31 in a 30-day month
    /// passes. This mirrors the ID format itself, which carries no
    /// month-length or leap-year constraint.
    #[error("invalid day: {0:02}")]
    InvalidDay(u8),
}
