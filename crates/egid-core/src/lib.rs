//! # egid-core — Egyptian National ID Primitives
//!
//! This crate is the foundation of the egid toolkit. It defines the
//! validated identifier newtype and the decoder that turns a raw 14-digit
//! Egyptian national ID string into a structured identity record. Upstream
//! producers (digit detection, OCR) and downstream consumers (UIs, export
//! pipelines) live outside this crate; they exchange plain strings and
//! serialized records with it.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for the identifier.** [`NationalIdNumber`] has a
//!    validated constructor. No bare strings reach the decoder: wrong
//!    length, whitespace, Arabic-Indic digits, and OCR artifacts are all
//!    rejected at construction.
//!
//! 2. **Single `Governorate` enum.** One definition, 28 variants, covering
//!    the fixed code table including the born-abroad code `88`. Codes
//!    outside the table decode to an explicit unknown marker, never a hard
//!    failure — the table drifts over time and new codes exist.
//!
//! 3. **Decoding is a pure function.** No I/O, no shared mutable state,
//!    bounded constant time over the fixed-length input. Safe to call
//!    concurrently without coordination.
//!
//! 4. **All rejections are typed.** [`DecodeError`] has exactly four
//!    variants; every failure path returns one of them through `Result`.
//!    A [`DecodedIdentity`] is produced only from a syntactically valid
//!    input — there are no partially populated records.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `egid-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod decode;
pub mod error;
pub mod governorate;
pub mod nid;

// Re-export primary types for ergonomic imports.
pub use decode::{decode, Century, DecodedIdentity, Gender};
pub use error::DecodeError;
pub use governorate::{Governorate, GOVERNORATE_COUNT};
pub use nid::{NationalIdNumber, NATIONAL_ID_LENGTH};
