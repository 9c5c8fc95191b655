//! # National ID Newtype
//!
//! [`NationalIdNumber`] wraps a syntactically valid 14-digit Egyptian
//! national ID string. The constructor is the only way in: anything that
//! is not exactly 14 ASCII decimal digits is rejected before any
//! interpretation begins.
//!
//! ## Security Invariant
//!
//! Input arrives from an OCR pipeline and is untrusted. Misreads show up
//! as wrong lengths, stray whitespace, Latin letters, or Arabic-Indic
//! digits (`٠`–`٩`), which are digits to a human reader but not to this
//! format. Validation at construction means every downstream consumer of
//! a `NationalIdNumber` can index its 14 bytes without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Number of digits in an Egyptian national ID.
pub const NATIONAL_ID_LENGTH: usize = 14;

/// A syntactically valid Egyptian national ID: exactly 14 ASCII decimal
/// digits.
///
/// Syntactic validity does not imply the ID decodes — the century, month,
/// and day fields are checked by [`decode`](NationalIdNumber::decode),
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalIdNumber(String);

impl NationalIdNumber {
    /// Validate and wrap a raw ID string.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidFormat`] if the input is not exactly
    /// 14 characters or contains any non-ASCII-digit character.
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let char_count = raw.chars().count();
        if char_count != NATIONAL_ID_LENGTH {
            return Err(DecodeError::InvalidFormat(format!(
                "expected {NATIONAL_ID_LENGTH} digits, got {char_count} characters"
            )));
        }

        if let Some(c) = raw.chars().find(|c| !c.is_ascii_digit()) {
            return Err(DecodeError::InvalidFormat(format!(
                "non-digit character {c:?}"
            )));
        }

        Ok(Self(raw.to_owned()))
    }

    /// The raw 14-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the digit at `index` (0-based, 0..14).
    ///
    /// The constructor guarantees 14 ASCII digits, so indexing by byte is
    /// safe and each byte maps directly to its digit value.
    pub(crate) fn digit(&self, index: usize) -> u8 {
        self.0.as_bytes()[index] - b'0'
    }

    /// Substring of digits `[start, end)`, verbatim.
    pub(crate) fn span(&self, start: usize, end: usize) -> &str {
        &self.0[start..end]
    }

    /// Two-digit numeric value of digits `[start, start + 2)`.
    pub(crate) fn two_digits(&self, start: usize) -> u8 {
        self.digit(start) * 10 + self.digit(start + 1)
    }
}

impl std::fmt::Display for NationalIdNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NationalIdNumber {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NationalIdNumber {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NationalIdNumber> for String {
    fn from(id: NationalIdNumber) -> Self {
        id.0
    }
}
