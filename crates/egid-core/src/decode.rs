//! # National ID Decoder
//!
//! Turns a validated 14-digit ID into a [`DecodedIdentity`]: birth date,
//! governorate, enrollment sequence, gender, and check digit.
//!
//! ## Digit Layout
//!
//! ```text
//! C YY MM DD GG SSS X K
//! │ │  │  │  │  │   │ └─ check digit (stored, not verified)
//! │ │  │  │  │  │   └─── gender digit (odd male, even female)
//! │ │  │  │  │  └─────── enrollment sequence
//! │ │  │  │  └────────── governorate code
//! │ │  │  └───────────── day of birth (1–31, no calendar cross-check)
//! │ │  └──────────────── month of birth (1–12)
//! │ └─────────────────── two-digit birth year
//! └───────────────────── century (2 = 1900s, 3 = 2000s)
//! ```
//!
//! Decoding is single-pass with no retained state. The same input always
//! produces a field-for-field identical record.
//!
//! The check digit has no public checksum formula, so it is stored and
//! exposed as-is. Anyone extending this decoder with verification would
//! need a formula the format's issuer has not published.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::DecodeError;
use crate::governorate::Governorate;
use crate::nid::NationalIdNumber;

/// The birth century encoded in the leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Century {
    /// Leading digit `2`: born 1900–1999.
    #[serde(rename = "1900s")]
    Twentieth,
    /// Leading digit `3`: born 2000–2099.
    #[serde(rename = "2000s")]
    TwentyFirst,
}

impl Century {
    /// Map the leading ID digit to a century.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            2 => Some(Self::Twentieth),
            3 => Some(Self::TwentyFirst),
            _ => None,
        }
    }

    /// The year the two-digit birth year is added to.
    pub fn base_year(&self) -> u16 {
        match self {
            Self::Twentieth => 1900,
            Self::TwentyFirst => 2000,
        }
    }

    /// Stable string identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twentieth => "1900s",
            Self::TwentyFirst => "2000s",
        }
    }
}

impl std::fmt::Display for Century {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender as encoded in the parity of the 13th digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Odd gender digit (1, 3, 5, 7, 9).
    Male,
    /// Even gender digit (0, 2, 4, 6, 8).
    Female,
}

impl Gender {
    /// Decode gender from the 13th digit's parity.
    pub fn from_digit(digit: u8) -> Self {
        if digit % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The structured identity decoded from a national ID.
///
/// Constructed only by [`decode`] and only from a syntactically valid
/// input; immutable afterwards. Every field is populated — there is no
/// partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    /// The ID this record was decoded from.
    pub national_id: NationalIdNumber,
    /// Birth century from the leading digit.
    pub century: Century,
    /// Full four-digit birth year.
    pub birth_year: u16,
    /// Birth month, 1–12.
    pub birth_month: u8,
    /// Birth day, 1–31. Not calendar-validated.
    pub birth_day: u8,
    /// Digits 8–9, verbatim.
    pub governorate_code: String,
    /// Table lookup of the governorate code. `None` for codes outside
    /// the fixed table; that is a decodable record, not a failure.
    pub governorate: Option<Governorate>,
    /// Digits 10–12, the unique-enrollment counter. Opaque; leading
    /// zeros preserved.
    pub sequence: String,
    /// Gender from the parity of digit 13.
    pub gender: Gender,
    /// Digit 14, stored verbatim. No public checksum formula exists, so
    /// it is never verified against the other fields.
    pub check_digit: u8,
}

impl DecodedIdentity {
    /// Birth date formatted as `YYYY-MM-DD`.
    pub fn birth_date(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.birth_year, self.birth_month, self.birth_day
        )
    }

    /// Resolved governorate display name, or `"Unknown"` for codes
    /// outside the table.
    pub fn governorate_name(&self) -> &'static str {
        match self.governorate {
            Some(g) => g.name(),
            None => "Unknown",
        }
    }

    /// Flatten the record into an ordered map with stable string keys,
    /// suitable for JSON-like export.
    pub fn to_fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("national_id", self.national_id.to_string()),
            ("century", self.century.as_str().to_owned()),
            ("birth_year", self.birth_year.to_string()),
            ("birth_month", self.birth_month.to_string()),
            ("birth_day", self.birth_day.to_string()),
            ("birth_date", self.birth_date()),
            ("governorate_code", self.governorate_code.clone()),
            ("governorate", self.governorate_name().to_owned()),
            ("sequence", self.sequence.clone()),
            ("gender", self.gender.name().to_owned()),
            ("check_digit", self.check_digit.to_string()),
        ])
    }
}

impl NationalIdNumber {
    /// Decode this ID into a [`DecodedIdentity`].
    ///
    /// Pure and deterministic: no I/O, no shared state, bounded constant
    /// time over the fixed-length input.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidCenturyCode`] — leading digit is not `2`
    ///   or `3`.
    /// - [`DecodeError::InvalidMonth`] — month outside 1..=12.
    /// - [`DecodeError::InvalidDay`] — day outside 1..=31.
    ///
    /// An unrecognized governorate code is NOT an error; the record
    /// decodes with [`DecodedIdentity::governorate`] set to `None`.
    pub fn decode(&self) -> Result<DecodedIdentity, DecodeError> {
        let century_digit = self.digit(0);
        let century = Century::from_digit(century_digit).ok_or_else(|| {
            DecodeError::InvalidCenturyCode((b'0' + century_digit) as char)
        })?;

        let birth_year = century.base_year() + u16::from(self.two_digits(1));

        let birth_month = self.two_digits(3);
        if !(1..=12).contains(&birth_month) {
            return Err(DecodeError::InvalidMonth(birth_month));
        }

        let birth_day = self.two_digits(5);
        if !(1..=31).contains(&birth_day) {
            return Err(DecodeError::InvalidDay(birth_day));
        }

        let governorate_code = self.span(7, 9).to_owned();
        let governorate = Governorate::from_code(&governorate_code);

        Ok(DecodedIdentity {
            national_id: self.clone(),
            century,
            birth_year,
            birth_month,
            birth_day,
            governorate_code,
            governorate,
            sequence: self.span(9, 12).to_owned(),
            gender: Gender::from_digit(self.digit(12)),
            check_digit: self.digit(13),
        })
    }
}

/// Validate and decode a raw ID string in one call.
///
/// This is the single entry point the rest of the toolkit uses: format
/// validation first, interpretation second. Any rejection comes back as
/// a [`DecodeError`] value — nothing panics on malformed input.
pub fn decode(raw: &str) -> Result<DecodedIdentity, DecodeError> {
    NationalIdNumber::parse(raw)?.decode()
}
