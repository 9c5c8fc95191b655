//! # Governorate Code Table — Single Source of Truth
//!
//! Defines the [`Governorate`] enum with all 28 codes the national ID
//! format assigns, including the born-abroad code `88`. This is the ONE
//! definition used across the toolkit. Every `match` on `Governorate`
//! must be exhaustive — adding a code forces every consumer to handle it
//! at compile time.
//!
//! The table is a process-wide constant: read-only, never mutated, safe
//! to share across threads without synchronization.
//!
//! Codes outside this table are not an error. Governorate assignments
//! have shifted over time (Luxor's code `29` is younger than the rest of
//! the table), so lookup returns `Option` and callers surface an unknown
//! marker instead of failing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DecodeError;

/// An Egyptian governorate as encoded in digits 8–9 of the national ID.
///
/// # Codes
///
/// | Code | Governorate | Code | Governorate |
/// |------|-------------|------|-------------|
/// | 01 | Cairo | 22 | Beni Suef |
/// | 02 | Alexandria | 23 | Fayoum |
/// | 03 | Port Said | 24 | El Menia |
/// | 04 | Suez | 25 | Assiut |
/// | 11 | Damietta | 26 | Sohag |
/// | 12 | Dakahlia | 27 | Qena |
/// | 13 | Ash Sharqia | 28 | Aswan |
/// | 14 | Kaliobeya | 29 | Luxor |
/// | 15 | Kafr El-Sheikh | 31 | Red Sea |
/// | 16 | Gharbia | 32 | New Valley |
/// | 17 | Monoufia | 33 | Matrouh |
/// | 18 | El Beheira | 34 | North Sinai |
/// | 19 | Ismailia | 35 | South Sinai |
/// | 21 | Giza | 88 | Foreign (born abroad) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Governorate {
    /// Code 01.
    Cairo,
    /// Code 02.
    Alexandria,
    /// Code 03.
    PortSaid,
    /// Code 04.
    Suez,
    /// Code 11.
    Damietta,
    /// Code 12.
    Dakahlia,
    /// Code 13.
    Sharqia,
    /// Code 14.
    Qalyubia,
    /// Code 15.
    KafrElSheikh,
    /// Code 16.
    Gharbia,
    /// Code 17.
    Monoufia,
    /// Code 18.
    Beheira,
    /// Code 19.
    Ismailia,
    /// Code 21.
    Giza,
    /// Code 22.
    BeniSuef,
    /// Code 23.
    Fayoum,
    /// Code 24.
    Minya,
    /// Code 25.
    Assiut,
    /// Code 26.
    Sohag,
    /// Code 27.
    Qena,
    /// Code 28.
    Aswan,
    /// Code 29.
    Luxor,
    /// Code 31.
    RedSea,
    /// Code 32.
    NewValley,
    /// Code 33.
    Matrouh,
    /// Code 34.
    NorthSinai,
    /// Code 35.
    SouthSinai,
    /// Code 88 — issued to citizens born abroad.
    Foreign,
}

/// Total number of governorate codes. Used for compile-time assertions.
pub const GOVERNORATE_COUNT: usize = 28;

impl Governorate {
    /// Look up a governorate by its two-digit code.
    ///
    /// Returns `None` for codes outside the table. Unknown codes are a
    /// policy matter for the caller, not a failure here.
    pub fn from_code(code: &str) -> Option<Self> {
        let governorate = match code {
            "01" => Self::Cairo,
            "02" => Self::Alexandria,
            "03" => Self::PortSaid,
            "04" => Self::Suez,
            "11" => Self::Damietta,
            "12" => Self::Dakahlia,
            "13" => Self::Sharqia,
            "14" => Self::Qalyubia,
            "15" => Self::KafrElSheikh,
            "16" => Self::Gharbia,
            "17" => Self::Monoufia,
            "18" => Self::Beheira,
            "19" => Self::Ismailia,
            "21" => Self::Giza,
            "22" => Self::BeniSuef,
            "23" => Self::Fayoum,
            "24" => Self::Minya,
            "25" => Self::Assiut,
            "26" => Self::Sohag,
            "27" => Self::Qena,
            "28" => Self::Aswan,
            "29" => Self::Luxor,
            "31" => Self::RedSea,
            "32" => Self::NewValley,
            "33" => Self::Matrouh,
            "34" => Self::NorthSinai,
            "35" => Self::SouthSinai,
            "88" => Self::Foreign,
            _ => return None,
        };
        Some(governorate)
    }

    /// Returns the two-digit code for this governorate.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cairo => "01",
            Self::Alexandria => "02",
            Self::PortSaid => "03",
            Self::Suez => "04",
            Self::Damietta => "11",
            Self::Dakahlia => "12",
            Self::Sharqia => "13",
            Self::Qalyubia => "14",
            Self::KafrElSheikh => "15",
            Self::Gharbia => "16",
            Self::Monoufia => "17",
            Self::Beheira => "18",
            Self::Ismailia => "19",
            Self::Giza => "21",
            Self::BeniSuef => "22",
            Self::Fayoum => "23",
            Self::Minya => "24",
            Self::Assiut => "25",
            Self::Sohag => "26",
            Self::Qena => "27",
            Self::Aswan => "28",
            Self::Luxor => "29",
            Self::RedSea => "31",
            Self::NewValley => "32",
            Self::Matrouh => "33",
            Self::NorthSinai => "34",
            Self::SouthSinai => "35",
            Self::Foreign => "88",
        }
    }

    /// Returns the English display name for this governorate.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cairo => "Cairo",
            Self::Alexandria => "Alexandria",
            Self::PortSaid => "Port Said",
            Self::Suez => "Suez",
            Self::Damietta => "Damietta",
            Self::Dakahlia => "Dakahlia",
            Self::Sharqia => "Ash Sharqia",
            Self::Qalyubia => "Kaliobeya",
            Self::KafrElSheikh => "Kafr El - Sheikh",
            Self::Gharbia => "Gharbia",
            Self::Monoufia => "Monoufia",
            Self::Beheira => "El Beheira",
            Self::Ismailia => "Ismailia",
            Self::Giza => "Giza",
            Self::BeniSuef => "Beni Suef",
            Self::Fayoum => "Fayoum",
            Self::Minya => "El Menia",
            Self::Assiut => "Assiut",
            Self::Sohag => "Sohag",
            Self::Qena => "Qena",
            Self::Aswan => "Aswan",
            Self::Luxor => "Luxor",
            Self::RedSea => "Red Sea",
            Self::NewValley => "New Valley",
            Self::Matrouh => "Matrouh",
            Self::NorthSinai => "North Sinai",
            Self::SouthSinai => "South Sinai",
            Self::Foreign => "Foreign",
        }
    }

    /// Returns all 28 governorates in code order.
    pub fn all() -> &'static [Governorate] {
        &[
            Self::Cairo,
            Self::Alexandria,
            Self::PortSaid,
            Self::Suez,
            Self::Damietta,
            Self::Dakahlia,
            Self::Sharqia,
            Self::Qalyubia,
            Self::KafrElSheikh,
            Self::Gharbia,
            Self::Monoufia,
            Self::Beheira,
            Self::Ismailia,
            Self::Giza,
            Self::BeniSuef,
            Self::Fayoum,
            Self::Minya,
            Self::Assiut,
            Self::Sohag,
            Self::Qena,
            Self::Aswan,
            Self::Luxor,
            Self::RedSea,
            Self::NewValley,
            Self::Matrouh,
            Self::NorthSinai,
            Self::SouthSinai,
            Self::Foreign,
        ]
    }
}

impl std::fmt::Display for Governorate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Governorate {
    type Err = DecodeError;

    /// Parse a governorate from its two-digit code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| DecodeError::InvalidFormat(format!("unknown governorate code: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(Governorate::all().len(), GOVERNORATE_COUNT);
        assert_eq!(Governorate::all().len(), 28);
    }

    #[test]
    fn test_all_unique_codes() {
        let mut seen = std::collections::HashSet::new();
        for g in Governorate::all() {
            assert!(seen.insert(g.code()), "Duplicate code: {}", g.code());
        }
    }

    #[test]
    fn test_code_roundtrip() {
        for g in Governorate::all() {
            let looked_up = Governorate::from_code(g.code())
                .unwrap_or_else(|| panic!("Code {:?} missing from table", g.code()));
            assert_eq!(*g, looked_up);
        }
    }

    #[test]
    fn test_known_lookups() {
        assert_eq!(Governorate::from_code("01"), Some(Governorate::Cairo));
        assert_eq!(Governorate::from_code("29"), Some(Governorate::Luxor));
        assert_eq!(Governorate::from_code("88"), Some(Governorate::Foreign));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(Governorate::from_code("00"), None);
        assert_eq!(Governorate::from_code("05"), None);
        assert_eq!(Governorate::from_code("36"), None);
        assert_eq!(Governorate::from_code("99"), None);
        assert_eq!(Governorate::from_code("1"), None);
    }

    #[test]
    fn test_display_matches_name() {
        for g in Governorate::all() {
            assert_eq!(format!("{g}"), g.name());
        }
    }

    #[test]
    fn test_from_str_by_code() {
        let g: Governorate = "21".parse().unwrap();
        assert_eq!(g, Governorate::Giza);
        assert!("xx".parse::<Governorate>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        for g in Governorate::all() {
            let json = serde_json::to_string(g).unwrap();
            let parsed: Governorate = serde_json::from_str(&json).unwrap();
            assert_eq!(*g, parsed);
        }
    }
}
