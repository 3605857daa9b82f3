//! The closed set of canonical fields the lookup engine understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A canonical column of the reference table.
///
/// Every caller-facing field name or alias resolves to exactly one of these
/// before any lookup runs; downstream code never sees raw user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalField {
    /// ISO 3166-1 alpha-2 code (e.g., "CN").
    Iso2,
    /// ISO 3166-1 alpha-3 code (e.g., "CHN").
    Iso3,
    /// ISO 3166-1 numeric code (e.g., 156).
    IsoNumeric,
    /// UN M49 numeric area code.
    UnCode,
    /// FAO numeric country code.
    FaoCode,
    /// EXIOBASE 3 region code.
    Exio3,
    /// Short English name (e.g., "China").
    NameShort,
    /// Official English name (e.g., "People's Republic of China").
    NameOfficial,
    /// Short Chinese name (e.g., "中国").
    NameZh,
    /// Official Chinese name (e.g., "中华人民共和国").
    OfficialNameZh,
    /// Free-text matching pattern column.
    Pattern,
}

impl CanonicalField {
    /// Every canonical field, in reference-table column order.
    pub const ALL: [CanonicalField; 11] = [
        CanonicalField::Iso2,
        CanonicalField::Iso3,
        CanonicalField::IsoNumeric,
        CanonicalField::UnCode,
        CanonicalField::FaoCode,
        CanonicalField::Exio3,
        CanonicalField::NameShort,
        CanonicalField::NameOfficial,
        CanonicalField::NameZh,
        CanonicalField::OfficialNameZh,
        CanonicalField::Pattern,
    ];

    /// The column name as it appears in the reference table.
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalField::Iso2 => "ISO2",
            CanonicalField::Iso3 => "ISO3",
            CanonicalField::IsoNumeric => "ISOnumeric",
            CanonicalField::UnCode => "UNcode",
            CanonicalField::FaoCode => "FAOcode",
            CanonicalField::Exio3 => "EXIO3",
            CanonicalField::NameShort => "name_short",
            CanonicalField::NameOfficial => "name_official",
            CanonicalField::NameZh => "name_zh",
            CanonicalField::OfficialNameZh => "official_name_zh",
            CanonicalField::Pattern => "regex",
        }
    }

    /// Parse a canonical column name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// True for columns holding integer codes.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            CanonicalField::IsoNumeric | CanonicalField::UnCode | CanonicalField::FaoCode
        )
    }

    /// True for columns eligible for free-text/regex matching.
    pub fn is_name_like(self) -> bool {
        matches!(
            self,
            CanonicalField::NameShort
                | CanonicalField::NameOfficial
                | CanonicalField::NameZh
                | CanonicalField::OfficialNameZh
                | CanonicalField::Pattern
        )
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("not a canonical field: {s}"))
    }
}

/// A resolved field reference, either canonical or a caller-supplied
/// supplemental column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedField {
    Canonical(CanonicalField),
    Supplemental(String),
}

impl ResolvedField {
    /// The column name this reference points at.
    pub fn column_name(&self) -> &str {
        match self {
            ResolvedField::Canonical(field) => field.as_str(),
            ResolvedField::Supplemental(name) => name.as_str(),
        }
    }

    pub fn as_canonical(&self) -> Option<CanonicalField> {
        match self {
            ResolvedField::Canonical(field) => Some(*field),
            ResolvedField::Supplemental(_) => None,
        }
    }
}

impl fmt::Display for ResolvedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
