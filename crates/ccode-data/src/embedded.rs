//! Embedded reference data.
//!
//! The country table and its field-description sidecar are embedded at
//! compile time with `include_str!()`, so resolvers need no runtime file I/O
//! or path resolution.

/// Country reference table, one row per country/territory.
///
/// Columns are exactly the canonical field names; the `regex` column holds
/// per-row free-text matching patterns.
pub const COUNTRY_TABLE_CSV: &str = include_str!("../data/country.csv");

/// Human-readable description per canonical field name.
pub const FIELD_INFO_JSON: &str = include_str!("../data/field_info.json");
