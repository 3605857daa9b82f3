#![deny(unsafe_code)]

//! Embedded country reference data and its loader.
//!
//! The reference table is an immutable snapshot: loaded once per resolver,
//! never mutated afterwards.

pub mod embedded;

use std::collections::BTreeMap;
use std::io::Cursor;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use ccode_model::{CodeError, Result};

/// Parse the embedded country table into a `DataFrame`.
///
/// Numeric code columns (`ISOnumeric`, `UNcode`, `FAOcode`) come back as
/// integers with nulls where a territory has no code.
pub fn load_reference_table() -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(Cursor::new(embedded::COUNTRY_TABLE_CSV))
        .finish()
        .map_err(|e| CodeError::table(format!("parse embedded country table: {e}")))
}

/// Parse the embedded field-description catalog.
pub fn field_descriptions() -> Result<BTreeMap<String, String>> {
    serde_json::from_str(embedded::FIELD_INFO_JSON)
        .map_err(|e| CodeError::table(format!("parse embedded field info: {e}")))
}
