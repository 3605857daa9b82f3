//! Supplemental-data tests: logical merge and attach-time validation.

use std::collections::BTreeMap;

use ccode_core::{CodeError, ConvertOptions, CountryCode};

fn columns(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    pairs
        .iter()
        .map(|(name, values)| {
            (
                name.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn supplemental_rows_cover_missing_codes() {
    let data = columns(&[
        ("ISO2", &["XK"]),
        ("name_short", &["Kosovo"]),
        ("name_zh", &["科索沃"]),
    ]);
    let resolver = CountryCode::with_supplemental(data).unwrap();
    let result = resolver
        .convert("XK", &ConvertOptions::new().with_source("ISO2"))
        .unwrap();
    assert_eq!(result.as_deref(), Some("科索沃"));
}

#[test]
fn base_table_wins_over_supplemental() {
    let data = columns(&[("ISO2", &["CN"]), ("name_zh", &["不是中国"])]);
    let resolver = CountryCode::with_supplemental(data).unwrap();
    let result = resolver
        .convert("CN", &ConvertOptions::new().with_source("ISO2"))
        .unwrap();
    assert_eq!(result.as_deref(), Some("中国"));
}

#[test]
fn user_columns_are_resolvable_targets() {
    let data = columns(&[("ISO2", &["CN", "US"]), ("continent", &["Asia", "North America"])]);
    let resolver = CountryCode::with_supplemental(data).unwrap();
    let result = resolver
        .convert(
            "CN",
            &ConvertOptions::new()
                .with_source("ISO2")
                .with_target("continent"),
        )
        .unwrap();
    assert_eq!(result.as_deref(), Some("Asia"));
}

#[test]
fn alias_spelled_identifier_columns_are_recognized() {
    // "alpha_2" resolves to ISO2, so it counts as an identifying column.
    let data = columns(&[("alpha_2", &["XK"]), ("name_zh", &["科索沃"])]);
    let resolver = CountryCode::with_supplemental(data).unwrap();
    let result = resolver
        .convert("XK", &ConvertOptions::new().with_source("ISO2"))
        .unwrap();
    assert_eq!(result.as_deref(), Some("科索沃"));
}

#[test]
fn supplemental_without_identifier_is_rejected() {
    let data = columns(&[("continent", &["Asia"])]);
    let result = CountryCode::with_supplemental(data);
    assert!(matches!(
        result,
        Err(CodeError::InvalidSupplementalData { .. })
    ));
}

#[test]
fn ragged_supplemental_columns_are_rejected() {
    let data = columns(&[("ISO2", &["XK", "AA"]), ("name_zh", &["科索沃"])]);
    let result = CountryCode::with_supplemental(data);
    assert!(matches!(
        result,
        Err(CodeError::InvalidSupplementalData { .. })
    ));
}

#[test]
fn empty_supplemental_is_rejected() {
    let data: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let result = CountryCode::with_supplemental(data);
    assert!(matches!(
        result,
        Err(CodeError::InvalidSupplementalData { .. })
    ));
}

#[test]
fn supplemental_misses_still_resolve_to_sentinel() {
    let data = columns(&[("ISO2", &["XK"]), ("name_zh", &["科索沃"])]);
    let resolver = CountryCode::with_supplemental(data).unwrap();
    let result = resolver
        .convert(
            "QQ",
            &ConvertOptions::new().with_source("ISO2").with_not_found("未知"),
        )
        .unwrap();
    assert_eq!(result.as_deref(), Some("未知"));
}
