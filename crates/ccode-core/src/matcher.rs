//! Row matching against the reference table.
//!
//! Both paths run a single pass over the table: the equality path is one
//! vectorized lazy filter, the regex path one scan of the pre-compiled
//! pattern set followed by a gather of the matching row indices.

use polars::prelude::{DataFrame, IdxCa, IntoLazy, col, lit};
use regex::{Regex, RegexBuilder};

use ccode_model::{CanonicalField, CodeError, CodeValue, Result};

/// Compile the `regex` column into an index-aligned pattern set.
///
/// Null or blank cells compile to `None` and never match. The returned list
/// has exactly one entry per table row.
pub fn compile_pattern_set(df: &DataFrame) -> Result<Vec<Option<Regex>>> {
    let column = df
        .column(CanonicalField::Pattern.as_str())
        .map_err(|e| CodeError::table(format!("pattern column: {e}")))?;
    let strings = column
        .str()
        .map_err(|e| CodeError::table(format!("pattern column dtype: {e}")))?;
    let mut patterns = Vec::with_capacity(df.height());
    for cell in strings.into_iter() {
        let pattern = match cell {
            Some(text) if !text.trim().is_empty() => Some(
                RegexBuilder::new(text.trim())
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| CodeError::table(format!("bad pattern {text:?}: {e}")))?,
            ),
            _ => None,
        };
        patterns.push(pattern);
    }
    Ok(patterns)
}

/// Rows whose value in `column` equals the probe under its natural equality.
///
/// Integer columns compare under numeric equality; a probe that does not
/// parse as an integer yields an empty result. String columns compare under
/// exact, case-sensitive equality (codes are case-normalized upstream only
/// for field names, not for data values).
pub fn filter_equal(df: &DataFrame, column: &str, probe: &CodeValue) -> Result<DataFrame> {
    let dtype = df
        .column(column)
        .map_err(|e| CodeError::table(format!("column {column}: {e}")))?
        .dtype()
        .clone();
    let expr = if dtype.is_integer() {
        match probe.as_int() {
            Some(number) => col(column).eq(lit(number)),
            None => return Ok(df.head(Some(0))),
        }
    } else {
        col(column).eq(lit(probe.as_text()))
    };
    df.clone()
        .lazy()
        .filter(expr)
        .collect()
        .map_err(|e| CodeError::table(format!("filter {column}: {e}")))
}

/// Rows whose pre-compiled pattern matches the probe's text form.
///
/// `patterns` must be index-aligned with `df`; rows without a pattern are
/// skipped.
pub fn filter_pattern(
    df: &DataFrame,
    patterns: &[Option<Regex>],
    probe: &CodeValue,
) -> Result<DataFrame> {
    debug_assert_eq!(patterns.len(), df.height());
    let text = probe.as_text();
    let trimmed = text.trim();
    let indices: Vec<u32> = patterns
        .iter()
        .enumerate()
        .filter_map(|(idx, pattern)| {
            pattern
                .as_ref()
                .is_some_and(|re| re.is_match(trimmed))
                .then_some(idx as u32)
        })
        .collect();
    let indices = IdxCa::from_vec("idx".into(), indices);
    df.take(&indices)
        .map_err(|e| CodeError::table(format!("gather pattern matches: {e}")))
}
