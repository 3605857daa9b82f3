//! The conversion facade.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, IntoColumn, IntoLazy, NamedFrom, Series, col};
use regex::Regex;

use ccode_data::{field_descriptions, load_reference_table};
use ccode_model::{
    AliasRegistry, CanonicalField, CodeError, CodeValue, ConvertOptions, OutputShape,
    ResolvedField, Result, Source, UNIQUE_ID_FIELDS,
};

use crate::guess::guess_format;
use crate::matcher::{compile_pattern_set, filter_equal, filter_pattern};
use crate::polars_utils::any_to_string;
use crate::resolver::FieldResolver;

/// Caller-supplied rows merged logically into lookups.
#[derive(Debug, Clone)]
pub enum SupplementalData {
    /// An already-built frame.
    Frame(DataFrame),
    /// Column name -> parallel values.
    Columns(BTreeMap<String, Vec<String>>),
}

impl From<DataFrame> for SupplementalData {
    fn from(frame: DataFrame) -> Self {
        SupplementalData::Frame(frame)
    }
}

impl From<BTreeMap<String, Vec<String>>> for SupplementalData {
    fn from(columns: BTreeMap<String, Vec<String>>) -> Self {
        SupplementalData::Columns(columns)
    }
}

/// Result of a batch conversion.
#[derive(Debug, Clone)]
pub enum SeriesOutput {
    List(Vec<Option<String>>),
    Series(Series),
    Frame(DataFrame),
}

impl SeriesOutput {
    /// Number of converted elements; always equals the input length.
    pub fn len(&self) -> usize {
        match self {
            SeriesOutput::List(values) => values.len(),
            SeriesOutput::Series(series) => series.len(),
            SeriesOutput::Frame(frame) => frame.height(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_list(self) -> Option<Vec<Option<String>>> {
        match self {
            SeriesOutput::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Country-code resolver.
///
/// Holds an immutable snapshot of the reference table, the pattern set
/// compiled from its `regex` column, and optional supplemental data. Safe to
/// share read-only across threads; no write path exists after construction.
#[derive(Debug, Clone)]
pub struct CountryCode {
    table: DataFrame,
    patterns: Vec<Option<Regex>>,
    supplemental: Option<DataFrame>,
    resolver: FieldResolver,
    descriptions: BTreeMap<String, String>,
}

impl CountryCode {
    /// Resolver over the built-in reference table only.
    pub fn new() -> Result<Self> {
        Self::build(AliasRegistry::default(), None)
    }

    /// Resolver with supplemental data covering codes or columns absent from
    /// the built-in table.
    ///
    /// Fails with `InvalidSupplementalData` when the data has ragged columns
    /// or lacks every recognized identifying column. Validation happens here,
    /// not at lookup time.
    pub fn with_supplemental(data: impl Into<SupplementalData>) -> Result<Self> {
        Self::build(AliasRegistry::default(), Some(data.into()))
    }

    /// Resolver with a custom alias registry.
    pub fn with_registry(registry: AliasRegistry) -> Result<Self> {
        Self::build(registry, None)
    }

    fn build(registry: AliasRegistry, supplemental: Option<SupplementalData>) -> Result<Self> {
        let table = load_reference_table()?;
        let patterns = compile_pattern_set(&table)?;
        let supplemental = supplemental.map(|data| validate_supplemental(&registry, data)).transpose()?;
        let supplemental_columns: Vec<String> = supplemental
            .as_ref()
            .map(|frame| {
                frame
                    .get_column_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect()
            })
            .unwrap_or_default();
        let resolver = FieldResolver::new(
            registry,
            table.get_column_names().iter().map(|name| name.as_str()),
        )
        .with_supplemental_columns(supplemental_columns);
        let descriptions = field_descriptions()?;
        Ok(Self {
            table,
            patterns,
            supplemental,
            resolver,
            descriptions,
        })
    }

    /// Convert a single value from a source representation to a target one.
    ///
    /// `Source::Auto` infers the format from the value's shape; any other
    /// source is resolved through the alias registry. The target alias
    /// `"name"` always maps to the short-name column. Misses resolve to the
    /// options' not-found sentinel (or `None`); an unresolvable field name
    /// fails immediately and is never masked by the sentinel.
    pub fn convert(
        &self,
        code: impl Into<CodeValue>,
        options: &ConvertOptions,
    ) -> Result<Option<String>> {
        let value = code.into();
        let target = self.resolve_target(&options.target)?;
        let source = self.resolve_source(&options.source, &value)?;
        let converted = self.convert_one(&value, &source, &target, options.use_regex)?;
        Ok(apply_sentinel(converted, options.not_found.as_deref()))
    }

    /// Convert a sequence element-wise, preserving order and length.
    ///
    /// The empty input produces an empty output of the requested shape.
    pub fn convert_series<I>(
        &self,
        values: I,
        options: &ConvertOptions,
        shape: OutputShape,
    ) -> Result<SeriesOutput>
    where
        I: IntoIterator,
        I::Item: Into<CodeValue>,
    {
        let values: Vec<CodeValue> = values.into_iter().map(Into::into).collect();
        let target = self.resolve_target(&options.target)?;
        // Resolve a named source once; auto guesses per element below.
        let fixed_source = match &options.source {
            Source::Auto => None,
            Source::Field(name) => Some(self.resolver.resolve(name)?),
        };

        let mut converted: Vec<Option<String>> = Vec::with_capacity(values.len());
        for value in &values {
            let source = match &fixed_source {
                Some(resolved) => resolved.clone(),
                None => ResolvedField::Canonical(guess_format(value)),
            };
            let result = self.convert_one(value, &source, &target, options.use_regex)?;
            converted.push(apply_sentinel(result, options.not_found.as_deref()));
        }

        match shape {
            OutputShape::List => Ok(SeriesOutput::List(converted)),
            OutputShape::Series => Ok(SeriesOutput::Series(Series::new(
                target.column_name().into(),
                converted,
            ))),
            OutputShape::Frame => {
                let inputs: Vec<String> = values.iter().map(CodeValue::as_text).collect();
                let frame = DataFrame::new(vec![
                    Series::new("input".into(), inputs).into_column(),
                    Series::new(target.column_name().into(), converted).into_column(),
                ])
                .map_err(|e| CodeError::table(format!("build output frame: {e}")))?;
                Ok(SeriesOutput::Frame(frame))
            }
        }
    }

    /// Core rows for a field: short names plus the requested columns, with
    /// rows lacking any of them dropped.
    pub fn lookup(&self, field: &str, extra: &[&str]) -> Result<DataFrame> {
        let mut columns: Vec<String> = vec![
            CanonicalField::NameShort.as_str().to_string(),
            CanonicalField::NameZh.as_str().to_string(),
        ];
        let resolved = self.resolver.resolve(field)?;
        push_unique(&mut columns, resolved.column_name());
        for name in extra {
            let resolved = self.resolver.resolve(name)?;
            push_unique(&mut columns, resolved.column_name());
        }
        let exprs: Vec<_> = columns.iter().map(|name| col(name.as_str())).collect();
        self.table
            .clone()
            .lazy()
            .select(exprs)
            .drop_nulls(None)
            .collect()
            .map_err(|e| CodeError::table(format!("lookup projection: {e}")))
    }

    /// Human-readable description of a field.
    ///
    /// Aliases are accepted; the reserved keyword `"all"` (case-insensitive)
    /// returns every described field name joined by `", "`. Unknown names get
    /// a "no information" message rather than an error.
    pub fn describe(&self, field: &str) -> String {
        if let Ok(ResolvedField::Canonical(canonical)) = self.resolver.resolve(field)
            && let Some(text) = self.descriptions.get(canonical.as_str())
        {
            return text.clone();
        }
        if field.trim().eq_ignore_ascii_case("all") {
            let names: Vec<&str> = self.descriptions.keys().map(String::as_str).collect();
            return names.join(", ");
        }
        self.descriptions
            .get(field.trim())
            .cloned()
            .unwrap_or_else(|| format!("no information about field {}", field.trim()))
    }

    /// Every accepted field name: table columns, aliases, supplemental
    /// columns.
    pub fn all_field_names(&self) -> Vec<String> {
        self.resolver.all_field_names()
    }

    /// The canonical reference-table columns.
    pub fn core_field_names(&self) -> Vec<String> {
        self.table
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// The reference table snapshot.
    pub fn reference_table(&self) -> &DataFrame {
        &self.table
    }

    fn resolve_source(&self, source: &Source, value: &CodeValue) -> Result<ResolvedField> {
        match source {
            Source::Auto => Ok(ResolvedField::Canonical(guess_format(value))),
            Source::Field(name) => self.resolver.resolve(name),
        }
    }

    fn resolve_target(&self, target: &str) -> Result<ResolvedField> {
        // "name" always means the short-name column, whatever the registry says.
        if target.trim().eq_ignore_ascii_case("name") {
            return Ok(ResolvedField::Canonical(CanonicalField::NameShort));
        }
        self.resolver.resolve(target)
    }

    fn convert_one(
        &self,
        value: &CodeValue,
        source: &ResolvedField,
        target: &ResolvedField,
        use_regex: bool,
    ) -> Result<Option<String>> {
        // Base table first, when it carries both columns.
        if let Some(result) =
            self.lookup_in(&self.table, Some(&self.patterns), value, source, target, use_regex)?
        {
            return Ok(Some(result));
        }
        // Logical merge: fall back to supplemental rows when the frame has
        // both resolved columns. Equality only; supplemental frames carry no
        // pattern column.
        if let Some(frame) = &self.supplemental
            && let Some(result) = self.lookup_in(frame, None, value, source, target, false)?
        {
            return Ok(Some(result));
        }
        Ok(None)
    }

    fn lookup_in(
        &self,
        frame: &DataFrame,
        patterns: Option<&[Option<Regex>]>,
        value: &CodeValue,
        source: &ResolvedField,
        target: &ResolvedField,
        use_regex: bool,
    ) -> Result<Option<String>> {
        let source_column = source.column_name();
        let target_column = target.column_name();
        if frame.column(source_column).is_err() || frame.column(target_column).is_err() {
            return Ok(None);
        }

        let regex_lookup = match source.as_canonical() {
            Some(CanonicalField::Pattern) => true,
            Some(field) => use_regex && field.is_name_like(),
            None => false,
        };
        let matches = match (regex_lookup, patterns) {
            (true, Some(patterns)) => filter_pattern(frame, patterns, value)?,
            (true, None) => return Ok(None),
            (false, _) => filter_equal(frame, source_column, value)?,
        };

        if matches.height() == 0 {
            return Ok(None);
        }
        if matches.height() > 1 {
            tracing::warn!(
                value = %value,
                field = source_column,
                matches = matches.height(),
                "multiple rows matched; using the first in table order"
            );
        }
        let cell = matches
            .column(target_column)
            .map_err(|e| CodeError::table(format!("target column {target_column}: {e}")))?
            .get(0)
            .map_err(|e| CodeError::table(format!("project target value: {e}")))?;
        Ok(any_to_string(cell))
    }
}

/// One-shot conversion with a fresh resolver.
pub fn convert_country(
    code: impl Into<CodeValue>,
    options: &ConvertOptions,
) -> Result<Option<String>> {
    CountryCode::new()?.convert(code, options)
}

fn apply_sentinel(converted: Option<String>, sentinel: Option<&str>) -> Option<String> {
    match (converted, sentinel) {
        (Some(value), _) => Some(value),
        (None, Some(sentinel)) => Some(sentinel.to_string()),
        (None, None) => None,
    }
}

fn push_unique(columns: &mut Vec<String>, name: &str) {
    if !columns.iter().any(|existing| existing == name) {
        columns.push(name.to_string());
    }
}

fn validate_supplemental(registry: &AliasRegistry, data: SupplementalData) -> Result<DataFrame> {
    let mut frame = match data {
        SupplementalData::Frame(frame) => frame,
        SupplementalData::Columns(columns) => {
            if columns.is_empty() {
                return Err(CodeError::supplemental("no columns supplied"));
            }
            let lengths: Vec<usize> = columns.values().map(Vec::len).collect();
            if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
                return Err(CodeError::supplemental("columns have unequal lengths"));
            }
            let series: Vec<_> = columns
                .into_iter()
                .map(|(name, values)| Series::new(name.into(), values).into_column())
                .collect();
            DataFrame::new(series)
                .map_err(|e| CodeError::supplemental(format!("build frame: {e}")))?
        }
    };

    // Spell canonical-resolvable columns exactly as the base table does, so
    // the logical merge can line them up.
    let renames: Vec<(String, &'static str)> = frame
        .get_column_names()
        .iter()
        .filter_map(|name| {
            registry
                .canonicalize(name.as_str())
                .filter(|field| field.as_str() != name.as_str())
                .map(|field| (name.to_string(), field.as_str()))
        })
        .collect();
    for (from, to) in renames {
        frame
            .rename(&from, to.into())
            .map_err(|e| CodeError::supplemental(format!("rename column {from}: {e}")))?;
    }

    let has_identifier = frame.get_column_names().iter().any(|name| {
        registry
            .canonicalize(name.as_str())
            .is_some_and(|field| UNIQUE_ID_FIELDS.contains(&field))
    });
    if !has_identifier {
        return Err(CodeError::supplemental(
            "no uniquely identifying column (expected one of ISO2, ISO3, name_short, \
             name_zh, official_name_zh, name_official)",
        ));
    }
    Ok(frame)
}
