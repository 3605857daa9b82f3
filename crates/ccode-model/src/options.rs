//! Conversion options.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodeError;

/// Where the input format comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Source {
    /// Infer the format of each value from its shape.
    #[default]
    Auto,
    /// A field name or alias, resolved before lookup.
    Field(String),
}

impl Source {
    pub fn field(name: impl Into<String>) -> Self {
        Source::Field(name.into())
    }
}

/// Options for a conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Source format; default infers per value.
    pub source: Source,

    /// Target field name or alias. Default: the short Chinese name.
    pub target: String,

    /// Sentinel substituted when no row matches. `None` leaves misses as
    /// absent values.
    pub not_found: Option<String>,

    /// Force pattern matching for name-like source fields.
    pub use_regex: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source: Source::Auto,
            target: "name_zh".to_string(),
            not_found: None,
            use_regex: false,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Source::Field(source.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_not_found(mut self, sentinel: impl Into<String>) -> Self {
        self.not_found = Some(sentinel.into());
        self
    }

    pub fn with_regex(mut self, enable: bool) -> Self {
        self.use_regex = enable;
        self
    }
}

/// Shape of a batch conversion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputShape {
    /// Plain vector of converted values.
    #[default]
    List,
    /// A polars series named after the target field.
    Series,
    /// A two-column frame of inputs and converted values.
    Frame,
}

impl OutputShape {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputShape::List => "list",
            OutputShape::Series => "series",
            OutputShape::Frame => "frame",
        }
    }
}

impl FromStr for OutputShape {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(OutputShape::List),
            "series" => Ok(OutputShape::Series),
            "frame" | "table" | "dataframe" => Ok(OutputShape::Frame),
            other => Err(CodeError::UnsupportedOutputShape(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let options = ConvertOptions::new()
            .with_source("ISO2")
            .with_target("name")
            .with_not_found("未知")
            .with_regex(true);
        assert_eq!(options.source, Source::Field("ISO2".to_string()));
        assert_eq!(options.target, "name");
        assert_eq!(options.not_found.as_deref(), Some("未知"));
        assert!(options.use_regex);
    }

    #[test]
    fn default_target_is_chinese_short_name() {
        assert_eq!(ConvertOptions::default().target, "name_zh");
    }

    #[test]
    fn output_shape_parses_known_names() {
        assert_eq!("list".parse::<OutputShape>().unwrap(), OutputShape::List);
        assert_eq!("Series".parse::<OutputShape>().unwrap(), OutputShape::Series);
        assert_eq!("table".parse::<OutputShape>().unwrap(), OutputShape::Frame);
        assert!(matches!(
            "matrix".parse::<OutputShape>(),
            Err(CodeError::UnsupportedOutputShape(_))
        ));
    }
}
