//! Polars `AnyValue` helpers.

use polars::prelude::AnyValue;

/// String form of a cell value; `None` for nulls and blank strings.
pub fn any_to_string(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string(),
    };
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Format a float without a trailing fractional part when it is integral.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_and_blanks_are_absent() {
        assert_eq!(any_to_string(AnyValue::Null), None);
        assert_eq!(any_to_string(AnyValue::String("")), None);
        assert_eq!(any_to_string(AnyValue::String("  ")), None);
    }

    #[test]
    fn integers_render_without_decoration() {
        assert_eq!(any_to_string(AnyValue::Int64(156)), Some("156".to_string()));
        assert_eq!(
            any_to_string(AnyValue::Float64(156.0)),
            Some("156".to_string())
        );
    }
}
