//! Scalar code values accepted by the converter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single input value: either an integer code or a text token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeValue {
    Int(i64),
    Text(String),
}

impl CodeValue {
    /// Integer form of the value, parsing text if needed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CodeValue::Int(value) => Some(*value),
            CodeValue::Text(text) => text.trim().parse::<i64>().ok(),
        }
    }

    /// Text form of the value.
    pub fn as_text(&self) -> String {
        match self {
            CodeValue::Int(value) => value.to_string(),
            CodeValue::Text(text) => text.clone(),
        }
    }

    /// Character length of the trimmed text form.
    pub fn text_len(&self) -> usize {
        match self {
            CodeValue::Int(value) => value.to_string().len(),
            CodeValue::Text(text) => text.trim().chars().count(),
        }
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeValue::Int(value) => write!(f, "{value}"),
            CodeValue::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<i64> for CodeValue {
    fn from(value: i64) -> Self {
        CodeValue::Int(value)
    }
}

impl From<i32> for CodeValue {
    fn from(value: i32) -> Self {
        CodeValue::Int(i64::from(value))
    }
}

impl From<&str> for CodeValue {
    fn from(value: &str) -> Self {
        CodeValue::Text(value.to_string())
    }
}

impl From<String> for CodeValue {
    fn from(value: String) -> Self {
        CodeValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_parsing_covers_text() {
        assert_eq!(CodeValue::from(156).as_int(), Some(156));
        assert_eq!(CodeValue::from("156").as_int(), Some(156));
        assert_eq!(CodeValue::from(" 76 ").as_int(), Some(76));
        assert_eq!(CodeValue::from("CN").as_int(), None);
    }

    #[test]
    fn text_len_counts_characters() {
        assert_eq!(CodeValue::from("CN").text_len(), 2);
        assert_eq!(CodeValue::from("中国").text_len(), 2);
        assert_eq!(CodeValue::from("  CHN ").text_len(), 3);
    }
}
