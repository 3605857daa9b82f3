use thiserror::Error;

/// Errors from country-code resolution.
///
/// Absence of a matching country is not an error: conversions report misses
/// through the caller's not-found sentinel so batch conversions never abort
/// partway. Everything here is a structural or configuration failure that
/// should surface at the call that caused it.
#[derive(Debug, Error)]
pub enum CodeError {
    #[error("unknown field name: {0}")]
    UnknownField(String),

    #[error("unsupported output shape: {0} (expected list, series, or frame)")]
    UnsupportedOutputShape(String),

    #[error("invalid supplemental data: {message}")]
    InvalidSupplementalData { message: String },

    #[error("table operation failed: {message}")]
    Table { message: String },
}

impl CodeError {
    pub fn table(message: impl Into<String>) -> Self {
        Self::Table {
            message: message.into(),
        }
    }

    pub fn supplemental(message: impl Into<String>) -> Self {
        Self::InvalidSupplementalData {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeError>;
