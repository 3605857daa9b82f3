#![deny(unsafe_code)]

//! Country-code lookup engine.
//!
//! Resolves a country identifier given in any supported representation
//! (ISO alpha-2/alpha-3, numeric codes, short/official names, localized
//! names, membership codes) to a canonical record and projects out a target
//! representation.
//!
//! ```no_run
//! use ccode_core::{ConvertOptions, CountryCode};
//!
//! let resolver = CountryCode::new()?;
//! let options = ConvertOptions::new().with_source("ISO2").with_target("name_zh");
//! assert_eq!(resolver.convert("CN", &options)?.as_deref(), Some("中国"));
//! # Ok::<(), ccode_core::CodeError>(())
//! ```

pub mod convert;
pub mod guess;
pub mod matcher;
pub mod polars_utils;
pub mod resolver;

pub use convert::{CountryCode, SeriesOutput, SupplementalData, convert_country};
pub use guess::{guess_format, guess_formats};
pub use resolver::FieldResolver;

pub use ccode_model::{
    AliasRegistry, CanonicalField, CodeError, CodeValue, ConvertOptions, OutputShape,
    ResolvedField, Result, Source,
};
