pub mod alias;
pub mod error;
pub mod field;
pub mod options;
pub mod value;

pub use alias::AliasRegistry;
pub use error::{CodeError, Result};
pub use field::{CanonicalField, ResolvedField};
pub use options::{ConvertOptions, OutputShape, Source};
pub use value::CodeValue;

/// Canonical columns whose values uniquely identify a record.
///
/// Supplemental data must carry at least one of these to be usable.
pub const UNIQUE_ID_FIELDS: [CanonicalField; 6] = [
    CanonicalField::Iso2,
    CanonicalField::Iso3,
    CanonicalField::NameShort,
    CanonicalField::NameZh,
    CanonicalField::OfficialNameZh,
    CanonicalField::NameOfficial,
];
