//! Registry of caller-facing synonyms for canonical fields.

use std::collections::BTreeMap;

use crate::field::CanonicalField;

/// Immutable synonym table: canonical field -> recognized alias strings.
///
/// Built once and injected into the resolver; never mutated afterwards.
/// Each synonym belongs to exactly one canonical field. That invariant is a
/// construction-time obligation, not a runtime check: lookup stops at the
/// first matching field in registry iteration order.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    aliases: BTreeMap<CanonicalField, Vec<String>>,
}

impl AliasRegistry {
    /// Registry with no synonyms; only canonical column names resolve.
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// Register additional synonyms under a canonical field.
    pub fn with_aliases<I, S>(mut self, field: CanonicalField, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .entry(field)
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Resolve a name to a canonical field.
    ///
    /// Order: (a) case-insensitive synonym match, first field wins;
    /// (b) case-insensitive match against a canonical column name.
    pub fn canonicalize(&self, name: &str) -> Option<CanonicalField> {
        let trimmed = name.trim();
        for (field, names) in &self.aliases {
            if names.iter().any(|alias| alias.eq_ignore_ascii_case(trimmed)) {
                return Some(*field);
            }
        }
        CanonicalField::parse(trimmed)
    }

    /// The synonyms registered under a field.
    pub fn aliases_for(&self, field: CanonicalField) -> &[String] {
        self.aliases
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every registered synonym across all fields, in registry order.
    pub fn all_aliases(&self) -> Vec<String> {
        self.aliases.values().flatten().cloned().collect()
    }
}

impl Default for AliasRegistry {
    /// The built-in synonym table.
    fn default() -> Self {
        Self::empty()
            .with_aliases(
                CanonicalField::NameShort,
                ["short", "short_name", "name", "names"],
            )
            .with_aliases(
                CanonicalField::NameZh,
                [
                    "zh",
                    "short_zh",
                    "name_short_zh",
                    "short_name_zh",
                    "names_zh",
                    "zh_name",
                    "zh_names",
                    "中文",
                ],
            )
            .with_aliases(
                CanonicalField::NameOfficial,
                ["official", "long_name", "long"],
            )
            .with_aliases(
                CanonicalField::OfficialNameZh,
                ["official_zh", "long_name_zh", "long_zh", "langzh", "正式中文"],
            )
            .with_aliases(CanonicalField::UnCode, ["un", "unnumeric", "M49"])
            .with_aliases(
                CanonicalField::Iso3,
                ["alpha_3", "ISO_3", "iso3166_alpha_3", "ISO3166-2"],
            )
            .with_aliases(
                CanonicalField::Iso2,
                ["alpha_2", "ISO_2", "iso3166_alpha_2", "ISO3166-1"],
            )
            .with_aliases(
                CanonicalField::IsoNumeric,
                ["isocode", "baci", "unido", "ISOnum", "iso3166_num"],
            )
            .with_aliases(CanonicalField::FaoCode, ["fao", "faonumeric"])
            .with_aliases(
                CanonicalField::Exio3,
                ["exio_hybrid_3", "exio_hybrid_3_cons"],
            )
    }
}
