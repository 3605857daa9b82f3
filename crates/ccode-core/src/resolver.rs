//! Resolution of user-supplied field names to table columns.

use std::collections::HashMap;

use ccode_model::{AliasRegistry, CodeError, ResolvedField, Result};

/// Maps any caller-facing field name or alias to the column it refers to.
///
/// All downstream components work with the resolved name only; callers never
/// see internal column ordering.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    registry: AliasRegistry,
    /// Uppercased base column name -> original spelling.
    base_columns: HashMap<String, String>,
    /// Uppercased supplemental column name -> original spelling.
    supplemental_columns: HashMap<String, String>,
}

fn case_map<I, S>(names: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = HashMap::new();
    for name in names {
        let name = name.as_ref();
        map.entry(name.to_uppercase())
            .or_insert_with(|| name.to_string());
    }
    map
}

impl FieldResolver {
    pub fn new<I, S>(registry: AliasRegistry, base_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            registry,
            base_columns: case_map(base_columns),
            supplemental_columns: HashMap::new(),
        }
    }

    /// Register caller-supplied columns as resolvable names.
    pub fn with_supplemental_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.supplemental_columns = case_map(columns);
        self
    }

    /// Resolve a field name or alias.
    ///
    /// Order: registry synonyms (which fall back to canonical column names),
    /// then base table columns, then supplemental columns. Fails with
    /// `UnknownField` when nothing matches case-insensitively.
    pub fn resolve(&self, user_field: &str) -> Result<ResolvedField> {
        let trimmed = user_field.trim();
        if let Some(field) = self.registry.canonicalize(trimmed) {
            return Ok(ResolvedField::Canonical(field));
        }
        let key = trimmed.to_uppercase();
        if let Some(column) = self.base_columns.get(&key) {
            return Ok(ResolvedField::Supplemental(column.clone()));
        }
        if let Some(column) = self.supplemental_columns.get(&key) {
            return Ok(ResolvedField::Supplemental(column.clone()));
        }
        Err(CodeError::UnknownField(trimmed.to_string()))
    }

    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    /// Every name the resolver accepts: base columns, registered aliases,
    /// and supplemental columns.
    pub fn all_field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.base_columns.values().cloned().collect();
        names.sort();
        names.extend(self.registry.all_aliases());
        let mut supplemental: Vec<String> = self.supplemental_columns.values().cloned().collect();
        supplemental.sort();
        names.extend(supplemental);
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccode_model::CanonicalField;

    fn resolver() -> FieldResolver {
        let columns: Vec<&str> = CanonicalField::ALL.iter().map(|f| f.as_str()).collect();
        FieldResolver::new(AliasRegistry::default(), columns)
    }

    #[test]
    fn aliases_resolve_to_canonical_fields() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve("alpha_2").unwrap(),
            ResolvedField::Canonical(CanonicalField::Iso2)
        );
        assert_eq!(
            resolver.resolve("ISO_2").unwrap(),
            ResolvedField::Canonical(CanonicalField::Iso2)
        );
        assert_eq!(
            resolver.resolve("ZH").unwrap(),
            ResolvedField::Canonical(CanonicalField::NameZh)
        );
    }

    #[test]
    fn unknown_names_fail() {
        let resolver = resolver();
        assert!(matches!(
            resolver.resolve("not_a_field"),
            Err(CodeError::UnknownField(_))
        ));
    }

    #[test]
    fn supplemental_columns_resolve_case_insensitively() {
        let resolver = resolver().with_supplemental_columns(["my_code"]);
        assert_eq!(
            resolver.resolve("MY_CODE").unwrap(),
            ResolvedField::Supplemental("my_code".to_string())
        );
    }
}
