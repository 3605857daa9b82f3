//! Shape-based format guessing.

use ccode_model::{CanonicalField, CodeValue};

/// Infer the representation of a value from its shape.
///
/// Integer parse takes priority, so a 3-character numeric string like "156"
/// guesses `ISOnumeric`, not `ISO3`. Anything that is neither numeric nor 2
/// or 3 characters long falls through to the free-text pattern column; an
/// empty string ends up there too and simply matches nothing.
///
/// This is a heuristic, not a validator: it never checks that the guessed
/// column actually contains the value. Confirmation happens in the matcher.
pub fn guess_format(value: &CodeValue) -> CanonicalField {
    if value.as_int().is_some() {
        return CanonicalField::IsoNumeric;
    }
    match value.text_len() {
        2 => CanonicalField::Iso2,
        3 => CanonicalField::Iso3,
        _ => CanonicalField::Pattern,
    }
}

/// Element-wise guessing over a sequence, preserving order.
pub fn guess_formats(values: &[CodeValue]) -> Vec<CanonicalField> {
    values.iter().map(guess_format).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_parse_takes_priority() {
        assert_eq!(
            guess_format(&CodeValue::from("156")),
            CanonicalField::IsoNumeric
        );
        assert_eq!(guess_format(&CodeValue::from(56)), CanonicalField::IsoNumeric);
    }

    #[test]
    fn length_drives_alpha_guesses() {
        assert_eq!(guess_format(&CodeValue::from("CN")), CanonicalField::Iso2);
        assert_eq!(guess_format(&CodeValue::from("CHN")), CanonicalField::Iso3);
        assert_eq!(
            guess_format(&CodeValue::from("China")),
            CanonicalField::Pattern
        );
    }

    #[test]
    fn empty_string_falls_through_to_pattern() {
        assert_eq!(guess_format(&CodeValue::from("")), CanonicalField::Pattern);
    }

    #[test]
    fn sequence_guessing_preserves_order() {
        let values = [
            CodeValue::from("CN"),
            CodeValue::from("CHN"),
            CodeValue::from("156"),
        ];
        assert_eq!(
            guess_formats(&values),
            vec![
                CanonicalField::Iso2,
                CanonicalField::Iso3,
                CanonicalField::IsoNumeric,
            ]
        );
    }
}
