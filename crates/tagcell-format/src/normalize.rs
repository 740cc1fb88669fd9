//! Value normalizer: raw input to [`CanonicalValue`]
//!
//! Two lanes share one implementation:
//! - [`normalize`] is strict and reports a typed [`ParseError`], for form
//!   validation
//! - [`normalize_safe`] never fails, for display paths

use tagcell_core::{Color, ParseError, SemanticKind, ValueClass};

use crate::dates;
use crate::locale::LocaleContext;
use crate::number::{number_to_canonical_string, numberify, NumberInput, NumberType};
use crate::value::{CanonicalValue, RawValue};

const TRUTHY: &[&str] = &["1", "on", "true", "yes", "si", "s", "y", "x"];

/// Check if a checkbox value means "checked"
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value))
}

/// Split a `;`-separated object list, dropping blank entries
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a canonical raw value (strict lane).
///
/// Numbers are read with `.` as decimal separator. Blank input is an error
/// for numbers and [`CanonicalValue::Empty`] for every other class.
pub fn normalize(
    raw: RawValue<'_>,
    kind: SemanticKind,
    pattern: Option<&str>,
    ctx: &LocaleContext,
) -> Result<CanonicalValue, ParseError> {
    normalize_input(raw, kind, pattern, ctx, NumberInput::Canonical, NumberType::Plain)
}

/// Normalize with an explicit assumption about the input's number format.
///
/// Use [`NumberInput::Localized`] for values typed by a user, together with
/// the column's [`NumberType`] so that suffixes are stripped and percentages
/// scaled back.
pub fn normalize_input(
    raw: RawValue<'_>,
    kind: SemanticKind,
    pattern: Option<&str>,
    ctx: &LocaleContext,
    input: NumberInput,
    number_type: NumberType,
) -> Result<CanonicalValue, ParseError> {
    let text = match raw {
        RawValue::Number(n) => {
            if kind.value_class() == ValueClass::Number {
                return if n.is_finite() {
                    Ok(CanonicalValue::Number(n))
                } else {
                    Err(ParseError::InvalidNumber(n.to_string()))
                };
            }
            number_to_canonical_string(n)
        }
        RawValue::Text(s) => s.to_string(),
    };

    let class = kind.value_class();
    if class == ValueClass::Number {
        return numberify(&text, ctx, input, number_type).map(CanonicalValue::Number);
    }
    if text.trim().is_empty() {
        return Ok(CanonicalValue::Empty);
    }

    let value = match class {
        ValueClass::Date => CanonicalValue::Date(dates::parse_date(&text, pattern, ctx)?),
        ValueClass::Time => CanonicalValue::Time(dates::parse_time(&text, pattern, ctx)?),
        ValueClass::Timestamp => {
            CanonicalValue::Timestamp(dates::parse_timestamp(&text, pattern, ctx)?)
        }
        ValueClass::Boolean => CanonicalValue::Boolean(is_truthy(&text)),
        ValueClass::Color => CanonicalValue::Color(Color::parse(&text)?),
        ValueClass::List => CanonicalValue::List(split_list(&text)),
        ValueClass::Text | ValueClass::Number => CanonicalValue::Text(text),
    };
    Ok(value)
}

/// Normalize a canonical raw value (safe lane).
///
/// Blank numbers are `0`; anything the strict lane rejects is
/// [`CanonicalValue::Empty`].
pub fn normalize_safe(
    raw: RawValue<'_>,
    kind: SemanticKind,
    pattern: Option<&str>,
    ctx: &LocaleContext,
) -> CanonicalValue {
    if kind.value_class() == ValueClass::Number && raw.is_blank() {
        return CanonicalValue::Number(0.0);
    }
    normalize(raw, kind, pattern, ctx).unwrap_or_else(|e| {
        tracing::trace!("Normalizing {} value fell back to empty: {e}", kind.as_str());
        CanonicalValue::Empty
    })
}
