//! Display formatter
//!
//! [`format`] renders a [`CanonicalValue`] for a resolved kind; [`parse_display`]
//! is its inverse for editable widgets.

use tagcell_core::{ParseError, SemanticKind, ValueClass};

use crate::dates;
use crate::locale::LocaleContext;
use crate::normalize::normalize_input;
use crate::number::{format_typed_number, swap_decimal_separator, NumberInput, NumberType};
use crate::value::{CanonicalValue, RawValue};

/// Options for [`format`] and [`parse_display`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    /// Fraction digits for numbers (None = infer from the value)
    pub decimals: Option<u32>,
    /// Decimal separator to emit instead of the locale's
    pub output_separator: Option<char>,
    /// Numeric subtype, which selects the suffix
    pub number_type: NumberType,
    /// Date/time display pattern (dayjs-style tokens); None = localized default
    pub pattern: Option<String>,
    /// Group thousands in numbers
    pub grouping: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: None,
            output_separator: None,
            number_type: NumberType::Plain,
            pattern: None,
            grouping: true,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn with_output_separator(mut self, separator: char) -> Self {
        self.output_separator = Some(separator);
        self
    }

    pub fn with_number_type(mut self, number_type: NumberType) -> Self {
        self.number_type = number_type;
        self
    }

    pub fn with_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn without_grouping(mut self) -> Self {
        self.grouping = false;
        self
    }

    fn number_input(&self) -> NumberInput {
        self.output_separator
            .map_or(NumberInput::Localized, NumberInput::Separator)
    }
}

/// Render a canonical value for display.
///
/// Temporal values are converted between date, time and timestamp as the
/// kind requires. A value that does not belong to the kind's class renders
/// as its canonical string; [`CanonicalValue::Empty`] renders as `""`.
pub fn format(
    value: &CanonicalValue,
    kind: SemanticKind,
    ctx: &LocaleContext,
    opts: &FormatOptions,
) -> String {
    let pattern = opts.pattern.as_deref();
    match (kind.value_class(), value) {
        (_, CanonicalValue::Empty) => String::new(),
        (ValueClass::Number, CanonicalValue::Number(n)) => format_number_value(*n, ctx, opts),
        (ValueClass::Date, CanonicalValue::Date(d)) => dates::format_date(*d, pattern, ctx),
        (ValueClass::Date, CanonicalValue::Timestamp(ts)) => {
            dates::format_date(ts.date(), pattern, ctx)
        }
        (ValueClass::Time, CanonicalValue::Time(t)) => dates::format_time(*t, pattern, ctx),
        (ValueClass::Time, CanonicalValue::Timestamp(ts)) => {
            dates::format_time(ts.time(), pattern, ctx)
        }
        (ValueClass::Timestamp, CanonicalValue::Timestamp(ts)) => {
            dates::format_timestamp(*ts, pattern, ctx)
        }
        (ValueClass::Timestamp, CanonicalValue::Date(d)) => match d.and_hms_opt(0, 0, 0) {
            Some(ts) => dates::format_timestamp(ts, pattern, ctx),
            None => String::new(),
        },
        (ValueClass::List, CanonicalValue::List(items)) => items.join(", "),
        (_, other) => other.to_canonical_string(),
    }
}

fn format_number_value(n: f64, ctx: &LocaleContext, opts: &FormatOptions) -> String {
    let formatted = format_typed_number(n, opts.decimals, opts.number_type, opts.grouping, ctx);
    match opts.output_separator {
        Some(sep) if sep != ctx.decimal_separator() => swap_decimal_separator(&formatted, ctx, sep),
        _ => formatted,
    }
}

/// Parse a display string (or user input) back to its canonical value.
///
/// Numbers are read in the locale's format, or with `output_separator` as
/// decimal separator when set; the type suffix is accepted. Dates and times
/// try `pattern` first, then ISO-8601, then the locale's patterns.
pub fn parse_display(
    input: &str,
    kind: SemanticKind,
    ctx: &LocaleContext,
    opts: &FormatOptions,
) -> Result<CanonicalValue, ParseError> {
    normalize_input(
        RawValue::Text(input),
        kind,
        opts.pattern.as_deref(),
        ctx,
        opts.number_input(),
        opts.number_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tagcell_core::Color;

    #[test]
    fn test_format_numbers() {
        let en = LocaleContext::new(Locale::En);
        let value = CanonicalValue::Number(1234.5);
        let opts = FormatOptions::new();
        assert_eq!(format(&value, SemanticKind::Number, &en, &opts), "1,234.5");
        assert_eq!(
            format(&value, SemanticKind::Number, &en, &opts.clone().with_decimals(2)),
            "1,234.50"
        );
        assert_eq!(
            format(&value, SemanticKind::Number, &en, &opts.clone().without_grouping()),
            "1234.5"
        );
        assert_eq!(
            format(&value, SemanticKind::Number, &en, &opts.with_output_separator(',')),
            "1234,5"
        );
    }

    #[test]
    fn test_format_percent_suffix() {
        let en = LocaleContext::new(Locale::En);
        let opts = FormatOptions::new()
            .with_decimals(2)
            .with_number_type(NumberType::Percent);
        assert_eq!(
            format(&CanonicalValue::Number(0.2556), SemanticKind::Number, &en, &opts),
            "25.56 %"
        );
    }

    #[test]
    fn test_format_dates() {
        let it = LocaleContext::new(Locale::It);
        let date = NaiveDate::from_ymd_opt(2022, 6, 4).unwrap();
        let opts = FormatOptions::new();
        assert_eq!(
            format(&CanonicalValue::Date(date), SemanticKind::Date, &it, &opts),
            "04/06/2022"
        );
        assert_eq!(
            format(&CanonicalValue::Date(date), SemanticKind::Timestamp, &it, &opts),
            "04/06/2022 00:00:00"
        );
        assert_eq!(
            format(
                &CanonicalValue::Date(date),
                SemanticKind::Date,
                &it,
                &opts.with_pattern("YYYY-MM-DD")
            ),
            "2022-06-04"
        );
    }

    #[test]
    fn test_format_other_classes() {
        let ctx = LocaleContext::default();
        let opts = FormatOptions::new();
        assert_eq!(format(&CanonicalValue::Empty, SemanticKind::Date, &ctx, &opts), "");
        assert_eq!(
            format(&CanonicalValue::Color(Color::BLUE), SemanticKind::Color, &ctx, &opts),
            "#0000FF"
        );
        assert_eq!(
            format(&CanonicalValue::Boolean(true), SemanticKind::Checkbox, &ctx, &opts),
            "1"
        );
        assert_eq!(
            format(
                &CanonicalValue::List(vec!["a".into(), "b".into()]),
                SemanticKind::ChipList,
                &ctx,
                &opts
            ),
            "a, b"
        );
        assert_eq!(
            format(&CanonicalValue::Number(3.0), SemanticKind::String, &ctx, &opts),
            "3"
        );
    }

    #[test]
    fn test_parse_display() {
        let it = LocaleContext::new(Locale::It);
        let euro = FormatOptions::new().with_number_type(NumberType::Euro);
        assert_eq!(
            parse_display("1.234,50 €", SemanticKind::Number, &it, &euro),
            Ok(CanonicalValue::Number(1234.5))
        );
        assert_eq!(
            parse_display("04/06/2022", SemanticKind::Date, &it, &FormatOptions::new()),
            Ok(CanonicalValue::Date(NaiveDate::from_ymd_opt(2022, 6, 4).unwrap()))
        );
        let comma = FormatOptions::new().with_output_separator(',');
        assert_eq!(
            parse_display("1234,5", SemanticKind::Number, &LocaleContext::default(), &comma),
            Ok(CanonicalValue::Number(1234.5))
        );
        assert!(parse_display("abc", SemanticKind::Number, &it, &FormatOptions::new()).is_err());
    }
}
