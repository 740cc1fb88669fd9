//! Number parsing and locale-aware number formatting
//!
//! Numbers move between three forms:
//! - canonical strings (`-1234.5`), as stored in an object tag's `k`
//! - `f64` primitives
//! - display strings (`-1,234.50 €`, `1.234,5`), as produced for a locale
//!
//! Rounding goes through [`rust_decimal`] so that `2.675` with two decimals
//! renders as `2.68`, the way a user reading the canonical value expects.

use std::fmt;
use std::str::FromStr;

use lazy_regex::{lazy_regex, Lazy, Regex};
use rust_decimal::{Decimal, RoundingStrategy};
use tagcell_core::ParseError;

use crate::locale::LocaleContext;

/// Upper bound for inferred and explicit fraction digits
pub const MAX_FRACTION_DIGITS: u32 = 14;

static CANONICAL_NUMBER: Lazy<Regex> =
    lazy_regex!(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$");

/// Numeric subtype carried by a column or a format call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberType {
    #[default]
    Plain,
    /// Percentage: the canonical value is a fraction, displayed ×100
    Percent,
    Euro,
    Pound,
    Dollar,
}

impl NumberType {
    /// Parse a type code (`P`, `VE`, `VL`, `VV`); unknown codes are plain numbers
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "P" => NumberType::Percent,
            "VE" => NumberType::Euro,
            "VL" => NumberType::Pound,
            "VV" => NumberType::Dollar,
            _ => NumberType::Plain,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            NumberType::Plain => "",
            NumberType::Percent => "P",
            NumberType::Euro => "VE",
            NumberType::Pound => "VL",
            NumberType::Dollar => "VV",
        }
    }

    /// Display suffix, including its leading space
    pub fn suffix(&self) -> &'static str {
        match self {
            NumberType::Plain => "",
            NumberType::Percent => " %",
            NumberType::Euro => " €",
            NumberType::Pound => " £",
            NumberType::Dollar => " $",
        }
    }

    fn symbol(&self) -> Option<char> {
        match self {
            NumberType::Plain => None,
            NumberType::Percent => Some('%'),
            NumberType::Euro => Some('€'),
            NumberType::Pound => Some('£'),
            NumberType::Dollar => Some('$'),
        }
    }
}

/// What the caller knows about the separators of a number string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberInput {
    /// `.` decimal separator, `,` groups (the form stored in `k`)
    #[default]
    Canonical,
    /// Already formatted for the context locale
    Localized,
    /// Explicit decimal separator; groups use `,` when it is `.`, else `.`
    Separator(char),
}

/// Parse a number string (strict lane).
///
/// The type suffix is stripped, group separators are removed according to
/// `input`, and the decimal separator is mapped to `.`. Percent inputs are
/// divided by 100, inverting [`number_to_formatted_string`].
pub fn numberify(
    input: &str,
    ctx: &LocaleContext,
    mode: NumberInput,
    number_type: NumberType,
) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidNumber(input.to_string());

    let mut s = input.trim();
    if let Some(symbol) = number_type.symbol() {
        s = s.strip_suffix(symbol).unwrap_or(s).trim_end();
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let (decimal, groups) = separators(ctx, mode);
    let cleaned: String = s
        .chars()
        .filter(|c| !groups.contains(c))
        .map(|c| if c == decimal { '.' } else { c })
        .collect();

    if !CANONICAL_NUMBER.is_match(&cleaned) {
        return Err(invalid());
    }
    let n: f64 = cleaned.parse().map_err(|_| invalid())?;
    if !n.is_finite() {
        return Err(invalid());
    }

    Ok(match number_type {
        NumberType::Percent => unscale_percent(&cleaned, n),
        _ => n,
    })
}

/// Parse a number string (safe lane): blank or unparseable input is `0`
pub fn numberify_safe(
    input: &str,
    ctx: &LocaleContext,
    mode: NumberInput,
    number_type: NumberType,
) -> f64 {
    numberify(input, ctx, mode, number_type).unwrap_or_else(|e| {
        tracing::trace!("Numberify fell back to zero: {e}");
        0.0
    })
}

fn separators(ctx: &LocaleContext, mode: NumberInput) -> (char, Vec<char>) {
    match mode {
        NumberInput::Canonical => ('.', vec![',']),
        NumberInput::Localized => {
            let group = ctx.group_separator();
            if group.is_whitespace() {
                (ctx.decimal_separator(), vec![group, ' ', '\u{a0}', '\u{202f}'])
            } else {
                (ctx.decimal_separator(), vec![group])
            }
        }
        NumberInput::Separator(c) if c == ctx.decimal_separator() => {
            separators(ctx, NumberInput::Localized)
        }
        NumberInput::Separator('.') => ('.', vec![',']),
        NumberInput::Separator(c) => (c, vec!['.']),
    }
}

fn unscale_percent(cleaned: &str, n: f64) -> f64 {
    Decimal::from_str(cleaned)
        .ok()
        .and_then(|d| d.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(n / 100.0)
}

fn scale_percent(n: f64) -> f64 {
    Decimal::from_str(&n.to_string())
        .ok()
        .and_then(|d| d.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(n * 100.0)
}

/// Check if a string is a canonical number: `.` decimals, no grouping
pub fn is_canonical_number(input: &str) -> bool {
    CANONICAL_NUMBER.is_match(input.trim())
}

/// Check if a string parses as a number under `mode`
pub fn is_string_number(input: &str, ctx: &LocaleContext, mode: NumberInput) -> bool {
    numberify(input, ctx, mode, NumberType::Plain).is_ok()
}

/// Canonical string for a number: shortest round-trip form, `.` decimals,
/// `-0` as `0`, non-finite values as `""`
pub fn number_to_canonical_string(n: f64) -> String {
    if !n.is_finite() {
        String::new()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Number of fraction digits in the shortest representation of `n`,
/// capped at [`MAX_FRACTION_DIGITS`]
pub fn count_decimals(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    let s = n.to_string();
    match s.split_once('.') {
        Some((_, frac)) => (frac.len() as u32).min(MAX_FRACTION_DIGITS),
        None => 0,
    }
}

/// A numeral-style format pattern: `0`, `0,0`, `0.00`, `0,0.000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberPattern {
    pub grouping: bool,
    pub decimals: u32,
}

impl NumberPattern {
    pub fn new(grouping: bool, decimals: u32) -> Self {
        Self {
            grouping,
            decimals: decimals.min(MAX_FRACTION_DIGITS),
        }
    }

    /// Parse a pattern; grouping is on when a `,` precedes the decimal point,
    /// decimals are the `0`s after it
    pub fn parse(pattern: &str) -> Self {
        let (int_part, frac_part) = pattern.split_once('.').unwrap_or((pattern, ""));
        let decimals = frac_part.chars().filter(|c| *c == '0').count() as u32;
        Self::new(int_part.contains(','), decimals)
    }
}

impl fmt::Display for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.grouping { "0,0" } else { "0" })?;
        if self.decimals > 0 {
            f.write_str(".")?;
            for _ in 0..self.decimals {
                f.write_str("0")?;
            }
        }
        Ok(())
    }
}

/// Build a numeral-style pattern string
pub fn create_format_pattern(grouping: bool, decimals: u32) -> String {
    NumberPattern::new(grouping, decimals).to_string()
}

/// Round to a fixed number of fraction digits, `.` decimal, no grouping
fn to_fixed(n: f64, decimals: u32) -> String {
    let decimals = decimals.min(MAX_FRACTION_DIGITS);
    match Decimal::from_str(&n.to_string()) {
        Ok(d) => {
            let mut rounded =
                d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            format!("{:.*}", decimals as usize, rounded)
        }
        // Out of Decimal range
        Err(_) => {
            let s = format!("{:.*}", decimals as usize, n);
            match s.strip_prefix('-') {
                Some(abs) if abs.chars().all(|c| c == '0' || c == '.') => abs.to_string(),
                _ => s,
            }
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Format a number with a pattern and the context's separators
pub fn format_with_pattern(n: f64, ctx: &LocaleContext, pattern: NumberPattern) -> String {
    if !n.is_finite() {
        return String::new();
    }
    let fixed = to_fixed(n, pattern.decimals);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + 8);
    out.push_str(sign);
    if pattern.grouping {
        out.push_str(&group_digits(int_part, ctx.group_separator()));
    } else {
        out.push_str(int_part);
    }
    if let Some(frac) = frac_part {
        out.push(ctx.decimal_separator());
        out.push_str(frac);
    }
    out
}

/// Format a number with a numeral-style pattern string
pub fn format_number(n: f64, ctx: &LocaleContext, pattern: &str) -> String {
    format_with_pattern(n, ctx, NumberPattern::parse(pattern))
}

/// Grouped, with two decimals when `n` has a fractional part
pub fn format_number_auto(n: f64, ctx: &LocaleContext) -> String {
    let pattern = if n.fract() != 0.0 { "0,0.00" } else { "0,0" };
    format_number(n, ctx, pattern)
}

/// Format a number for display: grouped, `decimals` fraction digits
/// (inferred from the value when `None`) and the type suffix.
///
/// Percent values are scaled by 100 before formatting.
pub fn number_to_formatted_string(
    n: f64,
    decimals: Option<u32>,
    number_type: NumberType,
    ctx: &LocaleContext,
) -> String {
    format_typed_number(n, decimals, number_type, true, ctx)
}

/// [`number_to_formatted_string`] with grouping made optional
pub fn format_typed_number(
    n: f64,
    decimals: Option<u32>,
    number_type: NumberType,
    grouping: bool,
    ctx: &LocaleContext,
) -> String {
    if !n.is_finite() {
        return String::new();
    }
    let n = match number_type {
        NumberType::Percent => scale_percent(n),
        _ => n,
    };
    let decimals = decimals.unwrap_or_else(|| count_decimals(n));
    let mut out = format_with_pattern(n, ctx, NumberPattern::new(grouping, decimals));
    out.push_str(number_type.suffix());
    out
}

/// Format a canonical number string for display.
///
/// When `output_separator` differs from the locale's decimal separator the
/// result is post-processed with [`swap_decimal_separator`]. Unparseable
/// input formats to `""`.
pub fn number_string_to_formatted_string(
    input: &str,
    decimals: Option<u32>,
    number_type: NumberType,
    ctx: &LocaleContext,
    output_separator: Option<char>,
) -> String {
    let n = match numberify(input, ctx, NumberInput::Canonical, NumberType::Plain) {
        Ok(n) => n,
        Err(e) => {
            tracing::trace!("Cannot format number string: {e}");
            return String::new();
        }
    };
    let formatted = number_to_formatted_string(n, decimals, number_type, ctx);
    match output_separator {
        Some(sep) if sep != ctx.decimal_separator() => swap_decimal_separator(&formatted, ctx, sep),
        _ => formatted,
    }
}

/// Replace the locale decimal separator of a formatted number with `separator`.
///
/// Group separators are removed first so that a group separator equal to
/// `separator` is never mistaken for the decimal point.
pub fn swap_decimal_separator(formatted: &str, ctx: &LocaleContext, separator: char) -> String {
    let group = ctx.group_separator();
    let decimal = ctx.decimal_separator();
    formatted
        .chars()
        .filter(|c| *c != group)
        .map(|c| if c == decimal { separator } else { c })
        .collect()
}

/// Convert a display string back to a canonical number string.
///
/// `decimal_separator` names the separator used in `input`; `None` means the
/// context locale's. Input that does not parse is returned unchanged.
pub fn formatted_string_to_number_string(
    input: &str,
    number_type: NumberType,
    ctx: &LocaleContext,
    decimal_separator: Option<char>,
) -> String {
    let mode = decimal_separator.map_or(NumberInput::Localized, NumberInput::Separator);
    match numberify(input, ctx, mode, number_type) {
        Ok(n) => number_to_canonical_string(n),
        Err(_) => input.to_string(),
    }
}

/// Limits for typed numeric input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericFieldOptions {
    /// Maximum integer digits
    pub integer: u32,
    /// Maximum fraction digits
    pub decimal: u32,
    pub allow_negative: bool,
}

impl Default for NumericFieldOptions {
    fn default() -> Self {
        Self {
            integer: 15,
            decimal: 2,
            allow_negative: true,
        }
    }
}

/// Check whether partially typed input is acceptable for a numeric field.
///
/// Accepts prefixes of a valid value (`""`, `"-"`, `"12,"`), so it can gate
/// each keystroke. Group separators of the locale are ignored; an `integer`
/// limit of `0` means unbounded.
pub fn matches_numeric_field(input: &str, options: &NumericFieldOptions, ctx: &LocaleContext) -> bool {
    let (_, groups) = separators(ctx, NumberInput::Localized);
    let input: String = input.chars().filter(|c| !groups.contains(c)).collect();
    let sign = if options.allow_negative { "-?" } else { "" };
    let integer = match options.integer {
        0 => "*".to_string(),
        n => format!("{{0,{n}}}"),
    };
    let fraction = if options.decimal > 0 {
        format!(
            "(?:{}\\d{{0,{}}})?",
            regex::escape(&ctx.decimal_separator().to_string()),
            options.decimal
        )
    } else {
        String::new()
    };
    let pattern = format!("^{sign}\\d{integer}{fraction}$");

    match regex::Regex::new(&pattern) {
        Ok(re) => re.is_match(&input),
        Err(e) => {
            tracing::debug!("Bad numeric field pattern {pattern:?}: {e}");
            false
        }
    }
}
