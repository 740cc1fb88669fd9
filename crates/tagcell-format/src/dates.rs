//! Date, time and timestamp parsing and formatting
//!
//! Parsing is tolerant: each parser tries the explicit pattern first (a tag
//! pattern such as `*YYMD` or a token pattern such as `DD/MM/YYYY`), then
//! ISO-8601, then the locale's own patterns. Formatting never fails; a value
//! that cannot be rendered with the requested pattern renders as `""`.

use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tagcell_core::ParseError;

use crate::locale::{to_chrono_format, DateOrder, LocaleContext};

const ISO_DATE: &str = "%Y-%m-%d";

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M", "%H%M%S", "%H%M"];

const TIME_12H_FORMATS: &[&str] = &["%I:%M:%S %p", "%I:%M %p"];

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d-%H.%M.%S%.f",
];

/// Chrono format for a compact tag pattern (the `p` of a `D8` tag)
pub fn tag_pattern(p: &str) -> Option<&'static str> {
    let fmt = match p.trim().to_ascii_uppercase().as_str() {
        "*YYMD" => "%Y%m%d",
        "*DMYY" => "%d%m%Y",
        "*MDYY" => "%m%d%Y",
        "*YMD" => "%y%m%d",
        "*DMY" => "%d%m%y",
        "*MDY" => "%m%d%y",
        _ => return None,
    };
    Some(fmt)
}

/// Chrono format for a tag pattern or a token pattern. Unknown `*` tag
/// patterns and blank input yield `None`.
fn chrono_pattern(pattern: Option<&str>, ctx: &LocaleContext) -> Option<String> {
    let p = pattern?.trim();
    if p.is_empty() {
        return None;
    }
    if let Some(fmt) = tag_pattern(p) {
        return Some(fmt.to_string());
    }
    if p.starts_with('*') {
        return None;
    }
    Some(to_chrono_format(p, ctx))
}

fn invalid(input: &str) -> ParseError {
    ParseError::InvalidDate(input.to_string())
}

/// Four-digit year followed by `-`; chrono alone would read `4-6-22` as
/// the year 4
fn looks_iso(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 8 && b[..4].iter().all(u8::is_ascii_digit) && b[4] == b'-'
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if !looks_iso(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, ISO_DATE).ok()
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    if !looks_iso(s) {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse a date.
///
/// Accepted forms, in order: `pattern`, ISO-8601 (a bare date or the date
/// part of a datetime), then numeric input in the field order of the
/// locale's `L` pattern with any of `/ - .` or space as separator
/// (`4/6/22`, `04-06-2022`) or none at all (`04062022`, `040622`).
/// Two-digit years are in the 2000s.
pub fn parse_date(
    input: &str,
    pattern: Option<&str>,
    ctx: &LocaleContext,
) -> Result<NaiveDate, ParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(invalid(input));
    }

    if let Some(fmt) = chrono_pattern(pattern, ctx) {
        if let Ok(d) = NaiveDate::parse_from_str(s, &fmt) {
            return Ok(d);
        }
    }
    if let Some(d) = parse_iso_date(s) {
        return Ok(d);
    }
    if let Some(dt) = parse_iso_datetime(s) {
        return Ok(dt.date());
    }
    parse_date_lenient(s, ctx.date_order()).ok_or_else(|| invalid(input))
}

fn expand_year(year: &str) -> Option<i32> {
    let y: i32 = year.parse().ok()?;
    match year.len() {
        1 | 2 => Some(2000 + y),
        4 => Some(y),
        _ => None,
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(expand_year(year)?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_date_lenient(s: &str, order: DateOrder) -> Option<NaiveDate> {
    let parts: Vec<&str> = s
        .split(|c: char| matches!(c, '/' | '-' | '.' | ' '))
        .filter(|p| !p.is_empty())
        .collect();
    if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    match parts.as_slice() {
        [a, b, c] if a.len() == 4 => ymd(a, b, c),
        [a, b, c] => match order {
            DateOrder::Dmy => ymd(c, b, a),
            DateOrder::Mdy => ymd(c, a, b),
            DateOrder::Ymd => ymd(a, b, c),
        },
        [compact] if compact.len() == 8 => {
            let (head, tail) = compact.split_at(4);
            ymd(head, &tail[..2], &tail[2..]).or_else(|| {
                let (x, y, year) = (&compact[..2], &compact[2..4], &compact[4..]);
                match order {
                    DateOrder::Mdy => ymd(year, x, y),
                    _ => ymd(year, y, x),
                }
            })
        }
        [compact] if compact.len() == 6 => {
            let (x, y, z) = (&compact[..2], &compact[2..4], &compact[4..]);
            match order {
                DateOrder::Dmy => ymd(z, y, x),
                DateOrder::Mdy => ymd(z, x, y),
                DateOrder::Ymd => ymd(x, y, z),
            }
        }
        _ => None,
    }
}

/// Parse a time of day: `pattern`, 24h forms (`HH:MM:SS[.fff]`, `HH:MM`,
/// `HHMMSS`, `HHMM`), the locale `LTS`/`LT` patterns, 12h forms, or the
/// time part of an ISO datetime.
pub fn parse_time(
    input: &str,
    pattern: Option<&str>,
    ctx: &LocaleContext,
) -> Result<NaiveTime, ParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(invalid(input));
    }

    let localized = [to_chrono_format("LTS", ctx), to_chrono_format("LT", ctx)];
    chrono_pattern(pattern, ctx)
        .iter()
        .map(String::as_str)
        .chain(TIME_FORMATS.iter().copied())
        .chain(localized.iter().map(String::as_str))
        .chain(TIME_12H_FORMATS.iter().copied())
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .or_else(|| parse_iso_datetime(s).map(|dt| dt.time()))
        .ok_or_else(|| invalid(input))
}

/// Parse a timestamp: `pattern`, RFC 3339, ISO-8601 datetimes with `T` or a
/// space, a locale date followed by a time (`06/04/2022 10:30 AM`), or a bare
/// date at midnight.
pub fn parse_timestamp(
    input: &str,
    pattern: Option<&str>,
    ctx: &LocaleContext,
) -> Result<NaiveDateTime, ParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(invalid(input));
    }

    if let Some(fmt) = chrono_pattern(pattern, ctx) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, &fmt) {
            return Ok(dt);
        }
    }
    if let Some(dt) = parse_iso_datetime(s) {
        return Ok(dt);
    }
    if let Some((date_part, time_part)) = s.split_once(char::is_whitespace) {
        if let (Ok(d), Ok(t)) = (
            parse_date(date_part, None, ctx),
            parse_time(time_part, None, ctx),
        ) {
            return Ok(d.and_time(t));
        }
    }
    parse_date(s, pattern, ctx)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| invalid(input))
}

/// Check if `input` parses as a date
pub fn is_valid(input: &str, pattern: Option<&str>, ctx: &LocaleContext) -> bool {
    parse_date(input, pattern, ctx).is_ok()
}

fn render(formatted: impl fmt::Display) -> String {
    let mut out = String::new();
    match write!(out, "{formatted}") {
        Ok(()) => out,
        Err(_) => {
            tracing::trace!("Pattern does not apply to value, rendering empty");
            String::new()
        }
    }
}

fn display_pattern(pattern: Option<&str>, default: &str, ctx: &LocaleContext) -> String {
    chrono_pattern(pattern, ctx).unwrap_or_else(|| to_chrono_format(default, ctx))
}

/// Format a date (default pattern `L`)
pub fn format_date(date: NaiveDate, pattern: Option<&str>, ctx: &LocaleContext) -> String {
    let fmt = display_pattern(pattern, "L", ctx);
    match date.and_hms_opt(0, 0, 0) {
        Some(dt) => render(dt.format(&fmt)),
        None => String::new(),
    }
}

/// Format a time of day (default pattern `LTS`)
pub fn format_time(time: NaiveTime, pattern: Option<&str>, ctx: &LocaleContext) -> String {
    let fmt = display_pattern(pattern, "LTS", ctx);
    render(time.format(&fmt))
}

/// Format a timestamp (default pattern `L LTS`)
pub fn format_timestamp(ts: NaiveDateTime, pattern: Option<&str>, ctx: &LocaleContext) -> String {
    let fmt = display_pattern(pattern, "L LTS", ctx);
    render(ts.format(&fmt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tag_patterns() {
        let ctx = LocaleContext::default();
        assert_eq!(parse_date("20220604", Some("*YYMD"), &ctx), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("04062022", Some("*DMYY"), &ctx), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("060422", Some("*MDY"), &ctx), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("2022-06-04", Some("*YYMD"), &ctx), Ok(date(2022, 6, 4)));
        assert_eq!(tag_pattern("*ymd"), Some("%y%m%d"));
        assert_eq!(tag_pattern("*XYZ"), None);
    }

    #[test]
    fn test_parse_date_iso_and_locale() {
        let en = LocaleContext::new(Locale::En);
        let it = LocaleContext::new(Locale::It);
        assert_eq!(parse_date("2022-06-04T10:30:00", None, &en), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("06/04/2022", None, &en), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("04/06/2022", None, &it), Ok(date(2022, 6, 4)));
        assert_eq!(
            parse_date("04.06.2022", None, &LocaleContext::new(Locale::Ru)),
            Ok(date(2022, 6, 4))
        );
    }

    #[test]
    fn test_parse_date_lenient() {
        let en = LocaleContext::new(Locale::En);
        let it = LocaleContext::new(Locale::It);
        assert_eq!(parse_date("6/4/22", None, &en), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("4-6-22", None, &it), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("04062022", None, &it), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("040622", None, &it), Ok(date(2022, 6, 4)));
        assert_eq!(parse_date("2022/6/4", None, &it), Ok(date(2022, 6, 4)));
    }

    #[test]
    fn test_parse_date_rejects() {
        let ctx = LocaleContext::default();
        assert_eq!(parse_date("", None, &ctx), Err(ParseError::InvalidDate("".into())));
        assert!(parse_date("not a date", None, &ctx).is_err());
        assert!(parse_date("2022-02-30", None, &ctx).is_err());
        assert!(parse_date("13/13/2022", None, &ctx).is_err());
        assert!(!is_valid("31/31/31", None, &ctx));
    }

    #[test]
    fn test_parse_time() {
        let en = LocaleContext::new(Locale::En);
        let t = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        assert_eq!(parse_time("14:05:09", None, &en), Ok(t(14, 5, 9)));
        assert_eq!(parse_time("14:05", None, &en), Ok(t(14, 5, 0)));
        assert_eq!(parse_time("140509", None, &en), Ok(t(14, 5, 9)));
        assert_eq!(parse_time("2:05:09 PM", None, &en), Ok(t(14, 5, 9)));
        assert_eq!(parse_time("2:05 am", None, &en), Ok(t(2, 5, 0)));
        assert_eq!(parse_time("2022-06-04T08:00:00", None, &en), Ok(t(8, 0, 0)));
        assert!(parse_time("25:00", None, &en).is_err());
    }

    #[test]
    fn test_parse_timestamp() {
        let en = LocaleContext::new(Locale::En);
        let expected = date(2022, 6, 4).and_hms_opt(10, 30, 15).unwrap();
        assert_eq!(parse_timestamp("2022-06-04T10:30:15", None, &en), Ok(expected));
        assert_eq!(parse_timestamp("2022-06-04 10:30:15", None, &en), Ok(expected));
        assert_eq!(parse_timestamp("2022-06-04T10:30:15+02:00", None, &en), Ok(expected));
        assert_eq!(parse_timestamp("2022-06-04-10.30.15.000000", None, &en), Ok(expected));
        assert_eq!(parse_timestamp("06/04/2022 10:30:15 AM", None, &en), Ok(expected));
        assert_eq!(
            parse_timestamp("2022-06-04", None, &en),
            Ok(date(2022, 6, 4).and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_format_by_locale() {
        let d = date(2022, 6, 4);
        assert_eq!(format_date(d, None, &LocaleContext::new(Locale::En)), "06/04/2022");
        assert_eq!(format_date(d, None, &LocaleContext::new(Locale::It)), "04/06/2022");
        assert_eq!(format_date(d, None, &LocaleContext::new(Locale::Pl)), "04.06.2022");
        assert_eq!(format_date(d, None, &LocaleContext::new(Locale::Zh)), "2022/06/04");
        assert_eq!(format_date(d, Some("YYYY-MM-DD"), &LocaleContext::default()), "2022-06-04");
    }

    #[test]
    fn test_format_time_and_timestamp() {
        let en = LocaleContext::new(Locale::En);
        let fr = LocaleContext::new(Locale::Fr);
        let ts = date(2022, 6, 4).and_hms_opt(14, 5, 9).unwrap();
        assert_eq!(format_time(ts.time(), None, &en), "2:05:09 PM");
        assert_eq!(format_time(ts.time(), None, &fr), "14:05:09");
        assert_eq!(format_timestamp(ts, None, &fr), "04/06/2022 14:05:09");
        assert_eq!(format_time(ts.time(), Some("HH:mm"), &en), "14:05");
    }

    #[test]
    fn test_format_inapplicable_pattern_is_empty() {
        let t = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        assert_eq!(format_time(t, Some("YYYY"), &LocaleContext::default()), "");
    }
}
