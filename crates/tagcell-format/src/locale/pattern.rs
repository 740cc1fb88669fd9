//! Conversion of dayjs-style display patterns into chrono format strings

use super::LocaleContext;

/// Localized pattern aliases, longest first
const LOCALIZED: &[&str] = &["LTS", "LLLL", "LLL", "LT", "LL", "L"];

/// Field tokens, longest first so `YYYY` wins over `YY`
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("dd", "%a"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("d", "%w"),
    ("H", "%-H"),
    ("h", "%-I"),
    ("m", "%-M"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
];

/// Convert a display pattern (`DD/MM/YYYY`, `L LTS`, `[at] HH:mm`) into a
/// chrono strftime string.
///
/// `L`, `LT` and `LTS` expand to the locale's own patterns. Long forms
/// (`LL`, `LLL`, `LLLL`) have no localized month names here and fall back to
/// their numeric equivalents. Text inside `[...]` is copied verbatim.
pub fn to_chrono_format(pattern: &str, ctx: &LocaleContext) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    'scan: while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('[') {
            match stripped.find(']') {
                Some(end) => {
                    push_literal(&mut out, &stripped[..end]);
                    rest = &stripped[end + 1..];
                }
                None => {
                    push_literal(&mut out, stripped);
                    rest = "";
                }
            }
            continue;
        }

        for alias in LOCALIZED {
            if let Some(after) = rest.strip_prefix(alias) {
                let expanded = match *alias {
                    "LTS" => ctx.patterns().time_with_seconds.to_string(),
                    "LT" => ctx.patterns().time.to_string(),
                    "L" | "LL" => ctx.patterns().date.to_string(),
                    _ => format!("{} {}", ctx.patterns().date, ctx.patterns().time),
                };
                out.push_str(&to_chrono_format(&expanded, ctx));
                rest = after;
                continue 'scan;
            }
        }

        for (token, spec) in TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = after;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            push_literal_char(&mut out, c);
        }
        rest = chars.as_str();
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        push_literal_char(out, c);
    }
}

fn push_literal_char(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_field_tokens() {
        let ctx = LocaleContext::default();
        assert_eq!(to_chrono_format("YYYY-MM-DD", &ctx), "%Y-%m-%d");
        assert_eq!(to_chrono_format("D/M/YY", &ctx), "%-d/%-m/%y");
        assert_eq!(to_chrono_format("HH:mm:ss.SSS", &ctx), "%H:%M:%S.%3f");
        assert_eq!(to_chrono_format("dddd D MMMM", &ctx), "%A %-d %B");
    }

    #[test]
    fn test_localized_aliases() {
        let en = LocaleContext::new(Locale::En);
        assert_eq!(to_chrono_format("L", &en), "%m/%d/%Y");
        assert_eq!(to_chrono_format("LTS", &en), "%-I:%M:%S %p");
        assert_eq!(to_chrono_format("L LT", &en), "%m/%d/%Y %-I:%M %p");

        let pl = LocaleContext::new(Locale::Pl);
        assert_eq!(to_chrono_format("L", &pl), "%d.%m.%Y");
        assert_eq!(to_chrono_format("LLL", &pl), "%d.%m.%Y %H:%M");
    }

    #[test]
    fn test_literals_are_escaped() {
        let ctx = LocaleContext::default();
        assert_eq!(to_chrono_format("[Day] DD", &ctx), "Day %d");
        assert_eq!(to_chrono_format("YYYY%", &ctx), "%Y%%");
        assert_eq!(to_chrono_format("[100%] HH", &ctx), "100%% %H");
    }
}
