//! Per-locale separator and date pattern table

use super::Locale;

/// Static locale data. Date/time patterns use dayjs-style tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocaleData {
    pub decimal_separator: char,
    pub group_separator: char,
    /// `L`
    pub date: &'static str,
    /// `LT`
    pub time: &'static str,
    /// `LTS`
    pub time_with_seconds: &'static str,
}

const NBSP: char = '\u{a0}';

static EN: LocaleData = LocaleData {
    decimal_separator: '.',
    group_separator: ',',
    date: "MM/DD/YYYY",
    time: "h:mm A",
    time_with_seconds: "h:mm:ss A",
};

static ES: LocaleData = LocaleData {
    decimal_separator: ',',
    group_separator: '.',
    date: "DD/MM/YYYY",
    time: "H:mm",
    time_with_seconds: "H:mm:ss",
};

static FR: LocaleData = LocaleData {
    decimal_separator: ',',
    group_separator: NBSP,
    date: "DD/MM/YYYY",
    time: "HH:mm",
    time_with_seconds: "HH:mm:ss",
};

static IT: LocaleData = LocaleData {
    decimal_separator: ',',
    group_separator: '.',
    date: "DD/MM/YYYY",
    time: "HH:mm",
    time_with_seconds: "HH:mm:ss",
};

static PL: LocaleData = LocaleData {
    decimal_separator: ',',
    group_separator: NBSP,
    date: "DD.MM.YYYY",
    time: "HH:mm",
    time_with_seconds: "HH:mm:ss",
};

static RU: LocaleData = LocaleData {
    decimal_separator: ',',
    group_separator: NBSP,
    date: "DD.MM.YYYY",
    time: "H:mm",
    time_with_seconds: "H:mm:ss",
};

static ZH: LocaleData = LocaleData {
    decimal_separator: '.',
    group_separator: ',',
    date: "YYYY/MM/DD",
    time: "HH:mm",
    time_with_seconds: "HH:mm:ss",
};

pub(crate) fn data(locale: Locale) -> &'static LocaleData {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
        Locale::Fr => &FR,
        Locale::It => &IT,
        Locale::Pl => &PL,
        Locale::Ru => &RU,
        Locale::Zh => &ZH,
    }
}
