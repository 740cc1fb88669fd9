//! Locale services
//!
//! A [`LocaleContext`] is an immutable snapshot of everything formatting needs
//! to know about a locale. [`LocaleManager`] publishes snapshots: changing the
//! locale swaps in a new `Arc<LocaleContext>`, so callers holding an older
//! snapshot keep formatting with it.

mod pattern;
mod registry;

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tagcell_core::{Error, Result};

pub use pattern::to_chrono_format;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (default)
    #[default]
    En,
    Es,
    Fr,
    It,
    Pl,
    Ru,
    Zh,
}

impl Locale {
    /// All supported locales
    pub const ALL: [Locale; 7] = [
        Locale::En,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Pl,
        Locale::Ru,
        Locale::Zh,
    ];

    /// Resolve a locale code.
    ///
    /// Matching is case-insensitive; region variants (`en-US`, `it_IT`) and
    /// the `chs` alias for Chinese are accepted.
    pub fn from_code(code: &str) -> Result<Self> {
        let key = code.trim().to_ascii_lowercase().replace('_', "-");
        let lang = key.split('-').next().unwrap_or("");
        let locale = match lang {
            "en" => Locale::En,
            "es" => Locale::Es,
            "fr" => Locale::Fr,
            "it" => Locale::It,
            "pl" => Locale::Pl,
            "ru" => Locale::Ru,
            "zh" | "chs" => Locale::Zh,
            _ => return Err(Error::UnsupportedLocale(code.to_string())),
        };
        Ok(locale)
    }

    /// Two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Pl => "pl",
            Locale::Ru => "ru",
            Locale::Zh => "zh",
        }
    }

    /// English name
    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Spanish",
            Locale::Fr => "French",
            Locale::It => "Italian",
            Locale::Pl => "Polish",
            Locale::Ru => "Russian",
            Locale::Zh => "Chinese",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Localized date/time patterns (dayjs-style tokens)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePatterns {
    /// `L`: numeric date
    pub date: &'static str,
    /// `LT`: hours and minutes
    pub time: &'static str,
    /// `LTS`: hours, minutes and seconds
    pub time_with_seconds: &'static str,
}

/// Order of the day/month/year fields in a locale's numeric date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Dmy,
    Mdy,
    Ymd,
}

/// Immutable locale snapshot consumed by every formatting operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    locale: Locale,
    decimal_separator: char,
    group_separator: char,
    patterns: DatePatterns,
}

impl LocaleContext {
    /// Build the snapshot for a locale
    pub fn new(locale: Locale) -> Self {
        let data = registry::data(locale);
        Self {
            locale,
            decimal_separator: data.decimal_separator,
            group_separator: data.group_separator,
            patterns: DatePatterns {
                date: data.date,
                time: data.time,
                time_with_seconds: data.time_with_seconds,
            },
        }
    }

    /// Build the snapshot for a locale code
    pub fn from_code(code: &str) -> Result<Self> {
        Locale::from_code(code).map(Self::new)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    pub fn patterns(&self) -> &DatePatterns {
        &self.patterns
    }

    /// Field order of the `L` pattern
    pub fn date_order(&self) -> DateOrder {
        let pos = |c: char| self.patterns.date.find(c).unwrap_or(usize::MAX);
        let (y, m, d) = (pos('Y'), pos('M'), pos('D'));
        if y < m && y < d {
            DateOrder::Ymd
        } else if m < d {
            DateOrder::Mdy
        } else {
            DateOrder::Dmy
        }
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

/// Publishes locale snapshots.
///
/// Readers take an `Arc` snapshot and never observe a half-updated locale;
/// a failed [`LocaleManager::set_locale`] leaves the current snapshot in place.
#[derive(Debug)]
pub struct LocaleManager {
    current: RwLock<Arc<LocaleContext>>,
}

impl LocaleManager {
    /// Create a manager publishing the given locale
    pub fn new(locale: Locale) -> Self {
        Self {
            current: RwLock::new(Arc::new(LocaleContext::new(locale))),
        }
    }

    /// The currently published snapshot
    pub fn snapshot(&self) -> Arc<LocaleContext> {
        Arc::clone(&self.current.read())
    }

    /// The currently published locale
    pub fn locale(&self) -> Locale {
        self.current.read().locale()
    }

    /// Publish a new snapshot for `code`
    pub fn set_locale(&self, code: &str) -> Result<Arc<LocaleContext>> {
        let locale = Locale::from_code(code).map_err(|e| {
            tracing::warn!("Rejected locale change to {code:?}: {e}");
            e
        })?;
        let snapshot = Arc::new(LocaleContext::new(locale));
        *self.current.write() = Arc::clone(&snapshot);
        tracing::info!("Published locale {locale}");
        Ok(snapshot)
    }
}

impl Default for LocaleManager {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

static GLOBAL: Lazy<LocaleManager> = Lazy::new(LocaleManager::default);

/// The process-wide locale manager (starts at English)
pub fn global() -> &'static LocaleManager {
    &GLOBAL
}

/// Publish a new process-wide locale
pub fn set_locale(code: &str) -> Result<Arc<LocaleContext>> {
    GLOBAL.set_locale(code)
}

/// The current process-wide snapshot
pub fn current() -> Arc<LocaleContext> {
    GLOBAL.snapshot()
}
