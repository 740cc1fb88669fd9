//! Raw and canonical value representations

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tagcell_core::Color;

use crate::number::number_to_canonical_string;

/// A raw cell value as handed to the normalizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl RawValue<'_> {
    /// Check if the value is blank text
    pub fn is_blank(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.trim().is_empty())
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(s: &'a str) -> Self {
        RawValue::Text(s)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(s: &'a String) -> Self {
        RawValue::Text(s.as_str())
    }
}

impl From<f64> for RawValue<'_> {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue<'_> {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

/// Locale-independent value used for computation and storage
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CanonicalValue {
    /// No value (blank input, or a safe-lane fallback)
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Boolean(bool),
    Color(Color),
    List(Vec<String>),
}

impl CanonicalValue {
    /// Check if this is [`CanonicalValue::Empty`]
    pub fn is_empty(&self) -> bool {
        matches!(self, CanonicalValue::Empty)
    }

    /// Numeric payload, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CanonicalValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Date payload; timestamps yield their date part
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CanonicalValue::Date(d) => Some(*d),
            CanonicalValue::Timestamp(ts) => Some(ts.date()),
            _ => None,
        }
    }

    /// The form stored in an object tag's `k`: ISO-8601 for temporal values,
    /// `.` as decimal separator for numbers, `1`/`0` for booleans,
    /// `#RRGGBB` for colours and `;`-joined lists.
    pub fn to_canonical_string(&self) -> String {
        match self {
            CanonicalValue::Empty => String::new(),
            CanonicalValue::Text(s) => s.clone(),
            CanonicalValue::Number(n) => number_to_canonical_string(*n),
            CanonicalValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CanonicalValue::Time(t) => t.format("%H:%M:%S").to_string(),
            CanonicalValue::Timestamp(ts) => ts.format("%Y-%m-%dT%H:%M:%S").to_string(),
            CanonicalValue::Boolean(b) => if *b { "1" } else { "0" }.to_string(),
            CanonicalValue::Color(c) => c.to_string(),
            CanonicalValue::List(items) => items.join(";"),
        }
    }
}
