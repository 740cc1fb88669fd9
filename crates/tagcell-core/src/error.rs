//! Error types for tagcell-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tagcell
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed object tag (bad `t`/`p` shape)
    #[error("Invalid object tag: {0}")]
    InvalidObjectTag(String),

    /// A raw or user-entered value could not be normalized
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Requested locale is not in the supported table
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

/// A value that cannot be brought into canonical form.
///
/// Returned by the strict normalization lane so that form validation can react;
/// display paths never surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a date, time or timestamp in any accepted format
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// Not a number once suffixes and separators are stripped
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Not a recognizable colour
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

impl ParseError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidDate(s) | ParseError::InvalidNumber(s) | ParseError::InvalidColor(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidNumber("12a".into());
        assert_eq!(err.to_string(), "Invalid number: \"12a\"");
        assert_eq!(err.input(), "12a");
    }

    #[test]
    fn test_parse_error_converts() {
        let err: Error = ParseError::InvalidDate("32/13/2022".into()).into();
        assert!(matches!(err, Error::Parse(ParseError::InvalidDate(_))));
        assert_eq!(err.to_string(), "Invalid date: \"32/13/2022\"");
    }
}
