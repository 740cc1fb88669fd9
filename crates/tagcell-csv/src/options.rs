//! CSV options

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether the first row holds column names
    pub has_header: bool,
    /// Whether the row after the header holds `t/p` tags (`D8/*YYMD`, `NR`)
    pub tag_row: bool,
    /// Infer `NR` or `D8/*YYMD` for untagged columns from their values
    pub auto_detect_types: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
            tag_row: false,
            auto_detect_types: true,
        }
    }
}

/// Which value of each cell to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// Locale-formatted display value
    #[default]
    Display,
    /// Canonical raw value (the tag's `k`, or `value`)
    Raw,
}

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Write a header row of column labels
    pub write_header: bool,
    /// Write a `t/p` tag row after the header
    pub write_tag_row: bool,
    pub values: ValueMode,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            write_header: true,
            write_tag_row: false,
            values: ValueMode::Display,
            line_terminator: LineTerminator::CRLF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}
