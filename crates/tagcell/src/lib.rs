//! # tagcell
//!
//! Classify, normalize and locale-format tagged cell values.
//!
//! Cells carry an [`ObjectTag`] `(t, p, k)` describing what their value is.
//! Tagcell decides how each cell should be shown and edited, turns raw values
//! into canonical ones and renders them for the active locale.
//!
//! ## Features
//!
//! - Fixed, versioned tag vocabulary ([`classify`])
//! - Strict and safe normalization lanes ([`normalize`], [`normalize_safe`])
//! - Locale-aware numbers, dates and times for en, es, fr, it, pl, ru and zh
//! - Copy-on-write locale snapshots ([`set_locale`], [`current_locale`])
//! - CSV and JSON datasets
//!
//! ## Example
//!
//! ```rust
//! use tagcell::prelude::*;
//!
//! let column = Column::new("PRICE", "Price").with_decimals(2);
//! let cell = Cell::typed("1234.5", "NR", "");
//!
//! let it = LocaleContext::new(Locale::It);
//! let resolved = resolve_cell(&cell, &column, &it);
//! assert_eq!(resolved.kind, SemanticKind::Number);
//! assert_eq!(resolved.display_value, "1.234,50");
//! ```

pub mod prelude;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

// Re-export core types
pub use tagcell_core::{
    Cell, Color, Column, Dataset, Error, ObjectTag, ParseError, Result, Row, SemanticKind, Shape,
    ValueClass, MAX_TAG_PARAM_LEN, MAX_TAG_TYPE_LEN,
};

// Re-export engine
pub use tagcell_format::{
    cell_value_for_display, classify, column_format_options, commit_input, find_cells,
    find_columns, find_rows, format, normalize, normalize_safe, numberify, numberify_safe,
    parse_display, resolve_cell, resolve_kind, CanonicalValue, CellMatch, CellResolver,
    ColumnFilter, FindCellFilters, FindRange, FormatOptions, Locale, LocaleContext, LocaleManager,
    NumberInput, NumberType, RawValue, ResolvedCell, VOCABULARY_VERSION,
};

pub use tagcell_format::stats::{normal_distribution, normal_distribution_curve};

// Re-export I/O types
pub use tagcell_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator, ValueMode,
};

/// Publish a new process-wide locale snapshot.
///
/// Fails with [`Error::UnsupportedLocale`] and leaves the current snapshot in
/// place when `code` is not supported.
pub fn set_locale(code: &str) -> Result<Arc<LocaleContext>> {
    tagcell_format::locale::set_locale(code)
}

/// The current process-wide locale snapshot
pub fn current_locale() -> Arc<LocaleContext> {
    tagcell_format::locale::current()
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Extension trait for Dataset to add file I/O and display helpers
pub trait DatasetExt: Sized {
    /// Open a dataset from a `.csv` or `.json` file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the dataset. CSV files get display values for `ctx`, JSON files
    /// keep the raw dataset.
    fn save<P: AsRef<Path>>(&self, path: P, ctx: &Arc<LocaleContext>) -> Result<()>;

    /// Display values of every row, in column order
    fn display_rows(&self, ctx: &Arc<LocaleContext>) -> Vec<Vec<String>>;

    /// Cells matching `filters`
    fn find(&self, filters: &FindCellFilters, ctx: &LocaleContext) -> Vec<CellMatch>;
}

impl DatasetExt for Dataset {
    fn open<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        match extension(path).as_deref() {
            Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            Some("json") => {
                let file = File::open(path).map_err(|e| Error::other(e.to_string()))?;
                serde_json::from_reader(BufReader::new(file))
                    .map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P, ctx: &Arc<LocaleContext>) -> Result<()> {
        let path = path.as_ref();
        match extension(path).as_deref() {
            Some("csv") => CsvWriter::write_file(self, path, ctx, &CsvWriteOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            Some("json") => {
                let file = File::create(path).map_err(|e| Error::other(e.to_string()))?;
                serde_json::to_writer_pretty(BufWriter::new(file), self)
                    .map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn display_rows(&self, ctx: &Arc<LocaleContext>) -> Vec<Vec<String>> {
        let mut resolver = CellResolver::new(Arc::clone(ctx));
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| {
                        row.cell(&column.name)
                            .map(|cell| resolver.display_value(cell, column))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    fn find(&self, filters: &FindCellFilters, ctx: &LocaleContext) -> Vec<CellMatch> {
        find_cells(self, filters, ctx)
    }
}
