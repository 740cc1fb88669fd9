//! # tagcell-csv
//!
//! CSV reader and writer for tagcell datasets.
//!
//! Reading turns a header row (and an optional row of `t/p` type tags) into
//! [`Column`](tagcell_core::Column)s and every other row into tagged cells.
//! Writing renders each cell's display value for a locale, or its raw
//! canonical value.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator, ValueMode};
pub use reader::CsvReader;
pub use writer::CsvWriter;
