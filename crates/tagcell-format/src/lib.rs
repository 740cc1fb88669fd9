//! # tagcell-format
//!
//! Classification, normalization and locale-aware display formatting of
//! tagged cell values.
//!
//! Values flow one way for display and the other way for editing:
//!
//! ```text
//! raw (tag k) --normalize--> CanonicalValue --format--> display string
//! user input  --parse_display--> CanonicalValue --to_canonical_string--> tag k
//! ```
//!
//! Every operation takes an explicit [`LocaleContext`] snapshot. The
//! process-wide [`locale::global`] manager publishes new snapshots without
//! disturbing callers that still hold an older one.
//!
//! ## Example
//!
//! ```rust
//! use tagcell_core::{Cell, Column, SemanticKind};
//! use tagcell_format::{resolve_cell, Locale, LocaleContext};
//!
//! let cell = Cell::typed("2022-06-04", "D8", "*YYMD");
//! let column = Column::new("DATE", "Date");
//!
//! let en = resolve_cell(&cell, &column, &LocaleContext::new(Locale::En));
//! assert_eq!(en.kind, SemanticKind::Date);
//! assert_eq!(en.display_value, "06/04/2022");
//!
//! let it = resolve_cell(&cell, &column, &LocaleContext::new(Locale::It));
//! assert_eq!(it.display_value, "04/06/2022");
//! ```

pub mod classify;
pub mod dates;
pub mod dispatch;
pub mod find;
pub mod format;
pub mod locale;
pub mod normalize;
pub mod number;
pub mod stats;
pub mod value;

pub use classify::{classify, VOCABULARY_VERSION};
pub use dispatch::{
    cell_value_for_display, column_format_options, commit_input, resolve_cell, resolve_kind,
    CellResolver, ResolvedCell,
};
pub use find::{find_cells, find_columns, find_rows, CellMatch, ColumnFilter, FindCellFilters, FindRange};
pub use format::{format, parse_display, FormatOptions};
pub use locale::{DateOrder, DatePatterns, Locale, LocaleContext, LocaleManager};
pub use normalize::{normalize, normalize_input, normalize_safe};
pub use number::{numberify, numberify_safe, NumberInput, NumberType};
pub use value::{CanonicalValue, RawValue};
