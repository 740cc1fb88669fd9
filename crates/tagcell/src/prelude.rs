//! Prelude module - common imports for tagcell users
//!
//! ```rust
//! use tagcell::prelude::*;
//! ```

pub use crate::{
    // Engine
    classify,
    format,
    normalize,
    normalize_safe,
    parse_display,
    resolve_cell,
    CanonicalValue,
    // Data model
    Cell,
    CellResolver,
    Column,

    CsvReader,
    CsvWriter,

    Dataset,
    // Extension traits
    DatasetExt,
    // Error types
    Error,
    FormatOptions,
    // Locale
    Locale,
    LocaleContext,
    NumberType,
    ObjectTag,
    ParseError,
    RawValue,
    Result,
    Row,
    SemanticKind,
};
