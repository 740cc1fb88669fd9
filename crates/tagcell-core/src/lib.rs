//! # tagcell-core
//!
//! Core data model for the tagcell cell engine.
//!
//! This crate provides the types shared by every other tagcell crate:
//! - [`ObjectTag`] - The compact `(t, p, k)` type descriptor attached to a cell value
//! - [`Cell`], [`Column`], [`Row`] and [`Dataset`] - Tabular data as bound by grids and forms
//! - [`SemanticKind`] and [`Shape`] - The resolved rendering/editing category of a cell
//! - [`Color`] - Canonical colour values for colour-picker cells
//!
//! ## Example
//!
//! ```rust
//! use tagcell_core::{Cell, Column, ObjectTag};
//!
//! let column = Column::new("DATE", "Delivery date");
//! let cell = Cell::new("2022-06-04").with_obj(ObjectTag::new("D8", "*YYMD", "2022-06-04"));
//!
//! assert_eq!(cell.raw_value(), "2022-06-04");
//! assert!(column.obj.is_none());
//! ```

pub mod cell;
pub mod color;
pub mod column;
pub mod error;
pub mod kind;
pub mod object;

// Re-exports for convenience
pub use cell::{Cell, Dataset, Row};
pub use color::Color;
pub use column::Column;
pub use error::{Error, ParseError, Result};
pub use kind::{SemanticKind, Shape, ValueClass};
pub use object::ObjectTag;

/// Maximum length of the `t` (type) code of an [`ObjectTag`]
pub const MAX_TAG_TYPE_LEN: usize = 4;

/// Maximum length of the `p` (parameter) code of an [`ObjectTag`]
pub const MAX_TAG_PARAM_LEN: usize = 32;
