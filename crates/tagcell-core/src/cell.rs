//! Cells, rows and datasets
//!
//! This module contains:
//! - [`Cell`] - A value bound to a column, with its optional type tag and shape
//! - [`Row`] - Cells keyed by column name
//! - [`Dataset`] - Columns plus rows, as loaded from a data source

use std::collections::BTreeMap;

use crate::column::Column;
use crate::object::ObjectTag;

/// Value container bound to a column
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cell {
    /// Display string (may be stale or derived)
    pub value: String,
    /// Type tag; absent means untyped text
    pub obj: Option<ObjectTag>,
    /// Widget configuration; presence signals a rich editor
    pub data: Option<BTreeMap<String, String>>,
    /// Explicit shape override code
    pub shape: Option<String>,
}

impl Cell {
    /// Create an untyped cell
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Create a typed cell whose tag value mirrors `value`
    pub fn typed<S: Into<String>>(value: S, t: &str, p: &str) -> Self {
        let value = value.into();
        Self {
            obj: Some(ObjectTag::new(t, p, value.clone())),
            value,
            ..Default::default()
        }
    }

    /// Set the object tag
    pub fn with_obj(mut self, obj: ObjectTag) -> Self {
        self.obj = Some(obj);
        self
    }

    /// Set the shape override
    pub fn with_shape<S: Into<String>>(mut self, shape: S) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Add a widget configuration entry
    pub fn with_data<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.data
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// The authoritative raw value: the tag's `k` when present and non-empty,
    /// otherwise `value`
    pub fn raw_value(&self) -> &str {
        match &self.obj {
            Some(obj) if !obj.k.is_empty() => &obj.k,
            _ => &self.value,
        }
    }

    /// Check if the cell has a rich editor configuration
    pub fn has_editor_config(&self) -> bool {
        self.data.as_ref().map_or(false, |d| !d.is_empty())
    }

    /// Commit an edited canonical value to both `value` and the tag's `k`
    pub fn commit_edit<S: Into<String>>(&mut self, canonical: S) {
        let canonical = canonical.into();
        if let Some(obj) = self.obj.as_mut() {
            obj.k = canonical.clone();
        }
        self.value = canonical;
    }
}

/// A row of cells keyed by column name
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Row {
    /// Optional row identifier
    pub id: Option<String>,
    /// Cells by column name
    pub cells: BTreeMap<String, Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell (builder style)
    pub fn with_cell<N: Into<String>>(mut self, column: N, cell: Cell) -> Self {
        self.cells.insert(column.into(), cell);
        self
    }

    /// Get the cell for a column
    pub fn cell(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Get a mutable cell for a column
    pub fn cell_mut(&mut self, column: &str) -> Option<&mut Cell> {
        self.cells.get_mut(column)
    }
}

/// Columns plus rows
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Dataset {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset with the given columns and no rows
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Find a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Append a row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_value_prefers_tag() {
        let cell = Cell::new("04/06/2022").with_obj(ObjectTag::new("D8", "*YYMD", "2022-06-04"));
        assert_eq!(cell.raw_value(), "2022-06-04");

        let cell = Cell::new("text").with_obj(ObjectTag::typed("", ""));
        assert_eq!(cell.raw_value(), "text");

        assert_eq!(Cell::new("plain").raw_value(), "plain");
    }

    #[test]
    fn test_commit_edit_updates_both() {
        let mut cell = Cell::typed("10", "NR", "");
        cell.commit_edit("12.5");
        assert_eq!(cell.value, "12.5");
        assert_eq!(cell.obj.unwrap().k, "12.5");

        let mut untyped = Cell::new("a");
        untyped.commit_edit("b");
        assert_eq!(untyped.value, "b");
        assert!(untyped.obj.is_none());
    }

    #[test]
    fn test_editor_config() {
        assert!(!Cell::new("x").has_editor_config());
        assert!(Cell::new("x").with_data("sizeX", "18px").has_editor_config());
    }

    #[test]
    fn test_dataset_lookup() {
        let mut ds = Dataset::new(vec![Column::new("A", "Alpha"), Column::new("B", "Beta")]);
        ds.push_row(Row::new().with_cell("A", Cell::new("1")));
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.column("B").map(|c| c.title.as_str()), Some("Beta"));
        assert!(ds.column("C").is_none());
        assert_eq!(ds.rows[0].cell("A").map(|c| c.value.as_str()), Some("1"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_dataset_from_json() {
        let json = r#"{
            "columns": [{"name": "D", "title": "Date", "obj": {"t": "D8", "p": "*YYMD"}}],
            "rows": [{"cells": {"D": {"value": "2022-06-04", "obj": {"t": "D8", "p": "*YYMD", "k": "2022-06-04"}}}}]
        }"#;
        let ds: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(ds.columns[0].obj.as_ref().unwrap().k, "");
        assert_eq!(ds.rows[0].cell("D").unwrap().raw_value(), "2022-06-04");
    }
}
