//! Dataset search

use tagcell_core::{Cell, Column, Dataset};

use crate::classify::is_date;
use crate::dates::parse_date;
use crate::locale::LocaleContext;
use crate::number::{numberify_safe, NumberInput, NumberType};

/// Inclusive range for [`find_cells`]
#[derive(Debug, Clone, PartialEq)]
pub enum FindRange {
    /// Compared lexically, or as dates for date cells
    Text { min: String, max: String },
    /// Compared numerically; unparseable cell values count as `0`
    Number { min: f64, max: f64 },
}

/// Filters for [`find_cells`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindCellFilters {
    /// Columns to search; empty means all
    pub columns: Vec<String>,
    /// Exact cell value, used when no range is set
    pub value: Option<String>,
    pub range: Option<FindRange>,
}

impl FindCellFilters {
    /// Match cells whose value equals `value`
    pub fn value<S: Into<String>>(value: S) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Match cells within a range
    pub fn range(range: FindRange) -> Self {
        Self {
            range: Some(range),
            ..Default::default()
        }
    }

    /// Restrict the search to some columns
    pub fn in_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// A matching cell: row index and column name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellMatch {
    pub row: usize,
    pub column: String,
}

fn within<T: PartialOrd>(value: &T, min: &T, max: &T) -> bool {
    value >= min && value <= max
}

fn cell_in_range(cell: &Cell, range: &FindRange, ctx: &LocaleContext) -> bool {
    match range {
        FindRange::Text { min, max } => match &cell.obj {
            Some(obj) if is_date(obj) => {
                let pattern = Some(obj.p.as_str()).filter(|p| !p.is_empty());
                match (
                    parse_date(cell.raw_value(), pattern, ctx),
                    parse_date(min, None, ctx),
                    parse_date(max, None, ctx),
                ) {
                    (Ok(value), Ok(min), Ok(max)) => within(&value, &min, &max),
                    _ => false,
                }
            }
            _ => within(&cell.value.as_str(), &min.as_str(), &max.as_str()),
        },
        FindRange::Number { min, max } => {
            let n = numberify_safe(cell.raw_value(), ctx, NumberInput::Canonical, NumberType::Plain);
            within(&n, min, max)
        }
    }
}

/// Find cells matching `filters`.
///
/// With a range, date-tagged cells compare as dates, other cells compare
/// their value lexically or numerically depending on the range. Without a
/// range, cells whose `value` equals `filters.value` match. Results follow
/// row order, then column name order.
pub fn find_cells(dataset: &Dataset, filters: &FindCellFilters, ctx: &LocaleContext) -> Vec<CellMatch> {
    let mut matches = Vec::new();
    for (index, row) in dataset.rows.iter().enumerate() {
        for (name, cell) in &row.cells {
            if !filters.columns.is_empty() && !filters.columns.contains(name) {
                continue;
            }
            let hit = match (&filters.range, &filters.value) {
                (Some(range), _) => cell_in_range(cell, range, ctx),
                (None, Some(value)) => cell.value == *value,
                (None, None) => false,
            };
            if hit {
                matches.push(CellMatch {
                    row: index,
                    column: name.clone(),
                });
            }
        }
    }
    matches
}

/// Indices of rows with at least one matching cell
pub fn find_rows(dataset: &Dataset, filters: &FindCellFilters, ctx: &LocaleContext) -> Vec<usize> {
    let mut rows: Vec<usize> = find_cells(dataset, filters, ctx)
        .into_iter()
        .map(|m| m.row)
        .collect();
    rows.dedup();
    rows
}

/// Column search criteria; unset fields match anything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    /// Type code of the column's default tag
    pub t: Option<String>,
    /// Parameter of the column's default tag
    pub p: Option<String>,
}

impl ColumnFilter {
    fn matches(&self, column: &Column) -> bool {
        let obj = column.obj.as_ref();
        self.name.as_ref().map_or(true, |n| column.name == *n)
            && self.title.as_ref().map_or(true, |t| column.title == *t)
            && self.t.as_ref().map_or(true, |t| obj.map_or(false, |o| o.t == *t))
            && self.p.as_ref().map_or(true, |p| obj.map_or(false, |o| o.p == *p))
    }
}

/// Columns matching every set field of `filter`
pub fn find_columns<'a>(columns: &'a [Column], filter: &ColumnFilter) -> Vec<&'a Column> {
    columns.iter().filter(|c| filter.matches(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;
    use tagcell_core::{ObjectTag, Row};

    fn dataset() -> Dataset {
        let mut ds = Dataset::new(vec![
            Column::new("DATE", "Date").with_obj(ObjectTag::typed("D8", "*YYMD")),
            Column::new("QTY", "Quantity").with_obj(ObjectTag::typed("NR", "")),
            Column::new("NAME", "Name"),
        ]);
        for (date, qty, name) in [
            ("2022-01-10", "5", "apple"),
            ("2022-06-04", "12.5", "banana"),
            ("2023-03-01", "-1", "cherry"),
        ] {
            ds.push_row(
                Row::new()
                    .with_cell("DATE", Cell::typed(date, "D8", "*YYMD"))
                    .with_cell("QTY", Cell::typed(qty, "NR", ""))
                    .with_cell("NAME", Cell::new(name)),
            );
        }
        ds
    }

    fn at(row: usize, column: &str) -> CellMatch {
        CellMatch {
            row,
            column: column.to_string(),
        }
    }

    #[test]
    fn test_find_by_value() {
        let ctx = LocaleContext::default();
        let found = find_cells(&dataset(), &FindCellFilters::value("banana"), &ctx);
        assert_eq!(found, vec![at(1, "NAME")]);
    }

    #[test]
    fn test_find_date_range_is_inclusive() {
        let ctx = LocaleContext::new(Locale::It);
        let filters = FindCellFilters::range(FindRange::Text {
            min: "04/06/2022".into(),
            max: "2023-03-01".into(),
        })
        .in_columns(["DATE"]);
        assert_eq!(find_cells(&dataset(), &filters, &ctx), vec![at(1, "DATE"), at(2, "DATE")]);
    }

    #[test]
    fn test_find_numeric_range() {
        let ctx = LocaleContext::default();
        let filters =
            FindCellFilters::range(FindRange::Number { min: 0.0, max: 12.5 }).in_columns(["QTY"]);
        assert_eq!(find_cells(&dataset(), &filters, &ctx), vec![at(0, "QTY"), at(1, "QTY")]);
        assert_eq!(find_rows(&dataset(), &filters, &ctx), vec![0, 1]);
    }

    #[test]
    fn test_find_text_range() {
        let ctx = LocaleContext::default();
        let filters = FindCellFilters::range(FindRange::Text {
            min: "b".into(),
            max: "c".into(),
        })
        .in_columns(["NAME"]);
        assert_eq!(find_cells(&dataset(), &filters, &ctx), vec![at(1, "NAME")]);
    }

    #[test]
    fn test_find_columns() {
        let ds = dataset();
        let by_type = ColumnFilter {
            t: Some("NR".into()),
            ..Default::default()
        };
        let found: Vec<&str> = find_columns(&ds.columns, &by_type)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(found, vec!["QTY"]);

        let by_title = ColumnFilter {
            title: Some("Name".into()),
            p: Some("".into()),
            ..Default::default()
        };
        assert!(find_columns(&ds.columns, &by_title).is_empty());
        assert_eq!(find_columns(&ds.columns, &ColumnFilter::default()).len(), 3);
    }
}
