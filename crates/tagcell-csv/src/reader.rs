//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tagcell_core::{Cell, Column, Dataset, ObjectTag, Row};
use tagcell_format::number::is_canonical_number;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a dataset
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Dataset> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a dataset
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();
        let mut row_idx = 0usize;

        let names: Vec<String> = if options.has_header {
            match records.next() {
                Some(header) => {
                    row_idx += 1;
                    header?.iter().map(|s| s.trim().to_string()).collect()
                }
                None => return Ok(Dataset::default()),
            }
        } else {
            Vec::new()
        };

        let tags: Vec<Option<ObjectTag>> = if options.tag_row {
            match records.next() {
                Some(tag_record) => {
                    let tag_record = tag_record?;
                    let tags = tag_record
                        .iter()
                        .enumerate()
                        .map(|(col, field)| Self::parse_tag(field, row_idx, col))
                        .collect::<CsvResult<Vec<_>>>()?;
                    row_idx += 1;
                    tags
                }
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };

        let mut data: Vec<Vec<String>> = Vec::new();
        for result in records {
            let record = result?;
            data.push(record.iter().map(str::to_string).collect());
        }

        let width = names
            .len()
            .max(if options.has_header { 0 } else { data.iter().map(Vec::len).max().unwrap_or(0) });
        let mut columns: Vec<Column> = (0..width)
            .map(|col| {
                let name = names
                    .get(col)
                    .filter(|n| !n.is_empty())
                    .cloned()
                    .unwrap_or_else(|| format!("C{}", col + 1));
                let mut column = Column::new(name.clone(), name);
                column.obj = tags.get(col).cloned().flatten();
                column
            })
            .collect();

        if options.auto_detect_types {
            for (col, column) in columns.iter_mut().enumerate() {
                if column.obj.is_none() {
                    column.obj = Self::detect_type(data.iter().filter_map(|r| r.get(col)));
                }
            }
        }

        let mut dataset = Dataset::new(columns);
        for (index, fields) in data.into_iter().enumerate() {
            if fields.len() > width {
                log::warn!(
                    "Row {} has {} fields but there are {} columns; extra fields dropped",
                    row_idx + index,
                    fields.len(),
                    width
                );
            }
            let mut row = Row::new();
            for (column, field) in dataset.columns.iter().zip(fields) {
                let cell = Cell {
                    obj: column.obj.as_ref().map(|obj| obj.with_k(field.as_str())),
                    value: field,
                    ..Default::default()
                };
                row.cells.insert(column.name.clone(), cell);
            }
            dataset.push_row(row);
        }

        log::debug!(
            "Read {} rows into {} columns",
            dataset.len(),
            dataset.columns.len()
        );
        Ok(dataset)
    }

    /// Parse a `t/p` tag row entry; blank entries mean untyped
    fn parse_tag(field: &str, row: usize, column: usize) -> CsvResult<Option<ObjectTag>> {
        let field = field.trim();
        if field.is_empty() {
            return Ok(None);
        }
        let (t, p) = field.split_once('/').unwrap_or((field, ""));
        let tag = ObjectTag::typed(t, p);
        tag.validate().map_err(|e| CsvError::Parse {
            row,
            column,
            message: e.to_string(),
        })?;
        Ok(Some(tag))
    }

    /// Infer a tag from a column's values: all canonical numbers (no
    /// grouping, `.` decimals) is `NR`, all ISO dates is `D8/*YYMD`. Blank
    /// values are ignored; a column with no values stays untyped.
    fn detect_type<'a, I>(values: I) -> Option<ObjectTag>
    where
        I: Iterator<Item = &'a String>,
    {
        let mut numeric = true;
        let mut dates = true;
        let mut seen = false;

        for value in values.map(|v| v.trim()).filter(|v| !v.is_empty()) {
            seen = true;
            numeric &= is_canonical_number(value);
            dates &= NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
            if !numeric && !dates {
                return None;
            }
        }

        match (seen, numeric, dates) {
            (false, _, _) => None,
            (true, true, _) => Some(ObjectTag::typed("NR", "")),
            (true, false, true) => Some(ObjectTag::typed("D8", "*YYMD")),
            (true, false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(input: &str, options: &CsvReadOptions) -> Dataset {
        CsvReader::read(input.as_bytes(), options).unwrap()
    }

    #[test]
    fn test_read_with_header() {
        let ds = read("NAME,QTY\napple,3\npear,4.5\n", &CsvReadOptions::default());
        assert_eq!(ds.columns.len(), 2);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.columns[1].obj, Some(ObjectTag::typed("NR", "")));
        assert!(ds.columns[0].obj.is_none());

        let qty = ds.rows[1].cell("QTY").unwrap();
        assert_eq!(qty.value, "4.5");
        assert_eq!(qty.obj, Some(ObjectTag::new("NR", "", "4.5")));
    }

    #[test]
    fn test_read_tag_row() {
        let options = CsvReadOptions {
            tag_row: true,
            ..Default::default()
        };
        let ds = read("D,OK\nD8/*YYMD,V2/SI/NO\n2022-06-04,1\n", &options);
        assert_eq!(ds.columns[0].obj, Some(ObjectTag::typed("D8", "*YYMD")));
        assert_eq!(ds.columns[1].obj, Some(ObjectTag::typed("V2", "SI/NO")));
        assert_eq!(ds.rows[0].cell("D").unwrap().raw_value(), "2022-06-04");
    }

    #[test]
    fn test_read_bad_tag_is_error() {
        let options = CsvReadOptions {
            tag_row: true,
            ..Default::default()
        };
        let err = CsvReader::read("A,B\nNR,TOOLONG/x\n".as_bytes(), &options).unwrap_err();
        assert!(matches!(err, CsvError::Parse { row: 1, column: 1, .. }));
    }

    #[test]
    fn test_detect_dates_and_mixed() {
        let ds = read("D,M\n2022-06-04,1\n2023-01-31,x\n,\n", &CsvReadOptions::default());
        assert_eq!(ds.columns[0].obj, Some(ObjectTag::typed("D8", "*YYMD")));
        assert!(ds.columns[1].obj.is_none());
    }

    #[test]
    fn test_detect_rejects_grouped_numbers() {
        let ds = read("A,B,C\n\"12,5\",\"1,234\",-0.5\n3,7,1e3\n", &CsvReadOptions::default());
        assert!(ds.columns[0].obj.is_none());
        assert!(ds.columns[1].obj.is_none());
        assert_eq!(ds.columns[2].obj, Some(ObjectTag::typed("NR", "")));
        assert_eq!(ds.rows[0].cell("A").unwrap().raw_value(), "12,5");
    }

    #[test]
    fn test_no_detection() {
        let options = CsvReadOptions {
            auto_detect_types: false,
            ..Default::default()
        };
        let ds = read("N\n1\n2\n", &options);
        assert!(ds.columns[0].obj.is_none());
        assert!(ds.rows[0].cell("N").unwrap().obj.is_none());
    }

    #[test]
    fn test_headerless_and_ragged_rows() {
        let options = CsvReadOptions {
            has_header: false,
            ..Default::default()
        };
        let ds = read("a,b,c\nd\n", &options);
        let names: Vec<&str> = ds.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2", "C3"]);
        assert_eq!(ds.rows[1].cells.len(), 1);

        let ds = read("A\n1,2\n", &CsvReadOptions::default());
        assert_eq!(ds.columns.len(), 1);
        assert_eq!(ds.rows[0].cells.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let ds = read("", &CsvReadOptions::default());
        assert!(ds.columns.is_empty());
        assert!(ds.is_empty());
    }
}
