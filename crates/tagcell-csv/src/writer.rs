//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tagcell_core::{Column, Dataset};
use tagcell_format::{CellResolver, LocaleContext};

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator, ValueMode};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a dataset to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        dataset: &Dataset,
        path: P,
        ctx: &Arc<LocaleContext>,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(dataset, file, ctx, options)
    }

    /// Write a dataset to a writer.
    ///
    /// Columns keep dataset order. A row missing a column's cell gets an
    /// empty field.
    pub fn write<W: Write>(
        dataset: &Dataset,
        writer: W,
        ctx: &Arc<LocaleContext>,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        if options.write_header {
            csv_writer.write_record(dataset.columns.iter().map(Column::label))?;
        }
        if options.write_tag_row {
            csv_writer.write_record(dataset.columns.iter().map(tag_field))?;
        }

        let mut resolver = CellResolver::new(Arc::clone(ctx));
        for row in &dataset.rows {
            let record: Vec<String> = dataset
                .columns
                .iter()
                .map(|column| match row.cell(&column.name) {
                    Some(cell) => match options.values {
                        ValueMode::Display => resolver.display_value(cell, column),
                        ValueMode::Raw => cell.raw_value().to_string(),
                    },
                    None => String::new(),
                })
                .collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        log::debug!(
            "Wrote {} rows for locale {}",
            dataset.rows.len(),
            ctx.locale()
        );
        Ok(())
    }
}

/// `t/p` form of a column's default tag, empty when untagged
fn tag_field(column: &Column) -> String {
    match &column.obj {
        Some(obj) if obj.p.is_empty() => obj.t.clone(),
        Some(obj) => format!("{}/{}", obj.t, obj.p),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagcell_core::{Cell, ObjectTag, Row};
    use tagcell_format::Locale;

    fn dataset() -> Dataset {
        let mut ds = Dataset::new(vec![
            Column::new("DATE", "Date").with_obj(ObjectTag::typed("D8", "*YYMD")),
            Column::new("AMOUNT", "Amount")
                .with_obj(ObjectTag::typed("NR", ""))
                .with_decimals(2),
            Column::new("NOTE", ""),
        ]);
        ds.push_row(
            Row::new()
                .with_cell("DATE", Cell::typed("2022-06-04", "D8", "*YYMD"))
                .with_cell("AMOUNT", Cell::typed("1234.5", "NR", ""))
                .with_cell("NOTE", Cell::new("a, b")),
        );
        ds.push_row(Row::new().with_cell("AMOUNT", Cell::typed("-2", "NR", "")));
        ds
    }

    fn write(ds: &Dataset, locale: Locale, options: &CsvWriteOptions) -> String {
        let mut out = Vec::new();
        let ctx = Arc::new(LocaleContext::new(locale));
        CsvWriter::write(ds, &mut out, &ctx, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_display_values() {
        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..Default::default()
        };
        assert_eq!(
            write(&dataset(), Locale::En, &options),
            "Date,Amount,NOTE\n06/04/2022,\"1,234.50\",\"a, b\"\n,-2.00,\n"
        );
    }

    #[test]
    fn test_write_locale_and_delimiter() {
        let options = CsvWriteOptions {
            delimiter: b';',
            write_header: false,
            line_terminator: LineTerminator::LF,
            ..Default::default()
        };
        assert_eq!(
            write(&dataset(), Locale::It, &options),
            "04/06/2022;1.234,50;a, b\n;-2,00;\n"
        );
    }

    #[test]
    fn test_write_raw_with_tag_row() {
        let options = CsvWriteOptions {
            write_tag_row: true,
            values: ValueMode::Raw,
            ..Default::default()
        };
        assert_eq!(
            write(&dataset(), Locale::Fr, &options),
            "Date,Amount,NOTE\r\nD8/*YYMD,NR,\r\n2022-06-04,1234.5,\"a, b\"\r\n,-2,\r\n"
        );
    }
}
