//! CSV export of the line table
//!
//! Receives the full, unfiltered row set. Columns: line number, span
//! annotations, display text, total seconds.

use crate::aggregate::LineRow;

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    rows: &'a [LineRow],
}

impl<'a> CsvOutput<'a> {
    pub fn new(rows: &'a [LineRow]) -> Self {
        Self { rows }
    }

    fn header() -> &'static str {
        "line,chars,text,time"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(row: &LineRow) -> String {
        [
            row.line.to_string(),
            Self::escape_field(&row.spans_label()),
            Self::escape_field(&row.display_text),
            row.total_seconds.to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for row in self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}
