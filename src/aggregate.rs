//! Per-line aggregation of timing records
//!
//! Records are folded in transcript order. Grouping is by adjacency: a record
//! joins the open row only when it maps to the same line as the record before
//! it. Two runs of records on the same line separated by another line produce
//! two rows with the same line number. `coqc` transcripts are monotonic in
//! offset, so this only shows up when that assumption is broken upstream.

use std::fmt;

use crate::error::Result;
use crate::source_map::SourceMap;
use crate::transcript::TimingRecord;

/// A `(start, end)` character span kept for traceability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{})", self.start, self.end)
    }
}

/// Aggregated timing for one source line
#[derive(Debug, Clone, PartialEq)]
pub struct LineRow {
    /// 1-based source line
    pub line: usize,
    /// Every span that landed on this row, in transcript order
    pub spans: Vec<Span>,
    /// `"<line>: "` followed by the excerpt, padded or cut to the display width
    pub display_text: String,
    /// Sum of elapsed seconds of the row's records
    pub total_seconds: f64,
}

impl LineRow {
    /// Span annotations in `(start-end), (start-end)` form
    pub fn spans_label(&self) -> String {
        self.spans
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug)]
struct OpenRow {
    line: usize,
    spans: Vec<Span>,
    excerpt: String,
    total_seconds: f64,
}

impl OpenRow {
    fn finalize(self, width: usize) -> LineRow {
        LineRow {
            line: self.line,
            spans: self.spans,
            display_text: format_display_text(self.line, &self.excerpt, width),
            total_seconds: self.total_seconds,
        }
    }
}

/// Streaming line aggregator over one source text
#[derive(Debug)]
pub struct LineAggregator<'a> {
    source: &'a SourceMap<'a>,
    width: usize,
    current: Option<OpenRow>,
    rows: Vec<LineRow>,
}

impl<'a> LineAggregator<'a> {
    pub fn new(source: &'a SourceMap<'a>, width: usize) -> Self {
        Self {
            source,
            width,
            current: None,
            rows: Vec::new(),
        }
    }

    /// Fold the next record in transcript order
    pub fn push(&mut self, record: &TimingRecord) -> Result<()> {
        let (line, excerpt) = self.source.locate(record)?;
        let span = Span {
            start: record.char_start,
            end: record.char_end,
        };

        match self.current.as_mut() {
            Some(open) if open.line == line => {
                open.spans.push(span);
                open.excerpt.push_str(&excerpt);
                open.total_seconds += record.elapsed_seconds;
            }
            _ => {
                if let Some(done) = self.current.take() {
                    self.rows.push(done.finalize(self.width));
                }
                self.current = Some(OpenRow {
                    line,
                    spans: vec![span],
                    excerpt,
                    total_seconds: record.elapsed_seconds,
                });
            }
        }
        Ok(())
    }

    /// Close the last open row and return all rows in creation order
    pub fn finish(mut self) -> Vec<LineRow> {
        if let Some(done) = self.current.take() {
            self.rows.push(done.finalize(self.width));
        }
        self.rows
    }
}

/// Aggregate a parsed transcript into line rows
pub fn aggregate(
    records: &[TimingRecord],
    source: &SourceMap<'_>,
    width: usize,
) -> Result<Vec<LineRow>> {
    let mut aggregator = LineAggregator::new(source, width);
    for record in records {
        aggregator.push(record)?;
    }
    let rows = aggregator.finish();
    tracing::debug!(records = records.len(), rows = rows.len(), "aggregated line rows");
    Ok(rows)
}

/// Sum of `total_seconds` over a row set
pub fn total_seconds(rows: &[LineRow]) -> f64 {
    rows.iter().map(|row| row.total_seconds).sum()
}

/// Format the row label: line prefix plus the excerpt fitted to `width` characters
pub fn format_display_text(line: usize, excerpt: &str, width: usize) -> String {
    let fitted: String = excerpt.chars().take(width).collect();
    format!("{line}: {fitted:<width$}")
}
