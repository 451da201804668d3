//! JSON output format for the scrollable view

use std::ops::Range;

use serde::Serialize;

use crate::report::Report;

/// A single report row
#[derive(Debug, Clone, Serialize)]
pub struct JsonLineRow {
    pub line: usize,
    /// Span annotations as `[start, end]` pairs
    pub spans: Vec<[usize; 2]>,
    pub text: String,
    pub seconds: f64,
}

/// The visible window of a report
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub title: String,
    /// Total time of the unfiltered rows
    pub total_time: f64,
    /// Number of rows after filtering
    pub row_count: usize,
    /// Index of the first visible row
    pub first_row: usize,
    pub rows: Vec<JsonLineRow>,
}

impl JsonReport {
    pub fn from_report(report: &Report, visible: Range<usize>) -> Self {
        let rows = report
            .rows
            .get(visible.clone())
            .unwrap_or_default()
            .iter()
            .map(|row| JsonLineRow {
                line: row.line,
                spans: row.spans.iter().map(|s| [s.start, s.end]).collect(),
                text: row.display_text.trim_end().to_string(),
                seconds: row.total_seconds,
            })
            .collect();
        Self {
            title: report.title.clone(),
            total_time: report.total_time,
            row_count: report.rows.len(),
            first_row: visible.start,
            rows,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
