//! Terminal bar chart for the scrollable view

use std::ops::Range;

use crate::report::Report;

const BAR_WIDTH: usize = 40;

/// Render the rows in `visible` as text bars under the report title
///
/// Bars are scaled against the slowest row of the whole report so scrolling
/// does not change their length.
pub fn render(report: &Report, visible: Range<usize>) -> String {
    let mut out = String::new();
    out.push_str(&report.title);
    out.push('\n');

    let max_seconds = report.max_seconds();
    let shown = report.rows.get(visible.clone()).unwrap_or_default();
    for row in shown {
        let filled = if max_seconds > 0.0 {
            ((row.total_seconds / max_seconds) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{} |{:<bar_width$}| {:.3}\n",
            row.display_text,
            "#".repeat(filled.min(BAR_WIDTH)),
            row.total_seconds,
            bar_width = BAR_WIDTH
        ));
    }

    if shown.is_empty() {
        out.push_str("(no lines to show)\n");
    } else {
        out.push_str(&format!(
            "rows {}-{} of {}\n",
            visible.start + 1,
            visible.start + shown.len(),
            report.rows.len()
        ));
    }
    out
}
