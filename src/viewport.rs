//! Scrollable view over the filtered rows
//!
//! Two controls drive the view: a start line picked among the rows' line
//! numbers and a window size. Both only choose which contiguous slice of rows
//! is visible.

use std::ops::Range;

use crate::aggregate::LineRow;

const MIN_WINDOW: usize = 10;
const DEFAULT_WINDOW: usize = 30;

/// Requested view position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Source line to start from; `None` starts at the first row
    pub start_line: Option<usize>,
    /// Number of rows to show; `None` uses the default window
    pub window: Option<usize>,
}

impl ViewState {
    pub fn new(start_line: Option<usize>, window: Option<usize>) -> Self {
        Self { start_line, window }
    }

    /// Window size clamped to what `row_count` rows allow
    pub fn effective_window(&self, row_count: usize) -> usize {
        let low = MIN_WINDOW.min(row_count);
        self.window
            .unwrap_or(DEFAULT_WINDOW)
            .clamp(low, row_count)
    }

    /// Index range of `rows` that is visible under this state
    ///
    /// `rows` must be sorted by line, as produced by the report filter.
    pub fn visible_range(&self, rows: &[LineRow]) -> Range<usize> {
        let count = rows.len();
        if count == 0 {
            return 0..0;
        }
        let anchor = match self.start_line {
            Some(line) => rows
                .iter()
                .position(|row| row.line >= line)
                .unwrap_or(count - 1),
            None => 0,
        };
        let window = self.effective_window(count);
        let end = (anchor + window).min(count);
        let start = end.saturating_sub(window);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: impl IntoIterator<Item = usize>) -> Vec<LineRow> {
        lines
            .into_iter()
            .map(|line| LineRow {
                line,
                spans: Vec::new(),
                display_text: String::new(),
                total_seconds: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(ViewState::default().visible_range(&[]), 0..0);
    }

    #[test]
    fn test_default_window() {
        let rows = rows(1..=100);
        assert_eq!(ViewState::default().visible_range(&rows), 0..30);

        let few = rows.into_iter().take(5).collect::<Vec<_>>();
        assert_eq!(ViewState::default().visible_range(&few), 0..5);
    }

    #[test]
    fn test_window_clamped() {
        let rows = rows(1..=50);
        assert_eq!(ViewState::new(None, Some(3)).visible_range(&rows), 0..10);
        assert_eq!(ViewState::new(None, Some(500)).visible_range(&rows), 0..50);
    }

    #[test]
    fn test_start_line_snaps_to_next_row() {
        let rows = rows((1..=40).map(|i| i * 10));
        // line 95 is between rows 90 and 100
        let view = ViewState::new(Some(95), Some(10));
        assert_eq!(view.visible_range(&rows), 9..19);
    }

    #[test]
    fn test_window_slides_back_at_the_end() {
        let rows = rows(1..=40);
        let view = ViewState::new(Some(35), Some(10));
        assert_eq!(view.visible_range(&rows), 30..40);

        let past_end = ViewState::new(Some(1000), Some(10));
        assert_eq!(past_end.visible_range(&rows), 30..40);
    }

    #[test]
    fn test_deterministic() {
        let rows = rows(1..=25);
        let view = ViewState::new(Some(7), Some(12));
        assert_eq!(view.visible_range(&rows), view.visible_range(&rows));
    }
}
