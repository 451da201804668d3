//! Report filtering and ranking
//!
//! The full row set is never mutated. Filtering produces a new, line-ordered
//! row set while the total time always comes from the full set.

use crate::aggregate::{total_seconds, LineRow};

/// Toggles for the report filter stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Keep only the N slowest rows; `<= 0` disables the stage
    pub top_n: i64,
    /// Drop rows whose total time is exactly zero
    pub drop_zero_time: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 300,
            drop_zero_time: true,
        }
    }
}

/// Filtered rows ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    /// Total time of the unfiltered rows
    pub total_time: f64,
    /// Rows after filtering, ascending by line
    pub rows: Vec<LineRow>,
}

impl Report {
    /// Build a report for `source_name` from the full row set
    pub fn build(source_name: &str, full: &[LineRow], config: &ReportConfig) -> Self {
        let total_time = total_seconds(full);
        Self {
            title: title(source_name, total_time, config),
            total_time,
            rows: apply(full, config),
        }
    }

    /// Largest row time in the report, 0 when empty
    pub fn max_seconds(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.total_seconds)
            .fold(0.0, f64::max)
    }
}

/// Run every enabled stage, then order by line
pub fn apply(full: &[LineRow], config: &ReportConfig) -> Vec<LineRow> {
    let mut rows = if config.drop_zero_time {
        drop_zero_time(full)
    } else {
        full.to_vec()
    };
    rows = top_n(rows, config.top_n);
    sort_by_line(&mut rows);
    rows
}

pub fn drop_zero_time(rows: &[LineRow]) -> Vec<LineRow> {
    rows.iter()
        .filter(|row| row.total_seconds != 0.0)
        .cloned()
        .collect()
}

/// Keep the `n` slowest rows, earlier rows winning ties
///
/// A no-op when `n <= 0` or `n` is at least the row count. The returned rows
/// are in descending time order.
pub fn top_n(rows: Vec<LineRow>, n: i64) -> Vec<LineRow> {
    let keep = match usize::try_from(n) {
        Ok(keep) if keep > 0 && keep < rows.len() => keep,
        _ => return rows,
    };
    let mut ranked = rows;
    // stable: ties keep transcript order
    ranked.sort_by(|a, b| b.total_seconds.total_cmp(&a.total_seconds));
    ranked.truncate(keep);
    ranked
}

/// Stable sort by ascending line number
pub fn sort_by_line(rows: &mut [LineRow]) {
    rows.sort_by_key(|row| row.line);
}

/// Human-readable chart title
pub fn title(source_name: &str, total_time: f64, config: &ReportConfig) -> String {
    let mut title = format!("Profiling data of {source_name} (total: {total_time:.0} sec");
    if config.top_n > 0 {
        title.push_str(&format!("; showing {} lines", config.top_n));
    }
    if config.drop_zero_time {
        title.push_str("; filtering 0 seconds lines");
    }
    title.push(')');
    title
}
