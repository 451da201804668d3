//! HTML bar chart of a line report
//!
//! Static, self-contained rendering: one horizontal bar per row, bar length
//! proportional to the row's time, the row's display text as label.

use crate::aggregate::LineRow;
use crate::report::Report;

/// HTML chart formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    report: &'a Report,
}

impl<'a> HtmlOutput<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: white;
        }
        h1 {
            color: #333;
            font-size: 0.9em;
        }
        table {
            border-collapse: collapse;
            width: 100%;
        }
        td {
            padding: 1px 6px;
            vertical-align: middle;
        }
        tr:hover {
            background-color: #f0f0f0;
        }
        .label {
            font-family: monospace;
            font-size: 7pt;
            white-space: pre;
        }
        .bar-cell {
            width: 100%;
        }
        .bar {
            display: inline-block;
            height: 9px;
            background-color: #4a90d9;
        }
        .value {
            font-family: monospace;
            font-size: 6pt;
            color: #555;
            padding-left: 4px;
        }
        .axis {
            font-size: 0.8em;
            color: #888;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Format a row as a labelled bar
    fn format_row(row: &LineRow, max_seconds: f64) -> String {
        let percent = if max_seconds > 0.0 {
            row.total_seconds / max_seconds * 100.0
        } else {
            0.0
        };
        format!(
            r#"<tr><td class="label">{}</td><td class="bar-cell"><span class="bar" style="width: {:.2}%"></span><span class="value">{:.3}</span></td></tr>"#,
            Self::escape_html(&row.display_text),
            percent,
            row.total_seconds
        )
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let title = Self::escape_html(&self.report.title);

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("    <title>{title}</title>\n"));
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str(&format!("    <h1>{title}</h1>\n"));
        html.push_str("    <div class=\"axis\">Line / seconds</div>\n");

        html.push_str("    <table>\n");
        let max_seconds = self.report.max_seconds();
        for row in &self.report.rows {
            html.push_str("        ");
            html.push_str(&Self::format_row(row, max_seconds));
            html.push('\n');
        }
        html.push_str("    </table>\n");

        html.push_str("    <div class=\"footer\">\n");
        html.push_str(&format!(
            "        {} lines shown, {:.3} seconds in total\n",
            self.report.rows.len(),
            self.report.total_time
        ));
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}
