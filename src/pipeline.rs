//! Pipeline entry point
//!
//! transcript + source → records → line rows → filtered report → export/render.
//! Everything is computed in memory before the first output file is written,
//! so a failing run never leaves a partial table or chart behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::aggregate::{aggregate, LineRow};
use crate::compiler::CompileCommand;
use crate::config::ProfileConfig;
use crate::csv_output::CsvOutput;
use crate::error;
use crate::html_output::HtmlOutput;
use crate::json_output::JsonReport;
use crate::report::Report;
use crate::source_map::SourceMap;
use crate::text_output;
use crate::transcript::parse_transcript;
use crate::viewport::ViewState;

/// Result of one profiling run
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Every aggregated row, unfiltered, in creation order
    pub rows: Vec<LineRow>,
    /// Filtered, line-ordered rows with title and total time
    pub report: Report,
}

/// Files derived from the input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub transcript: PathBuf,
    pub table: PathBuf,
    pub chart: PathBuf,
}

impl OutputPaths {
    /// `dir/name.v` → `name.txt` (next to the source or in the profile dir),
    /// `dir/name.csv` and `dir/name.html`
    pub fn derive(input: &Path, config: &ProfileConfig) -> Self {
        let folder = input.parent().unwrap_or_else(|| Path::new(""));
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let transcript_dir = if config.persist_transcript {
            folder
        } else {
            config.profile_dir.as_path()
        };
        Self {
            transcript: transcript_dir.join(format!("{stem}.txt")),
            table: folder.join(format!("{stem}.csv")),
            chart: folder.join(format!("{stem}.html")),
        }
    }
}

/// Output format for the on-screen view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Text bar chart (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
}

/// How the interactive view is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub state: ViewState,
    pub format: OutputFormat,
}

/// Turn transcript and source text into line rows and a filtered report
pub fn profile(
    transcript: &str,
    source: &str,
    source_name: &str,
    config: &ProfileConfig,
) -> error::Result<Profile> {
    config.validate()?;
    let records = parse_transcript(transcript)?;
    let source_map = SourceMap::new(source);
    let rows = aggregate(&records, &source_map, config.max_display_width)?;
    let report = Report::build(source_name, &rows, &config.report_config());
    tracing::info!(
        records = records.len(),
        rows = rows.len(),
        shown = report.rows.len(),
        total_time = report.total_time,
        "profile computed"
    );
    Ok(Profile { rows, report })
}

/// Full run for one source file: compile (or reuse), profile, export, render
pub fn run(
    input: &Path,
    compiler_args: &[String],
    config: &ProfileConfig,
    view: ViewOptions,
) -> Result<()> {
    config.validate()?;
    let paths = OutputPaths::derive(input, config);

    if config.skip_recompilation {
        eprintln!("Skipping compilation...");
        tracing::info!(transcript = %paths.transcript.display(), "reusing transcript");
    } else {
        CompileCommand::new(&config.compiler, input, compiler_args, &config.timing_flag)
            .run(&paths.transcript)?;
    }

    let transcript = fs::read_to_string(&paths.transcript)
        .with_context(|| format!("Failed to read transcript {}", paths.transcript.display()))?;
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read source file {}", input.display()))?;

    let profile = profile(&transcript, &source, &input.display().to_string(), config)?;

    if config.persist_table {
        eprintln!("Saving table to {}...", paths.table.display());
        fs::write(&paths.table, CsvOutput::new(&profile.rows).to_csv())
            .with_context(|| format!("Failed to write table {}", paths.table.display()))?;
    }

    if config.output_to_file {
        eprintln!("Saving chart to {}...", paths.chart.display());
        fs::write(&paths.chart, HtmlOutput::new(&profile.report).to_html())
            .with_context(|| format!("Failed to write chart {}", paths.chart.display()))?;
    } else {
        print_view(&profile.report, view)?;
    }

    Ok(())
}

fn print_view(report: &Report, view: ViewOptions) -> Result<()> {
    let visible = view.state.visible_range(&report.rows);
    match view.format {
        OutputFormat::Text => print!("{}", text_output::render(report, visible)),
        OutputFormat::Json => {
            let json = JsonReport::from_report(report, visible)
                .to_json()
                .context("Failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}
