//! CLI argument parsing for coqprof

use std::path::PathBuf;

use clap::Parser;

use crate::config::ProfileConfig;
pub use crate::pipeline::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "coqprof")]
#[command(version)]
#[command(about = "Per-line compile time profile of a Coq file", long_about = None)]
pub struct Cli {
    /// Source file to compile and profile
    pub input: PathBuf,

    /// TOML configuration file; flags below override it
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compiler executable (default: coqc)
    #[arg(long = "compiler", value_name = "PROGRAM")]
    pub compiler: Option<String>,

    /// Reuse the last transcript instead of recompiling
    #[arg(short = 's', long = "skip-recompilation")]
    pub skip_recompilation: bool,

    /// Directory for transcripts not kept next to the source
    #[arg(long = "profile-dir", value_name = "DIR")]
    pub profile_dir: Option<PathBuf>,

    /// Keep the transcript next to the source file
    #[arg(long = "keep-transcript")]
    pub keep_transcript: bool,

    /// Do not write the CSV table
    #[arg(long = "no-table")]
    pub no_table: bool,

    /// Print a scrollable view instead of writing the chart file
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Keep only the N slowest lines (<= 0 keeps all)
    #[arg(short = 'n', long = "top", value_name = "N", allow_negative_numbers = true)]
    pub top_n: Option<i64>,

    /// Keep lines whose compile time is zero
    #[arg(long = "keep-zero")]
    pub keep_zero: bool,

    /// Characters of source text shown per line
    #[arg(short = 'w', long = "width", value_name = "CHARS")]
    pub width: Option<usize>,

    /// First source line of the view (with --interactive)
    #[arg(long = "start-line", value_name = "LINE")]
    pub start_line: Option<usize>,

    /// Number of lines in the view (with --interactive)
    #[arg(long = "window", value_name = "LINES")]
    pub window: Option<usize>,

    /// Output format of the view (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Extra compiler arguments (everything after --)
    #[arg(last = true)]
    pub compiler_args: Vec<String>,
}

impl Cli {
    /// Apply the flags that were given on top of `config`
    pub fn apply_to(&self, config: &mut ProfileConfig) {
        if let Some(compiler) = &self.compiler {
            config.compiler = compiler.clone();
        }
        if let Some(dir) = &self.profile_dir {
            config.profile_dir = dir.clone();
        }
        if let Some(top_n) = self.top_n {
            config.top_n_rows = top_n;
        }
        if let Some(width) = self.width {
            config.max_display_width = width;
        }
        if self.skip_recompilation {
            config.skip_recompilation = true;
        }
        if self.keep_transcript {
            config.persist_transcript = true;
        }
        if self.no_table {
            config.persist_table = false;
        }
        if self.interactive {
            config.output_to_file = false;
        }
        if self.keep_zero {
            config.drop_zero_time_rows = false;
        }
    }
}
