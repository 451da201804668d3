//! Run configuration
//!
//! One explicit value handed to the pipeline entry point. It can be read from
//! a TOML file and is then overridden by command-line flags.
//!
//! # Example
//! ```
//! use coqprof::config::ProfileConfig;
//!
//! let config = ProfileConfig::from_toml_str("top_n_rows = 50").unwrap();
//! assert_eq!(config.top_n_rows, 50);
//! assert_eq!(config.max_display_width, 60);
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::report::ReportConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Directory for transcripts that are not kept next to the source
    pub profile_dir: PathBuf,

    /// Characters of source text shown per row
    pub max_display_width: usize,

    /// Reuse the last transcript instead of running the compiler
    pub skip_recompilation: bool,

    /// Keep the transcript next to the source file
    pub persist_transcript: bool,

    /// Write the unfiltered rows as CSV
    pub persist_table: bool,

    /// Write the chart to a file; otherwise print the scrollable view
    pub output_to_file: bool,

    /// Keep only the N slowest lines; `<= 0` keeps all
    pub top_n_rows: i64,

    /// Drop lines whose compile time is zero
    pub drop_zero_time_rows: bool,

    /// Compiler executable
    pub compiler: String,

    /// Flag that turns on per-sentence timing
    pub timing_flag: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            profile_dir: PathBuf::from("raw"),
            max_display_width: 60,
            skip_recompilation: false,
            persist_transcript: false,
            persist_table: true,
            output_to_file: true,
            top_n_rows: 300,
            drop_zero_time_rows: true,
            compiler: "coqc".to_string(),
            timing_flag: "-time".to_string(),
        }
    }
}

impl ProfileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.max_display_width == 0 {
            return Err(ProfileError::InvalidConfig(
                "max_display_width must be at least 1".to_string(),
            ));
        }
        if self.compiler.trim().is_empty() {
            return Err(ProfileError::InvalidConfig(
                "compiler must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Filter settings for the report stage
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            top_n: self.top_n_rows,
            drop_zero_time: self.drop_zero_time_rows,
        }
    }
}
