//! Compiler invocation
//!
//! Runs the compiler with timing enabled and captures its stdout as the
//! transcript file.

use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::error::ProfileError;

/// Command line for one timed compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl CompileCommand {
    /// `program input extra_args..`, with `timing_flag` appended when missing
    pub fn new(program: &str, input: &Path, extra_args: &[String], timing_flag: &str) -> Self {
        let mut args = Vec::with_capacity(extra_args.len() + 2);
        args.push(input.display().to_string());
        args.extend(extra_args.iter().cloned());
        if !args.iter().any(|arg| arg == timing_flag) {
            args.push(timing_flag.to_string());
        }
        Self {
            program: program.to_string(),
            args,
        }
    }

    /// Shell-like rendering for logs and error messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the compiler, writing its stdout to `transcript`
    ///
    /// A non-zero exit is reported as [`ProfileError::CompilationFailed`].
    pub fn run(&self, transcript: &Path) -> Result<()> {
        if let Some(parent) = transcript.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let outfile = File::create(transcript)
            .with_context(|| format!("Failed to create transcript {}", transcript.display()))?;

        eprintln!("Running {}...\n> {}\n", self.program, self.display());
        tracing::info!(command = %self.display(), transcript = %transcript.display(), "compiling");

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdout(Stdio::from(outfile))
            .status()
            .with_context(|| format!("Failed to start {}", self.program))?;

        if !status.success() {
            tracing::warn!(%status, "compiler exited with failure");
            return Err(ProfileError::CompilationFailed {
                command: self.display(),
                status: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
