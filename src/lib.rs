//! coqprof - per-source-line compile time profiles
//!
//! This library turns the per-sentence timing transcript printed by
//! `coqc -time` into a per-line report: records are parsed, mapped from
//! character offsets to source lines, aggregated per line, then filtered and
//! ranked for export and rendering.

pub mod aggregate;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod html_output;
pub mod json_output;
pub mod pipeline;
pub mod report;
pub mod source_map;
pub mod text_output;
pub mod transcript;
pub mod viewport;
