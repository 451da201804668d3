//! Timing transcript parsing
//!
//! `coqc -time` prints one line per sentence it executes, e.g.
//!
//! ```text
//! Chars 564 - 1553 [Lemma~add_comm~...] 0.012 secs (0.008u,0.004s) (success)
//! ```
//!
//! Each line is split into three fields, each checked on its own:
//! - the elapsed time, `] <seconds> secs`. Lines without it carry no timing
//!   information and are skipped.
//! - the character offsets, `Chars <start> - <end> [`
//! - the instruction label, from the `[` ending the offsets field to the `]`
//!   opening the time field. `coqc` cuts long sentences to 30 characters and
//!   appends `...`, so brackets inside a label need not balance.
//!
//! Once a line has a timing field, a missing or unusable offset or label field
//! is fatal for the whole transcript.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ProfileError, Result};

/// One timed instruction from the transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRecord {
    /// Instruction identifier between the brackets
    pub label: String,
    /// Start offset into the source text
    pub char_start: usize,
    /// End offset into the source text (`char_start <= char_end`)
    pub char_end: usize,
    /// Reported elapsed time, finite and non-negative
    pub elapsed_seconds: f64,
    /// 1-based transcript line the record was read from
    pub transcript_line: usize,
}

fn time_field() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\]\s+(\S+)\s+secs\b").expect("static time pattern"))
}

fn offsets_field() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Chars\s+(\S+)\s+-\s+(\S+)\s+\[").expect("static offsets pattern")
    })
}

/// Parse a whole transcript held in memory
pub fn parse_transcript(text: &str) -> Result<Vec<TimingRecord>> {
    parse_lines(text.lines())
}

/// Parse transcript lines in order, skipping lines without a timing field
///
/// Fails on the first malformed record; no partial result is returned.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<TimingRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in lines.into_iter().enumerate() {
        match parse_line(index + 1, line.as_ref())? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    tracing::debug!(
        records = records.len(),
        skipped,
        "parsed timing transcript"
    );
    Ok(records)
}

/// Parse a single transcript line
///
/// Returns `Ok(None)` when the line has no timing field.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<TimingRecord>> {
    let Some(time) = time_field().captures(text) else {
        return Ok(None);
    };
    let elapsed_seconds = parse_seconds(line_no, &time[1])?;

    let offsets = offsets_field().captures(text).ok_or_else(|| {
        ProfileError::malformed(line_no, "missing `Chars <start> - <end> [` offsets")
    })?;
    let char_start = parse_offset(line_no, &offsets[1])?;
    let char_end = parse_offset(line_no, &offsets[2])?;
    if char_start > char_end {
        return Err(ProfileError::malformed(
            line_no,
            format!("start offset {char_start} is past end offset {char_end}"),
        ));
    }

    // The offsets match ends just after the label's opening bracket and the
    // time match starts at the bracket closing it
    let (fields_start, label_start) = offsets
        .get(0)
        .map_or((0, text.len()), |m| (m.start(), m.end()));
    let label_end = time.get(0).map_or(text.len(), |m| m.start());
    let label = text
        .get(label_start..label_end)
        .map(|raw| strip_enclosing(raw, open_brackets(&text[..fields_start])))
        .ok_or_else(|| {
            ProfileError::malformed(
                line_no,
                "instruction label does not precede the timing field",
            )
        })?;
    if label.trim().is_empty() {
        return Err(ProfileError::malformed(line_no, "empty instruction label"));
    }

    Ok(Some(TimingRecord {
        label: label.to_string(),
        char_start,
        char_end,
        elapsed_seconds,
        transcript_line: line_no,
    }))
}

fn parse_seconds(line_no: usize, token: &str) -> Result<f64> {
    let seconds: f64 = token.parse().map_err(|_| {
        ProfileError::malformed(line_no, format!("elapsed time `{token}` is not a number"))
    })?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ProfileError::malformed(
            line_no,
            format!("elapsed time `{token}` is not a non-negative duration"),
        ));
    }
    Ok(seconds)
}

fn parse_offset(line_no: usize, token: &str) -> Result<usize> {
    token.parse().map_err(|_| {
        ProfileError::malformed(line_no, format!("offset `{token}` is not an integer"))
    })
}

/// Brackets opened before the `Chars` field and still open when it starts
fn open_brackets(prefix: &str) -> usize {
    prefix.chars().fold(0usize, |depth, c| match c {
        '[' => depth + 1,
        ']' => depth.saturating_sub(1),
        _ => depth,
    })
}

/// Drop the closing brackets of `depth` groups wrapping the whole record,
/// as in `Result X [Chars 0 - 1 [foo]] 0.1 secs`
fn strip_enclosing(mut label: &str, depth: usize) -> &str {
    for _ in 0..depth {
        match label.strip_suffix(']') {
            Some(inner) => label = inner,
            None => break,
        }
    }
    label
}
