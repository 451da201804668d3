//! Offset to source line mapping
//!
//! Offsets are the byte offsets the compiler reports. Line numbers are 1-based
//! and count the `\n` bytes that precede the offset.

use crate::error::{ProfileError, Result};
use crate::transcript::TimingRecord;

/// Read-only view of the compiled source text with a newline index
#[derive(Debug, Clone)]
pub struct SourceMap<'a> {
    text: &'a str,
    newlines: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(text: &'a str) -> Self {
        let newlines = text
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { text, newlines }
    }

    /// Length of the source in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 1-based line containing `offset`, or `None` past the end of the text
    pub fn line_number_of(&self, offset: usize) -> Option<usize> {
        if offset > self.len() {
            return None;
        }
        Some(self.newlines.partition_point(|&nl| nl < offset) + 1)
    }

    /// Source text covered by a span, with newlines flattened to spaces
    ///
    /// The span is not re-split when it crosses lines. A start offset of 0 is
    /// read as 1 so the excerpt begins at the first character.
    pub fn excerpt(&self, char_start: usize, char_end: usize) -> Option<String> {
        if char_end > self.len() || char_start > char_end {
            return None;
        }
        let from = char_start.saturating_sub(1);
        let bytes = &self.text.as_bytes()[from..char_end];
        Some(String::from_utf8_lossy(bytes).replace('\n', " "))
    }

    /// Line number and excerpt for a parsed record
    pub fn locate(&self, record: &TimingRecord) -> Result<(usize, String)> {
        let out_of_range = |offset| ProfileError::OffsetOutOfRange {
            line: record.transcript_line,
            offset,
            len: self.len(),
        };
        let line = self
            .line_number_of(record.char_start)
            .ok_or_else(|| out_of_range(record.char_start))?;
        let excerpt = self
            .excerpt(record.char_start, record.char_end)
            .ok_or_else(|| out_of_range(record.char_end))?;
        Ok((line, excerpt))
    }
}
