use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::utils::format_timestamp;

/// A rendered transcript entry
///
/// `text` may span several physical lines when the source response is a branch point;
/// it still counts as a single entry for chunking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptLine {
    pub timestamp: NaiveDateTime,
    pub text: String,
}

/// A contiguous slice of the transcript with continuity markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// 1-based position of this chunk
    pub index: usize,
    pub total: usize,
    /// Timestamp of the first response in the chunk
    pub start: NaiveDateTime,
    /// Timestamp of the last response in the chunk
    pub end: NaiveDateTime,
    pub lines: Vec<String>,
}

impl Chunk {
    pub fn header(&self) -> String {
        format!(
            "[Chunk {}/{}: Starts {}, Ends {}]",
            self.index,
            self.total,
            format_timestamp(&self.start),
            format_timestamp(&self.end)
        )
    }

    pub fn footer(&self) -> String {
        format!("[Chunk {}/{} Ends: {}]", self.index, self.total, format_timestamp(&self.end))
    }
}

/// Header, entries and footer, newline separated, without a trailing newline
impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{}", self.lines.join("\n"))?;
        write!(f, "{}", self.footer())
    }
}
