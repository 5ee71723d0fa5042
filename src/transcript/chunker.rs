use std::num::NonZeroUsize;

use crate::models::{Chunk, TranscriptLine};

/// Default number of transcript entries per chunk
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(2000).unwrap();

/// Split transcript entries into consecutive chunks of at most `max_lines` entries
///
/// Each chunk records its 1-based index, the chunk total, and the timestamps of its
/// first and last entry. An empty transcript yields no chunks.
pub fn chunk_transcript(lines: &[TranscriptLine], max_lines: NonZeroUsize) -> Vec<Chunk> {
    let total = lines.len().div_ceil(max_lines.get());

    lines
        .chunks(max_lines.get())
        .enumerate()
        .filter_map(|(i, slice)| {
            let first = slice.first()?;
            let last = slice.last()?;
            Some(Chunk {
                index: i + 1,
                total,
                start: first.timestamp,
                end: last.timestamp,
                lines: slice.iter().map(|l| l.text.clone()).collect(),
            })
        })
        .collect()
}
