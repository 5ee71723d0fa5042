//! End-to-end transcript pipeline: select → load → filter → tree → sizes → render → chunk.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{TranscriptError, TranscriptResult};
use crate::models::{Chunk, ExportDocument};
use crate::transcript::chunker::{DEFAULT_CHUNK_SIZE, chunk_transcript};
use crate::transcript::render::render_transcript;
use crate::transcript::selection::{filter_by_end_date, load_responses, select_conversation};
use crate::transcript::tree::{BranchTree, SubtreeSizes};

/// Knobs for a single transcript run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptOptions {
    /// Case-sensitive substring the conversation title must contain
    pub convo_title: Option<String>,
    /// Last calendar date to keep (inclusive)
    pub date_end: Option<NaiveDate>,
    /// Maximum transcript entries per chunk
    pub chunk_size: NonZeroUsize,
}

impl Default for TranscriptOptions {
    fn default() -> Self {
        Self { convo_title: None, date_end: None, chunk_size: DEFAULT_CHUNK_SIZE }
    }
}

/// Build the chunked transcript for one conversation of an export
///
/// Malformed records are skipped along the way. Everything else that goes wrong
/// aborts the run without producing any chunk.
///
/// # Errors
///
/// - [`TranscriptError::NoMatchingConversation`] if no title matches the filter
/// - [`TranscriptError::NoResponsesLoaded`] if nothing survives loading and filtering
/// - [`TranscriptError::CyclicBranchStructure`] if parent links form a loop
/// - [`TranscriptError::OrphanedBranchReference`] if the tree names an unknown child
///
/// # Examples
///
/// ```
/// use branchscript::{ExportDocument, TranscriptOptions, build_transcript};
///
/// let json = r#"{"conversations":[{"conversation":{"title":"Demo"},"responses":[
///     {"response":{"_id":"a","create_time":{"$date":{"$numberLong":"0"}},"sender":"human","message":"Hi"}}
/// ]}]}"#;
/// let document: ExportDocument = serde_json::from_str(json)?;
///
/// let chunks = build_transcript(&document, &TranscriptOptions::default())?;
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].lines[0], "[1970-01-01 00:00:00] HUMAN     : Hi");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build_transcript(
    document: &ExportDocument,
    options: &TranscriptOptions,
) -> TranscriptResult<Vec<Chunk>> {
    let conversation = select_conversation(document, options.convo_title.as_deref())?;

    let mut responses = load_responses(conversation);
    info!("Total loaded responses: {}", responses.len());

    if let Some(date_end) = options.date_end {
        responses = filter_by_end_date(responses, date_end);
        info!("Filtered to {} responses up to {}", responses.len(), date_end);
    }

    if responses.is_empty() {
        return Err(TranscriptError::NoResponsesLoaded);
    }

    let tree = BranchTree::build(&responses);
    info!("Built tree with {} branches", tree.edge_count());

    let sizes = SubtreeSizes::compute(&tree, &responses)?;
    let lines = render_transcript(&responses, &tree, &sizes)?;
    let chunks = chunk_transcript(&lines, options.chunk_size);

    info!("Rendered {} lines into {} chunks", lines.len(), chunks.len());

    Ok(chunks)
}
