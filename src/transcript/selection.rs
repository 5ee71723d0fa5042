//! Conversation selection, record extraction and date filtering.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{TranscriptError, TranscriptResult};
use crate::models::{ConversationRecord, ExportDocument, Response};
use crate::utils::format_timestamp;

/// Number of titles listed when no conversation matches
pub const MAX_LISTED_TITLES: usize = 10;

/// Responses logged in full before switching to periodic progress
const DETAILED_LOG_COUNT: usize = 5;
const PROGRESS_LOG_INTERVAL: usize = 100;

/// Pick the conversation to render
///
/// With a filter, the first conversation whose title contains it (case-sensitive).
/// Without one, the first conversation in the document.
///
/// # Errors
///
/// Returns [`TranscriptError::NoMatchingConversation`] listing up to
/// [`MAX_LISTED_TITLES`] titles when nothing matches.
pub fn select_conversation<'a>(
    document: &'a ExportDocument,
    title_filter: Option<&str>,
) -> TranscriptResult<&'a ConversationRecord> {
    let found = document
        .conversations
        .iter()
        .enumerate()
        .find(|(_, convo)| title_filter.is_none_or(|filter| convo.title().contains(filter)));

    match found {
        Some((i, convo)) => {
            info!("Processing convo {} (title: {})", i + 1, convo.title());
            Ok(convo)
        }
        None => Err(TranscriptError::NoMatchingConversation {
            filter: title_filter.map(str::to_string),
            available: document.titles(MAX_LISTED_TITLES),
        }),
    }
}

/// Validate every raw response of a conversation, skipping the malformed ones
///
/// Skipped records are logged with their 1-based position; valid records keep
/// their input order. Later records reusing an already loaded id are skipped too.
pub fn load_responses(conversation: &ConversationRecord) -> Vec<Response> {
    let raw = &conversation.responses;
    info!("  Found {} raw responses", raw.len());

    let mut responses: Vec<Response> = Vec::with_capacity(raw.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut skipped_count = 0;

    for (j, entry) in raw.iter().enumerate() {
        let parsed = Response::from_raw(entry).and_then(|response| {
            if seen.contains(&response.id) {
                Err(TranscriptError::DuplicateResponseId(response.id))
            } else {
                Ok(response)
            }
        });

        match parsed {
            Ok(response) => {
                if j < DETAILED_LOG_COUNT {
                    info!(
                        "  Added response {}: {} len={} ts={}",
                        j + 1,
                        response.sender,
                        response.message.chars().count(),
                        format_timestamp(&response.timestamp)
                    );
                } else if j % PROGRESS_LOG_INTERVAL == 0 {
                    info!(
                        "  Added response {}: ... (total so far {})",
                        j + 1,
                        responses.len() + 1
                    );
                }
                seen.insert(response.id.clone());
                responses.push(response);
            }
            Err(e) => {
                warn!("  Skipping response {}: {}", j + 1, e);
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        debug!("Loaded {} responses ({} skipped)", responses.len(), skipped_count);
    }

    responses
}

/// Keep responses dated on or before `date_end` (inclusive, by calendar date)
pub fn filter_by_end_date(responses: Vec<Response>, date_end: NaiveDate) -> Vec<Response> {
    responses.into_iter().filter(|r| r.timestamp.date() <= date_end).collect()
}
