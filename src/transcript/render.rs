use std::collections::HashMap;
use std::fmt::Write;

use crate::error::{TranscriptError, TranscriptResult};
use crate::models::{Response, TranscriptLine};
use crate::transcript::tree::{BranchTree, SubtreeSizes};
use crate::utils::format_timestamp;

const SENDER_WIDTH: usize = 10;
const AUDIO_NOTE: &str = " [Audio]";

/// Render every response as one transcript entry, oldest first
///
/// The sort is stable, so responses sharing a timestamp keep their input order.
/// Branch points get a ` [ Branches: N]` suffix followed by one
/// `* Branch i: [ts] MSGS: size` line per child.
///
/// # Errors
///
/// Returns [`TranscriptError::OrphanedBranchReference`] if the tree names a child
/// that is not among `responses`.
pub fn render_transcript(
    responses: &[Response],
    tree: &BranchTree,
    sizes: &SubtreeSizes,
) -> TranscriptResult<Vec<TranscriptLine>> {
    let by_id: HashMap<&str, &Response> = responses.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut ordered: Vec<&Response> = responses.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);

    ordered
        .into_iter()
        .map(|response| {
            Ok(TranscriptLine {
                timestamp: response.timestamp,
                text: render_line(response, tree, sizes, &by_id)?,
            })
        })
        .collect()
}

fn render_line(
    response: &Response,
    tree: &BranchTree,
    sizes: &SubtreeSizes,
    by_id: &HashMap<&str, &Response>,
) -> TranscriptResult<String> {
    let media_note = if response.has_audio() { AUDIO_NOTE } else { "" };
    let mut line = format!(
        "[{}]{} {:<width$}: {}",
        format_timestamp(&response.timestamp),
        media_note,
        response.sender.to_uppercase(),
        response.message,
        width = SENDER_WIDTH
    );

    let branches = tree.children(&response.id);
    if branches.len() >= 2 {
        // Writing to a String cannot fail
        let _ = write!(line, " [ Branches: {}]", branches.len());
        for (i, child_id) in branches.iter().enumerate() {
            let orphaned = || TranscriptError::OrphanedBranchReference {
                parent: response.id.clone(),
                child: child_id.clone(),
            };
            let child = by_id.get(child_id.as_str()).ok_or_else(orphaned)?;
            let size = sizes.get(child_id).ok_or_else(orphaned)?;
            let _ = write!(
                line,
                "\n* Branch {}: [{}] MSGS: {}",
                i + 1,
                format_timestamp(&child.timestamp),
                size
            );
        }
    }

    Ok(line)
}
