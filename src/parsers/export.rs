use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::ExportDocument;
use crate::utils::validate_file_size;

/// Load and parse a conversation export document
///
/// Only the document envelope is parsed strictly; individual responses are kept raw
/// so a malformed record can be skipped later without losing the whole document.
pub fn parse_export_file(path: &Path) -> Result<ExportDocument> {
    info!("Loading {}...", path.display());

    // Open file and validate size to avoid TOCTOU race condition
    let file = File::open(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let document: ExportDocument = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse export file: {}", path.display()))?;

    info!("JSON loaded. Conversations array length: {}", document.conversations.len());

    Ok(document)
}
