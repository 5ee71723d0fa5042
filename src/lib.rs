//! Branchscript - Turn branching conversation exports into readable transcripts
//!
//! This library converts a JSON export of a branching conversation log into a flat,
//! chronologically ordered text transcript. It supports:
//!
//! - Selecting one conversation by title substring
//! - Validating raw response records, skipping malformed ones
//! - Filtering responses by an inclusive end date
//! - Annotating branch points with the size of each reply subtree
//! - Splitting the transcript into size-bounded chunks with continuity markers
//!
//! # Example
//!
//! ```no_run
//! use branchscript::{TranscriptOptions, build_transcript, parse_export_file};
//! use std::path::Path;
//!
//! let document = parse_export_file(Path::new("export.json"))?;
//! let chunks = build_transcript(&document, &TranscriptOptions::default())?;
//! for chunk in &chunks {
//!     println!("{}", chunk);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod transcript;
pub mod utils;

// Re-export commonly used types
pub use error::{TranscriptError, TranscriptResult};
pub use models::{Chunk, ExportDocument, Response, TranscriptLine};
pub use parsers::{decode_timestamp, parse_export_file};
pub use transcript::{TranscriptOptions, build_transcript};
pub use utils::{chunk_file_path, format_timestamp};
