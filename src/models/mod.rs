//! Data models for conversation exports and rendered transcripts.
//!
//! - [`ExportDocument`] - The exported document envelope with its conversations
//! - [`Response`] - One validated conversational turn
//! - [`TranscriptLine`] - A rendered transcript entry with its source timestamp
//! - [`Chunk`] - A bounded slice of the transcript with continuity markers
//!
//! Raw response bodies stay as `serde_json::Value` until they pass through
//! [`Response::from_raw`], the only place record-level malformation is handled.

pub mod export;
pub mod response;
pub mod transcript;

pub use export::{ConversationMeta, ConversationRecord, ExportDocument};
pub use response::Response;
pub use transcript::{Chunk, TranscriptLine};
