//! Parsers for conversation export documents
//!
//! # Error Handling Strategy
//!
//! Parsing happens at two levels:
//!
//! - **Document level**: The file must open, fit under the size ceiling, and be valid JSON.
//!   Failures here are reported with `anyhow` context and end the run.
//!
//! - **Record level**: Response bodies are decoded one at a time by
//!   [`crate::models::Response::from_raw`]. A malformed record is logged and skipped, so a
//!   single bad response never breaks the transcript.

pub mod deserializers;
pub mod export;

pub use deserializers::decode_timestamp;
pub use export::parse_export_file;
