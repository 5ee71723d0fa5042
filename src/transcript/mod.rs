//! Branch-aware transcript formatting
//!
//! # Error Handling Strategy
//!
//! - **Record-level problems** (missing fields, bad timestamps, duplicate ids) are logged
//!   and the record is skipped. Surrounding records keep their count and order.
//!
//! - **Conversation-level problems** (no matching title, nothing left after filtering)
//!   end the run with a soft error and no output.
//!
//! - **Structural problems** (cyclic parent links, children missing from the response set)
//!   end the run with a hard error. No partial transcript is produced.

pub mod builder;
pub mod chunker;
pub mod render;
pub mod selection;
pub mod tree;

pub use builder::{TranscriptOptions, build_transcript};
pub use chunker::{DEFAULT_CHUNK_SIZE, chunk_transcript};
pub use render::render_transcript;
pub use selection::{filter_by_end_date, load_responses, select_conversation};
pub use tree::{BranchTree, SubtreeSizes};
