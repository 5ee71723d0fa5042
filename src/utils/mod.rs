pub mod paths;
pub mod timestamps;

pub use paths::{chunk_file_path, validate_file_size};
pub use timestamps::{format_timestamp, parse_date};
