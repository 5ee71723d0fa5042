use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Maximum size for an export document: 512MB
const MAX_FILE_SIZE_BYTES: u64 = 512 * 1024 * 1024;

/// File name used for chunks when the output base has no extension
const FALLBACK_CHUNK_PREFIX: &str = "ani_chunk";

/// Builds the file path for chunk `index` (1-based) from an output base name
///
/// `main.txt` becomes `main_001.txt` next to the base. A base without an extension
/// falls back to `ani_chunk_001.txt` in the working directory.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use branchscript::chunk_file_path;
///
/// assert_eq!(chunk_file_path(Path::new("out/main.txt"), 2), PathBuf::from("out/main_002.txt"));
/// assert_eq!(chunk_file_path(Path::new("main"), 12), PathBuf::from("ani_chunk_012.txt"));
/// ```
pub fn chunk_file_path(base: &Path, index: usize) -> PathBuf {
    match (base.file_stem(), base.extension()) {
        (Some(stem), Some(ext)) => {
            let mut name = stem.to_os_string();
            name.push(format!("_{:03}.", index));
            name.push(ext);
            base.with_file_name(name)
        }
        _ => PathBuf::from(format!("{}_{:03}.txt", FALLBACK_CHUNK_PREFIX, index)),
    }
}

/// Validates that a file's size is within acceptable limits (512MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 512MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
