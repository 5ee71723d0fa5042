use std::fs;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::TranscriptError;
use crate::models::Chunk;
use crate::parsers::parse_export_file;
use crate::transcript::{DEFAULT_CHUNK_SIZE, TranscriptOptions, build_transcript};
use crate::utils::{chunk_file_path, parse_date};

#[derive(Parser, Debug)]
#[command(name = "branchscript")]
#[command(version = "0.1.0")]
#[command(about = "Convert a branching conversation export into a readable, chunked transcript", long_about = None)]
pub struct Cli {
    /// Path to the exported JSON document
    pub json_file: PathBuf,

    /// Base output file; chunks are written as main_001.txt, main_002.txt, ...
    #[arg(short, long, value_name = "BASE")]
    pub output: Option<PathBuf>,

    /// Last date to include (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date_end: Option<NaiveDate>,

    /// Process only the first conversation whose title contains this substring
    #[arg(long, value_name = "SUBSTRING")]
    pub convo_title: Option<String>,

    /// Transcript entries per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: NonZeroUsize,
}

impl Cli {
    pub fn options(&self) -> TranscriptOptions {
        TranscriptOptions {
            convo_title: self.convo_title.clone(),
            date_end: self.date_end,
            chunk_size: self.chunk_size,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    execute(&cli)
}

/// Diagnostics go to stderr so stdout stays reserved for the transcript
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run the whole pipeline for parsed arguments
///
/// Soft failures (no matching conversation, nothing loaded) are reported and return
/// `Ok(())` without writing any output.
pub fn execute(cli: &Cli) -> Result<()> {
    let document = parse_export_file(&cli.json_file)?;

    let chunks = match build_transcript(&document, &cli.options()) {
        Ok(chunks) => chunks,
        Err(TranscriptError::NoMatchingConversation { filter, available }) => {
            error!(
                "ERROR: No convo matching title '{}'. Available titles:",
                filter.as_deref().unwrap_or_default()
            );
            for title in available {
                error!("  - {}", title);
            }
            return Ok(());
        }
        Err(e) if e.is_soft() => {
            error!("ERROR: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to build transcript"),
    };

    let line_count: usize = chunks.iter().map(|c| c.lines.len()).sum();
    match &cli.output {
        Some(base) => write_chunk_files(&chunks, base)?,
        None => write_chunks_to_stdout(&chunks)?,
    }

    info!("Output written: {} lines across {} chunks", line_count, chunks.len());

    Ok(())
}

fn write_chunk_files(chunks: &[Chunk], base: &Path) -> Result<()> {
    for chunk in chunks {
        let path = chunk_file_path(base, chunk.index);
        fs::write(&path, format!("{}\n", chunk))
            .with_context(|| format!("Failed to write chunk file: {}", path.display()))?;
        info!("Written: {} ({} lines)", path.display(), chunk.lines.len());
    }
    Ok(())
}

fn write_chunks_to_stdout(chunks: &[Chunk]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for chunk in chunks {
        writeln!(out, "{}", chunk).context("Failed to write transcript to stdout")?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
