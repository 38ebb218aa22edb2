// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::export::Format;
use crate::level::Level;
use crate::sensei::SENSEI_BASE_URL;

#[derive(Debug, Parser)]
#[command(
    name = "jlpt-notes",
    about = "Scrape JLPT grammar notes from jlptsensei.com into CSV or JSON",
    version
)]
pub struct Cli {
    /// JLPT level (N1, N2, N3, N4, N5).
    #[arg(long, env = "JLPT_LEVEL", default_value = "N2")]
    pub level: Level,

    /// File type to save (csv or json).
    #[arg(long, env = "JLPT_FILETYPE", default_value = "csv")]
    pub filetype: Format,

    /// Output path. Defaults to jlptnotes_<LEVEL>.<filetype>.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Maximum number of detail pages fetched at once.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Site root to crawl.
    #[arg(long, env = "JLPT_SENSEI_BASE_URL", default_value = SENSEI_BASE_URL)]
    pub base_url: String,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Exit status for an argument error: 0 for `--help`/`--version`, 1 otherwise.
pub fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}
