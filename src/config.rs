// Run configuration.
// Validated settings built from the command line and environment.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::Semaphore;
use url::Url;

use crate::cli::Cli;
use crate::error::{NotesError, Result};
use crate::export::{Format, default_file_name};
use crate::level::Level;
use crate::sensei::ALLOWED_DOMAINS;

pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub level: Level,
    pub format: Format,
    pub output: PathBuf,
    pub concurrency: usize,
    pub timeout: Duration,
    pub base_url: String,
    /// Hosts the crawler may visit. Always includes the base URL's host.
    pub allowed_domains: Vec<String>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.concurrency == 0 {
            return Err(NotesError::Config("concurrency must be at least 1".into()));
        }
        if cli.concurrency > Semaphore::MAX_PERMITS {
            return Err(NotesError::Config(format!(
                "concurrency must be at most {}",
                Semaphore::MAX_PERMITS
            )));
        }
        if cli.timeout == 0 {
            return Err(NotesError::Config("timeout must be at least 1 second".into()));
        }

        let base = Url::parse(&cli.base_url).map_err(|e| NotesError::invalid_url(&cli.base_url, e))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(NotesError::Config(format!(
                "base URL must be http or https: {}",
                cli.base_url
            )));
        }
        let host = base
            .host_str()
            .ok_or_else(|| NotesError::Config(format!("base URL has no host: {}", cli.base_url)))?;

        let mut allowed_domains: Vec<String> =
            ALLOWED_DOMAINS.iter().map(|d| d.to_string()).collect();
        if !allowed_domains.iter().any(|d| d.eq_ignore_ascii_case(host)) {
            allowed_domains.push(host.to_string());
        }

        let output = cli
            .out
            .unwrap_or_else(|| default_file_name(cli.level, cli.filetype));

        Ok(Self {
            level: cli.level,
            format: cli.filetype,
            output,
            concurrency: cli.concurrency,
            timeout: Duration::from_secs(cli.timeout),
            base_url: cli.base_url.trim_end_matches('/').to_string(),
            allowed_domains,
        })
    }
}
