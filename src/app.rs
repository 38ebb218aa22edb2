// Application entry point.
// Runs one crawl for the configured level and exports the result.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Config;
use crate::crawl::{CrawlReport, Crawler};
use crate::error::Result;
use crate::export;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub report: CrawlReport,
}

pub struct App {
    config: Config,
    crawler: Crawler,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let crawler = Crawler::from_config(&config)?;
        Ok(Self { config, crawler })
    }

    /// Crawl, then write the output file.
    pub async fn run(&self) -> Result<RunSummary> {
        let outcome = self.crawler.run(self.config.level).await;
        let report = outcome.report;

        if outcome.notes.is_empty() {
            warn!(level = %self.config.level, "No notes collected; writing an empty file");
        }
        if !report.is_complete() {
            warn!(
                pages_failed = report.pages_failed,
                details_failed = report.details_failed,
                tasks_failed = report.tasks_failed,
                "Crawl finished with failures"
            );
        }

        export::write_notes(&self.config.output, self.config.format, &outcome.notes)?;
        info!(
            output = %self.config.output.display(),
            format = %self.config.format,
            "Export complete"
        );

        Ok(RunSummary {
            output: self.config.output.clone(),
            report,
        })
    }
}
