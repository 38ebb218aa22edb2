// Fan-out crawler.
// Walks a level's listing pages and follows every detail link concurrently.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::{NotesError, Result};
use crate::level::Level;
use crate::sensei::{ListingRow, Note, NoteDetail, SenseiClient, parse_detail, parse_listing};

use super::aggregate::{Aggregator, Position};
use super::report::CrawlReport;

/// Notes collected by a crawl, in listing order, with its report.
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub notes: Vec<Note>,
    pub report: CrawlReport,
}

/// Listing and detail crawler for one site.
#[derive(Debug, Clone)]
pub struct Crawler {
    client: SenseiClient,
    base_url: String,
    concurrency: usize,
}

impl Crawler {
    pub fn new(client: SenseiClient, base_url: impl Into<String>, concurrency: usize) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            concurrency: concurrency.clamp(1, Semaphore::MAX_PERMITS),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = SenseiClient::new(config.allowed_domains.clone(), config.timeout)?;
        Ok(Self::new(client, config.base_url.clone(), config.concurrency))
    }

    /// Crawl every listing page of `level`.
    ///
    /// Listing pages are fetched in order. Each row found spawns a detail
    /// task right away, so detail fetches overlap with the remaining listing
    /// fetches. Failed pages are logged and skipped; a failed detail still
    /// yields a note without image or examples.
    pub async fn run(&self, level: Level) -> CrawlOutcome {
        let mut report = CrawlReport::new(level);
        let aggregator = Aggregator::new();
        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        info!(
            level = %level,
            pages = level.pages(),
            concurrency = self.concurrency,
            "Starting crawl"
        );

        for (page, page_url) in level.listing_urls(&self.base_url) {
            let rows = match self.fetch_listing(&page_url).await {
                Ok(rows) => rows,
                Err(e) => {
                    error!(page, url = %page_url, error = %e, "Failed to fetch listing page");
                    report.pages_failed += 1;
                    continue;
                }
            };

            info!(page, rows = rows.len(), "Parsed listing page");
            report.pages_fetched += 1;
            report.rows_found += rows.len();

            for (index, row) in rows.into_iter().enumerate() {
                let client = self.client.clone();
                let aggregator = aggregator.clone();
                let permits = Arc::clone(&permits);
                let position = Position::new(page, index);

                tasks.spawn(async move {
                    // The semaphore is never closed, so a permit always arrives.
                    let _permit = permits.acquire_owned().await.ok();
                    let (detail, fetched) = fetch_detail(&client, &row).await;
                    aggregator.push(position, Note::from_parts(row, detail));
                    fetched
                });
            }
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(true) => {}
                Ok(false) => report.details_failed += 1,
                Err(e) => {
                    error!(error = %e, "Detail task did not complete");
                    report.tasks_failed += 1;
                }
            }
        }

        let notes = aggregator.drain_sorted();
        report.finish(notes.len());

        info!(
            level = %level,
            notes = report.notes,
            pages_failed = report.pages_failed,
            details_failed = report.details_failed,
            elapsed_ms = report.elapsed().as_millis() as u64,
            "Crawl finished"
        );

        CrawlOutcome { notes, report }
    }

    /// Fetch and parse one listing page.
    pub async fn fetch_listing(&self, page_url: &str) -> Result<Vec<ListingRow>> {
        let url = Url::parse(page_url).map_err(|e| NotesError::invalid_url(page_url, e))?;
        debug!(url = %url, "Fetching listing page");
        let html = self.client.get_html(page_url).await?;
        Ok(parse_listing(&html, &url))
    }
}

/// Fetch a row's detail page. On failure returns an empty detail and `false`.
async fn fetch_detail(client: &SenseiClient, row: &ListingRow) -> (NoteDetail, bool) {
    info!("Visiting {}", row.url);
    match client.get_html(&row.url).await {
        Ok(html) => (parse_detail(&html), true),
        Err(e) => {
            warn!(id = %row.id, url = %row.url, error = %e, "Failed to fetch detail page");
            (NoteDetail::default(), false)
        }
    }
}
