// Crawl report.
// Counts what was fetched and what failed during one crawl.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::level::Level;

/// Summary of a finished crawl.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub level: Level,
    /// Listing pages the level has.
    pub pages_requested: u32,
    /// Listing pages fetched and parsed.
    pub pages_fetched: u32,
    /// Listing pages that could not be fetched.
    pub pages_failed: u32,
    /// Grammar rows found across all listing pages.
    pub rows_found: usize,
    /// Detail pages that failed; their notes carry no image or examples.
    pub details_failed: usize,
    /// Detail tasks that panicked or were cancelled; their notes are lost.
    pub tasks_failed: usize,
    /// Notes handed to the exporter.
    pub notes: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    pub fn new(level: Level) -> Self {
        let now = Utc::now();
        Self {
            level,
            pages_requested: level.pages(),
            pages_fetched: 0,
            pages_failed: 0,
            rows_found: 0,
            details_failed: 0,
            tasks_failed: 0,
            notes: 0,
            started_at: now,
            finished_at: now,
        }
    }

    /// Stamp the finish time and final note count.
    pub fn finish(&mut self, notes: usize) {
        self.notes = notes;
        self.finished_at = Utc::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// True when every page and every detail was fetched.
    pub fn is_complete(&self) -> bool {
        self.pages_failed == 0 && self.details_failed == 0 && self.tasks_failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = CrawlReport::new(Level::N1);
        assert_eq!(report.pages_requested, 7);
        assert!(report.is_complete());
        assert_eq!(report.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_failures_make_report_incomplete() {
        let mut report = CrawlReport::new(Level::N5);
        report.details_failed = 1;
        assert!(!report.is_complete());
    }

    #[test]
    fn test_elapsed() {
        let mut report = CrawlReport::new(Level::N3);
        report.started_at = Utc::now() - chrono::Duration::seconds(90);
        report.finish(12);

        assert_eq!(report.notes, 12);
        assert!(report.elapsed() >= Duration::from_secs(90));
    }
}
