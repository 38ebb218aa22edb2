// Crawl module.
// Fans out from listing pages to detail pages and gathers the resulting notes.

pub mod aggregate;
pub mod crawler;
pub mod report;

pub use aggregate::{Aggregator, Position};
pub use crawler::{CrawlOutcome, Crawler};
pub use report::CrawlReport;
