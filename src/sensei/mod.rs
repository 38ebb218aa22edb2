// jlptsensei.com module.
// Provides the HTTP client and page parsers for the grammar listing and detail pages.

pub mod client;
pub mod detail;
pub mod html;
pub mod listing;
pub mod types;

pub use client::{ALLOWED_DOMAINS, SENSEI_BASE_URL, SenseiClient};
pub use detail::parse_detail;
pub use listing::parse_listing;
pub use types::*;
