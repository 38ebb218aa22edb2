// jlpt-notes library.
// Crawls jlptsensei.com grammar lists for a JLPT level and exports the notes.

pub mod app;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod export;
pub mod level;
pub mod logging;
pub mod sensei;

pub use app::{App, RunSummary};
pub use config::Config;
pub use error::{NotesError, Result};
pub use level::Level;
