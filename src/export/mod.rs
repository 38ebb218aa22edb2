// Export module.
// Serializes collected notes to CSV or JSON and writes the output file.

pub mod csv;
pub mod json;
pub mod store;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::error::{NotesError, Result};
use crate::level::Level;
use crate::sensei::Note;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Csv,
    Json,
}

impl Format {
    pub fn ext(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
        }
    }

    /// Serialize notes in this format.
    pub fn encode(&self, notes: &[Note]) -> Result<Vec<u8>> {
        match self {
            Format::Csv => Ok(csv::encode(notes)?),
            Format::Json => json::encode(notes),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

impl FromStr for Format {
    type Err = NotesError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            _ => Err(NotesError::InvalidFormat(s.to_string())),
        }
    }
}

/// Default output file name, e.g. `jlptnotes_N2.csv`.
pub fn default_file_name(level: Level, format: Format) -> PathBuf {
    PathBuf::from(format!("jlptnotes_{}.{}", level.code(), format.ext()))
}

/// Encode `notes` and write them to `path`.
pub fn write_notes(path: &Path, format: Format, notes: &[Note]) -> Result<()> {
    let bytes = format.encode(notes)?;
    store::write_atomic(path, &bytes)?;
    info!(notes = notes.len(), "Data written to {}", path.display());
    Ok(())
}
