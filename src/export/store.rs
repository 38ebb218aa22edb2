// Output file writing.
// Atomic replace via a sibling temp file.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Write bytes to `path`, creating parent directories as needed.
/// The temp file is removed if any step after its creation fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    let written = file
        .write_all(bytes)
        .and_then(|_| file.sync_all())
        .and_then(|_| fs::rename(&temp_path, path));

    if let Err(e) = written {
        drop(file);
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}
