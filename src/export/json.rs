// JSON encoding for notes.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::sensei::Note;

/// Encode notes as a JSON array indented by one space, with a trailing newline.
pub fn encode(notes: &[Note]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    notes.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
