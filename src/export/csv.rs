// CSV encoding for notes.
// One row per note with three fixed example column groups.

use std::io::{self, Write};

use crate::sensei::{MAX_EXAMPLES, Note};

/// Header row: six note columns followed by four columns per example.
pub const HEADERS: [&str; 18] = [
    "Id",
    "Url",
    "Grammar",
    "Reading",
    "Meaning",
    "Image",
    "Example1 ID",
    "Example1 Sentence",
    "Example1 Reading",
    "Example1 Meaning",
    "Example2 ID",
    "Example2 Sentence",
    "Example2 Reading",
    "Example2 Meaning",
    "Example3 ID",
    "Example3 Sentence",
    "Example3 Reading",
    "Example3 Meaning",
];

const EXAMPLE_COLUMNS: usize = 4;

/// Flatten a note into a record matching `HEADERS`.
/// Missing examples leave their columns empty; extras beyond three are dropped.
pub fn note_record(note: &Note) -> Vec<String> {
    let mut record = vec![
        note.id.clone(),
        note.url.clone(),
        note.grammar.clone(),
        note.reading.clone(),
        note.meaning.clone(),
        note.image.clone(),
    ];
    record.reserve(MAX_EXAMPLES * EXAMPLE_COLUMNS);

    for slot in 0..MAX_EXAMPLES {
        match note.examples.get(slot) {
            Some(ex) => record.extend([
                ex.id.clone(),
                ex.sentence.clone(),
                ex.reading.clone(),
                ex.meaning.clone(),
            ]),
            None => record.extend(std::iter::repeat_n(String::new(), EXAMPLE_COLUMNS)),
        }
    }

    record
}

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
        || field.chars().next().is_some_and(char::is_whitespace)
}

/// Write one comma-separated row terminated by `\n`.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\n")
}

/// Encode the header row and every note.
pub fn encode(notes: &[Note]) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_row(&mut buf, &HEADERS)?;
    for note in notes {
        write_row(&mut buf, &note_record(note))?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensei::Example;

    fn example(n: u32) -> Example {
        Example {
            id: format!("ex_{n}"),
            sentence: format!("文{n}"),
            reading: format!("ぶん{n}"),
            meaning: format!("Sentence {n}"),
        }
    }

    #[test]
    fn test_record_pads_missing_examples() {
        let note = Note {
            id: "7".to_string(),
            url: "https://jlptsensei.com/learn-japanese-grammar/wake/".to_string(),
            grammar: "わけ".to_string(),
            examples: vec![example(1)],
            ..Default::default()
        };

        let record = note_record(&note);
        assert_eq!(record.len(), HEADERS.len());
        assert_eq!(record[0], "7");
        assert_eq!(record[6], "ex_1");
        assert_eq!(record[9], "Sentence 1");
        assert!(record[10..].iter().all(String::is_empty));
    }

    #[test]
    fn test_record_drops_extra_examples() {
        let note = Note {
            examples: (1..=4).map(example).collect(),
            ..Default::default()
        };
        let record = note_record(&note);
        assert_eq!(record.len(), 18);
        assert_eq!(record[14], "ex_3");
    }

    #[test]
    fn test_quoting() {
        let mut buf = Vec::new();
        write_row(
            &mut buf,
            &["plain", "a,b", "say \"hi\"", "line\nbreak", " lead", "trail ", ""],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\"line\nbreak\",\" lead\",trail ,\n"
        );
    }

    #[test]
    fn test_encode_header_only_when_empty() {
        let out = String::from_utf8(encode(&[]).unwrap()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Id,Url,Grammar,Reading,Meaning,Image,Example1 ID,"));
        assert!(out.ends_with("Example3 Meaning\n"));
    }
}
