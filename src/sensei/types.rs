// Grammar note types.
// Records scraped from the listing and detail pages, in export shape.

use serde::{Deserialize, Serialize};

/// Maximum number of example sentences kept per note.
pub const MAX_EXAMPLES: usize = 3;

/// An example sentence from a grammar detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub sentence: String,
    pub reading: String,
    pub meaning: String,
}

/// One exported grammar point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub url: String,
    pub grammar: String,
    pub reading: String,
    pub meaning: String,
    pub image: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Note {
    /// Combine a listing row with what its detail page yielded.
    pub fn from_parts(row: ListingRow, detail: NoteDetail) -> Self {
        Self {
            id: row.id,
            url: row.url,
            grammar: row.grammar,
            reading: row.reading,
            meaning: row.meaning,
            image: detail.image,
            examples: detail.examples,
        }
    }
}

/// A row of a listing table, before its detail page has been visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRow {
    pub id: String,
    pub grammar: String,
    pub reading: String,
    pub meaning: String,
    /// Absolute URL of the detail page.
    pub url: String,
}

/// Fields extracted from a detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDetail {
    pub image: String,
    pub examples: Vec<Example>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_from_parts() {
        let row = ListingRow {
            id: "12".to_string(),
            grammar: "ばかり".to_string(),
            reading: "bakari".to_string(),
            meaning: "only; nothing but".to_string(),
            url: "https://jlptsensei.com/learn-japanese-grammar/bakari/".to_string(),
        };
        let detail = NoteDetail {
            image: "https://jlptsensei.com/img/bakari.png".to_string(),
            examples: vec![Example {
                id: "example_1".to_string(),
                ..Default::default()
            }],
        };

        let note = Note::from_parts(row, detail);
        assert_eq!(note.id, "12");
        assert_eq!(note.grammar, "ばかり");
        assert_eq!(note.image, "https://jlptsensei.com/img/bakari.png");
        assert_eq!(note.examples.len(), 1);
    }

    #[test]
    fn test_note_json_field_order() {
        let note = Note {
            id: "1".to_string(),
            url: "u".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","url":"u","grammar":"","reading":"","meaning":"","image":"","examples":[]}"#
        );
    }
}
