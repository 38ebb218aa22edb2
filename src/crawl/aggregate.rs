// Shared note collection.
// Detail tasks push finished notes here; the crawl drains it in listing order.

use std::sync::{Arc, Mutex, PoisonError};

use crate::sensei::Note;

/// Where a note was found: listing page number and row index on that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub page: u32,
    pub row: usize,
}

impl Position {
    pub fn new(page: u32, row: usize) -> Self {
        Self { page, row }
    }
}

/// Mutex-guarded collection of completed notes. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    notes: Arc<Mutex<Vec<(Position, Note)>>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed note.
    pub fn push(&self, position: Position, note: Note) {
        self.notes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((position, note));
    }

    pub fn len(&self) -> usize {
        self.notes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take every collected note, sorted by listing position.
    /// Leaves the collection empty.
    pub fn drain_sorted(&self) -> Vec<Note> {
        let mut entries = std::mem::take(
            &mut *self.notes.lock().unwrap_or_else(PoisonError::into_inner),
        );
        entries.sort_by_key(|(position, _)| *position);
        entries.into_iter().map(|(_, note)| note).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_drain_sorted_restores_listing_order() {
        let agg = Aggregator::new();
        agg.push(Position::new(2, 0), note("p2r0"));
        agg.push(Position::new(1, 1), note("p1r1"));
        agg.push(Position::new(1, 0), note("p1r0"));
        agg.push(Position::new(2, 10), note("p2r10"));
        agg.push(Position::new(2, 2), note("p2r2"));
        assert_eq!(agg.len(), 5);

        let ids: Vec<String> = agg.drain_sorted().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["p1r0", "p1r1", "p2r0", "p2r2", "p2r10"]);
        assert!(agg.is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let agg = Aggregator::new();
        let handle = agg.clone();
        handle.push(Position::new(1, 0), note("a"));
        assert_eq!(agg.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_pushes() {
        let agg = Aggregator::new();
        let mut tasks = tokio::task::JoinSet::new();

        for page in 1..=4u32 {
            for row in 0..25usize {
                let agg = agg.clone();
                tasks.spawn(async move {
                    tokio::task::yield_now().await;
                    agg.push(Position::new(page, row), note(&format!("{page}-{row}")));
                });
            }
        }
        while tasks.join_next().await.is_some() {}

        let notes = agg.drain_sorted();
        assert_eq!(notes.len(), 100);
        assert_eq!(notes[0].id, "1-0");
        assert_eq!(notes[25].id, "2-0");
        assert_eq!(notes[99].id, "4-24");
    }
}
