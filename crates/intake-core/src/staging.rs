//! File staging store
//!
//! Ordered in-memory collection of files that passed validation and
//! completed their acceptance delay. Insertion order is selection order and
//! is the order the upload phase replays. The capacity ceiling is enforced
//! at the batch-acceptance boundary, not here.

use crate::models::{CandidateFile, FileTicket};

/// Source of truth for "is the form submittable" on the file side.
#[derive(Debug, Default)]
pub struct FileStagingStore {
    staged: Vec<CandidateFile>,
}

impl FileStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file. Returns false (and keeps the store unchanged) when a
    /// file with the same ticket is already staged; the normal flow never
    /// double-adds, this guards replayed stage events.
    pub fn add(&mut self, file: CandidateFile) -> bool {
        if self.staged.iter().any(|f| f.ticket() == file.ticket()) {
            tracing::debug!(filename = %file.filename, "ignoring duplicate stage");
            return false;
        }
        tracing::debug!(filename = %file.filename, count = self.staged.len() + 1, "file staged");
        self.staged.push(file);
        true
    }

    /// Remove by ticket identity. O(n) over at most MAX_FILES entries.
    pub fn remove(&mut self, ticket: FileTicket) -> Option<CandidateFile> {
        let pos = self.staged.iter().position(|f| f.ticket() == ticket)?;
        let removed = self.staged.remove(pos);
        tracing::debug!(filename = %removed.filename, count = self.staged.len(), "file removed");
        Some(removed)
    }

    /// Ordered snapshot for the upload phase. The store itself is left
    /// untouched so a failed submission can be retried without re-attaching.
    pub fn drain(&self) -> Vec<CandidateFile> {
        self.staged.clone()
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateFile> {
        self.staged.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_of(name: &str) -> CandidateFile {
        CandidateFile::new(name, vec![0u8; 8])
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = FileStagingStore::new();
        store.add(file_of("a.csv"));
        store.add(file_of("b.png"));
        store.add(file_of("c.pdf"));
        let names: Vec<_> = store.iter().map(|f| f.filename.clone()).collect();
        assert_eq!(names, vec!["a.csv", "b.png", "c.pdf"]);
    }

    #[test]
    fn add_is_idempotent_per_ticket() {
        let mut store = FileStagingStore::new();
        let file = file_of("a.csv");
        assert!(store.add(file.clone()));
        assert!(!store.add(file));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_name_different_tickets_both_stage() {
        let mut store = FileStagingStore::new();
        store.add(file_of("scan.pdf"));
        store.add(file_of("scan.pdf"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_is_by_ticket_and_decrements_by_one() {
        let mut store = FileStagingStore::new();
        let keep = file_of("scan.pdf");
        let drop = file_of("scan.pdf");
        let drop_ticket = drop.ticket();
        store.add(keep.clone());
        store.add(drop);
        assert_eq!(store.remove(drop_ticket).unwrap().ticket(), drop_ticket);
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().unwrap().ticket(), keep.ticket());
    }

    #[test]
    fn remove_unknown_ticket_is_none() {
        let mut store = FileStagingStore::new();
        store.add(file_of("a.csv"));
        assert!(store.remove(FileTicket::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn drain_leaves_store_intact() {
        let mut store = FileStagingStore::new();
        store.add(file_of("a.csv"));
        store.add(file_of("b.png"));
        let drained = store.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(drained[0].filename, "a.csv");
    }
}
