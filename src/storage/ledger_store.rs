//! Owns the ordered entry list and mirrors it into the key-value store.

use tracing::{debug, warn};

use crate::{
    domain::{Entry, EntryId},
    errors::{LedgerError, Result},
};

use super::{keys, KeyValueStore};

/// The ledger's backing list plus its persisted blob.
///
/// Order is insertion order. Every mutator re-persists the full list before
/// returning; if that write fails the in-memory change is rolled back so the
/// two never diverge.
pub struct LedgerStore {
    entries: Vec<Entry>,
    backend: Box<dyn KeyValueStore>,
}

impl LedgerStore {
    /// Opens the store and performs the initial [`LedgerStore::load`].
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let entries = read_entries(backend.as_ref());
        Self { entries, backend }
    }

    /// Re-reads the persisted blob, replacing the in-memory list.
    ///
    /// A missing blob, an unreadable store or a blob that fails to parse all
    /// yield an empty ledger.
    pub fn load(&mut self) -> &[Entry] {
        self.entries = read_entries(self.backend.as_ref());
        &self.entries
    }

    /// Serializes the current list and overwrites the persisted blob.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.backend.set(keys::TRANSACTIONS, &json)?;
        debug!(entries = self.entries.len(), "ledger persisted");
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Entry> {
        self.entries.get(index).ok_or(LedgerError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Current position of the entry with `id`, if it is still in the ledger.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn append(&mut self, entry: Entry) -> Result<()> {
        self.entries.push(entry);
        if let Err(err) = self.save() {
            self.entries.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Overwrites the entry at `index`, returning the previous value.
    pub fn replace_at(&mut self, index: usize, entry: Entry) -> Result<Entry> {
        self.ensure_index(index)?;
        let previous = std::mem::replace(&mut self.entries[index], entry);
        if let Err(err) = self.save() {
            self.entries[index] = previous;
            return Err(err);
        }
        Ok(previous)
    }

    /// Splices out the entry at `index`; later entries shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Entry> {
        self.ensure_index(index)?;
        let removed = self.entries.remove(index);
        if let Err(err) = self.save() {
            self.entries.insert(index, removed);
            return Err(err);
        }
        Ok(removed)
    }

    fn ensure_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(LedgerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

fn read_entries(backend: &dyn KeyValueStore) -> Vec<Entry> {
    let raw = match backend.get(keys::TRANSACTIONS) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(error = %err, "ledger store unreadable; starting with an empty ledger");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Entry>>(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(error = %err, "persisted ledger failed to parse; starting with an empty ledger");
            Vec::new()
        }
    }
}
