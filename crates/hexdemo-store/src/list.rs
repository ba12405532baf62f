//! Growable store backed by a `Vec`.

use crate::error::checked_index;
use crate::{HexStore, Result, Slot};

/// An ordered, unbounded list of items.
///
/// Empty entries are accepted everywhere so that both stores can hold the
/// same values; `contains(&None)` is true only when an empty entry exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    entries: Vec<Slot>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add_to_end(&mut self, item: Slot) {
        self.entries.push(item);
    }

    /// Remove the entry at `index`, closing the gap.
    pub fn remove_at(&mut self, index: i64) -> Result<Slot> {
        let position = checked_index(index, self.entries.len())?;
        Ok(self.entries.remove(position))
    }

    pub fn contains(&self, item: &Slot) -> bool {
        self.entries.contains(item)
    }

    /// Lowest index holding an entry equal to `item`.
    pub fn index_of(&self, item: &Slot) -> Option<usize> {
        self.entries.iter().position(|entry| entry == item)
    }
}

impl HexStore for ListStore {
    fn label(&self) -> &'static str {
        "list"
    }

    fn entries(&self) -> &[Slot] {
        &self.entries
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn get_at(&self, index: i64) -> Result<Slot> {
        let position = checked_index(index, self.entries.len())?;
        Ok(self.entries[position])
    }

    fn set_at(&mut self, item: Slot, index: i64) -> Result<Slot> {
        let position = checked_index(index, self.entries.len())?;
        Ok(std::mem::replace(&mut self.entries[position], item))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn insert_at(&mut self, item: Slot, index: i64) -> Result<()> {
        let position = checked_index(index, self.entries.len() + 1)?;
        self.entries.insert(position, item);
        Ok(())
    }

    fn remove_and_shift(&mut self, index: i64) -> Result<Slot> {
        self.remove_at(index)
    }
}
