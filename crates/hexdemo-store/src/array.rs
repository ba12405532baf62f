//! Fixed-capacity store backed by a boxed slice of slots.

use crate::error::checked_index;
use crate::{HexStore, Result, Slot, StoreError};

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed-size array of optional items used as a left-packed list.
///
/// `count` is the length of the run of occupied slots starting at index 0.
/// Slots past that run may still hold items (for example after a
/// non-shifting [`remove_at`](Self::remove_at)); shifting operations only
/// move entries inside the counted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStore {
    slots: Box<[Slot]>,
}

impl ArrayStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.count() == self.capacity()
    }

    /// Empty the slot at `index` without moving anything else.
    pub fn remove_at(&mut self, index: i64) -> Result<Slot> {
        let position = checked_index(index, self.capacity())?;
        Ok(self.slots[position].take())
    }

    /// Remove the entry at `index` and close the gap.
    ///
    /// Entries in `index + 1..count` move down one slot and slot
    /// `count - 1` becomes empty.
    pub fn remove_at_and_shift(&mut self, index: i64) -> Result<Slot> {
        let count = self.count();
        let position = checked_index(index, count)?;
        let removed = self.slots[position].take();
        self.slots[position..count].rotate_left(1);
        Ok(removed)
    }
}

impl Default for ArrayStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HexStore for ArrayStore {
    fn label(&self) -> &'static str {
        "array"
    }

    fn entries(&self) -> &[Slot] {
        &self.slots
    }

    fn count(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    fn get_at(&self, index: i64) -> Result<Slot> {
        let position = checked_index(index, self.capacity())?;
        Ok(self.slots[position])
    }

    fn set_at(&mut self, item: Slot, index: i64) -> Result<Slot> {
        let position = checked_index(index, self.capacity())?;
        Ok(std::mem::replace(&mut self.slots[position], item))
    }

    fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Shift `index..count` up one slot and write `item` at `index`.
    ///
    /// Valid indices are `0..=count`. An empty item is refused because it
    /// would split the counted run.
    fn insert_at(&mut self, item: Slot, index: i64) -> Result<()> {
        let count = self.count();
        let position = checked_index(index, count + 1)?;
        let Some(item) = item else {
            return Err(StoreError::InvalidItem {
                operation: "array insert",
            });
        };
        if count == self.capacity() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        // slots[count] is empty here, so rotating moves that hole to `position`.
        self.slots[position..=count].rotate_right(1);
        self.slots[position] = Some(item);
        Ok(())
    }

    fn remove_and_shift(&mut self, index: i64) -> Result<Slot> {
        self.remove_at_and_shift(index)
    }
}
