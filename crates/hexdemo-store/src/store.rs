//! The operation set shared by both stores.

use hexdemo_model::HexItem;

use crate::Result;

/// One position in a store; `None` is an empty slot.
pub type Slot = Option<HexItem>;

/// Positional operations available on every store.
///
/// Indices are signed so that out-of-range requests coming from the user
/// (including negative ones) are reported as
/// [`StoreError::IndexOutOfRange`](crate::StoreError::IndexOutOfRange)
/// instead of being unrepresentable. Every fallible operation validates its
/// arguments before touching the backing storage.
pub trait HexStore {
    /// Short name used in logs and rendered headers.
    fn label(&self) -> &'static str;

    /// The backing slots, in order.
    fn entries(&self) -> &[Slot];

    fn count(&self) -> usize;

    fn get_at(&self, index: i64) -> Result<Slot>;

    /// Overwrite the entry at `index`, returning what was there.
    fn set_at(&mut self, item: Slot, index: i64) -> Result<Slot>;

    fn clear(&mut self);

    /// Insert at `index`, moving later entries one position up.
    fn insert_at(&mut self, item: Slot, index: i64) -> Result<()>;

    /// Remove the entry at `index`, moving later entries one position down.
    fn remove_and_shift(&mut self, index: i64) -> Result<Slot>;
}
