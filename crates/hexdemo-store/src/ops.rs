//! Operation selectors for each store and a single dispatch point.
//!
//! A front end picks an operation, supplies an integer argument and an
//! optional item, and gets back an [`Outcome`] or a [`StoreError`]. Each
//! store has its own enumeration so that list-only operations cannot be
//! requested from the array.

use std::fmt;
use std::str::FromStr;

use hexdemo_model::HexItem;
use tracing::debug;

use crate::{ArrayStore, HexStore, ListStore, Result, Slot};

/// What an operation hands back for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An entry read from the store (possibly empty).
    Item(Slot),
    Count(usize),
    Flag(bool),
    /// Position found by a lookup; `-1` when nothing matched.
    Index(i64),
    /// The entry an overwrite or removal took out of the store.
    Displaced(Slot),
    /// The operation only mutated the store.
    Done,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Item(Some(item)) => write!(f, "{item}"),
            Outcome::Item(None) => f.write_str("(empty)"),
            Outcome::Count(count) => write!(f, "{count}"),
            Outcome::Flag(flag) => write!(f, "{flag}"),
            Outcome::Index(index) => write!(f, "{index}"),
            Outcome::Displaced(Some(item)) => write!(f, "ok, displaced {item}"),
            Outcome::Displaced(None) => f.write_str("ok"),
            Outcome::Done => f.write_str("ok"),
        }
    }
}

/// Operations offered by the fixed-capacity array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayOp {
    GetAt,
    SetAt,
    Count,
    Clear,
    InsertAt,
    /// Empty one slot, leaving a hole.
    RemoveAt,
    /// Remove one entry and close the gap.
    RemoveAtAndShift,
}

impl ArrayOp {
    pub const ALL: [ArrayOp; 7] = [
        ArrayOp::GetAt,
        ArrayOp::SetAt,
        ArrayOp::Count,
        ArrayOp::Clear,
        ArrayOp::InsertAt,
        ArrayOp::RemoveAt,
        ArrayOp::RemoveAtAndShift,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ArrayOp::GetAt => "get",
            ArrayOp::SetAt => "set",
            ArrayOp::Count => "count",
            ArrayOp::Clear => "clear",
            ArrayOp::InsertAt => "insert",
            ArrayOp::RemoveAt => "remove",
            ArrayOp::RemoveAtAndShift => "remove-shift",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ArrayOp::GetAt => "Read the slot at N into the selected item",
            ArrayOp::SetAt => "Overwrite the slot at N with the selected item",
            ArrayOp::Count => "Count occupied slots from index 0",
            ArrayOp::Clear => "Empty every slot",
            ArrayOp::InsertAt => "Shift slots N.. up and write the selected item at N",
            ArrayOp::RemoveAt => "Empty the slot at N without shifting",
            ArrayOp::RemoveAtAndShift => "Remove the slot at N and shift later slots down",
        }
    }

    /// Whether the integer argument is read.
    pub fn uses_index(&self) -> bool {
        !matches!(self, ArrayOp::Count | ArrayOp::Clear)
    }

    pub fn apply(
        self,
        store: &mut ArrayStore,
        index: i64,
        item: Option<HexItem>,
    ) -> Result<Outcome> {
        debug!(op = self.name(), index, item = ?item, "array operation");
        let outcome = match self {
            ArrayOp::GetAt => Outcome::Item(store.get_at(index)?),
            ArrayOp::SetAt => Outcome::Displaced(store.set_at(item, index)?),
            ArrayOp::Count => Outcome::Count(store.count()),
            ArrayOp::Clear => {
                store.clear();
                Outcome::Done
            }
            ArrayOp::InsertAt => {
                store.insert_at(item, index)?;
                Outcome::Done
            }
            ArrayOp::RemoveAt => Outcome::Displaced(store.remove_at(index)?),
            ArrayOp::RemoveAtAndShift => Outcome::Displaced(store.remove_at_and_shift(index)?),
        };
        debug!(op = self.name(), %outcome, count = store.count(), "array operation complete");
        Ok(outcome)
    }
}

/// Operations offered by the growable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOp {
    GetAt,
    SetAt,
    Count,
    Clear,
    AddToEnd,
    InsertAt,
    RemoveAt,
    Contains,
    IndexOf,
}

impl ListOp {
    pub const ALL: [ListOp; 9] = [
        ListOp::GetAt,
        ListOp::SetAt,
        ListOp::Count,
        ListOp::Clear,
        ListOp::AddToEnd,
        ListOp::InsertAt,
        ListOp::RemoveAt,
        ListOp::Contains,
        ListOp::IndexOf,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ListOp::GetAt => "get",
            ListOp::SetAt => "set",
            ListOp::Count => "count",
            ListOp::Clear => "clear",
            ListOp::AddToEnd => "add",
            ListOp::InsertAt => "insert",
            ListOp::RemoveAt => "remove",
            ListOp::Contains => "contains",
            ListOp::IndexOf => "index-of",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ListOp::GetAt => "Read the entry at N into the selected item",
            ListOp::SetAt => "Overwrite the entry at N with the selected item",
            ListOp::Count => "Number of entries",
            ListOp::Clear => "Remove every entry",
            ListOp::AddToEnd => "Append the selected item",
            ListOp::InsertAt => "Insert the selected item at N, shifting later entries up",
            ListOp::RemoveAt => "Remove the entry at N, shifting later entries down",
            ListOp::Contains => "Whether any entry equals the selected item",
            ListOp::IndexOf => "First index equal to the selected item, or -1",
        }
    }

    pub fn uses_index(&self) -> bool {
        matches!(
            self,
            ListOp::GetAt | ListOp::SetAt | ListOp::InsertAt | ListOp::RemoveAt
        )
    }

    pub fn apply(
        self,
        store: &mut ListStore,
        index: i64,
        item: Option<HexItem>,
    ) -> Result<Outcome> {
        debug!(op = self.name(), index, item = ?item, "list operation");
        let outcome = match self {
            ListOp::GetAt => Outcome::Item(store.get_at(index)?),
            ListOp::SetAt => Outcome::Displaced(store.set_at(item, index)?),
            ListOp::Count => Outcome::Count(store.count()),
            ListOp::Clear => {
                store.clear();
                Outcome::Done
            }
            ListOp::AddToEnd => {
                store.add_to_end(item);
                Outcome::Done
            }
            ListOp::InsertAt => {
                store.insert_at(item, index)?;
                Outcome::Done
            }
            ListOp::RemoveAt => Outcome::Displaced(store.remove_at(index)?),
            ListOp::Contains => Outcome::Flag(store.contains(&item)),
            ListOp::IndexOf => Outcome::Index(
                store
                    .index_of(&item)
                    .and_then(|position| i64::try_from(position).ok())
                    .unwrap_or(-1),
            ),
        };
        debug!(op = self.name(), %outcome, count = store.count(), "list operation complete");
        Ok(outcome)
    }
}

impl fmt::Display for ArrayOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ListOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop separators so `remove_shift`, `RemoveShift` and
/// `remove-shift` all match.
fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for ArrayOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        ArrayOp::ALL
            .into_iter()
            .find(|op| normalize_name(op.name()) == normalized)
            .ok_or_else(|| format!("unknown array operation: {s}"))
    }
}

impl FromStr for ListOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        ListOp::ALL
            .into_iter()
            .find(|op| normalize_name(op.name()) == normalized)
            .ok_or_else(|| format!("unknown list operation: {s}"))
    }
}
