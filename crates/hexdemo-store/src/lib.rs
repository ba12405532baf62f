//! Array-backed and list-backed collections of hex items.
//!
//! [`ArrayStore`] has a capacity fixed at construction and exposes both a
//! hole-leaving remove and a shifting remove. [`ListStore`] grows on demand
//! and adds append, membership and lookup. Both implement [`HexStore`], so
//! the positional operations behave the same way on either.

pub mod array;
pub mod error;
pub mod list;
pub mod ops;
pub mod store;

pub use array::{ArrayStore, DEFAULT_CAPACITY};
pub use error::{Result, StoreError};
pub use list::ListStore;
pub use ops::{ArrayOp, ListOp, Outcome};
pub use store::{HexStore, Slot};
