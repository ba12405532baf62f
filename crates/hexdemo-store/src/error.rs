//! Error types for store operations.

use thiserror::Error;

/// Failures reported by [`ArrayStore`](crate::ArrayStore) and
/// [`ListStore`](crate::ListStore).
///
/// A store that returns one of these has not been modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Index outside `0..end` for the requested operation.
    #[error("index {index} out of range 0..{end}")]
    IndexOutOfRange { index: i64, end: usize },

    /// Insert requested while every slot of the array is occupied.
    #[error("array is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// An empty item was given where an item is required.
    #[error("{operation} requires an item, got none")]
    InvalidItem { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Validate `index` against `0..end` and convert it to a slot position.
pub(crate) fn checked_index(index: i64, end: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|position| *position < end)
        .ok_or(StoreError::IndexOutOfRange { index, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_index_bounds() {
        assert_eq!(checked_index(0, 3), Ok(0));
        assert_eq!(checked_index(2, 3), Ok(2));
        assert_eq!(
            checked_index(3, 3),
            Err(StoreError::IndexOutOfRange { index: 3, end: 3 })
        );
        assert_eq!(
            checked_index(-1, 3),
            Err(StoreError::IndexOutOfRange { index: -1, end: 3 })
        );
        assert!(checked_index(0, 0).is_err());
    }

    #[test]
    fn messages_are_readable() {
        let error = StoreError::IndexOutOfRange { index: -1, end: 4 };
        assert_eq!(error.to_string(), "index -1 out of range 0..4");
        let error = StoreError::CapacityExceeded { capacity: 5 };
        assert_eq!(error.to_string(), "array is full (capacity 5)");
    }
}
