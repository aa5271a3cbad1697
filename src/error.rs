//! Sorter error types

use thiserror::Error;

use crate::types::ItemId;

/// Result type for sorter operations
pub type Result<T> = std::result::Result<T, SorterError>;

/// Hard failures of the sorter.
///
/// Transport problems are not represented here: a missing pipe, a pipe with no
/// usable path, or a rejected insertion all end in the item being dropped.
#[derive(Debug, Error)]
pub enum SorterError {
    /// The item has neither a block family nor a prefab to compare against
    #[error("{item} has no structure type or generic type to classify by")]
    UnclassifiableItem {
        /// The offending item
        item: ItemId,
    },

    /// Configuration snapshot does not cover every direction's slot group
    #[error("filter configuration has {actual} slots, expected {expected}")]
    SlotCountMismatch {
        /// Slots required by the sorter configuration
        expected: usize,
        /// Slots present in the snapshot
        actual: usize,
    },

    /// Direction name not recognised
    #[error("unknown direction '{name}', expected one of top, left, right, front, back, bottom")]
    UnknownDirection {
        /// The name that failed to parse
        name: String,
    },

    /// Sorter configuration is unusable
    #[error("invalid sorter configuration: {0}")]
    InvalidConfig(String),
}

impl SorterError {
    /// Create an UnclassifiableItem error
    #[inline]
    pub fn unclassifiable(item: ItemId) -> Self {
        Self::UnclassifiableItem { item }
    }

    /// Create a SlotCountMismatch error
    #[inline]
    pub fn slot_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::SlotCountMismatch { expected, actual }
    }

    /// Create an UnknownDirection error
    #[inline]
    pub fn unknown_direction(name: impl Into<String>) -> Self {
        Self::UnknownDirection { name: name.into() }
    }

    /// Create an InvalidConfig error
    #[inline]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
