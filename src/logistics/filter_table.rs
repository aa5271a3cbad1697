use std::collections::HashSet;

use crate::error::{Result, SorterError};
use crate::logistics::host::ItemTypeRegistry;
use crate::logistics::identity::{IdentityKey, classify};
use crate::types::{DIRECTION_COUNT, Direction, ItemId};

/**
 * Per-direction allow-lists of identity keys. There is always exactly one set per
 * direction, possibly empty. A table is never edited after it is built: when the
 * sorter's filter inventory changes a new table is produced by [`FilterTable::rebuild`]
 * and swapped in whole.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTable {
    sets: [HashSet<IdentityKey>; DIRECTION_COUNT],
}

impl FilterTable {
    /// A table that accepts nothing in any direction.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from a snapshot of the filter inventory.
    ///
    /// `slots` is split into consecutive groups of `slots_per_direction`, one group per
    /// direction in declared order. Every occupied slot adds its item's key to its group's
    /// direction.
    pub fn rebuild<R>(
        registry: &R,
        slots: &[Option<ItemId>],
        slots_per_direction: usize,
    ) -> Result<Self>
    where
        R: ItemTypeRegistry + ?Sized,
    {
        if slots_per_direction == 0 {
            return Err(SorterError::invalid_config(
                "slots_per_direction must be non-zero",
            ));
        }

        let expected = slots_per_direction
            .checked_mul(DIRECTION_COUNT)
            .ok_or_else(|| {
                SorterError::invalid_config(format!(
                    "slots_per_direction {} is too large",
                    slots_per_direction
                ))
            })?;
        if slots.len() != expected {
            return Err(SorterError::slot_count_mismatch(expected, slots.len()));
        }

        let mut table = Self::empty();
        let groups = slots.chunks(slots_per_direction);
        for (direction, group) in Direction::ALL.into_iter().zip(groups) {
            let set = &mut table.sets[direction.index()];
            for item in group.iter().flatten() {
                set.insert(classify(registry, *item)?);
            }
        }

        Ok(table)
    }

    /// Builds a table directly from keys. Mostly useful for hosts that keep their own filter
    /// representation.
    pub fn from_keys<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Direction, K)>,
        K: Into<IdentityKey>,
    {
        let mut table = Self::empty();
        for (direction, key) in entries {
            table.sets[direction.index()].insert(key.into());
        }
        table
    }

    /// Keys accepted on `direction`.
    pub fn keys(&self, direction: Direction) -> &HashSet<IdentityKey> {
        &self.sets[direction.index()]
    }

    /// Returns `true` if `direction` lists `key`.
    pub fn accepts(&self, direction: Direction, key: &IdentityKey) -> bool {
        self.sets[direction.index()].contains(key)
    }

    /// The lowest-ordered direction listing `key`, if any.
    pub fn first_match(&self, key: &IdentityKey) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.accepts(*direction, key))
    }

    /// Returns `true` if no direction lists any key.
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(HashSet::is_empty)
    }

    /// Number of distinct keys over all directions. A key listed on two directions counts once.
    pub fn len(&self) -> usize {
        self.sets.iter().flatten().collect::<HashSet<_>>().len()
    }
}
