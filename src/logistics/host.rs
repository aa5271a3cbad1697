//! Seams to the host simulation. The sorter never owns items, pipes or the
//! world; it only asks the host about them and tells it what to do.

use crate::types::{Direction, ItemId, Position};

/// Resolves what kind of thing an item is.
pub trait ItemTypeRegistry {
    /// Fully-qualified block family identifier (e.g. `core:stone`) when the item
    /// is a placeable block.
    fn structure_type(&self, item: ItemId) -> Option<String>;

    /// Name of the prefab the item was created from.
    fn generic_type(&self, item: ItemId) -> Option<String>;
}

/// The pipe network surrounding a sorter.
pub trait TransportNetwork {
    /// A single pipe block.
    type Segment: Clone;
    /// A shape the item can take through a segment (straight, corner, ...).
    type Path: Clone;

    /// Returns the pipe attached to the face `direction` of the block at `position`.
    fn find_adjacent_segment(
        &self,
        position: Position,
        direction: Direction,
    ) -> Option<Self::Segment>;

    /// Lists the paths through `segment` that start at the face `entry`.
    ///
    /// Implementations must return the paths in a stable order; the sorter picks
    /// among them by index.
    fn find_continuations(&self, segment: &Self::Segment, entry: Direction) -> Vec<Self::Path>;

    /// Puts `item` into `segment` through face `entry`, following `path`, at the
    /// given `progress` along it. Returns `false` if the segment refused the item.
    fn insert(
        &mut self,
        item: ItemId,
        segment: &Self::Segment,
        entry: Direction,
        path: &Self::Path,
        progress: f32,
    ) -> bool;
}

/// Where items go when the network cannot take them. Never fails.
pub trait DropSink {
    fn drop_item(&mut self, item: ItemId);
}

/// Control over an item's free-floating world behaviours (rigid body
/// simulation, despawn timer, pickup trigger).
pub trait FreeObjectHost {
    /// Removes every free-object behaviour from `item`. Called once when a sorter
    /// takes ownership of the item's movement.
    fn release_free_object(&mut self, item: ItemId);
}

/// An item arriving at a sorter through a pipe.
///
/// Consuming the event tells the host to skip its default handling, which would
/// otherwise push the item into the sorter's filter inventory.
#[derive(Debug)]
pub struct ItemArrival {
    item: ItemId,
    consumed: bool,
}

impl ItemArrival {
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            consumed: false,
        }
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Marks the event as handled.
    pub fn consume(&mut self) {
        debug_assert!(!self.consumed, "arrival for {} consumed twice", self.item);
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}
