//! In-memory host implementations
//!
//! Stand-ins for the host simulation's item registry, pipe network and item
//! handling, used by tests and the demo to drive a sorter without a world.

use std::collections::{HashMap, HashSet};

use crate::logistics::host::{DropSink, FreeObjectHost, ItemTypeRegistry, TransportNetwork};
use crate::types::{Direction, ItemId, Position};

#[derive(Debug, Clone, Default)]
struct MockItemType {
    structure: Option<String>,
    prefab: Option<String>,
}

/// Item registry backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    items: HashMap<ItemId, MockItemType>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a placeable block item of block family `uri`.
    pub fn add_block_item(&mut self, item: ItemId, uri: impl Into<String>) -> &mut Self {
        self.items.entry(item).or_default().structure = Some(uri.into());
        self
    }

    /// Registers a plain item created from prefab `name`.
    pub fn add_item(&mut self, item: ItemId, name: impl Into<String>) -> &mut Self {
        self.items.entry(item).or_default().prefab = Some(name.into());
        self
    }
}

impl ItemTypeRegistry for MockRegistry {
    fn structure_type(&self, item: ItemId) -> Option<String> {
        self.items.get(&item)?.structure.clone()
    }

    fn generic_type(&self, item: ItemId) -> Option<String> {
        self.items.get(&item)?.prefab.clone()
    }
}

/// A successful pipe insertion as seen by [`MockNetwork`].
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    pub item: ItemId,
    pub segment: Position,
    pub entry: Direction,
    pub path: String,
    pub progress: f32,
}

#[derive(Debug, Clone, Default)]
struct MockPipe {
    paths: HashMap<Direction, Vec<String>>,
}

/// Pipe network where each pipe is identified by its block position and paths
/// are named by string.
#[derive(Debug, Clone, Default)]
pub struct MockNetwork {
    pipes: HashMap<Position, MockPipe>,
    rejecting: HashSet<Position>,
    insertions: Vec<Insertion>,
    insert_attempts: usize,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a pipe at `position`, or extends an existing one, with `paths` starting at
    /// face `entry`.
    pub fn add_pipe<I, S>(&mut self, position: Position, entry: Direction, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pipe = self.pipes.entry(position).or_default();
        pipe.paths
            .entry(entry)
            .or_default()
            .extend(paths.into_iter().map(Into::into));
        self
    }

    /// Makes the pipe at `position` refuse every item.
    pub fn reject_insertions(&mut self, position: Position) -> &mut Self {
        self.rejecting.insert(position);
        self
    }

    pub fn insertions(&self) -> &[Insertion] {
        &self.insertions
    }

    /// Number of insertion attempts, accepted or not.
    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts
    }
}

impl TransportNetwork for MockNetwork {
    type Segment = Position;
    type Path = String;

    fn find_adjacent_segment(&self, position: Position, direction: Direction) -> Option<Position> {
        let neighbor = position.neighbor(direction);
        self.pipes.contains_key(&neighbor).then_some(neighbor)
    }

    fn find_continuations(&self, segment: &Position, entry: Direction) -> Vec<String> {
        self.pipes
            .get(segment)
            .and_then(|pipe| pipe.paths.get(&entry))
            .cloned()
            .unwrap_or_default()
    }

    fn insert(
        &mut self,
        item: ItemId,
        segment: &Position,
        entry: Direction,
        path: &String,
        progress: f32,
    ) -> bool {
        self.insert_attempts += 1;
        if self.rejecting.contains(segment) {
            return false;
        }

        self.insertions.push(Insertion {
            item,
            segment: *segment,
            entry,
            path: path.clone(),
            progress,
        });
        true
    }
}

/// Records drops and released free-object behaviours.
#[derive(Debug, Clone, Default)]
pub struct MockItemHost {
    dropped: Vec<ItemId>,
    released: Vec<ItemId>,
}

impl MockItemHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropped(&self) -> &[ItemId] {
        &self.dropped
    }

    pub fn released(&self) -> &[ItemId] {
        &self.released
    }
}

impl DropSink for MockItemHost {
    fn drop_item(&mut self, item: ItemId) {
        self.dropped.push(item);
    }
}

impl FreeObjectHost for MockItemHost {
    fn release_free_object(&mut self, item: ItemId) {
        self.released.push(item);
    }
}
