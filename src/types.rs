//! Shared primitive types used across the sorter library.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SorterError;

/// Number of filter slots the host inventory reserves for each direction.
pub const SLOTS_PER_DIRECTION: usize = 5;

/// Number of faces a block exposes to the transport network.
pub const DIRECTION_COUNT: usize = 6;

/// An item is referenced by an opaque entity handle owned by the host simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// One face of a block. Declaration order doubles as the filter group order and
/// the tie-break order when an item matches several directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Left,
    Right,
    Front,
    Back,
    Bottom,
}

impl Direction {
    /// Every direction in declared order.
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::Top,
        Direction::Left,
        Direction::Right,
        Direction::Front,
        Direction::Back,
        Direction::Bottom,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a direction by its declared index.
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// Returns the opposite face.
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
        }
    }

    /// Unit vector pointing out of this face.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Top => (0, 1, 0),
            Direction::Bottom => (0, -1, 0),
            Direction::Left => (-1, 0, 0),
            Direction::Right => (1, 0, 0),
            Direction::Front => (0, 0, -1),
            Direction::Back => (0, 0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Front => "front",
            Direction::Back => "back",
            Direction::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = SorterError;

    /// Parses a direction by name, ignoring case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| SorterError::unknown_direction(name))
    }
}

/// Integer block coordinate in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the block position adjacent to this one across `direction`.
    pub fn neighbor(self, direction: Direction) -> Position {
        let (dx, dy, dz) = direction.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.reverse(), direction);
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    #[test]
    fn index_round_trips_through_declared_order() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(Direction::from_index(i), Some(*direction));
        }
        assert_eq!(Direction::from_index(DIRECTION_COUNT), None);
    }

    #[test]
    fn parses_names_ignoring_case() {
        assert_eq!("top".parse::<Direction>().unwrap(), Direction::Top);
        assert_eq!("Bottom".parse::<Direction>().unwrap(), Direction::Bottom);
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }

        let err = "north".parse::<Direction>().unwrap_err();
        assert!(matches!(err, SorterError::UnknownDirection { ref name } if name == "north"));
    }

    #[test]
    fn neighbor_and_reverse_cancel_out() {
        let origin = Position::new(3, -2, 7);
        for direction in Direction::ALL {
            assert_eq!(origin.neighbor(direction).neighbor(direction.reverse()), origin);
        }
        assert_eq!(origin.neighbor(Direction::Top), Position::new(3, -1, 7));
    }
}
