//! Directional item sorter for pipe networks.
//!
//! A sorter block receives items from pipes and sends each one out through one of
//! its six sides. Every side carries an allow-list of item kinds, filled from the
//! sorter's filter inventory; an item goes to the first side (in [`Direction`]
//! order) that lists it, or to the sorter's default side otherwise. When no pipe on
//! that side will take the item it is dropped into the world instead.
//!
//! The host simulation stays in charge of items, pipes and the world and is reached
//! through the traits in [`logistics::host`].

pub mod config;
pub mod error;
pub mod logistics;
pub mod types;

pub use config::SorterConfig;
pub use error::{Result, SorterError};
pub use types::{Direction, ItemId, Position};
