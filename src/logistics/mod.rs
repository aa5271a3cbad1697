//! Sorter node and the routing pieces it is built from.

pub mod dispatch;
pub mod filter_table;
pub mod host;
pub mod identity;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod routing;
pub mod sorter;

// Re-export the main types for easier access
pub use dispatch::{DropReason, FULL_PROGRESS, RoutingOutcome, dispatch};
pub use filter_table::FilterTable;
pub use host::{DropSink, FreeObjectHost, ItemArrival, ItemTypeRegistry, TransportNetwork};
pub use identity::{IdentityKey, classify};
pub use routing::decide;
pub use sorter::{Sorter, SorterContext, SorterState};
