use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::logistics::host::{DropSink, TransportNetwork};
use crate::types::{Direction, ItemId, Position};

/// Items handed to a pipe by a sorter start fully queued on their path.
pub const FULL_PROGRESS: f32 = 1.0;

/// Why an item left the network instead of entering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// No pipe is attached on the chosen side.
    NoTransportSegment,
    /// The pipe has no path starting at the face touching the sorter.
    NoContinuationPath,
    /// The pipe refused the item.
    InsertionRejected,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DropReason::NoTransportSegment => "no transport segment",
            DropReason::NoContinuationPath => "no continuation path",
            DropReason::InsertionRejected => "insertion rejected",
        };
        f.write_str(reason)
    }
}

/// Final fate of a routed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingOutcome {
    Delivered { direction: Direction },
    Dropped { direction: Direction, reason: DropReason },
}

impl RoutingOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, RoutingOutcome::Delivered { .. })
    }

    /// The side the item was routed to, whether or not it made it into a pipe.
    pub fn direction(&self) -> Direction {
        match *self {
            RoutingOutcome::Delivered { direction } | RoutingOutcome::Dropped { direction, .. } => {
                direction
            }
        }
    }
}

/// Hands `item` to the pipe on side `direction` of the sorter at `position`, or drops it.
///
/// The pipe is entered through its face pointing back at the sorter. When the pipe offers
/// several paths from that face one is chosen uniformly at random. Any failure along the
/// way drops the item exactly once; nothing is retried.
pub fn dispatch<N, D, R>(
    network: &mut N,
    drop_sink: &mut D,
    rng: &mut R,
    item: ItemId,
    position: Position,
    direction: Direction,
) -> RoutingOutcome
where
    N: TransportNetwork + ?Sized,
    D: DropSink + ?Sized,
    R: Rng,
{
    match try_insert(network, rng, item, position, direction) {
        Ok(()) => RoutingOutcome::Delivered { direction },
        Err(reason) => {
            debug!(%item, %position, %direction, %reason, "dropping item");
            drop_sink.drop_item(item);
            RoutingOutcome::Dropped { direction, reason }
        }
    }
}

fn try_insert<N, R>(
    network: &mut N,
    rng: &mut R,
    item: ItemId,
    position: Position,
    direction: Direction,
) -> Result<(), DropReason>
where
    N: TransportNetwork + ?Sized,
    R: Rng,
{
    let segment = network
        .find_adjacent_segment(position, direction)
        .ok_or(DropReason::NoTransportSegment)?;

    let entry = direction.reverse();
    let paths = network.find_continuations(&segment, entry);
    let path = pick_uniform(&paths, rng).ok_or(DropReason::NoContinuationPath)?;

    if network.insert(item, &segment, entry, path, FULL_PROGRESS) {
        Ok(())
    } else {
        Err(DropReason::InsertionRejected)
    }
}

/// Uniformly picks one element, or `None` for an empty slice.
fn pick_uniform<'a, T, R: Rng>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.random_range(0..candidates.len()))
}
