use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::config::SorterConfig;
use crate::error::Result;
use crate::logistics::dispatch::{RoutingOutcome, dispatch};
use crate::logistics::filter_table::FilterTable;
use crate::logistics::host::{
    DropSink, FreeObjectHost, ItemArrival, ItemTypeRegistry, TransportNetwork,
};
use crate::logistics::identity::classify;
use crate::logistics::routing::decide;
use crate::types::{Direction, ItemId, Position};

/// Routing state owned by a single sorter.
///
/// The filter table sits behind an `Arc` and is only ever swapped for a freshly built
/// one, so anyone holding a snapshot keeps seeing a complete table.
#[derive(Debug, Clone)]
pub struct SorterState {
    filter: Arc<FilterTable>,
    default_direction: Direction,
}

impl SorterState {
    pub fn new(default_direction: Direction) -> Self {
        Self {
            filter: Arc::new(FilterTable::empty()),
            default_direction,
        }
    }

    pub fn filter(&self) -> &FilterTable {
        &self.filter
    }

    /// A handle to the current table that survives later rebuilds.
    pub fn filter_snapshot(&self) -> Arc<FilterTable> {
        Arc::clone(&self.filter)
    }

    pub fn default_direction(&self) -> Direction {
        self.default_direction
    }

    fn replace_filter(&mut self, table: FilterTable) {
        self.filter = Arc::new(table);
    }
}

/// Everything a sorter needs from the host while handling one arrival.
pub struct SorterContext<'a, R: ?Sized, N: ?Sized, H: ?Sized, G> {
    pub registry: &'a R,
    pub network: &'a mut N,
    pub items: &'a mut H,
    pub rng: &'a mut G,
}

/**
 * A block that routes incoming items to one of its six sides. Each side has an
 * allow-list of item kinds built from the sorter's filter inventory; items nobody
 * asked for leave through the default side. If the chosen side has no pipe that
 * will take the item, the item is dropped into the world.
 */
#[derive(Debug, Clone)]
pub struct Sorter {
    position: Position,
    config: SorterConfig,
    state: SorterState,
}

impl Sorter {
    /// Creates a sorter with an empty filter.
    pub fn new(position: Position, config: SorterConfig) -> Result<Self> {
        config.validate()?;
        let state = SorterState::new(config.default_direction);
        Ok(Self {
            position,
            config,
            state,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    pub fn state(&self) -> &SorterState {
        &self.state
    }

    /// Changes the side unmatched items are sent to.
    pub fn set_default_direction(&mut self, direction: Direction) {
        self.config.default_direction = direction;
        self.state.default_direction = direction;
    }

    /// Rebuilds the filter from a fresh snapshot of the filter inventory.
    ///
    /// On error the previous filter stays in place.
    pub fn on_configuration_changed<R>(
        &mut self,
        registry: &R,
        slots: &[Option<ItemId>],
    ) -> Result<()>
    where
        R: ItemTypeRegistry + ?Sized,
    {
        let table = FilterTable::rebuild(registry, slots, self.config.slots_per_direction)
            .inspect_err(|e| {
                warn!(position = %self.position, error = %e, "filter rebuild failed");
            })?;

        debug!(position = %self.position, keys = table.len(), "filter rebuilt");
        self.state.replace_filter(table);
        Ok(())
    }

    /// Classifies `item` and picks its outgoing side without touching the item.
    pub fn route<R>(&self, registry: &R, item: ItemId) -> Result<Direction>
    where
        R: ItemTypeRegistry + ?Sized,
    {
        let key = classify(registry, item)?;
        let direction = decide(&key, self.state.filter(), self.state.default_direction());
        debug!(position = %self.position, %item, %key, %direction, "routed item");
        Ok(direction)
    }

    /// Handles an item arriving through a pipe: route it, take it out of free-object
    /// simulation, pass it on (or drop it) and consume the arrival.
    ///
    /// If the item cannot be classified nothing happens to it and the arrival is left
    /// unconsumed for the host to handle.
    pub fn on_item_arrival<R, N, H, G>(
        &self,
        ctx: &mut SorterContext<'_, R, N, H, G>,
        arrival: &mut ItemArrival,
    ) -> Result<RoutingOutcome>
    where
        R: ItemTypeRegistry + ?Sized,
        N: TransportNetwork + ?Sized,
        H: DropSink + FreeObjectHost + ?Sized,
        G: Rng,
    {
        let item = arrival.item();
        let direction = self.route(ctx.registry, item).inspect_err(|e| {
            warn!(position = %self.position, %item, error = %e, "cannot sort item");
        })?;

        ctx.items.release_free_object(item);
        let outcome = dispatch(
            &mut *ctx.network,
            &mut *ctx.items,
            &mut *ctx.rng,
            item,
            self.position,
            direction,
        );
        arrival.consume();
        Ok(outcome)
    }
}
