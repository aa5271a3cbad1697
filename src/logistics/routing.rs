use crate::logistics::filter_table::FilterTable;
use crate::logistics::identity::IdentityKey;
use crate::types::Direction;

/// Picks the side an item with `key` leaves through.
///
/// Directions are scanned in declared order and the first one whose filter lists the
/// key wins, even if a later direction lists it too. Keys no filter mentions go to
/// `default_direction`.
pub fn decide(key: &IdentityKey, table: &FilterTable, default_direction: Direction) -> Direction {
    table.first_match(key).unwrap_or(default_direction)
}
