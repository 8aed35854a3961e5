use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::grid::Position;

/// One traced road. Tiles are identified by their grid position, which is
/// unique per placed tile, in the order the walk visited them.
///
/// `complete == false` means the walk ran off the placed region (an open
/// end that may close later); `complete == true` means it terminated at a
/// dead end or closed into a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    tiles: Vec<Position>,
    complete: bool,
}

impl RouteResult {
    pub(crate) fn new(tiles: Vec<Position>, complete: bool) -> RouteResult {
        RouteResult { tiles, complete }
    }

    pub fn tiles(&self) -> &[Position] {
        &self.tiles
    }

    /// Count of distinct tiles visited; the length that scoring looks up.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Two results describe the same route when their tile sets are equal;
    /// a closed loop is discovered once per exit that feeds into it.
    pub fn same_route(&self, other: &RouteResult) -> bool {
        if self.tiles.len() != other.tiles.len() {
            return false;
        }
        let ours: BTreeSet<Position> = self.tiles.iter().copied().collect();
        other.tiles.iter().all(|pos| ours.contains(pos))
    }
}
