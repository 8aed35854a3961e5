use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::grid::Grid;
use crate::routing::route_result::RouteResult;

/// Route length to points. The rule is intentionally coarse and discrete:
/// exactly 7 tiles pay 1 point, exactly 11 pay 2, everything else pays
/// nothing. Completed routes of other lengths are still marked, they just
/// award zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    points_by_length: BTreeMap<usize, u32>,
}

impl ScoreTable {
    pub fn new(entries: impl IntoIterator<Item = (usize, u32)>) -> ScoreTable {
        ScoreTable {
            points_by_length: entries.into_iter().collect(),
        }
    }

    pub fn score(&self, route_length: usize) -> u32 {
        self.points_by_length
            .get(&route_length)
            .copied()
            .unwrap_or(0)
    }

    pub fn score_route(&self, route: &RouteResult) -> u32 {
        self.score(route.len())
    }
}

impl Default for ScoreTable {
    fn default() -> ScoreTable {
        ScoreTable::new([(7, 1), (11, 2)])
    }
}

/// Sets the completed flag on every tile of a scored route, irreversibly,
/// so later traces skip or discard them.
pub fn mark_route_complete(grid: &mut Grid, route: &RouteResult) {
    for &position in route.tiles() {
        grid.mark_complete(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table() {
        let table = ScoreTable::default();
        assert_eq!(table.score(7), 1, "a 7-tile route pays exactly 1 point");
        assert_eq!(table.score(11), 2, "an 11-tile route pays exactly 2 points");
        assert_eq!(table.score(6), 0);
        assert_eq!(table.score(8), 0);
        assert_eq!(table.score(0), 0);
    }

    #[test]
    fn test_custom_table() {
        let table = ScoreTable::new([(3, 5)]);
        assert_eq!(table.score(3), 5);
        assert_eq!(table.score(7), 0, "lengths outside the configured table pay nothing");
    }
}
