use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::game::direction::Direction;
use crate::game::player::PlayerColor;
use crate::game::tile::{Rotation, TileShape};
use crate::{Result, RouteGameError};

/// Integer grid coordinate. The grid is unbounded; positions are only keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub fn neighbor(self, dir: Direction) -> Position {
        let (dx, dy) = dir.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A tile committed to the grid. Immutable once placed except for the
/// `completed` flag, which scoring sets exactly once and never clears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    position: Position,
    shape: TileShape,
    rotation: Rotation,
    owner: Option<PlayerColor>,
    completed: bool,
}

impl PlacedTile {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn shape(&self) -> &TileShape {
        &self.shape
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Attribution tag of the placing player; the programmatic start tile
    /// has none.
    pub fn owner(&self) -> Option<PlayerColor> {
        self.owner
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn has_exit(&self, dir: Direction) -> bool {
        self.shape.has_exit(dir, self.rotation)
    }

    /// Exits as laid on the grid, rotation applied.
    pub fn current_exits(&self) -> [bool; 4] {
        self.shape.rotated_exits(self.rotation)
    }

    pub(crate) fn mark_complete(&mut self) {
        self.completed = true;
    }
}

/// Sparse store of placed tiles keyed by coordinate. Owns placement
/// legality; after every successful `place` the edge invariant holds: each
/// pair of adjacent tiles agrees on the shared edge (both open or both
/// closed).
#[derive(Debug, Clone, Default)]
pub struct Grid {
    tiles: HashMap<Position, PlacedTile>,
}

impl Grid {
    pub fn new() -> Grid {
        Grid::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile_at(&self, position: Position) -> Option<&PlacedTile> {
        self.tiles.get(&position)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.values()
    }

    /// Placement legality. A candidate must sit on a free cell, agree with
    /// every occupied neighbor on the shared edge, and touch at least one
    /// neighbor, except the bootstrap placement on an empty grid.
    pub fn can_place(&self, shape: &TileShape, position: Position, rotation: Rotation) -> bool {
        if self.tiles.contains_key(&position) {
            return false;
        }

        let exits = shape.rotated_exits(rotation);
        let mut has_neighbor = false;

        for dir in Direction::ALL {
            if let Some(neighbor) = self.tiles.get(&position.neighbor(dir)) {
                has_neighbor = true;
                let ours = exits[dir.index()];
                let theirs = neighbor.has_exit(dir.opposite());
                if ours != theirs {
                    return false;
                }
            }
        }

        has_neighbor || self.tiles.is_empty()
    }

    /// Commits a tile. Occupancy is re-validated here: an occupied slot is
    /// an error, never a silent overwrite.
    pub fn place(
        &mut self,
        shape: TileShape,
        position: Position,
        rotation: Rotation,
        owner: Option<PlayerColor>,
    ) -> Result<&PlacedTile> {
        if self.tiles.contains_key(&position) {
            return Err(RouteGameError::SlotOccupied(position));
        }

        let tile = PlacedTile {
            position,
            shape,
            rotation,
            owner,
            completed: false,
        };
        self.tiles.insert(position, tile);
        Ok(&self.tiles[&position])
    }

    /// Every unoccupied cell adjacent to an occupied one, or `{origin}` on
    /// an empty grid. Recomputed from scratch on each call; returned sorted
    /// so enumeration order is reproducible run to run.
    pub fn valid_positions(&self) -> Vec<Position> {
        if self.tiles.is_empty() {
            return vec![Position::ORIGIN];
        }

        let mut candidates = BTreeSet::new();
        for pos in self.tiles.keys() {
            for dir in Direction::ALL {
                let neighbor = pos.neighbor(dir);
                if !self.tiles.contains_key(&neighbor) {
                    candidates.insert(neighbor);
                }
            }
        }
        candidates.into_iter().collect()
    }

    /// Valid positions where `shape` fits in at least one rotation. UI
    /// highlighting helper; the bot enumerates rotations itself.
    pub fn valid_positions_for(&self, shape: &TileShape) -> Vec<Position> {
        self.valid_positions()
            .into_iter()
            .filter(|&pos| {
                Rotation::ALL
                    .iter()
                    .any(|&rot| self.can_place(shape, pos, rot))
            })
            .collect()
    }

    pub(crate) fn mark_complete(&mut self, position: Position) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.mark_complete();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::TileCatalog;
    use crate::game::tile::TileKind;

    fn shape(kind: TileKind) -> TileShape {
        TileCatalog::standard().shape(kind).unwrap()
    }

    #[test]
    fn test_bootstrap_placement_on_empty_grid() {
        let grid = Grid::new();
        assert!(
            grid.can_place(&shape(TileKind::Crossroad), Position::ORIGIN, Rotation::IDENTITY),
            "an empty grid should accept the bootstrap placement"
        );
    }

    #[test]
    fn test_isolated_placement_rejected_once_grid_has_tiles() {
        let mut grid = Grid::new();
        grid.place(shape(TileKind::Crossroad), Position::ORIGIN, Rotation::IDENTITY, None)
            .unwrap();

        let far_away = Position::new(5, 5);
        assert!(
            !grid.can_place(&shape(TileKind::Crossroad), far_away, Rotation::IDENTITY),
            "a placement with no occupied neighbor should be rejected"
        );
    }

    #[test]
    fn test_edge_match_required() {
        let mut grid = Grid::new();
        grid.place(shape(TileKind::Crossroad), Position::ORIGIN, Rotation::IDENTITY, None)
            .unwrap();

        let above = Position::new(0, 1);
        // Straight at rotation 0 runs North/South: its South exit meets the
        // Crossroad's North exit.
        assert!(grid.can_place(&shape(TileKind::Straight), above, Rotation::IDENTITY));
        // Rotated a quarter turn it runs East/West: the shared edge is now
        // half-open, so the placement must fail.
        assert!(!grid.can_place(&shape(TileKind::Straight), above, Rotation::new(1)));
    }

    #[test]
    fn test_place_rejects_occupied_slot() {
        let mut grid = Grid::new();
        grid.place(shape(TileKind::Straight), Position::ORIGIN, Rotation::IDENTITY, None)
            .unwrap();

        let err = grid
            .place(shape(TileKind::Straight), Position::ORIGIN, Rotation::IDENTITY, None)
            .unwrap_err();
        assert!(matches!(err, RouteGameError::SlotOccupied(p) if p == Position::ORIGIN));
        assert_eq!(grid.len(), 1, "the failed placement must not mutate the grid");
    }

    #[test]
    fn test_valid_positions_empty_grid_is_origin() {
        let grid = Grid::new();
        assert_eq!(grid.valid_positions(), vec![Position::ORIGIN]);
    }

    #[test]
    fn test_valid_positions_are_the_free_neighbors() {
        let mut grid = Grid::new();
        grid.place(shape(TileKind::Crossroad), Position::ORIGIN, Rotation::IDENTITY, None)
            .unwrap();
        grid.place(shape(TileKind::Straight), Position::new(0, 1), Rotation::IDENTITY, None)
            .unwrap();

        let valid = grid.valid_positions();
        assert!(valid.contains(&Position::new(1, 0)));
        assert!(valid.contains(&Position::new(0, 2)));
        assert!(
            !valid.contains(&Position::ORIGIN),
            "occupied cells are never valid"
        );
        assert_eq!(valid.len(), 6, "two adjacent tiles expose six free neighbors");
    }

    #[test]
    fn test_valid_positions_for_filters_unplaceable_cells() {
        let mut grid = Grid::new();
        // Sealed two-tile road: dead ends facing each other.
        grid.place(shape(TileKind::DeadEnd), Position::ORIGIN, Rotation::IDENTITY, None)
            .unwrap();
        grid.place(shape(TileKind::DeadEnd), Position::new(0, 1), Rotation::new(2), None)
            .unwrap();

        // A dead end still fits anywhere its three closed edges line up.
        assert!(!grid.valid_positions_for(&shape(TileKind::DeadEnd)).is_empty());
        // A crossroad demands four open edges and fits nowhere here.
        assert!(grid.valid_positions_for(&shape(TileKind::Crossroad)).is_empty());
    }

    #[test]
    fn test_edge_invariant_after_placements() {
        let mut grid = Grid::new();
        grid.place(shape(TileKind::Crossroad), Position::ORIGIN, Rotation::IDENTITY, None)
            .unwrap();
        grid.place(shape(TileKind::Straight), Position::new(0, 1), Rotation::IDENTITY, None)
            .unwrap();
        grid.place(shape(TileKind::Turn), Position::new(1, 0), Rotation::new(2), None)
            .unwrap();

        for tile in grid.tiles() {
            for dir in Direction::ALL {
                if let Some(neighbor) = grid.tile_at(tile.position().neighbor(dir)) {
                    assert_eq!(
                        tile.has_exit(dir),
                        neighbor.has_exit(dir.opposite()),
                        "edge between {:?} and {:?} must be boolean-equal",
                        tile.position(),
                        neighbor.position()
                    );
                }
            }
        }
    }
}
