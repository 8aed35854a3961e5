use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::game::grid::{Grid, Position};
use crate::game::tile::{Rotation, TileShape};

/// A bot move: where to put the active tile and how to turn it.
pub type BotMove = (Position, Rotation);

/// Move selection for the bot seat. Implementations are pure functions of
/// the grid, the tile and one RNG draw; they keep no memory across calls.
/// `None` means the tile has no legal placement anywhere; the engine
/// decides what a pass looks like, not the strategy.
pub trait MoveSelectionStrategy {
    fn select_move(&self, grid: &Grid, shape: &TileShape, rng: &mut StdRng) -> Option<BotMove>;

    fn name(&self) -> &'static str;
}

/// Which strategy a game is configured with. The two behaviors are kept
/// distinct and selectable; they are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    Random,
    Heuristic,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn MoveSelectionStrategy> {
        match self {
            StrategyKind::Random => Box::new(crate::strategy::random::RandomStrategy),
            StrategyKind::Heuristic => Box::new(crate::strategy::heuristic::HeuristicStrategy),
        }
    }
}

/// Every legal (position, rotation) pair for the tile, enumerated over the
/// grid's valid positions and all four rotations. Order is deterministic:
/// positions are sorted and rotations ascend.
pub fn legal_moves(grid: &Grid, shape: &TileShape) -> Vec<BotMove> {
    let mut moves = Vec::new();
    for position in grid.valid_positions() {
        for rotation in Rotation::ALL {
            if grid.can_place(shape, position, rotation) {
                moves.push((position, rotation));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::TileCatalog;
    use crate::game::tile::TileKind;

    #[test]
    fn test_legal_moves_on_empty_grid() {
        let grid = Grid::new();
        let straight = TileCatalog::standard().shape(TileKind::Straight).unwrap();

        let moves = legal_moves(&grid, &straight);
        assert_eq!(
            moves.len(),
            4,
            "the bootstrap cell accepts the tile in all four rotations"
        );
        assert!(moves.iter().all(|&(pos, _)| pos == Position::ORIGIN));
    }

    #[test]
    fn test_legal_moves_respect_edge_matching() {
        let catalog = TileCatalog::standard();
        let mut grid = Grid::new();
        grid.place(
            catalog.shape(TileKind::Crossroad).unwrap(),
            Position::ORIGIN,
            Rotation::IDENTITY,
            None,
        )
        .unwrap();

        let straight = catalog.shape(TileKind::Straight).unwrap();
        let moves = legal_moves(&grid, &straight);

        // Around a crossroad every adjacent cell demands an open facing
        // edge: the straight fits only when its axis points at the center,
        // which two of its four rotations achieve at each of the 4 cells.
        assert_eq!(moves.len(), 8);
        for &(pos, rotation) in &moves {
            assert!(grid.can_place(&straight, pos, rotation));
        }
    }
}
