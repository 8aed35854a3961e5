use rand::prelude::*;
use rand::rngs::StdRng;

use crate::game::grid::Grid;
use crate::game::tile::TileShape;
use crate::strategy::move_selection::{legal_moves, BotMove, MoveSelectionStrategy};

/// Uniform choice over every legal placement. Kept as its own strategy
/// rather than folded into the scored one; the two stay selectable.
pub struct RandomStrategy;

impl MoveSelectionStrategy for RandomStrategy {
    fn select_move(&self, grid: &Grid, shape: &TileShape, rng: &mut StdRng) -> Option<BotMove> {
        let moves = legal_moves(grid, shape);
        moves.choose(rng).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::TileCatalog;
    use crate::game::grid::Position;
    use crate::game::tile::{Rotation, TileKind};

    #[test]
    fn test_selects_only_legal_moves() {
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
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let (pos, rotation) = RandomStrategy
                .select_move(&grid, &straight, &mut rng)
                .expect("legal moves exist around a crossroad");
            assert!(grid.can_place(&straight, pos, rotation));
        }
    }

    #[test]
    fn test_no_legal_move_yields_none() {
        let catalog = TileCatalog::standard();
        let mut grid = Grid::new();
        // Two dead ends facing each other form a fully closed road: every
        // frontier cell borders only closed edges, so a crossroad (all four
        // edges open) mismatches everywhere.
        grid.place(
            catalog.shape(TileKind::DeadEnd).unwrap(),
            Position::ORIGIN,
            Rotation::IDENTITY,
            None,
        )
        .unwrap();
        grid.place(
            catalog.shape(TileKind::DeadEnd).unwrap(),
            Position::new(0, 1),
            Rotation::new(2),
            None,
        )
        .unwrap();

        let crossroad = catalog.shape(TileKind::Crossroad).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(
            RandomStrategy.select_move(&grid, &crossroad, &mut rng).is_none(),
            "a tile with no legal placement must produce no move"
        );
    }
}
