use rand::prelude::*;
use rand::rngs::StdRng;

use crate::game::direction::{relative_turn, Direction};
use crate::game::grid::{Grid, Position};
use crate::game::tile::{Rotation, TileShape};
use crate::strategy::move_selection::{legal_moves, BotMove, MoveSelectionStrategy};

/// Points per occupied neighbor whose shared edge carries road on both
/// sides.
const CONNECTED_EDGE: i32 = 10;
/// Extra points when the two road segments continue through the junction
/// geometrically (straight through, or the same quarter-turn on both
/// sides).
const SMOOTH_CONTINUATION: i32 = 5;
/// Points per occupied neighbor where both edges are closed, a clean
/// non-road adjacency that exposes no dangling stub.
const CLOSED_EDGE: i32 = 1;

/// Scored move selection: every legal candidate is rated by how well it
/// knits into its neighbors, the maximal set is kept, and ties are broken
/// by a uniform draw. Stateless across calls.
pub struct HeuristicStrategy;

impl MoveSelectionStrategy for HeuristicStrategy {
    fn select_move(&self, grid: &Grid, shape: &TileShape, rng: &mut StdRng) -> Option<BotMove> {
        let moves = legal_moves(grid, shape);
        if moves.is_empty() {
            return None;
        }

        let scored: Vec<(BotMove, i32)> = moves
            .into_iter()
            .map(|mv| (mv, evaluate_candidate(grid, shape, mv.0, mv.1)))
            .collect();

        let best = scored.iter().map(|&(_, score)| score).max()?;
        let maximal: Vec<BotMove> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(mv, _)| mv)
            .collect();

        log::debug!(
            "heuristic: {} maximal candidate(s) at score {}",
            maximal.len(),
            best
        );
        maximal.choose(rng).copied()
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Rates one candidate placement against its four neighbors. Edges with
/// exactly one open side never appear here: `legal_moves` already excluded
/// them.
pub fn evaluate_candidate(
    grid: &Grid,
    shape: &TileShape,
    position: Position,
    rotation: Rotation,
) -> i32 {
    let exits = shape.rotated_exits(rotation);
    let mut score = 0;

    for dir in Direction::ALL {
        let Some(neighbor) = grid.tile_at(position.neighbor(dir)) else {
            continue;
        };

        let ours = exits[dir.index()];
        let theirs = neighbor.has_exit(dir.opposite());

        if ours && theirs {
            score += CONNECTED_EDGE;
            if roads_continue(exits, neighbor.current_exits(), dir) {
                score += SMOOTH_CONTINUATION;
            }
        } else if !ours && !theirs {
            score += CLOSED_EDGE;
        }
    }

    score
}

/// Whether the roads on both sides of a shared open edge read as one
/// continuous segment. Excluding the junction edge, each side must have
/// exactly one remaining exit, and both remainders must sit at the same
/// turn relative to their junction edge: straight through on both sides,
/// or the same ±90° bend on both sides. Anything else is a branch, not a
/// continuation.
fn roads_continue(
    candidate_exits: [bool; 4],
    neighbor_exits: [bool; 4],
    junction: Direction,
) -> bool {
    let Some(candidate_rest) = sole_other_exit(candidate_exits, junction) else {
        return false;
    };
    let Some(neighbor_rest) = sole_other_exit(neighbor_exits, junction.opposite()) else {
        return false;
    };

    relative_turn(junction, candidate_rest) == relative_turn(junction.opposite(), neighbor_rest)
}

/// The single open exit besides `edge`, or `None` when there are zero or
/// several.
fn sole_other_exit(exits: [bool; 4], edge: Direction) -> Option<Direction> {
    let mut found = None;
    for dir in Direction::ALL {
        if dir != edge && exits[dir.index()] {
            if found.is_some() {
                return None;
            }
            found = Some(dir);
        }
    }
    found
}
