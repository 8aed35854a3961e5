use serde::{Deserialize, Serialize};

use crate::engine::turn_engine::{TurnEngine, TurnPhase};
use crate::game::grid::PlacedTile;
use crate::game::player::Player;
use crate::game::tile::{Rotation, TileKind};

/// Serializable view of a game in progress: everything a headless consumer
/// needs to display or analyze the state, without the event bus or RNG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub current_seat: usize,
    pub current_tile: Option<TileKind>,
    pub current_rotation: Rotation,
    pub phase: TurnPhase,
    pub deck_remaining: usize,
    /// Placed tiles sorted by position for stable output.
    pub tiles: Vec<PlacedTile>,
}

impl GameSnapshot {
    pub fn of(engine: &TurnEngine) -> GameSnapshot {
        let mut tiles: Vec<PlacedTile> = engine.grid().tiles().cloned().collect();
        tiles.sort_by_key(|tile| tile.position());

        GameSnapshot {
            players: engine.players().to_vec(),
            current_seat: engine.current_seat(),
            current_tile: engine.current_tile().map(|shape| shape.kind()),
            current_rotation: engine.current_rotation(),
            phase: engine.phase(),
            deck_remaining: engine.deck_remaining(),
            tiles,
        }
    }
}
