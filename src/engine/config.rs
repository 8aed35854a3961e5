use serde::{Deserialize, Serialize};

use crate::game::create_deck::DeckComposition;
use crate::game::grid::Position;
use crate::game::tile::TileKind;
use crate::scoring::score_table::ScoreTable;
use crate::strategy::move_selection::StrategyKind;
use crate::{Result, RouteGameError};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Everything a game accepts as configuration: deck composition, the fixed
/// start tile, the score table, the RNG seed, and which bot strategy the
/// engine builds for bot seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub deck: DeckComposition,
    /// Tile placed programmatically before players act. `None` leaves the
    /// grid empty, making the first player's placement the bootstrap case.
    pub start_tile: Option<(TileKind, Position)>,
    pub score_table: ScoreTable,
    pub seed: u64,
    pub bot_strategy: StrategyKind,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            deck: DeckComposition::default(),
            start_tile: Some((TileKind::Crossroad, Position::ORIGIN)),
            score_table: ScoreTable::default(),
            seed: 0,
            bot_strategy: StrategyKind::Heuristic,
        }
    }
}

/// The supported table size is 2 to 4 seats.
pub fn validate_player_count(count: usize) -> Result<()> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(RouteGameError::PlayerCount(count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_bounds() {
        assert!(validate_player_count(1).is_err());
        assert!(validate_player_count(2).is_ok());
        assert!(validate_player_count(4).is_ok());
        assert!(matches!(
            validate_player_count(5),
            Err(RouteGameError::PlayerCount(5))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(
            config.start_tile,
            Some((TileKind::Crossroad, Position::ORIGIN)),
            "the stock setup opens with a crossroad at the origin"
        );
        assert_eq!(config.score_table.score(7), 1);
    }
}
