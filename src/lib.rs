//! # route711
//!
//! Engine for a turn-based road-tile placement game: players draw road
//! segments from a shuffled deck and lay them on an unbounded grid, every
//! placement has to agree with its neighbors on the shared edges, and
//! completed routes of length 7 or 11 score points.
//!
//! The crate covers the connectivity core only: rotation algebra,
//! placement legality, route tracing and scoring, the turn state machine
//! and the bot's move selection. Rendering and input live elsewhere and
//! talk to the engine through [`engine::turn_engine::TurnEngine`] and its
//! event bus.

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Tiles, catalog, deck, grid and players
pub mod game;

/// Route tracing and completion detection
pub mod routing;

/// Route length to points
pub mod scoring;

/// Turn state machine, configuration and events
pub mod engine;

/// Bot move selection strategies
pub mod strategy;

/// Logger bootstrap for binaries
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

use crate::game::grid::Position;
use crate::game::tile::TileKind;

/// Main error type for the route711 library
#[derive(Debug, thiserror::Error)]
pub enum RouteGameError {
    #[error("malformed shape for {kind:?}: expected 4 exits, got {len}")]
    MalformedShape { kind: TileKind, len: usize },

    #[error("tile kind {0:?} is not in the catalog")]
    UnknownKind(TileKind),

    #[error("player count {0} is outside the supported range 2..=4")]
    PlayerCount(usize),

    #[error("slot {0:?} is already occupied")]
    SlotOccupied(Position),

    #[error("{0} called in a phase that does not allow it")]
    InvalidPhase(&'static str),

    #[error("the current seat is not a bot")]
    NotBotTurn,

    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RouteGameError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");
