use serde::{Deserialize, Serialize};

/// Attribution color, assigned by join order and cycled for games with more
/// players than colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    pub const CYCLE: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];

    pub fn for_seat(seat: usize) -> PlayerColor {
        PlayerColor::CYCLE[seat % PlayerColor::CYCLE.len()]
    }
}

/// Whether a seat is driven by human input or a move-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: PlayerColor,
    kind: PlayerKind,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor, kind: PlayerKind) -> Player {
        Player {
            name: name.into(),
            color,
            kind,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Scores only ever grow; there is no deduction rule in the game.
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}
