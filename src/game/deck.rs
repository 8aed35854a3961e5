use serde::{Deserialize, Serialize};

use crate::game::tile::TileShape;

/// Shuffled draw pile. Built once per game by `create_deck` and consumed
/// from the front; it only ever shrinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub(crate) tiles: Vec<TileShape>,
}

impl Deck {
    /// Get a reference to the tiles remaining in the deck.
    pub fn tiles(&self) -> &[TileShape] {
        &self.tiles
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Removes and returns the front tile, or `None` when the deck is
    /// exhausted (the terminal game-over condition, not an error).
    pub fn draw(&mut self) -> Option<TileShape> {
        if self.tiles.is_empty() {
            None
        } else {
            Some(self.tiles.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::TileKind;

    fn shape(kind: TileKind) -> TileShape {
        TileShape::from_exits(kind, [true, false, true, false])
    }

    #[test]
    fn test_draw_consumes_from_the_front() {
        let mut deck = Deck {
            tiles: vec![shape(TileKind::Straight), shape(TileKind::STurn)],
        };

        let first = deck.draw().expect("first draw should yield a tile");
        assert_eq!(first.kind(), TileKind::Straight);
        assert_eq!(deck.remaining(), 1, "the deck should shrink by one per draw");

        let second = deck.draw().expect("second draw should yield a tile");
        assert_eq!(second.kind(), TileKind::STurn);
    }

    #[test]
    fn test_draw_on_empty_deck_returns_none() {
        let mut deck = Deck { tiles: vec![] };
        assert!(deck.draw().is_none());
        assert!(deck.is_empty());
    }
}
