use std::collections::BTreeMap;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::catalog::TileCatalog;
use crate::game::deck::Deck;
use crate::game::tile::{TileKind, TileShape};
use crate::Result;

/// Number of copies of each kind that go into the draw pile. Iteration is
/// ordered (BTreeMap) so deck construction is deterministic before the
/// shuffle is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    counts: BTreeMap<TileKind, usize>,
}

impl DeckComposition {
    pub fn new() -> DeckComposition {
        DeckComposition {
            counts: BTreeMap::new(),
        }
    }

    pub fn with_count(mut self, kind: TileKind, count: usize) -> DeckComposition {
        self.counts.insert(kind, count);
        self
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn kinds(&self) -> impl Iterator<Item = (TileKind, usize)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }
}

impl Default for DeckComposition {
    /// The stock 58-tile composition. Kinds not listed here exist in the
    /// catalog but are not dealt unless configured in.
    fn default() -> DeckComposition {
        DeckComposition::new()
            .with_count(TileKind::Straight, 20)
            .with_count(TileKind::Turn, 15)
            .with_count(TileKind::TJunction, 10)
            .with_count(TileKind::Crossroad, 5)
            .with_count(TileKind::DeadEnd, 8)
    }
}

/// Builds and shuffles the draw pile for one game. Every kind named by the
/// composition must exist in the catalog.
pub fn create_deck(
    catalog: &TileCatalog,
    composition: &DeckComposition,
    rng: &mut StdRng,
) -> Result<Deck> {
    let mut tiles: Vec<TileShape> = Vec::with_capacity(composition.total());
    for (kind, count) in composition.kinds() {
        let shape = catalog.shape(kind)?;
        for _ in 0..count {
            tiles.push(shape);
        }
    }

    tiles.shuffle(rng);
    Ok(Deck { tiles })
}
