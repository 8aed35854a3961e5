use serde::{Deserialize, Serialize};

use crate::game::tile::{TileKind, TileShape};
use crate::{Result, RouteGameError};

/// The full set of tile shapes known to the game, one per kind. Built once
/// before a game starts; placement and tracing only ever read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileCatalog {
    shapes: Vec<TileShape>,
}

/// Canonical exit patterns [North, East, South, West] for every kind.
const STANDARD_PATTERNS: [(TileKind, [bool; 4]); 11] = [
    (TileKind::Straight, [true, false, true, false]),
    (TileKind::Turn, [true, true, false, false]),
    (TileKind::TJunction, [false, true, true, true]),
    (TileKind::Crossroad, [true, true, true, true]),
    (TileKind::DeadEnd, [true, false, false, false]),
    (TileKind::DoubleStraight, [true, false, true, false]),
    (TileKind::STurn, [true, false, true, false]),
    (TileKind::YJunction, [true, true, true, false]),
    (TileKind::DiagonalCross, [true, true, true, true]),
    (TileKind::TripleJunction, [true, true, false, true]),
    (TileKind::Roundabout, [true, true, true, true]),
];

impl TileCatalog {
    /// Catalog with the standard shape set.
    pub fn standard() -> TileCatalog {
        TileCatalog {
            shapes: STANDARD_PATTERNS
                .iter()
                .map(|&(kind, exits)| TileShape::from_exits(kind, exits))
                .collect(),
        }
    }

    /// Builds a catalog from externally supplied patterns, validating each
    /// exit array. A malformed pattern is fatal here, before any game
    /// starts; it can never surface mid-game.
    pub fn from_patterns(patterns: &[(TileKind, Vec<bool>)]) -> Result<TileCatalog> {
        let mut shapes = Vec::with_capacity(patterns.len());
        for (kind, exits) in patterns {
            shapes.push(TileShape::new(*kind, exits)?);
        }
        Ok(TileCatalog { shapes })
    }

    pub fn get(&self, kind: TileKind) -> Option<TileShape> {
        self.shapes.iter().copied().find(|shape| shape.kind() == kind)
    }

    /// Shape lookup that treats an absent kind as an error, for callers that
    /// were configured with a kind the catalog must know.
    pub fn shape(&self, kind: TileKind) -> Result<TileShape> {
        self.get(kind).ok_or(RouteGameError::UnknownKind(kind))
    }

    pub fn shapes(&self) -> &[TileShape] {
        &self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::tile::Rotation;

    #[test]
    fn test_standard_catalog_has_all_kinds() {
        let catalog = TileCatalog::standard();
        assert_eq!(
            catalog.shapes().len(),
            11,
            "the standard catalog should hold one shape per kind"
        );
        for (kind, _) in STANDARD_PATTERNS {
            assert!(
                catalog.get(kind).is_some(),
                "standard catalog should contain {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_crossroad_opens_every_edge() {
        let catalog = TileCatalog::standard();
        let crossroad = catalog.shape(TileKind::Crossroad).unwrap();
        for dir in Direction::ALL {
            assert!(crossroad.has_exit(dir, Rotation::IDENTITY));
        }
    }

    #[test]
    fn test_from_patterns_rejects_bad_length() {
        let patterns = vec![(TileKind::Straight, vec![true, false, true, false, true])];
        let err = TileCatalog::from_patterns(&patterns).unwrap_err();
        assert!(matches!(err, RouteGameError::MalformedShape { len: 5, .. }));
    }

    #[test]
    fn test_unknown_kind_lookup_fails() {
        let patterns = vec![(TileKind::Straight, vec![true, false, true, false])];
        let catalog = TileCatalog::from_patterns(&patterns).unwrap();
        assert!(matches!(
            catalog.shape(TileKind::Roundabout),
            Err(RouteGameError::UnknownKind(TileKind::Roundabout))
        ));
    }
}
