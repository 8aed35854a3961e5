use serde::{Deserialize, Serialize};

use crate::game::direction::Direction;
use crate::{Result, RouteGameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileKind {
    Straight,
    Turn,
    TJunction,
    Crossroad,
    DeadEnd,
    DoubleStraight,
    STurn,
    YJunction,
    DiagonalCross,
    TripleJunction,
    Roundabout,
}

/// Clockwise quarter-turn count in [0,3]. Constructed modulo 4 so callers
/// can never hold an out-of-range rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rotation(u8);

impl Rotation {
    pub const IDENTITY: Rotation = Rotation(0);

    /// All four rotations in increasing order.
    pub const ALL: [Rotation; 4] = [Rotation(0), Rotation(1), Rotation(2), Rotation(3)];

    pub fn new(quarter_turns: u8) -> Rotation {
        Rotation(quarter_turns % 4)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn clockwise(self) -> Rotation {
        Rotation::new(self.0 + 1)
    }

    pub fn counter_clockwise(self) -> Rotation {
        Rotation::new(self.0 + 3)
    }
}

/// Exit pattern of a tile kind in canonical (unrotated) orientation,
/// indexed by `Direction`. Immutable once built by the catalog; every tile
/// of the same kind shares the same shape value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileShape {
    kind: TileKind,
    exits: [bool; 4],
}

impl TileShape {
    /// Builds a shape from catalog data, rejecting exit arrays that are not
    /// exactly 4 entries long. This is the only load-time validation path;
    /// nothing downstream re-checks shape data.
    pub fn new(kind: TileKind, exits: &[bool]) -> Result<TileShape> {
        if exits.len() != 4 {
            return Err(RouteGameError::MalformedShape {
                kind,
                len: exits.len(),
            });
        }
        Ok(TileShape {
            kind,
            exits: [exits[0], exits[1], exits[2], exits[3]],
        })
    }

    pub(crate) fn from_exits(kind: TileKind, exits: [bool; 4]) -> TileShape {
        TileShape { kind, exits }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// Canonical exits, before any rotation.
    pub fn exits(&self) -> [bool; 4] {
        self.exits
    }

    pub fn rotated_exits(&self, rotation: Rotation) -> [bool; 4] {
        rotate_exits(self.exits, rotation)
    }

    /// Exit query under rotation. Always goes through the rotation
    /// transform; the raw array is never consulted directly.
    pub fn has_exit(&self, dir: Direction, rotation: Rotation) -> bool {
        self.rotated_exits(rotation)[dir.index()]
    }
}

/// Rotates an exit pattern by `rotation` quarter turns clockwise:
/// `rotated[i] = exits[(i - rotation + 4) % 4]`. Pure function, no array
/// mutation, so shapes stay shareable across all tiles of a kind.
pub fn rotate_exits(exits: [bool; 4], rotation: Rotation) -> [bool; 4] {
    let mut rotated = [false; 4];
    for (i, slot) in rotated.iter_mut().enumerate() {
        let original = (i + 4 - rotation.index()) % 4;
        *slot = exits[original];
    }
    rotated
}
