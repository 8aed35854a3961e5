use serde::{Deserialize, Serialize};

/// Edge direction of a tile. The discriminant order is fixed: rotation
/// arithmetic and route tracing both index exit arrays with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in enumeration order (North, East, South, West).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Direction {
        Direction::ALL[index % 4]
    }

    pub fn opposite(self) -> Direction {
        Direction::from_index(self.index() + 2)
    }

    /// Grid offset of one step in this direction (x grows east, y grows north).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// Quarter turns from `from` to `to`, clockwise, in [0,3].
pub fn relative_turn(from: Direction, to: Direction) -> usize {
    (to.index() + 4 - from.index()) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(
                dir.opposite().opposite(),
                dir,
                "opposite applied twice should return {:?}",
                dir
            );
        }
    }

    #[test]
    fn test_offsets_cancel_out() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_relative_turn() {
        assert_eq!(relative_turn(Direction::North, Direction::North), 0);
        assert_eq!(relative_turn(Direction::North, Direction::East), 1);
        assert_eq!(relative_turn(Direction::North, Direction::South), 2);
        assert_eq!(relative_turn(Direction::East, Direction::North), 3);
    }
}
