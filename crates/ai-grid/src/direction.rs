use ai_core::GameAction;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Fixed order for determinism: N, S, E, W.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(dx, dy)` with `y` growing downwards.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl GameAction for Direction {
    fn stop() -> Self {
        Direction::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_undoes_the_move() {
        for direction in Direction::CARDINAL {
            let (dx, dy) = direction.vector();
            let (rx, ry) = direction.reverse().vector();
            assert_eq!((dx + rx, dy + ry), (0, 0));
            assert_eq!(direction.reverse().reverse(), direction);
        }
        assert_eq!(Direction::Stop.reverse(), Direction::Stop);
        assert!(Direction::Stop.is_stop());
    }
}
