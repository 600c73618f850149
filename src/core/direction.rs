//! Input directions.
//!
//! Every direction is described by a forward axis (the coordinate that
//! changes while a tile travels) and a forward sign (whether that coordinate
//! decreases or increases). The movement engine works only with this pair,
//! so one routine serves all four directions.

use serde::{Deserialize, Serialize};

/// The coordinate a tile travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Travel changes the row (UP/DOWN).
    Row,
    /// Travel changes the column (LEFT/RIGHT).
    Col,
}

/// A directional input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in `from_index` order.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Col,
            Direction::Up | Direction::Down => Axis::Row,
        }
    }

    /// -1 when travel decreases the coordinate, +1 when it increases it.
    #[must_use]
    pub const fn sign(self) -> isize {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }

    /// `(row delta, col delta)` of one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self.axis() {
            Axis::Row => (self.sign(), 0),
            Axis::Col => (0, self.sign()),
        }
    }

    /// Whether settling rounds pixel positions up (LEFT/UP) rather than
    /// down (RIGHT/DOWN).
    #[must_use]
    pub const fn rounds_up(self) -> bool {
        self.sign() < 0
    }

    /// Direction for a numeric action id (0=Left, 1=Right, 2=Up, 3=Down).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::Left),
            1 => Some(Direction::Right),
            2 => Some(Direction::Up),
            3 => Some(Direction::Down),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_and_sign() {
        assert_eq!(Direction::Left.axis(), Axis::Col);
        assert_eq!(Direction::Right.axis(), Axis::Col);
        assert_eq!(Direction::Up.axis(), Axis::Row);
        assert_eq!(Direction::Down.axis(), Axis::Row);

        assert_eq!(Direction::Left.sign(), -1);
        assert_eq!(Direction::Up.sign(), -1);
        assert_eq!(Direction::Right.sign(), 1);
        assert_eq!(Direction::Down.sign(), 1);
    }

    #[test]
    fn test_delta() {
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
    }

    #[test]
    fn test_rounding_rule() {
        assert!(Direction::Left.rounds_up());
        assert!(Direction::Up.rounds_up());
        assert!(!Direction::Right.rounds_up());
        assert!(!Direction::Down.rounds_up());
    }

    #[test]
    fn test_from_index() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_index(i as u8), Some(*dir));
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Left.to_string(), "LEFT");
        assert_eq!(Direction::Down.to_string(), "DOWN");
    }
}
