use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge length of the square board. Positions are valid in `[0, BOARD_SIZE)`
/// per axis.
pub const BOARD_SIZE: i32 = 5;

/// Returns true if `(x, y)` lies on the board.
pub fn is_valid_pos(x: i32, y: i32) -> bool {
    x >= 0 && x < BOARD_SIZE && y >= 0 && y < BOARD_SIZE
}

/// A compass heading. Determines the displacement vector of a MOVE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Parse a heading from its upper-case name. Case-sensitive; anything
    /// other than the four exact names yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NORTH" => Some(Self::North),
            "EAST" => Some(Self::East),
            "SOUTH" => Some(Self::South),
            "WEST" => Some(Self::West),
            _ => None,
        }
    }

    /// One rotation step counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// One rotation step clockwise.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The robot: a position and a heading, passed by value through every
/// transition. Absence of a robot is modeled as `Option::<Robot>::None`
/// ("not placed yet"), which is a valid state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub x: i32,
    pub y: i32,
    pub dir: Direction,
}

impl Robot {
    /// One-cell translation along the current heading. Does not check board
    /// bounds; callers decide what to do with an off-board result.
    pub fn step(self) -> Self {
        let Self { x, y, dir } = self;
        match dir {
            Direction::North => Self { x, y: y + 1, dir },
            Direction::East => Self { x: x + 1, y, dir },
            Direction::South => Self { x, y: y - 1, dir },
            Direction::West => Self { x: x - 1, y, dir },
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}, direction = {}", self.x, self.y, self.dir)
    }
}
