use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_SIZE, HUB_X, HUB_Y};

/// A grid coordinate, always inside the 5x5 world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    x: usize,
    y: usize,
}

#[derive(Deserialize)]
struct RawPosition {
    x: i64,
    y: i64,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::from_i64(raw.x, raw.y)
            .ok_or_else(|| format!("position ({}, {}) is outside the world", raw.x, raw.y))
    }
}

impl Position {
    pub fn new(x: i32, y: i32) -> Option<Self> {
        Self::from_i64(i64::from(x), i64::from(y))
    }

    fn from_i64(x: i64, y: i64) -> Option<Self> {
        let in_range = |v: i64| (0..GRID_SIZE as i64).contains(&v);
        if in_range(x) && in_range(y) {
            Some(Self {
                x: x as usize,
                y: y as usize,
            })
        } else {
            None
        }
    }

    pub fn hub() -> Self {
        Self { x: HUB_X, y: HUB_Y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn is_hub(&self) -> bool {
        *self == Self::hub()
    }

    /// The neighbouring cell, or `None` at the edge of the world.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::from_i64(self.x as i64 + dx, self.y as i64 + dy)
    }

    /// All 25 positions, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Position { x, y }))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::hub()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ]
    }

    fn delta(&self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::West => "West",
            Direction::East => "East",
        }
    }
}
