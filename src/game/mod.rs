//! # Game Module
//!
//! Core game state management, grid representation, and entity model.
//!
//! This module contains the fundamental building blocks of Mazebound:
//! - Entity model with combat and healing rules
//! - Tile and grid representation
//! - The game engine driving movement and combat

pub mod entities;
pub mod grid;
pub mod state;
pub mod tile;

pub use entities::*;
pub use grid::*;
pub use state::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate in the maze grid.
///
/// Coordinates are `(row, col)` with `(0, 0)` in the top-left corner; rows
/// grow downward and columns grow to the right.
///
/// # Examples
///
/// ```
/// use mazebound::Position;
///
/// let pos = Position::new(3, 7);
/// assert_eq!(pos.row, 3);
/// assert_eq!(pos.col, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the origin position (0, 0), the player start.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Calculates the Manhattan distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::Position;
    ///
    /// let pos1 = Position::new(0, 0);
    /// let pos2 = Position::new(3, 4);
    /// assert_eq!(pos1.manhattan_distance(pos2), 7);
    /// ```
    pub fn manhattan_distance(self, other: Position) -> u32 {
        ((self.row - other.row).abs() + (self.col - other.col).abs()) as u32
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.row - other.row, self.col - other.col)
    }
}

/// The four cardinal move directions a player can take.
///
/// Every move intent that reaches the engine is one of these; anything else
/// the input layer reports as invalid without touching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a `(row, col)` unit delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::{Direction, Position};
    ///
    /// assert_eq!(Direction::North.to_delta(), Position::new(-1, 0));
    /// assert_eq!(Direction::East.to_delta(), Position::new(0, 1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(-1, 0),
            Direction::South => Position::new(1, 0),
            Direction::East => Position::new(0, 1),
            Direction::West => Position::new(0, -1),
        }
    }

    /// Returns all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}
