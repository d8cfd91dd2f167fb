//! # Grid
//!
//! Fixed-size rectangular tile storage with bounds-checked access, adapted
//! to `(row, col)` addressing. The grid knows nothing about game rules; the
//! generator fills it and the engine mutates it.

use crate::game::{Position, Tile};
use crate::{config, MazeboundError, MazeboundResult};
use serde::{Deserialize, Serialize};

/// A `rows x columns` rectangle of tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// Allocates a grid with every cell [`Tile::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`MazeboundError::InvalidArgument`] when either dimension is
    /// below [`config::MIN_DIMENSION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::Grid;
    ///
    /// let grid = Grid::new(10, 12).unwrap();
    /// assert_eq!(grid.rows(), 10);
    /// assert_eq!(grid.columns(), 12);
    /// assert!(Grid::new(9, 12).is_err());
    /// ```
    pub fn new(rows: usize, columns: usize) -> MazeboundResult<Self> {
        if rows < config::MIN_DIMENSION || columns < config::MIN_DIMENSION {
            return Err(MazeboundError::InvalidArgument(format!(
                "maze dimensions must be at least {}x{}, got {rows}x{columns}",
                config::MIN_DIMENSION,
                config::MIN_DIMENSION
            )));
        }
        Ok(Self {
            rows,
            columns,
            tiles: vec![vec![Tile::Empty; columns]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn total_tiles(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether a position lies inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.rows
            && (position.col as usize) < self.columns
    }

    /// The tile at `position`, or `None` when out of bounds.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !self.contains(position) {
            return None;
        }
        Some(&self.tiles[position.row as usize][position.col as usize])
    }

    /// Replaces the tile at `position` wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`MazeboundError::InvalidArgument`] when `position` is
    /// outside the grid.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> MazeboundResult<()> {
        self.replace_tile(position, tile).map(|_| ())
    }

    /// Replaces the tile at `position`, returning the previous occupant.
    pub fn replace_tile(&mut self, position: Position, tile: Tile) -> MazeboundResult<Tile> {
        if !self.contains(position) {
            return Err(MazeboundError::InvalidArgument(format!(
                "position ({}, {}) is outside the {}x{} grid",
                position.row, position.col, self.rows, self.columns
            )));
        }
        let slot = &mut self.tiles[position.row as usize][position.col as usize];
        Ok(std::mem::replace(slot, tile))
    }

    /// Iterates over every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, tile)| (Position::new(row as i32, col as i32), tile))
        })
    }

    /// Counts cells matching a predicate.
    pub fn count_matching(&self, predicate: impl Fn(&Tile) -> bool) -> usize {
        self.iter().filter(|&(_, tile)| predicate(tile)).count()
    }
}
