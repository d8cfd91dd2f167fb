//! # Tile Model
//!
//! A grid cell is exactly one of a closed set of variants. The enum gives
//! every tile-handling branch in the engine exhaustive-match coverage; there
//! is no behavior here beyond glyph lookup and read-only payload access.

use crate::game::entities::{Monster, Player, Potion, Weapon};
use serde::{Deserialize, Serialize};

/// Everything a maze cell can hold.
///
/// Occupied variants own their entity; a cell changes variant only through
/// placement or movement operations, which replace the tile wholesale. Walls
/// and the exit never change once set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Open floor the player can step onto
    Empty,
    /// Impassable wall
    Wall,
    /// The maze exit; stepping here wins the game
    Exit,
    /// The cell the player currently occupies
    Player(Player),
    /// A stationary monster guarding this cell
    Monster(Monster),
    /// A weapon waiting to be picked up
    Weapon(Weapon),
    /// A potion waiting to be drunk
    Potion(Potion),
}

impl Tile {
    /// The display glyph for this tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::Tile;
    ///
    /// assert_eq!(Tile::Empty.glyph(), '.');
    /// assert_eq!(Tile::Wall.glyph(), '#');
    /// assert_eq!(Tile::Exit.glyph(), 'E');
    /// ```
    pub fn glyph(&self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Exit => 'E',
            Tile::Player(_) => '@',
            Tile::Monster(_) => 'M',
            Tile::Weapon(_) => 'W',
            Tile::Potion(_) => 'P',
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// The wrapped player, if this is a player-occupied cell.
    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Tile::Player(player) => Some(player),
            _ => None,
        }
    }

    /// The wrapped monster, if this is a monster-occupied cell.
    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Tile::Monster(monster) => Some(monster),
            _ => None,
        }
    }
}
