//! # Mazebound
//!
//! A single-player, turn-based console maze adventure.
//!
//! ## Architecture Overview
//!
//! Mazebound is built around a small simulation core with thin terminal
//! plumbing on the outside:
//!
//! - **Entity Model**: players, monsters, weapons, and potions with simple
//!   combat and healing rules
//! - **Tile Model**: a closed enum over everything a grid cell can hold
//! - **Maze Generator**: seeded procedural generation that carves a
//!   guaranteed path and scatters walls and entities around it
//! - **Game Engine**: resolves move intents against the grid and emits
//!   events until the player wins or dies
//! - **Input/Rendering**: terminal keystroke mapping and textual grid
//!   rendering, kept strictly outside the core
//!
//! The generator hands the finished grid to the engine wholesale; after that
//! the engine exclusively owns all game state. Every run is transient and
//! in-memory, ending when the game is won or lost.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

// Explicit re-exports for commonly used types
pub use game::{
    // From entities
    Combatant,
    Direction,
    // From state
    GameEngine,
    GameEvent,
    GameStatus,
    // From grid
    Grid,
    Health,
    Inventory,
    Monster,
    Player,
    Position,
    Potion,
    // From tile
    Tile,
    Weapon,
};

pub use generation::{GeneratedMaze, GenerationConfig, Generator, MazeGenerator, PlacementBudgets};

pub use rendering::{describe_event, render_grid, TerminalDisplay};

/// Core error type for the Mazebound game engine.
#[derive(thiserror::Error, Debug)]
pub enum MazeboundError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value passed to a constructor or operation is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Game state is internally inconsistent
    #[error("invalid game state: {0}")]
    InvalidState(String),

    /// Generation failed
    #[error("generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Mazebound codebase.
pub type MazeboundResult<T> = Result<T, MazeboundError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Minimum number of rows and columns for a maze
    pub const MIN_DIMENSION: usize = 10;

    /// Health the player starts the maze with
    pub const PLAYER_STARTING_HEALTH: i32 = 100;

    /// Hard ceiling on any combatant's health
    pub const MAX_HEALTH: i32 = 150;

    /// Base damage an unarmed player deals per strike
    pub const UNARMED_DAMAGE: i32 = 10;

    /// Health restored by drinking a potion
    pub const POTION_HEAL_AMOUNT: i32 = 20;

    /// Inclusive range for a monster's health at spawn
    pub const MONSTER_HEALTH_MIN: i32 = 30;
    pub const MONSTER_HEALTH_MAX: i32 = 50;

    /// Inclusive range for a monster's damage at spawn
    pub const MONSTER_DAMAGE_MIN: i32 = 10;
    pub const MONSTER_DAMAGE_MAX: i32 = 30;

    /// Inclusive range for a weapon's damage bonus
    pub const WEAPON_DAMAGE_MIN: i32 = 10;
    pub const WEAPON_DAMAGE_MAX: i32 = 30;
}
