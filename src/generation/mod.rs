//! # Generation Module
//!
//! Procedural maze generation: path carving, placement budgets, and entity
//! scattering.
//!
//! Everything here runs exactly once at setup against an explicitly seeded
//! random number generator, then hands the result to the engine. The same
//! seed and dimensions always produce the same maze.

pub mod maze;

pub use maze::*;

use crate::{config, MazeboundError, MazeboundResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for maze generation.
///
/// Dimensions are validated here so the rest of generation can assume them;
/// the input layer reprompts until they hold, making the check a defensive
/// contract on programmatic callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub columns: usize,
    /// Name for the player placed at the start cell
    pub player_name: String,
    /// Random seed for reproducible generation
    pub seed: u64,
}

impl GenerationConfig {
    /// Creates a generation configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MazeboundError::InvalidArgument`] when either dimension is
    /// below [`config::MIN_DIMENSION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12, 20, "Hero", 42).unwrap();
    /// assert_eq!(config.total_tiles(), 240);
    /// assert!(GenerationConfig::new(9, 20, "Hero", 42).is_err());
    /// ```
    pub fn new(
        rows: usize,
        columns: usize,
        player_name: impl Into<String>,
        seed: u64,
    ) -> MazeboundResult<Self> {
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
            player_name: player_name.into(),
            seed,
        })
    }

    /// Creates the smallest valid configuration, for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            rows: config::MIN_DIMENSION,
            columns: config::MIN_DIMENSION,
            player_name: "Tester".to_string(),
            seed,
        }
    }

    /// Total number of grid cells.
    pub fn total_tiles(&self) -> usize {
        self.rows * self.columns
    }
}

/// How many of each tile kind generation may place.
///
/// Derived once from grid size and path length, never recomputed. The wall
/// budget is capped at half the non-path tiles, which both protects the
/// carved path's surroundings and leaves room for the other entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementBudgets {
    pub walls: usize,
    pub monsters: usize,
    pub weapons: usize,
    pub potions: usize,
}

impl PlacementBudgets {
    /// Derives the budgets from the grid size and the carved path length.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::PlacementBudgets;
    ///
    /// // 10x10 grid, 19-tile path: 81 non-path tiles.
    /// let budgets = PlacementBudgets::derive(100, 19);
    /// assert_eq!(budgets.walls, 40);
    /// assert_eq!(budgets.monsters, 8);
    /// assert_eq!(budgets.weapons, 4);
    /// assert_eq!(budgets.potions, 4);
    /// ```
    pub fn derive(total_tiles: usize, path_tiles: usize) -> Self {
        let non_path_tiles = total_tiles - path_tiles;
        let walls = (total_tiles / 2).min(non_path_tiles / 2);
        let remaining = non_path_tiles - walls;
        Self {
            walls,
            monsters: remaining / 5,
            weapons: remaining / 10,
            potions: remaining / 10,
        }
    }
}

/// Trait for procedural generators.
///
/// Keeps generation testable against a caller-owned RNG and gives every
/// generator a validation pass over its own output.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number
    /// generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> MazeboundResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> MazeboundResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_config_validates_dimensions() {
        assert!(GenerationConfig::new(10, 10, "Hero", 1).is_ok());
        assert!(GenerationConfig::new(9, 10, "Hero", 1).is_err());
        assert!(GenerationConfig::new(10, 9, "Hero", 1).is_err());
    }

    #[test]
    fn test_budget_derivation_small_grid() {
        // 10x10 with the fixed 19-tile staircase path.
        let budgets = PlacementBudgets::derive(100, 19);
        assert_eq!(budgets.walls, 40); // min(100/2, 81/2)
        assert_eq!(budgets.monsters, 8); // (81 - 40) / 5
        assert_eq!(budgets.weapons, 4); // (81 - 40) / 10
        assert_eq!(budgets.potions, 4);
    }

    #[test]
    fn test_budget_wall_cap_invariants() {
        for (total, path) in [(100, 19), (144, 23), (400, 39), (100, 98)] {
            let budgets = PlacementBudgets::derive(total, path);
            let non_path = total - path;
            assert!(budgets.walls <= non_path / 2);
            assert!(budgets.walls <= total / 2);
            // Entity budgets always fit in what the walls left behind.
            let remaining = non_path - budgets.walls;
            assert!(budgets.monsters + budgets.weapons + budgets.potions <= remaining);
        }
    }

    #[test]
    fn test_create_rng_is_deterministic() {
        let config = GenerationConfig::for_testing(12345);
        let mut first = utils::create_rng(&config);
        let mut second = utils::create_rng(&config);
        assert_eq!(first.gen::<u64>(), second.gen::<u64>());
    }
}
