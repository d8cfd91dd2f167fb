//! # Maze Generation
//!
//! Builds the grid in a fixed sequence: carve a guaranteed path, place the
//! player and exit, derive placement budgets, then scatter walls, monsters,
//! weapons, and potions by rejection sampling.
//!
//! The carved path only ever steps down or right, so it is a monotonic
//! staircase rather than a branching maze, a recorded design
//! simplification. Solvability follows from walls being forbidden on path
//! cells.

use crate::game::{Grid, Monster, Player, Position, Potion, Tile, Weapon};
use crate::generation::{GenerationConfig, Generator, PlacementBudgets};
use crate::{config, MazeboundError, MazeboundResult};
use log::debug;
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Word lists for composed item names.
const WEAPON_ADJECTIVES: [&str; 3] = ["ancient", "blazing", "mystic"];
const WEAPON_KINDS: [&str; 3] = ["sword", "hammer", "spear"];
const POTION_ADJECTIVES: [&str; 3] = ["gold", "dark", "silver"];
const POTION_SUFFIX: &str = "elixir";

/// A fully populated maze, handed to the engine wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMaze {
    /// The populated grid
    pub grid: Grid,
    /// The carved path from start to exit, in visit order
    pub path: Vec<Position>,
    /// The budgets the scatter passes consumed
    pub budgets: PlacementBudgets,
    /// Where the player begins: always (0, 0)
    pub player_start: Position,
    /// Where the exit sits: always (rows-1, columns-1)
    pub exit_position: Position,
}

/// Primary maze generator.
///
/// Runs its operations exactly once, in order; each depends on the one
/// before it. All randomness comes from the caller's seeded RNG.
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator;

impl MazeGenerator {
    /// Creates a new maze generator.
    pub fn new() -> Self {
        Self
    }

    /// Carves the path from (0, 0) to the bottom-right corner.
    ///
    /// Each step flips a fair coin: "vertical" steps down when rows remain,
    /// otherwise the step goes right when columns remain, otherwise down is
    /// forced. Every step strictly decreases the remaining Manhattan
    /// distance, so the walk terminates at the exit; monotonic steps never
    /// revisit a cell, so the path is duplicate-free.
    fn carve_path(&self, rows: usize, columns: usize, rng: &mut StdRng) -> Vec<Position> {
        let exit = Position::new(rows as i32 - 1, columns as i32 - 1);
        let mut current = Position::origin();
        let mut path = vec![current];

        while current != exit {
            let move_vertical = rng.gen_bool(0.5);
            if move_vertical && current.row < exit.row {
                current.row += 1;
            } else if current.col < exit.col {
                current.col += 1;
            } else {
                // At the exit column with rows still to go.
                current.row += 1;
            }
            path.push(current);
        }
        path
    }

    /// Picks a uniformly random grid cell.
    fn random_position(grid: &Grid, rng: &mut StdRng) -> Position {
        Position::new(
            rng.gen_range(0..grid.rows() as i32),
            rng.gen_range(0..grid.columns() as i32),
        )
    }

    /// Rejection-samples `budget` eligible empty cells and fills each with a
    /// freshly made tile.
    ///
    /// The capacity check up front turns a budget that could never be met
    /// into an error instead of an infinite loop. The derived budget
    /// formulas keep it unreachable in practice.
    fn scatter<M>(
        &self,
        grid: &mut Grid,
        budget: usize,
        what: &str,
        rng: &mut StdRng,
        eligible: impl Fn(Position) -> bool,
        mut make_tile: M,
    ) -> MazeboundResult<()>
    where
        M: FnMut(&mut StdRng) -> MazeboundResult<Tile>,
    {
        let available = grid
            .iter()
            .filter(|(position, tile)| tile.is_empty() && eligible(*position))
            .count();
        if budget > available {
            return Err(MazeboundError::GenerationFailed(format!(
                "{what} budget {budget} exceeds {available} eligible cells"
            )));
        }

        let mut placed = 0;
        while placed < budget {
            let position = Self::random_position(grid, rng);
            let open = matches!(grid.tile(position), Some(Tile::Empty)) && eligible(position);
            if open {
                grid.set_tile(position, make_tile(rng)?)?;
                placed += 1;
            }
        }
        Ok(())
    }

    /// Scatters walls on empty cells off the path. Path cells are
    /// permanently protected, which is what guarantees solvability.
    fn place_walls(
        &self,
        grid: &mut Grid,
        path: &HashSet<Position>,
        budget: usize,
        rng: &mut StdRng,
    ) -> MazeboundResult<()> {
        self.scatter(grid, budget, "wall", rng, |position| !path.contains(&position), |_| {
            Ok(Tile::Wall)
        })
    }

    /// Scatters monsters on any empty cell, path included.
    fn place_monsters(&self, grid: &mut Grid, budget: usize, rng: &mut StdRng) -> MazeboundResult<()> {
        self.scatter(grid, budget, "monster", rng, |_| true, |rng| {
            let health = rng.gen_range(config::MONSTER_HEALTH_MIN..=config::MONSTER_HEALTH_MAX);
            let damage = rng.gen_range(config::MONSTER_DAMAGE_MIN..=config::MONSTER_DAMAGE_MAX);
            Ok(Tile::Monster(Monster::new(health, damage)?))
        })
    }

    /// Scatters weapons with composed names and random damage bonuses.
    fn place_weapons(&self, grid: &mut Grid, budget: usize, rng: &mut StdRng) -> MazeboundResult<()> {
        self.scatter(grid, budget, "weapon", rng, |_| true, |rng| {
            let adjective = WEAPON_ADJECTIVES[rng.gen_range(0..WEAPON_ADJECTIVES.len())];
            let kind = WEAPON_KINDS[rng.gen_range(0..WEAPON_KINDS.len())];
            let damage = rng.gen_range(config::WEAPON_DAMAGE_MIN..=config::WEAPON_DAMAGE_MAX);
            Ok(Tile::Weapon(Weapon::new(format!("{adjective} {kind}"), damage)))
        })
    }

    /// Scatters potions with composed names.
    fn place_potions(&self, grid: &mut Grid, budget: usize, rng: &mut StdRng) -> MazeboundResult<()> {
        self.scatter(grid, budget, "potion", rng, |_| true, |rng| {
            let adjective = POTION_ADJECTIVES[rng.gen_range(0..POTION_ADJECTIVES.len())];
            Ok(Tile::Potion(Potion::new(format!("{adjective} {POTION_SUFFIX}"))))
        })
    }
}

impl Generator<GeneratedMaze> for MazeGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> MazeboundResult<GeneratedMaze> {
        let mut grid = Grid::new(config.rows, config.columns)?;

        let path = self.carve_path(config.rows, config.columns, rng);
        let player_start = Position::origin();
        let exit_position = Position::new(config.rows as i32 - 1, config.columns as i32 - 1);

        grid.set_tile(player_start, Tile::Player(Player::new(config.player_name.clone())))?;
        grid.set_tile(exit_position, Tile::Exit)?;

        let budgets = PlacementBudgets::derive(grid.total_tiles(), path.len());
        debug!(
            "carved a {}-tile path through {} cells; budgets: {budgets:?}",
            path.len(),
            grid.total_tiles()
        );

        let path_set: HashSet<Position> = path.iter().copied().collect();
        self.place_walls(&mut grid, &path_set, budgets.walls, rng)?;
        self.place_monsters(&mut grid, budgets.monsters, rng)?;
        self.place_weapons(&mut grid, budgets.weapons, rng)?;
        self.place_potions(&mut grid, budgets.potions, rng)?;

        let maze = GeneratedMaze {
            grid,
            path,
            budgets,
            player_start,
            exit_position,
        };
        self.validate(&maze, config)?;
        Ok(maze)
    }

    fn validate(&self, maze: &GeneratedMaze, config: &GenerationConfig) -> MazeboundResult<()> {
        if maze.grid.rows() != config.rows || maze.grid.columns() != config.columns {
            return Err(MazeboundError::GenerationFailed(
                "grid dimensions do not match the configuration".to_string(),
            ));
        }

        if maze.path.first() != Some(&maze.player_start)
            || maze.path.last() != Some(&maze.exit_position)
        {
            return Err(MazeboundError::GenerationFailed(
                "path does not connect the start to the exit".to_string(),
            ));
        }

        for position in &maze.path {
            if matches!(maze.grid.tile(*position), Some(Tile::Wall)) {
                return Err(MazeboundError::GenerationFailed(format!(
                    "wall placed on path cell ({}, {})",
                    position.row, position.col
                )));
            }
        }

        let non_path = maze.grid.total_tiles() - maze.path.len();
        if maze.budgets.walls > non_path / 2 || maze.budgets.walls > maze.grid.total_tiles() / 2 {
            return Err(MazeboundError::GenerationFailed(
                "wall budget exceeds its caps".to_string(),
            ));
        }

        if maze.grid.count_matching(|tile| matches!(tile, Tile::Player(_))) != 1 {
            return Err(MazeboundError::GenerationFailed(
                "grid must hold exactly one player".to_string(),
            ));
        }
        if maze.grid.count_matching(|tile| matches!(tile, Tile::Exit)) != 1 {
            return Err(MazeboundError::GenerationFailed(
                "grid must hold exactly one exit".to_string(),
            ));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "MazeGenerator"
    }
}
