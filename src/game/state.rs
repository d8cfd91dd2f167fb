//! # Game Engine
//!
//! Resolves move intents against the grid and drives the turn state machine.
//!
//! The engine owns all game state after setup: the generator hands the grid
//! over wholesale and never touches it again. Every mutating operation
//! returns the events it produced so a presentation layer can render them;
//! the engine itself performs no I/O.

use crate::game::entities::{strike, Combatant, Monster, Player};
use crate::game::{Direction, Grid, Position, Tile};
use crate::generation::GeneratedMaze;
use crate::{MazeboundError, MazeboundResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Turn state machine. `Playing` is initial; the other two are terminal:
/// no transition leaves them and no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// State-change notifications emitted by the engine.
///
/// Each branch of move resolution emits a distinct variant; the presentation
/// layer decides what each one looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The attempted destination was out of bounds or a wall; nothing moved.
    MoveRejected { attempted: Position },
    /// The player stepped onto a monster and battle began.
    BattleStarted {
        monster_health: i32,
        monster_damage: i32,
    },
    /// One full exchange: the player's strike, then the monster's reply if
    /// it survived.
    BattleRound {
        damage_to_monster: i32,
        monster_health: i32,
        damage_to_player: Option<i32>,
        player_health: i32,
    },
    /// The monster died and its tile was claimed.
    BattleWon,
    /// A weapon transferred into the player's inventory.
    WeaponPickedUp { name: String, damage: i32 },
    /// A potion was consumed on pickup.
    PotionDrunk {
        name: String,
        healed: i32,
        player_health: i32,
    },
    /// The player occupies a new cell.
    PlayerMoved { from: Position, to: Position },
    /// The exit was reached.
    GameWon,
    /// The player died in battle.
    GameLost { player_name: String },
}

/// How a battle ended. Exactly one side dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    MonsterSlain,
    PlayerDied,
}

/// Resolves a battle to completion as a pure function of the two fighters.
///
/// Rounds alternate: the player strikes first; the monster replies only if
/// it survived. The loop is bounded: every round lowers the monster's
/// health by at least the unarmed minimum. Pacing between rounds is the
/// presentation layer's concern; callers get the full round sequence at
/// once.
pub fn resolve_battle(player: &mut Player, monster: &mut Monster) -> (BattleOutcome, Vec<GameEvent>) {
    let mut rounds = Vec::new();
    loop {
        let damage_to_monster = strike(&*player, monster);
        let damage_to_player = if monster.is_dead() {
            None
        } else {
            Some(strike(&*monster, player))
        };
        rounds.push(GameEvent::BattleRound {
            damage_to_monster,
            monster_health: monster.health(),
            damage_to_player,
            player_health: player.health(),
        });
        if monster.is_dead() {
            return (BattleOutcome::MonsterSlain, rounds);
        }
        if player.is_dead() {
            return (BattleOutcome::PlayerDied, rounds);
        }
    }
}

/// The movement and combat engine.
///
/// Exclusively owns the grid and everything in it. Single-threaded and
/// synchronous: one move intent in, a batch of events out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    grid: Grid,
    player_position: Position,
    exit_position: Position,
    status: GameStatus,
}

impl GameEngine {
    /// Takes ownership of a freshly generated maze and starts play.
    pub fn new(maze: GeneratedMaze) -> Self {
        Self {
            grid: maze.grid,
            player_position: maze.player_start,
            exit_position: maze.exit_position,
            status: GameStatus::Playing,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player_position(&self) -> Position {
        self.player_position
    }

    pub fn exit_position(&self) -> Position {
        self.exit_position
    }

    /// The player, read out of its current tile.
    pub fn player(&self) -> Option<&Player> {
        self.grid.tile(self.player_position)?.as_player()
    }

    /// Resolves one move intent.
    ///
    /// Out-of-bounds and wall destinations are rejected without mutation.
    /// Stepping onto a monster resolves a full battle before the move
    /// completes (or doesn't). In a terminal state this is a no-op that
    /// returns no events.
    ///
    /// # Errors
    ///
    /// Only on internal grid corruption, which indicates a bug rather than
    /// a bad move; bad moves are events, not errors.
    pub fn move_player(&mut self, direction: Direction) -> MazeboundResult<Vec<GameEvent>> {
        if self.status != GameStatus::Playing {
            return Ok(Vec::new());
        }

        let destination = self.player_position + direction.to_delta();
        match self.grid.tile(destination) {
            None | Some(Tile::Wall) => {
                debug!(
                    "move to ({}, {}) rejected",
                    destination.row, destination.col
                );
                Ok(vec![GameEvent::MoveRejected {
                    attempted: destination,
                }])
            }
            Some(Tile::Monster(_)) => self.fight_for_tile(destination),
            Some(_) => self.step_onto(destination),
        }
    }

    /// Lifts the player out of its tile, leaving the tile empty.
    fn take_player(&mut self) -> MazeboundResult<Player> {
        match self.grid.replace_tile(self.player_position, Tile::Empty)? {
            Tile::Player(player) => Ok(player),
            other => {
                self.grid.set_tile(self.player_position, other)?;
                Err(MazeboundError::InvalidState(format!(
                    "no player at tracked position ({}, {})",
                    self.player_position.row, self.player_position.col
                )))
            }
        }
    }

    /// Battles the monster on `destination` for its tile.
    fn fight_for_tile(&mut self, destination: Position) -> MazeboundResult<Vec<GameEvent>> {
        let mut player = self.take_player()?;
        let mut monster = match self.grid.replace_tile(destination, Tile::Empty)? {
            Tile::Monster(monster) => monster,
            other => {
                self.grid.set_tile(destination, other)?;
                self.grid
                    .set_tile(self.player_position, Tile::Player(player))?;
                return Err(MazeboundError::InvalidState(format!(
                    "no monster at battle destination ({}, {})",
                    destination.row, destination.col
                )));
            }
        };

        let origin = self.player_position;
        let mut events = vec![GameEvent::BattleStarted {
            monster_health: monster.health(),
            monster_damage: monster.damage(),
        }];

        let (outcome, rounds) = resolve_battle(&mut player, &mut monster);
        debug!("battle at ({}, {}) over after {} rounds: {outcome:?}", destination.row, destination.col, rounds.len());
        events.extend(rounds);

        match outcome {
            BattleOutcome::PlayerDied => {
                // The monster keeps its tile; the dead player stays put.
                let player_name = player.name().to_string();
                self.grid.set_tile(destination, Tile::Monster(monster))?;
                self.grid.set_tile(origin, Tile::Player(player))?;
                self.status = GameStatus::Lost;
                events.push(GameEvent::GameLost { player_name });
            }
            BattleOutcome::MonsterSlain => {
                events.push(GameEvent::BattleWon);
                self.grid.set_tile(destination, Tile::Player(player))?;
                self.player_position = destination;
                events.push(GameEvent::PlayerMoved {
                    from: origin,
                    to: destination,
                });
            }
        }
        Ok(events)
    }

    /// Completes a move onto a non-wall, non-monster tile, applying any
    /// pickup or win side effect along the way.
    fn step_onto(&mut self, destination: Position) -> MazeboundResult<Vec<GameEvent>> {
        let origin = self.player_position;
        let destination_tile = self.grid.replace_tile(destination, Tile::Empty)?;
        let mut player = self.take_player()?;
        let mut events = Vec::new();
        let mut reached_exit = false;

        match destination_tile {
            Tile::Empty => {}
            Tile::Weapon(weapon) => {
                events.push(GameEvent::WeaponPickedUp {
                    name: weapon.name().to_string(),
                    damage: weapon.damage(),
                });
                player.inventory_mut().add_weapon(weapon);
            }
            Tile::Potion(potion) => {
                player.heal(potion.heal_amount());
                events.push(GameEvent::PotionDrunk {
                    name: potion.name().to_string(),
                    healed: potion.heal_amount(),
                    player_health: player.health(),
                });
            }
            Tile::Exit => {
                reached_exit = true;
            }
            other => {
                // Walls and monsters were routed before this point, and a
                // second player tile cannot exist.
                self.grid.set_tile(destination, other)?;
                self.grid.set_tile(origin, Tile::Player(player))?;
                return Err(MazeboundError::InvalidState(format!(
                    "unexpected occupant at destination ({}, {})",
                    destination.row, destination.col
                )));
            }
        }

        self.grid.set_tile(destination, Tile::Player(player))?;
        self.player_position = destination;
        events.push(GameEvent::PlayerMoved {
            from: origin,
            to: destination,
        });

        if reached_exit {
            self.status = GameStatus::Won;
            events.push(GameEvent::GameWon);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Potion, Weapon};
    use crate::generation::PlacementBudgets;

    /// A 10x10 engine with the player at (0,0), the exit at (9,9), and the
    /// given extra tiles.
    fn engine_with(tiles: Vec<(Position, Tile)>) -> GameEngine {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_tile(Position::origin(), Tile::Player(Player::new("Tester")))
            .unwrap();
        grid.set_tile(Position::new(9, 9), Tile::Exit).unwrap();
        for (position, tile) in tiles {
            grid.set_tile(position, tile).unwrap();
        }
        GameEngine::new(GeneratedMaze {
            grid,
            path: vec![Position::origin(), Position::new(9, 9)],
            budgets: PlacementBudgets::default(),
            player_start: Position::origin(),
            exit_position: Position::new(9, 9),
        })
    }

    #[test]
    fn test_step_into_empty_cell() {
        let mut engine = engine_with(vec![]);

        let events = engine.move_player(Direction::East).unwrap();

        assert_eq!(engine.player_position(), Position::new(0, 1));
        assert!(engine
            .grid()
            .tile(Position::origin())
            .unwrap()
            .is_empty());
        assert_eq!(
            events,
            vec![GameEvent::PlayerMoved {
                from: Position::origin(),
                to: Position::new(0, 1),
            }]
        );
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut engine = engine_with(vec![]);
        let before = engine.grid().clone();

        let events = engine.move_player(Direction::North).unwrap();

        assert_eq!(
            events,
            vec![GameEvent::MoveRejected {
                attempted: Position::new(-1, 0),
            }]
        );
        assert_eq!(engine.player_position(), Position::origin());
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn test_wall_is_rejected_without_mutation() {
        let mut engine = engine_with(vec![(Position::new(0, 1), Tile::Wall)]);
        let before = engine.grid().clone();

        let events = engine.move_player(Direction::East).unwrap();

        assert_eq!(
            events,
            vec![GameEvent::MoveRejected {
                attempted: Position::new(0, 1),
            }]
        );
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.player_position(), Position::origin());
    }

    #[test]
    fn test_weapon_pickup_consumes_item_and_arms_player() {
        let weapon = Weapon::new("ancient sword", 25);
        let mut engine = engine_with(vec![(Position::new(0, 1), Tile::Weapon(weapon))]);

        let events = engine.move_player(Direction::East).unwrap();

        assert_eq!(
            events[0],
            GameEvent::WeaponPickedUp {
                name: "ancient sword".to_string(),
                damage: 25,
            }
        );
        let player = engine.player().unwrap();
        assert_eq!(player.inventory().weapons().len(), 1);
        assert_eq!(player.attack_damage(), 35);
        assert_eq!(engine.player_position(), Position::new(0, 1));
    }

    #[test]
    fn test_potion_heals_and_caps_at_ceiling() {
        let mut engine = engine_with(vec![
            (Position::new(0, 1), Tile::Potion(Potion::new("gold elixir"))),
            (Position::new(0, 2), Tile::Potion(Potion::new("dark elixir"))),
            (Position::new(0, 3), Tile::Potion(Potion::new("silver elixir"))),
        ]);

        engine.move_player(Direction::East).unwrap();
        assert_eq!(engine.player().unwrap().health(), 120);

        engine.move_player(Direction::East).unwrap();
        assert_eq!(engine.player().unwrap().health(), 140);

        let events = engine.move_player(Direction::East).unwrap();
        assert_eq!(engine.player().unwrap().health(), 150);
        assert_eq!(
            events[0],
            GameEvent::PotionDrunk {
                name: "silver elixir".to_string(),
                healed: 20,
                player_health: 150,
            }
        );
    }

    #[test]
    fn test_unarmed_player_kills_30hp_monster_in_three_exchanges() {
        let monster = Monster::new(30, 10).unwrap();
        let mut engine = engine_with(vec![(Position::new(0, 1), Tile::Monster(monster))]);

        let events = engine.move_player(Direction::East).unwrap();

        let rounds: Vec<_> = events
            .iter()
            .filter(|event| matches!(event, GameEvent::BattleRound { .. }))
            .collect();
        assert_eq!(rounds.len(), 3);
        assert_eq!(
            rounds[2],
            &GameEvent::BattleRound {
                damage_to_monster: 10,
                monster_health: 0,
                damage_to_player: None,
                player_health: 80,
            }
        );
        assert!(events.contains(&GameEvent::BattleWon));

        // The monster's tile converted to the player's.
        assert_eq!(engine.player_position(), Position::new(0, 1));
        assert!(engine
            .grid()
            .tile(Position::new(0, 1))
            .unwrap()
            .as_player()
            .is_some());
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn test_player_death_leaves_monster_tile_untouched() {
        // 50 HP / 30 damage: the player (10 per strike) needs five strikes,
        // but four replies at 30 kill the player first.
        let monster = Monster::new(50, 30).unwrap();
        let mut engine = engine_with(vec![(Position::new(0, 1), Tile::Monster(monster))]);

        let events = engine.move_player(Direction::East).unwrap();

        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameLost {
                player_name: "Tester".to_string(),
            })
        );

        // Monster still guards its tile with the damage it took.
        let monster_tile = engine.grid().tile(Position::new(0, 1)).unwrap();
        assert_eq!(monster_tile.as_monster().map(Monster::health), Some(10));

        // The dead player stays at the origin.
        assert_eq!(engine.player_position(), Position::origin());
        assert!(engine.player().unwrap().is_dead());

        // Terminal state accepts no further moves.
        let after = engine.move_player(Direction::South).unwrap();
        assert!(after.is_empty());
        assert_eq!(engine.status(), GameStatus::Lost);
    }

    #[test]
    fn test_reaching_exit_wins_and_freezes_the_game() {
        let mut engine = engine_with(vec![]);

        // Walk the south edge, then east to the exit.
        for _ in 0..9 {
            engine.move_player(Direction::South).unwrap();
        }
        for _ in 0..8 {
            engine.move_player(Direction::East).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Playing);

        let events = engine.move_player(Direction::East).unwrap();
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(events.last(), Some(&GameEvent::GameWon));
        assert_eq!(engine.player_position(), Position::new(9, 9));

        let after = engine.move_player(Direction::West).unwrap();
        assert!(after.is_empty());
        assert_eq!(engine.player_position(), Position::new(9, 9));
    }

    #[test]
    fn test_armed_player_one_shots_weak_monster() {
        let mut engine = engine_with(vec![
            (Position::new(0, 1), Tile::Weapon(Weapon::new("blazing hammer", 30))),
            (Position::new(0, 2), Tile::Monster(Monster::new(30, 10).unwrap())),
        ]);

        engine.move_player(Direction::East).unwrap();
        let events = engine.move_player(Direction::East).unwrap();

        // 10 base + 30 weapon kills a 30 HP monster in one strike; the
        // monster never replies.
        let rounds: Vec<_> = events
            .iter()
            .filter(|event| matches!(event, GameEvent::BattleRound { .. }))
            .collect();
        assert_eq!(rounds.len(), 1);
        assert_eq!(engine.player().unwrap().health(), 100);
    }

    #[test]
    fn test_resolve_battle_is_pure_over_its_fighters() {
        let mut player = Player::new("Hero");
        let mut monster = Monster::new(30, 10).unwrap();

        let (outcome, rounds) = resolve_battle(&mut player, &mut monster);

        assert_eq!(outcome, BattleOutcome::MonsterSlain);
        assert_eq!(rounds.len(), 3);
        assert!(monster.is_dead());
        assert_eq!(player.health(), 80);
    }
}
