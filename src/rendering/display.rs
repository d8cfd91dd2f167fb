//! # Terminal Display
//!
//! Renders the grid as glyph rows and turns engine events into narrative
//! lines. The engine never prints; everything user-visible goes through
//! here.

use crate::game::{Combatant, GameEngine, GameEvent, Grid};
use crate::MazeboundResult;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::io::{self, Write};

/// Renders the full grid: one glyph per cell, newline-terminated rows.
///
/// # Examples
///
/// ```
/// use mazebound::{render_grid, Grid};
///
/// let grid = Grid::new(10, 10).unwrap();
/// let rendered = render_grid(&grid);
/// assert_eq!(rendered.lines().count(), 10);
/// assert!(rendered.lines().all(|line| line == ".........."));
/// ```
pub fn render_grid(grid: &Grid) -> String {
    let mut rendered = String::with_capacity(grid.rows() * (grid.columns() + 1));
    let mut current_row = 0;
    for (position, tile) in grid.iter() {
        if position.row != current_row {
            rendered.push('\n');
            current_row = position.row;
        }
        rendered.push(tile.glyph());
    }
    rendered.push('\n');
    rendered
}

/// The narrative line for an event, or `None` for events that only matter
/// to the grid rendering.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::MoveRejected { .. } => Some("Invalid movement.".to_string()),
        GameEvent::BattleStarted { .. } => {
            Some("You have entered a battle with a monster.".to_string())
        }
        GameEvent::BattleRound {
            damage_to_monster,
            damage_to_player,
            ..
        } => {
            let mut line = format!("You attack the monster for {damage_to_monster} damage.");
            if let Some(reply) = damage_to_player {
                line.push_str(&format!(" The monster attacks you for {reply} damage."));
            }
            Some(line)
        }
        GameEvent::BattleWon => Some("You won the battle against the monster.".to_string()),
        GameEvent::WeaponPickedUp { name, damage } => Some(format!(
            "You just picked up {name}, it has {damage} in damage points."
        )),
        GameEvent::PotionDrunk { name, healed, .. } => Some(format!(
            "You just picked up {name}, it has {healed} in health points."
        )),
        GameEvent::PlayerMoved { .. } => None,
        GameEvent::GameWon => Some("Maze completed. YOU WON".to_string()),
        GameEvent::GameLost { player_name } => {
            Some(format!("{player_name} has died. GAME OVER"))
        }
    }
}

/// Clears the terminal and presents the current game state.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }

    /// Redraws the grid with a one-line status footer.
    pub fn present(&mut self, engine: &GameEngine) -> MazeboundResult<()> {
        let mut stdout = io::stdout();
        stdout.queue(Clear(ClearType::All))?;
        stdout.queue(cursor::MoveTo(0, 0))?;
        stdout.write_all(render_grid(engine.grid()).as_bytes())?;

        if let Some(player) = engine.player() {
            writeln!(
                stdout,
                "{}: {} HP | attack {}",
                player.name(),
                player.health(),
                player.attack_damage()
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Prints one narrative line.
    pub fn announce(&mut self, text: &str) -> MazeboundResult<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }
}
