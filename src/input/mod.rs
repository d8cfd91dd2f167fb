//! # Input Module
//!
//! Setup prompts and per-turn key reading.
//!
//! All of this is plumbing around the core: setup values are validated here
//! (and reprompted until they hold), move intents are mapped to directions,
//! and nothing in this module touches game state.

pub mod commands;

pub use commands::*;

use crate::{config, MazeboundResult};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use std::io::{BufRead, Write};

/// Prompts for a maze dimension until a parseable integer of at least
/// [`config::MIN_DIMENSION`] arrives.
///
/// Malformed input is policy, not an error: the loop reprompts forever. An
/// exhausted input stream is the one genuine failure.
pub fn prompt_dimension<R, W>(input: &mut R, output: &mut W, label: &str) -> MazeboundResult<usize>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(
            output,
            "Enter number of {label} you want for the maze (must be at least {}):",
            config::MIN_DIMENSION
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed during setup",
            )
            .into());
        }

        match line.trim().parse::<usize>() {
            Ok(value) if value >= config::MIN_DIMENSION => return Ok(value),
            _ => writeln!(output, "Invalid input. Try again")?,
        }
    }
}

/// Prompts for a player name until a non-blank line arrives.
pub fn prompt_player_name<R, W>(input: &mut R, output: &mut W) -> MazeboundResult<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "Enter your player name:")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed during setup",
            )
            .into());
        }

        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        writeln!(output, "Invalid input. Try again")?;
    }
}

/// Validates a dimension supplied on the command line instead of a prompt.
pub fn ensure_dimension(value: usize, label: &str) -> MazeboundResult<usize> {
    if value < config::MIN_DIMENSION {
        return Err(crate::MazeboundError::InvalidArgument(format!(
            "{label} must be at least {}, got {value}",
            config::MIN_DIMENSION
        )));
    }
    Ok(value)
}

/// Blocks until a key is pressed, with the terminal in raw mode only for
/// the duration of the wait.
pub fn read_key() -> MazeboundResult<KeyEvent> {
    terminal::enable_raw_mode()?;
    let result = wait_for_key_press();
    terminal::disable_raw_mode()?;
    result
}

fn wait_for_key_press() -> MazeboundResult<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
