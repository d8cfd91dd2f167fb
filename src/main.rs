//! # Mazebound Main Entry Point
//!
//! Parses command line arguments, gathers any missing setup values from the
//! terminal, generates the maze, and runs the turn loop until the player
//! wins, dies, or quits.

use clap::Parser;
use log::info;
use mazebound::{
    describe_event, input, GameEngine, GameStatus, GenerationConfig, Generator, MazeGenerator,
    MazeboundResult, PlayerInput, TerminalDisplay,
};
use std::io;

/// Command line arguments for Mazebound.
#[derive(Parser, Debug)]
#[command(name = "mazebound")]
#[command(about = "A turn-based console maze adventure")]
#[command(version)]
struct Args {
    /// Random seed for maze generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of maze rows (prompted for when omitted)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of maze columns (prompted for when omitted)
    #[arg(long)]
    columns: Option<usize>,

    /// Player name (prompted for when omitted)
    #[arg(long)]
    name: Option<String>,
}

fn main() -> MazeboundResult<()> {
    env_logger::init();
    let args = Args::parse();

    info!("Starting Mazebound v{}", mazebound::VERSION);

    let (rows, columns, name) = gather_setup(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generating a {rows}x{columns} maze with seed {seed}");

    let config = GenerationConfig::new(rows, columns, name, seed)?;
    let mut rng = mazebound::generation::utils::create_rng(&config);
    let maze = MazeGenerator::new().generate(&config, &mut rng)?;

    let mut engine = GameEngine::new(maze);
    let mut display = TerminalDisplay::new();
    run_game(&mut engine, &mut display)
}

/// Fills in setup values the command line didn't provide.
fn gather_setup(args: &Args) -> MazeboundResult<(usize, usize, String)> {
    let stdin = io::stdin();
    let mut input_lines = stdin.lock();
    let mut output = io::stdout();

    let rows = match args.rows {
        Some(rows) => input::ensure_dimension(rows, "rows")?,
        None => input::prompt_dimension(&mut input_lines, &mut output, "rows")?,
    };
    let columns = match args.columns {
        Some(columns) => input::ensure_dimension(columns, "columns")?,
        None => input::prompt_dimension(&mut input_lines, &mut output, "columns")?,
    };
    let name = match &args.name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => input::prompt_player_name(&mut input_lines, &mut output)?,
    };
    Ok((rows, columns, name))
}

/// The turn loop: draw, read a key, apply, narrate.
fn run_game(engine: &mut GameEngine, display: &mut TerminalDisplay) -> MazeboundResult<()> {
    display.present(engine)?;
    display.announce("Move with the arrow keys or WASD; q quits.")?;

    while engine.status() == GameStatus::Playing {
        let key = input::read_key()?;
        match input::key_to_input(key) {
            PlayerInput::Quit => {
                display.announce("You abandon the maze.")?;
                return Ok(());
            }
            PlayerInput::Unknown => {
                display.announce("Invalid movement.")?;
            }
            PlayerInput::Move(direction) => {
                let events = engine.move_player(direction)?;
                display.present(engine)?;
                for event in &events {
                    if let Some(line) = describe_event(event) {
                        display.announce(&line)?;
                    }
                }
            }
        }
    }

    info!("Game over: {:?}", engine.status());
    Ok(())
}
