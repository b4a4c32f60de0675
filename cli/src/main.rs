use clap::Parser;
use std::{io, path::PathBuf};
use sweeper_core::{CellCount, Coord};

use crate::game::Game;
use crate::settings::Settings;

mod command;
mod game;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Play Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with `rows`, `columns` and `mines` keys
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows [default: 8]
    #[arg(short, long)]
    rows: Option<Coord>,

    /// Number of columns [default: 8]
    #[arg(short, long)]
    columns: Option<Coord>,

    /// Number of mines [default: 15]
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print one JSON event per line instead of drawing the board
    #[arg(long)]
    json: bool,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let file = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let flags = Settings {
            rows: self.rows,
            columns: self.columns,
            mines: self.mines,
        };
        Ok(file.overlay(flags))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // logs go to stderr so stdout only carries the game
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.settings()?.resolve()?;
    log::debug!("config: {:?}, seed: {:?}", config, args.seed);

    let mut game = Game::new(config, args.seed, args.json)?;
    game.run(io::stdin().lock(), io::stdout().lock())
}
