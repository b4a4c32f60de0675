use std::str::FromStr;
use sweeper_core::{Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  r ROW COL    reveal a tile (also: reveal)
  f ROW COL    flag or unflag a tile (also: flag)
  n            start a new game (also: new)
  h            show this help (also: help)
  q            quit (also: quit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command, type `h` for help")]
    Empty,
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("Expected ROW COL after `{0}`")]
    MissingCoords(String),
    #[error("Invalid number `{0}`")]
    InvalidNumber(String),
    #[error("Too many arguments for `{0}`")]
    TooManyArgs(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match name.as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&name, &mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&name, &mut words)?),
            "n" | "new" => Command::New,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.clone())),
        };

        if words.next().is_some() {
            return Err(CommandError::TooManyArgs(name));
        }
        Ok(command)
    }
}

fn parse_coords<'a>(
    name: &str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words
            .next()
            .ok_or_else(|| CommandError::MissingCoords(name.to_string()))?;
        word.parse()
            .map_err(|_| CommandError::InvalidNumber(word.to_string()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}
