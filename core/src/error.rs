use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {rows}x{columns} grid with {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        columns: Coord,
        mines: CellCount,
    },
    #[error("Coordinates ({0}, {1}) are outside the grid")]
    OutOfBoundsCoordinate(Coord, Coord),
}

pub type Result<T> = core::result::Result<T, GameError>;
