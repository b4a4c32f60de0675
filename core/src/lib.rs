#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use display::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod display;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

pub const DEFAULT_ROWS: Coord = 8;
pub const DEFAULT_COLUMNS: Coord = 8;
pub const DEFAULT_MINES: CellCount = 15;

/// Shape of a game: grid dimensions and how many mines it holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    /// Builds a configuration, rejecting empty grids and mine counts outside `1..rows*columns`.
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, columns, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let valid = self.rows > 0
            && self.columns > 0
            && self.mines > 0
            && self.mines < self.total_cells();
        if valid {
            Ok(())
        } else {
            log::warn!(
                "Rejected configuration: {}x{} with {} mines",
                self.rows,
                self.columns,
                self.mines
            );
            Err(GameError::InvalidConfiguration {
                rows: self.rows,
                columns: self.columns,
                mines: self.mines,
            })
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_MINES)
    }
}

/// Where the mines are. Fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineSet {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineSet {
    /// Wraps a mask that the caller guarantees satisfies its configuration.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a fixed layout. Duplicate coordinates collapse into one mine.
    pub fn from_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        // validates the dimensions before anything gets allocated
        GameConfig::new(size.0, size.1, 1)?;

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBoundsCoordinate(coords.0, coords.1));
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let mines = Self::from_mine_mask(mine_mask);
        mines.config().validate()?;
        Ok(mines)
    }

    pub fn config(&self) -> GameConfig {
        let (rows, columns) = self.size();
        GameConfig::new_unchecked(rows, columns, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBoundsCoordinate(coords.0, coords.1))
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.mine_mask.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mine coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }
}

impl Index<Coord2> for MineSet {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn default_config_is_eight_by_eight_with_fifteen_mines() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (8, 8));
        assert_eq!(config.mines, 15);
        assert_eq!(config.safe_cells(), 49);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_zero_mines_on_single_tile() {
        assert_eq!(
            GameConfig::new(1, 1, 0),
            Err(GameError::InvalidConfiguration {
                rows: 1,
                columns: 1,
                mines: 0
            })
        );
    }

    #[test]
    fn config_rejects_full_board_and_empty_grid() {
        assert!(GameConfig::new(3, 3, 9).is_err());
        assert!(GameConfig::new(0, 3, 1).is_err());
        assert!(GameConfig::new(3, 0, 1).is_err());
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }

    #[test]
    fn mine_set_from_coords_collapses_duplicates() {
        let mines = MineSet::from_coords((3, 3), &[(0, 0), (2, 1), (0, 0)]).unwrap();

        assert_eq!(mines.mine_count(), 2);
        assert_eq!(mines.safe_cell_count(), 7);
        assert_eq!(mines.iter().collect::<Vec<_>>(), [(0, 0), (2, 1)]);
        assert!(mines.contains_mine((2, 1)));
        assert!(!mines.contains_mine((1, 2)));
    }

    #[test]
    fn mine_set_from_coords_rejects_outside_coords() {
        assert_eq!(
            MineSet::from_coords((3, 3), &[(3, 0)]),
            Err(GameError::OutOfBoundsCoordinate(3, 0))
        );
    }

    #[test]
    fn adjacent_mine_count_matches_brute_force() {
        let size = (5, 6);
        let coords = [(0, 0), (0, 1), (2, 3), (4, 5), (3, 3), (1, 4)];
        let mines = MineSet::from_coords(size, &coords).unwrap();

        for row in 0..size.0 {
            for col in 0..size.1 {
                let expected = coords
                    .iter()
                    .filter(|&&(m_row, m_col)| {
                        (m_row, m_col) != (row, col)
                            && m_row.abs_diff(row) <= 1
                            && m_col.abs_diff(col) <= 1
                    })
                    .count() as u8;
                assert_eq!(mines.adjacent_mine_count((row, col)), expected);
            }
        }
    }
}
