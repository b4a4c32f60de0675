use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single tile that changed during one input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileUpdate {
    pub coords: Coord2,
    pub state: TileState,
}

/// Everything a view needs to apply after one input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub tiles: Vec<TileUpdate>,
    pub phase: GamePhase,
    /// Full mine layout, only filled on the input that lost the game.
    pub mines: Vec<Coord2>,
}

impl BoardUpdate {
    fn unchanged(phase: GamePhase) -> Self {
        Self {
            phase,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn reveal_outcome(&self) -> RevealOutcome {
        match self.phase {
            _ if self.is_empty() => RevealOutcome::NoChange,
            GamePhase::Playing => RevealOutcome::Revealed,
            GamePhase::Won => RevealOutcome::Won,
            GamePhase::Lost => RevealOutcome::HitMine,
        }
    }

    pub fn mark_outcome(&self) -> MarkOutcome {
        if self.is_empty() {
            MarkOutcome::NoChange
        } else {
            MarkOutcome::Changed
        }
    }
}

/// One game: the mine layout, what the player has uncovered, and the phase.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    mines: MineSet,
    board: Array2<TileState>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    phase: GamePhase,
    triggered_mine: Option<Coord2>,
}

impl Session {
    pub fn new(mines: MineSet) -> Self {
        let size = mines.size();
        Self {
            mines,
            board: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            phase: GamePhase::Playing,
            triggered_mine: None,
        }
    }

    /// Validates `config` and starts a game on a freshly generated board.
    pub fn new_game(config: GameConfig, seed: u64) -> Result<Self> {
        let mines = RandomMinefieldGenerator::new(seed).generate(config)?;
        log::debug!(
            "New game: {}x{} with {} mines",
            config.rows,
            config.columns,
            config.mines
        );
        Ok(Self::new(mines))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.mines.config()
    }

    pub fn size(&self) -> Coord2 {
        self.mines.size()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mines.mine_count()) - i64::from(self.flagged_count)
    }

    pub fn tile_at(&self, coords: Coord2) -> TileState {
        self.board[coords.to_nd_index()]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mines.contains_mine(coords)
    }

    pub fn mines(&self) -> &MineSet {
        &self.mines
    }

    /// All tiles in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, TileState)> + '_ {
        self.board
            .indexed_iter()
            .map(|((row, col), &state)| ((row as Coord, col as Coord), state))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<BoardUpdate> {
        use TileState::*;

        let coords = self.mines.validate_coords(coords)?;
        log::trace!("toggle flag at {:?}", coords);

        if self.phase.is_finished() {
            return Ok(BoardUpdate::unchanged(self.phase));
        }

        let next = match self.tile_at(coords) {
            Hidden => {
                self.flagged_count += 1;
                Flagged
            }
            Flagged => {
                self.flagged_count -= 1;
                Hidden
            }
            Revealed(_) | Exploded => return Ok(BoardUpdate::unchanged(self.phase)),
        };
        self.board[coords.to_nd_index()] = next;

        Ok(BoardUpdate {
            tiles: alloc::vec![TileUpdate {
                coords,
                state: next
            }],
            phase: self.phase,
            mines: Vec::new(),
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<BoardUpdate> {
        self.reveal_with_order(coords, |_| {})
    }

    /// Reveal where `order` may permute each batch of neighbors before they get queued.
    pub(crate) fn reveal_with_order<F>(&mut self, coords: Coord2, order: F) -> Result<BoardUpdate>
    where
        F: FnMut(&mut Vec<Coord2>),
    {
        let coords = self.mines.validate_coords(coords)?;
        log::trace!("reveal at {:?}", coords);

        if self.phase.is_finished() || !matches!(self.tile_at(coords), TileState::Hidden) {
            return Ok(BoardUpdate::unchanged(self.phase));
        }

        if self.mines.contains_mine(coords) {
            return Ok(self.explode(coords));
        }

        let tiles = self.flood_fill(coords, order);
        if self.revealed_count == self.mines.safe_cell_count() {
            self.end_game(GamePhase::Won);
        }

        Ok(BoardUpdate {
            tiles,
            phase: self.phase,
            mines: Vec::new(),
        })
    }

    /// Opens `start` and every tile connected to it through zero-count tiles.
    fn flood_fill<F>(&mut self, start: Coord2, mut order: F) -> Vec<TileUpdate>
    where
        F: FnMut(&mut Vec<Coord2>),
    {
        let mut tiles = Vec::new();
        let mut neighbors = Vec::with_capacity(8);
        let mut to_visit = VecDeque::new();

        if self.open_tile(start, &mut tiles) == 0 {
            to_visit.push_back(start);
        }

        // tiles are opened before being queued, so each one is queued at most once
        while let Some(visit_coords) = to_visit.pop_front() {
            neighbors.clear();
            // a zero tile has no mine neighbors, so flagged ones get opened too
            neighbors.extend(
                self.mines
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| self.tile_at(pos).is_unrevealed()),
            );
            order(&mut neighbors);

            for &pos in &neighbors {
                if self.open_tile(pos, &mut tiles) == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        tiles
    }

    fn open_tile(&mut self, coords: Coord2, tiles: &mut Vec<TileUpdate>) -> u8 {
        if matches!(self.tile_at(coords), TileState::Flagged) {
            self.flagged_count -= 1;
        }
        let adjacent_mines = self.mines.adjacent_mine_count(coords);
        let state = TileState::Revealed(adjacent_mines);
        self.board[coords.to_nd_index()] = state;
        self.revealed_count += 1;
        tiles.push(TileUpdate { coords, state });
        adjacent_mines
    }

    fn explode(&mut self, coords: Coord2) -> BoardUpdate {
        self.board[coords.to_nd_index()] = TileState::Exploded;
        self.triggered_mine = Some(coords);
        self.end_game(GamePhase::Lost);

        BoardUpdate {
            tiles: alloc::vec![TileUpdate {
                coords,
                state: TileState::Exploded
            }],
            phase: self.phase,
            mines: self.mines.iter().collect(),
        }
    }

    fn end_game(&mut self, phase: GamePhase) {
        if self.phase.is_finished() {
            return;
        }

        log::debug!(
            "Game over: {:?} with {} of {} safe tiles revealed",
            phase,
            self.revealed_count,
            self.mines.safe_cell_count()
        );
        self.phase = phase;
    }
}
