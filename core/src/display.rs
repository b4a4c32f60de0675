use serde::{Deserialize, Serialize};

use crate::*;

/// What a view should draw for a tile, including the end-of-game mine reveal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayTile {
    #[default]
    Hidden,
    Flagged,
    Open(u8),
    Exploded,
    Mine,
    WrongFlag,
}

impl DisplayTile {
    pub const fn symbol(self) -> char {
        use DisplayTile::*;
        match self {
            Hidden => '#',
            Flagged => 'F',
            Open(0) => '.',
            Open(count) => (b'0' + count) as char,
            Exploded => '*',
            Mine => 'M',
            WrongFlag => 'X',
        }
    }
}

impl Session {
    pub fn display_tile(&self, coords: Coord2) -> DisplayTile {
        let has_mine = self.has_mine_at(coords);

        match (self.tile_at(coords), self.phase()) {
            (TileState::Revealed(count), _) => DisplayTile::Open(count),
            (TileState::Exploded, _) => DisplayTile::Exploded,
            (TileState::Hidden, GamePhase::Lost) if has_mine => DisplayTile::Mine,
            (TileState::Hidden, GamePhase::Won) if has_mine => DisplayTile::Flagged,
            (TileState::Hidden, _) => DisplayTile::Hidden,
            (TileState::Flagged, GamePhase::Lost) if !has_mine => DisplayTile::WrongFlag,
            (TileState::Flagged, _) => DisplayTile::Flagged,
        }
    }

    /// Display states for every tile, row-major.
    pub fn iter_display(&self) -> impl Iterator<Item = (Coord2, DisplayTile)> + '_ {
        self.iter_tiles()
            .map(|(coords, _)| (coords, self.display_tile(coords)))
    }
}
