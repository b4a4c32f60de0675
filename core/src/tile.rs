use serde::{Deserialize, Serialize};

/// Canonical per-tile state stored by the session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Hidden,
    Flagged,
    /// Safe tile, with the number of adjacent mines (0-8).
    Revealed(u8),
    /// The mine that ended the game.
    Exploded,
}

impl TileState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}
