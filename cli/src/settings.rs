use anyhow::Context;
use serde::Deserialize;
use std::{fs, path::Path};
use sweeper_core::{CellCount, Coord, GameConfig};

/// Game shape overrides. Unset fields fall through to the next layer.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub rows: Option<Coord>,
    pub columns: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let settings: Settings = toml::from_str(&text)
            .with_context(|| format!("Could not parse config file {}", path.display()))?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Fields set in `other` win.
    pub fn overlay(self, other: Settings) -> Settings {
        Settings {
            rows: other.rows.or(self.rows),
            columns: other.columns.or(self.columns),
            mines: other.mines.or(self.mines),
        }
    }

    /// Fills the gaps with built-in defaults and validates the result.
    pub fn resolve(&self) -> sweeper_core::Result<GameConfig> {
        let defaults = GameConfig::default();
        GameConfig::new(
            self.rows.unwrap_or(defaults.rows),
            self.columns.unwrap_or(defaults.columns),
            self.mines.unwrap_or(defaults.mines),
        )
    }
}
