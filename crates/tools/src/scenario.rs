//! Scenario files: the level, the party and any mode ups granted before the battle starts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use battle_core::content::{hero_by_name, keys, starter_level};
use battle_core::{LevelConfig, UnitSpec, apply_mode_up};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub party: Vec<String>,
    #[serde(default)]
    pub mode_ups: Vec<ModeUp>,
    pub level: LevelConfig,
}

#[derive(Debug, Deserialize)]
pub struct ModeUp {
    pub hero: String,
    pub level: i32,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse scenario TOML: {}", path.display()))
    }

    pub fn starter() -> Self {
        Self {
            party: [keys::KNIGHT, keys::ARCHER, keys::CLERIC].map(str::to_string).to_vec(),
            mode_ups: Vec::new(),
            level: starter_level(),
        }
    }

    /// Looks up every party member in the roster and applies the mode ups in order.
    /// Returns the party together with the mode-up summary lines.
    pub fn build_party(&self) -> Result<(Vec<UnitSpec>, Vec<String>)> {
        let mut party = Vec::with_capacity(self.party.len());
        for name in &self.party {
            let Some(hero) = hero_by_name(name) else {
                bail!("Unknown hero in party: {name}");
            };
            party.push(hero);
        }
        let summaries =
            self.mode_ups.iter().map(|up| apply_mode_up(&up.hero, up.level, &mut party)).collect();
        Ok((party, summaries))
    }
}
