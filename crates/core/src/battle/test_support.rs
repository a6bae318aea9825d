//! Shared fixtures for the `battle` submodule test suites.
//! This module exists to avoid repeating party and level setup across many tests.

use super::*;
use crate::content::LevelConfig;
use crate::state::Abilities;

pub(super) fn knight() -> UnitSpec {
    UnitSpec::new("Knight", 'K', 4, 1, 4, 20)
}

pub(super) fn archer() -> UnitSpec {
    UnitSpec::new("Archer", 'A', 3, 3, 4, 12)
}

pub(super) fn cleric() -> UnitSpec {
    UnitSpec::new("Cleric", 'C', 1, 2, 3, 10)
        .with_abilities(Abilities { heal: 4, ..Abilities::default() })
}

pub(super) fn grunt(name: &str, symbol: char, hp: i32) -> UnitSpec {
    UnitSpec::new(name, symbol, 1, 1, 1, hp)
}

/// A walled battlefield with nothing else on it.
pub(super) fn empty_level(rows: usize, cols: usize) -> LevelConfig {
    LevelConfig {
        level: 0,
        title: String::new(),
        rows,
        cols,
        wall_hp: 50,
        enemies: Vec::new(),
        level_objects: Vec::new(),
    }
}
