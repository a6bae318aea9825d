//! Serializable record of the player inputs a battle accepted, in order.

use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::battle::Battle;
use crate::content::{LevelConfig, UnitSpec};
use crate::types::{ActionError, Dir, TurnOutcome};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    /// Hash of the party and level the battle was started with.
    pub content_hash: u64,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Move { dir: Dir },
    BeginAttack,
    CancelAttack,
    Attack { dir: Dir },
}

impl InputPayload {
    pub fn apply(self, battle: &mut Battle) -> Result<TurnOutcome, ActionError> {
        match self {
            Self::Move { dir } => battle.move_hero(dir),
            Self::BeginAttack => battle.begin_attack().map(|()| TurnOutcome::Continue),
            Self::CancelAttack => battle.cancel_attack().map(|()| TurnOutcome::Continue),
            Self::Attack { dir } => battle.attack(dir),
        }
    }
}

impl InputJournal {
    pub fn new(seed: u64, party: &[UnitSpec], level: &LevelConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: "dev".to_string(),
            content_hash: content_hash(party, level),
            seed,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }

    /// Applies `payload` and journals it only when the battle accepted it.
    pub fn record(
        &mut self,
        battle: &mut Battle,
        payload: InputPayload,
    ) -> Result<TurnOutcome, ActionError> {
        let outcome = payload.apply(battle)?;
        self.append(payload);
        Ok(outcome)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

pub fn content_hash(party: &[UnitSpec], level: &LevelConfig) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.write(&serde_json::to_vec(party).unwrap_or_default());
    hasher.write(&serde_json::to_vec(level).unwrap_or_default());
    hasher.finish()
}
