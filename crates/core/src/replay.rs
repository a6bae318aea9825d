use crate::{
    battle::Battle,
    content::{LevelConfig, UnitSpec},
    journal::{InputJournal, content_hash},
    pacing::{NoPacing, Pacer},
    types::{ActionError, BattleOutcome},
};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    /// The party or level differs from the one the journal was recorded against.
    ContentMismatch { expected: u64, actual: u64 },
    RejectedInput { seq: u64, error: ActionError },
    /// Inputs remain after the battle already reached its outcome.
    TrailingInput { seq: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_outcome: Option<BattleOutcome>,
    pub final_snapshot_hash: u64,
    pub final_round: u64,
}

/// Rebuilds the battle from its starting content and feeds it every journaled input.
pub fn replay_battle(
    party: &[UnitSpec],
    level: &LevelConfig,
    journal: &InputJournal,
    pacer: Box<dyn Pacer>,
) -> Result<Battle, ReplayError> {
    let actual = content_hash(party, level);
    if actual != journal.content_hash {
        return Err(ReplayError::ContentMismatch { expected: journal.content_hash, actual });
    }

    let mut battle = Battle::new(journal.seed, party, level).with_pacer(pacer);
    for record in &journal.inputs {
        if battle.outcome().is_some() {
            return Err(ReplayError::TrailingInput { seq: record.seq });
        }
        record
            .payload
            .apply(&mut battle)
            .map_err(|error| ReplayError::RejectedInput { seq: record.seq, error })?;
    }
    Ok(battle)
}

pub fn replay_to_end(
    party: &[UnitSpec],
    level: &LevelConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let battle = replay_battle(party, level, journal, Box::new(NoPacing))?;
    Ok(ReplayResult {
        final_outcome: battle.outcome(),
        final_snapshot_hash: battle.snapshot_hash(),
        final_round: battle.round(),
    })
}
