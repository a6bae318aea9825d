//! The battle simulator: one level's grid, party, enemies and wall.
//! Player actions and the turn state machine live in the submodules; this file owns the
//! struct, read-only queries and the unit removal helpers every rule shares.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::content::UnitSpec;
use crate::pacing::{Pacer, Pause};
use crate::state::{BattleState, Grid, Unit};
use crate::types::*;

mod attack;
mod audit;
mod bootstrap;
mod enemy_phase;
mod hash;
mod knockback;
mod movement;
mod status;
mod swarm;
mod turn;
mod view;

#[cfg(test)]
mod test_support;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    /// Index into the party of the hero whose turn it is.
    pub current: usize,
    pub move_points: i32,
    pub awaiting_attack: bool,
    pub transitioning: bool,
    // Set when the acting hero is removed mid-turn; `current` then already names its successor.
    acting_removed: bool,
}

pub struct Battle {
    seed: u64,
    rng: ChaCha8Rng,
    state: BattleState,
    turn: TurnState,
    round: u64,
    outcome: Option<BattleOutcome>,
    log: Vec<LogEvent>,
    pacer: Box<dyn Pacer>,
}

impl Battle {
    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn wall_hp(&self) -> i32 {
        self.state.wall_hp
    }

    pub fn move_points(&self) -> i32 {
        self.turn.move_points
    }

    pub fn awaiting_attack_direction(&self) -> bool {
        self.turn.awaiting_attack
    }

    pub fn is_transitioning(&self) -> bool {
        self.turn.transitioning
    }

    pub fn party(&self) -> impl Iterator<Item = &Unit> {
        self.state.party.iter().filter_map(|id| self.state.units.get(*id))
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Unit> {
        self.state.enemies.iter().filter_map(|id| self.state.units.get(*id))
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.state.units.get(id)
    }

    pub fn acting_hero(&self) -> Option<UnitId> {
        self.state.party.get(self.turn.current).copied()
    }

    pub fn acting_position(&self) -> Option<Pos> {
        self.acting_hero().and_then(|id| self.state.units.get(id)).map(|unit| unit.pos)
    }

    /// Living heroes as specs with their current stats, for the next level or a mode up.
    pub fn surviving_party(&self) -> Vec<UnitSpec> {
        self.party()
            .map(|unit| UnitSpec {
                name: unit.name.clone(),
                symbol: unit.symbol,
                hp: unit.hp,
                attack: unit.attack,
                range: unit.range,
                agility: unit.agility,
                abilities: unit.abilities,
                dialogue: unit.dialogue.clone(),
                wall_segment: unit.wall_segment,
            })
            .collect()
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        if self.turn.transitioning {
            return Err(ActionError::Transitioning);
        }
        if self.outcome.is_some() {
            return Err(ActionError::BattleOver);
        }
        Ok(())
    }

    fn name_of(&self, id: UnitId) -> String {
        self.state.units.get(id).map(|unit| unit.name.clone()).unwrap_or_default()
    }

    fn pause(&mut self, pause: Pause) {
        self.pacer.pause(pause);
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.next_u64() as usize % len
    }

    /// Logs the defeat and frees the unit's cell. The unit stays in its list until removed.
    fn mark_defeated(&mut self, id: UnitId, cause: DefeatCause) {
        let Some(unit) = self.state.units.get(id) else {
            return;
        };
        let (name, pos) = (unit.name.clone(), unit.pos);
        self.log.push(LogEvent::UnitDefeated { name, cause });
        if self.state.grid.cell(pos) == Some(Cell::Unit(id)) {
            self.state.grid.clear(pos);
        }
    }

    /// Drops a unit from its faction list and the unit store, keeping the turn pointer
    /// on the same upcoming hero.
    fn remove_unit(&mut self, id: UnitId) {
        if let Some(index) = self.state.party.iter().position(|hero| *hero == id) {
            self.state.party.remove(index);
            if index < self.turn.current {
                self.turn.current -= 1;
            } else if index == self.turn.current {
                self.turn.acting_removed = true;
            }
        }
        self.state.enemies.retain(|enemy| *enemy != id);
        self.state.units.remove(id);
    }

    fn defeat_now(&mut self, id: UnitId, cause: DefeatCause) {
        self.mark_defeated(id, cause);
        self.remove_unit(id);
    }

    fn relocate(&mut self, id: UnitId, to: Pos) {
        let Some(from) = self.state.units.get(id).map(|unit| unit.pos) else {
            return;
        };
        if self.state.grid.cell(from) == Some(Cell::Unit(id)) {
            self.state.grid.clear(from);
        }
        if let Some(Cell::Object(object)) = self.state.grid.cell(to) {
            self.state.objects.remove(object);
        }
        self.state.grid.set(to, Cell::Unit(id));
        self.state.units[id].pos = to;
    }
}
