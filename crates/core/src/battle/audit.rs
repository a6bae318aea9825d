//! Structural consistency checks used by the fuzz harnesses.
//! This module exists so randomized drivers share one definition of a well-formed battle.
//! It does not repair anything.

use super::*;

impl Battle {
    /// Verifies that the grid, the unit store and the faction lists agree and that no fallen
    /// unit lingers anywhere. Assumes the party fit on the top row at construction.
    pub fn audit(&self) -> Result<(), String> {
        let state = &self.state;
        if state.units.len() != state.party.len() + state.enemies.len() {
            return Err(format!(
                "unit store holds {} units but the lists name {}",
                state.units.len(),
                state.party.len() + state.enemies.len()
            ));
        }

        for id in state.party.iter().chain(state.enemies.iter()) {
            let unit = state.units.get(*id).ok_or("listed unit missing from the store")?;
            if !unit.is_alive() {
                return Err(format!("{} is listed with {} hp", unit.name, unit.hp));
            }
            if state.grid.cell(unit.pos) != Some(Cell::Unit(*id)) {
                return Err(format!("{} is not on the grid at {:?}", unit.name, unit.pos));
            }
        }

        for y in 0..state.grid.rows as i32 {
            for x in 0..state.grid.cols as i32 {
                let pos = Pos { y, x };
                let stale = match state.grid.cell(pos) {
                    Some(Cell::Unit(id)) => state.units.get(id).is_none_or(|u| u.pos != pos),
                    Some(Cell::Object(id)) => state.objects.get(id).is_none_or(|o| o.pos != pos),
                    _ => false,
                };
                if stale {
                    return Err(format!("stale cell at {pos:?}"));
                }
            }
        }
        for object in state.objects.values() {
            if state.grid.cell(object.pos) != Some(Cell::Object(object.id)) {
                return Err(format!("object {:?} lost its cell", object.pos));
            }
        }

        if self.turn.move_points < 0 {
            return Err(format!("negative move points: {}", self.turn.move_points));
        }
        if self.outcome.is_none() && self.turn.current >= state.party.len() {
            let (current, len) = (self.turn.current, state.party.len());
            return Err(format!("turn pointer {current} past party of {len}"));
        }
        Ok(())
    }
}
