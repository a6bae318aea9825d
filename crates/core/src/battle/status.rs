//! Periodic burn and slüj damage.

use super::*;

impl Battle {
    /// Ticks every hero, then every enemy. A unit that drops to 0 hp is logged and loses its
    /// cell at once; the faction lists are only filtered once the whole pass is done.
    pub(super) fn tick_status_effects(&mut self) {
        let order: Vec<UnitId> =
            self.state.party.iter().chain(self.state.enemies.iter()).copied().collect();
        let mut fallen = Vec::new();

        for id in order {
            let Some(unit) = self.state.units.get_mut(id) else {
                continue;
            };
            let name = unit.name.clone();

            if let Some(burn) = unit.status.burn.as_mut()
                && burn.duration > 0
            {
                let damage = burn.advance();
                let expired = burn.duration == 0;
                unit.hp -= damage;
                if expired {
                    unit.status.burn = None;
                }
                self.log.push(LogEvent::BurnTick { target: name.clone(), damage });
                if unit.hp <= 0 {
                    self.mark_defeated(id, DefeatCause::Burn);
                    fallen.push(id);
                    continue;
                }
            }

            if let Some(sluj) = unit.status.sluj.as_mut()
                && sluj.duration > 0
            {
                let damage = sluj.advance();
                if damage > 0 {
                    unit.hp -= damage;
                    self.log.push(LogEvent::SlujTick { target: name, damage });
                    if unit.hp <= 0 {
                        self.mark_defeated(id, DefeatCause::Sluj);
                        fallen.push(id);
                    }
                }
            }
        }

        for id in fallen {
            self.remove_unit(id);
        }
    }
}
