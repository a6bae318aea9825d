//! Turn sequencing. This module exists to keep the hero rotation, the enemy phase hand-off
//! and terminal transitions in one place. It does not resolve any individual action.

use super::*;

impl Battle {
    pub(super) fn advance_turn(&mut self) -> TurnOutcome {
        if self.turn.transitioning {
            return TurnOutcome::Continue;
        }

        self.tick_status_effects();
        self.apply_swarm_damage();
        if self.state.party.is_empty() {
            return self.finish_defeat();
        }

        self.turn.awaiting_attack = false;
        let next =
            if self.turn.acting_removed { self.turn.current } else { self.turn.current + 1 };
        self.turn.acting_removed = false;
        self.turn.current = next;

        if self.turn.current >= self.state.party.len() {
            self.turn.current = 0;
            self.log.push(LogEvent::EnemyPhaseStarted);
            self.run_enemy_phase();
            self.tick_status_effects();
            if self.state.party.is_empty() {
                return self.finish_defeat();
            }
            self.round += 1;
            // Heroes lost during the enemy phase are behind the reset pointer.
            self.turn.acting_removed = false;
        }

        let hero = &self.state.units[self.state.party[self.turn.current]];
        self.turn.move_points = hero.agility;
        self.log.push(LogEvent::TurnStarted { hero: hero.name.clone() });
        TurnOutcome::Continue
    }

    fn finish_defeat(&mut self) -> TurnOutcome {
        self.log.push(LogEvent::PartyDefeated);
        self.outcome = Some(BattleOutcome::GameOver);
        TurnOutcome::GameOver
    }

    pub(super) fn collapse_wall(&mut self) -> TurnOutcome {
        self.turn.transitioning = true;
        self.log.push(LogEvent::WallCollapsed);
        self.pause(Pause::LevelComplete);
        self.outcome = Some(BattleOutcome::LevelComplete);
        TurnOutcome::LevelComplete
    }
}
