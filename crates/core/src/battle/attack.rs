//! Directional attack resolution for party members.
//! The scan walks outward from the attacker and resolves only the first thing it meets.

use super::*;
use crate::state::{BURN_DURATION, SLUJ_DURATION};

enum AttackTarget {
    Ally(UnitId),
    Enemy(UnitId),
    Wall,
    Nothing,
}

impl Battle {
    pub fn begin_attack(&mut self) -> Result<(), ActionError> {
        self.ensure_active()?;
        self.acting_hero().ok_or(ActionError::NoActingHero)?;
        self.turn.awaiting_attack = true;
        Ok(())
    }

    pub fn cancel_attack(&mut self) -> Result<(), ActionError> {
        self.ensure_active()?;
        self.turn.awaiting_attack = false;
        Ok(())
    }

    /// Attacks with the acting hero.
    pub fn attack(&mut self, dir: Dir) -> Result<TurnOutcome, ActionError> {
        self.ensure_active()?;
        let hero = self.acting_hero().ok_or(ActionError::NoActingHero)?;
        self.attack_with(hero, dir)
    }

    pub fn attack_with(&mut self, attacker: UnitId, dir: Dir) -> Result<TurnOutcome, ActionError> {
        self.ensure_active()?;
        if !self.state.party.contains(&attacker) {
            return Err(ActionError::UnknownUnit);
        }
        let name = self.name_of(attacker);
        self.log.push(LogEvent::AttackDeclared { attacker: name.clone(), dir });

        match self.scan(attacker, dir) {
            AttackTarget::Ally(ally) => self.hit_ally(attacker, ally),
            AttackTarget::Enemy(enemy) => self.hit_enemy(attacker, enemy, dir),
            AttackTarget::Wall => {
                let damage = self.state.units[attacker].attack;
                self.state.wall_hp -= damage;
                self.log.push(LogEvent::WallHit {
                    attacker: name,
                    damage,
                    wall_hp: self.state.wall_hp,
                });
                if self.state.wall_hp <= 0 && !self.turn.transitioning {
                    self.turn.awaiting_attack = false;
                    return Ok(self.collapse_wall());
                }
            }
            AttackTarget::Nothing => self.log.push(LogEvent::Whiff { attacker: name }),
        }

        self.turn.awaiting_attack = false;
        self.pause(Pause::AttackResolved);
        Ok(self.advance_turn())
    }

    fn scan(&self, attacker: UnitId, dir: Dir) -> AttackTarget {
        let unit = &self.state.units[attacker];
        for distance in 1..=unit.range {
            let target = unit.pos.offset(dir, distance);
            if !self.state.grid.in_bounds(target) {
                break;
            }
            if let Some(ally) = self.state.hero_at(target, Some(attacker)) {
                return AttackTarget::Ally(ally);
            }
            if let Some(enemy) = self.state.enemy_at(target) {
                return AttackTarget::Enemy(enemy);
            }
            if self.state.grid.cell(target) == Some(Cell::Wall) {
                return AttackTarget::Wall;
            }
        }
        AttackTarget::Nothing
    }

    fn hit_ally(&mut self, attacker: UnitId, ally: UnitId) {
        let heal = self.state.units[attacker].abilities.heal;
        let healer = self.name_of(attacker);
        let target = &mut self.state.units[ally];
        if heal > 0 {
            target.hp += heal;
            self.log.push(LogEvent::AllyHealed {
                healer,
                ally: target.name.clone(),
                amount: heal,
                new_hp: target.hp,
            });
        } else {
            self.log.push(LogEvent::AllyUnaffected { attacker: healer, ally: target.name.clone() });
        }
    }

    fn hit_enemy(&mut self, attacker: UnitId, enemy: UnitId, dir: Dir) {
        let striker = self.state.units[attacker].clone();
        let target = &mut self.state.units[enemy];
        target.hp -= striker.attack;
        let enemy_name = target.name.clone();
        self.log.push(LogEvent::EnemyHit {
            attacker: striker.name.clone(),
            enemy: enemy_name.clone(),
            damage: striker.attack,
            hp_left: target.hp,
        });

        let abilities = striker.abilities;
        if abilities.burn > 0 {
            target.status.apply_burn(abilities.burn);
            self.log.push(LogEvent::BurnApplied {
                target: enemy_name.clone(),
                damage: abilities.burn,
                duration: BURN_DURATION,
            });
        }
        if abilities.sluj > 0 {
            let level = target.status.apply_sluj(abilities.sluj);
            self.log.push(LogEvent::SlujApplied {
                target: enemy_name,
                level,
                duration: SLUJ_DURATION,
            });
        }
        if abilities.yeet > 0 {
            self.knock_back(enemy, dir, abilities.yeet, striker.attack);
        }

        if self.state.units.get(enemy).is_some_and(|unit| !unit.is_alive()) {
            self.defeat_now(enemy, DefeatCause::Attack);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::test_support::*;
    use crate::content::EnemySpec;
    use crate::state::{Abilities, Burn, Sluj};

    fn duel(party: &[UnitSpec], enemy: UnitSpec, enemy_pos: Pos) -> (Battle, UnitId, UnitId) {
        let mut level = empty_level(8, 8);
        level.enemies.push(EnemySpec::at(enemy, enemy_pos));
        let battle = Battle::new(3, party, &level);
        let hero_id = battle.state.party[0];
        let enemy_id = battle.state.enemies[0];
        (battle, hero_id, enemy_id)
    }

    #[test]
    fn nearest_target_preempts_farther_ones() {
        let mut sniper = archer();
        sniper.range = 5;
        let mut level = empty_level(8, 8);
        level.enemies.push(EnemySpec::at(grunt("Near", 'n', 10), Pos { y: 2, x: 0 }));
        level.enemies.push(EnemySpec::at(grunt("Far", 'f', 10), Pos { y: 4, x: 0 }));
        let mut battle = Battle::new(3, &[sniper], &level);

        battle.attack(Dir::DOWN).expect("attack");

        let hp: Vec<i32> = battle.enemies().map(|enemy| enemy.hp).collect();
        assert_eq!(hp, vec![7, 10]);
    }

    #[test]
    fn ally_in_the_way_absorbs_the_attack() {
        let mut level = empty_level(8, 8);
        level.enemies.push(EnemySpec::at(grunt("Rat", 'r', 10), Pos { y: 0, x: 3 }));
        let mut sniper = archer();
        sniper.range = 5;
        let mut battle = Battle::new(3, &[sniper, knight()], &level);

        battle.attack(Dir::RIGHT).expect("attack");

        assert_eq!(battle.enemies().next().map(|enemy| enemy.hp), Some(10));
        assert_eq!(
            battle.log()[1].to_string(),
            "Archer attacks Knight but nothing happens.",
            "log: {:?}",
            battle.log()
        );
    }

    #[test]
    fn healer_restores_ally_hp() {
        let mut battle = Battle::new(3, &[cleric(), knight()], &empty_level(6, 6));
        let knight_id = battle.state.party[1];
        battle.state.units[knight_id].hp = 5;

        battle.attack(Dir::RIGHT).expect("heal");

        assert_eq!(battle.unit(knight_id).map(|u| u.hp), Some(9));
        assert_eq!(battle.log()[1].to_string(), "Cleric heals Knight for 4 HP! (New HP: 9)");
    }

    #[test]
    fn kill_clears_cell_and_enemy_list() {
        let (mut battle, _, enemy) = duel(&[knight()], grunt("Rat", 'r', 4), Pos { y: 1, x: 0 });

        battle.attack(Dir::DOWN).expect("attack");

        assert!(battle.unit(enemy).is_none());
        assert!(battle.state.enemies.is_empty());
        assert_eq!(battle.grid().cell(Pos { y: 1, x: 0 }), Some(Cell::Empty));
        assert!(battle.log().contains(&LogEvent::UnitDefeated {
            name: "Rat".to_string(),
            cause: DefeatCause::Attack,
        }));
    }

    #[test]
    fn burn_refreshes_to_three_turns() {
        let torch = knight().with_abilities(Abilities { burn: 2, ..Abilities::default() });
        let (mut battle, _, enemy) =
            duel(&[torch, archer()], grunt("Ogre", 'o', 50), Pos { y: 1, x: 0 });

        battle.attack(Dir::DOWN).expect("attack");

        let ogre = battle.unit(enemy).expect("alive");
        // The handover to the archer already ticked once.
        assert_eq!(ogre.status.burn, Some(Burn { damage: 2, duration: 2 }));
        assert_eq!(ogre.hp, 44);
    }

    #[test]
    fn sluj_stacks_onto_an_existing_affliction() {
        let slujier = knight().with_abilities(Abilities { sluj: 2, ..Abilities::default() });
        let (mut battle, hero, enemy) =
            duel(&[slujier, archer()], grunt("Ogre", 'o', 50), Pos { y: 1, x: 0 });
        battle.state.units[enemy].status.sluj = Some(Sluj { level: 1, duration: 1, counter: 3 });

        battle.attack_with(hero, Dir::DOWN).expect("attack");

        assert!(battle.log().iter().any(|event| matches!(
            event,
            LogEvent::SlujApplied { level: 3, duration: SLUJ_DURATION, .. }
        )));
        let sluj = battle.unit(enemy).expect("alive").status.sluj.expect("sluj");
        assert_eq!(sluj.level, 3);
        assert_eq!(sluj.counter, 4);
        assert_eq!(sluj.duration, SLUJ_DURATION - 1);
    }

    #[test]
    fn wall_hit_reduces_integrity_without_collapse() {
        let mut level = empty_level(3, 3);
        level.wall_hp = 10;
        let mut battle = Battle::new(3, &[archer()], &level);

        let outcome = battle.attack(Dir::DOWN).expect("attack");

        assert_eq!(outcome, TurnOutcome::Continue);
        assert_eq!(battle.wall_hp(), 7);
        assert!(!battle.is_transitioning());
    }

    #[test]
    fn empty_ray_is_a_whiff_that_still_ends_the_turn() {
        let mut battle = Battle::new(3, &[knight(), archer()], &empty_level(6, 6));
        battle.begin_attack().expect("attack mode");

        battle.attack(Dir::UP).expect("attack");

        assert_eq!(battle.log()[1].to_string(), "Knight attacks, but there's nothing in range.");
        assert!(!battle.awaiting_attack_direction());
        assert_eq!(battle.turn().current, 1);
    }

    #[test]
    fn only_party_members_can_attack() {
        let (mut battle, _, enemy) = duel(&[knight()], grunt("Rat", 'r', 4), Pos { y: 3, x: 3 });
        assert_eq!(battle.attack_with(enemy, Dir::UP), Err(ActionError::UnknownUnit));
        assert!(battle.log().is_empty());
    }
}
