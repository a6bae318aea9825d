//! Swarm: heroes damage every enemy standing next to them.

use super::*;

/// Neighbour scan order: west, east, north, south, then the diagonals.
const SWARM_ORDER: [Dir; 8] = [
    Dir::LEFT,
    Dir::RIGHT,
    Dir::UP,
    Dir::DOWN,
    Dir::UP_LEFT,
    Dir::DOWN_LEFT,
    Dir::UP_RIGHT,
    Dir::DOWN_RIGHT,
];

impl Battle {
    pub(super) fn apply_swarm_damage(&mut self) {
        let swarmers: Vec<UnitId> = self.state.party.clone();
        for hero in swarmers {
            let Some(unit) = self.state.units.get(hero) else {
                continue;
            };
            let (hero_name, origin, swarm) = (unit.name.clone(), unit.pos, unit.abilities.swarm);
            if swarm <= 0 {
                continue;
            }
            for dir in SWARM_ORDER {
                let at = origin.step(dir);
                let Some(enemy) = self.state.enemy_at(at) else {
                    continue;
                };
                let target = &mut self.state.units[enemy];
                target.hp -= swarm;
                self.log.push(LogEvent::SwarmHit {
                    hero: hero_name.clone(),
                    enemy: target.name.clone(),
                    damage: swarm,
                    at,
                    hp_left: target.hp,
                });
                if target.hp <= 0 {
                    self.defeat_now(enemy, DefeatCause::Swarm);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::test_support::*;
    use crate::content::EnemySpec;
    use crate::state::Abilities;

    fn hive() -> UnitSpec {
        cleric().with_abilities(Abilities { swarm: 2, ..Abilities::default() })
    }

    #[test]
    fn hits_every_adjacent_enemy_in_fixed_order() {
        let mut level = empty_level(6, 6);
        level.enemies.push(EnemySpec::at(grunt("South", 's', 9), Pos { y: 1, x: 1 }));
        level.enemies.push(EnemySpec::at(grunt("East", 'e', 9), Pos { y: 0, x: 2 }));
        level.enemies.push(EnemySpec::at(grunt("Diag", 'd', 9), Pos { y: 1, x: 2 }));
        level.enemies.push(EnemySpec::at(grunt("Far", 'f', 9), Pos { y: 3, x: 3 }));
        let mut battle = Battle::new(4, &[knight(), hive()], &level);

        battle.apply_swarm_damage();

        let hit: Vec<(String, Pos)> = battle
            .log()
            .iter()
            .filter_map(|e| match e {
                LogEvent::SwarmHit { enemy, at, .. } => Some((enemy.clone(), *at)),
                _ => None,
            })
            .collect();
        assert_eq!(
            hit,
            vec![
                ("East".to_string(), Pos { y: 0, x: 2 }),
                ("South".to_string(), Pos { y: 1, x: 1 }),
                ("Diag".to_string(), Pos { y: 1, x: 2 }),
            ]
        );
        let hp: Vec<i32> = battle.enemies().map(|u| u.hp).collect();
        assert_eq!(hp, vec![7, 7, 7, 9]);
    }

    #[test]
    fn stacked_swarmers_can_kill() {
        let mut level = empty_level(6, 6);
        level.enemies.push(EnemySpec::at(grunt("Gnat", 'n', 3), Pos { y: 1, x: 0 }));
        let mut battle = Battle::new(4, &[hive(), hive()], &level);

        battle.apply_swarm_damage();

        assert!(battle.state.enemies.is_empty());
        assert_eq!(battle.grid().cell(Pos { y: 1, x: 0 }), Some(Cell::Empty));
        let last = battle.log().last().map(ToString::to_string);
        assert_eq!(last.as_deref(), Some("Gnat is defeated by swarm damage!"));
        assert_eq!(
            battle.log()[0].to_string(),
            "Cleric's swarm deals 2 damage to Gnat at (0,1)! (HP left: 1)"
        );
    }
}
