//! Hero movement and level-object pickup.

use super::*;
use crate::state::{ObjectKind, VITTLE_HEAL};

impl Battle {
    pub fn move_hero(&mut self, dir: Dir) -> Result<TurnOutcome, ActionError> {
        self.ensure_active()?;
        if self.turn.awaiting_attack {
            return Err(ActionError::AttackPending);
        }
        if self.turn.move_points <= 0 {
            return Err(ActionError::NoMovePoints);
        }
        let hero = self.acting_hero().ok_or(ActionError::NoActingHero)?;
        let to = self.state.units[hero].pos.step(dir);
        if !self.state.grid.is_passable(to) {
            return Err(ActionError::Blocked);
        }

        if let Some(Cell::Object(object)) = self.state.grid.cell(to) {
            self.consume_object(hero, object);
        }
        self.relocate(hero, to);

        self.turn.move_points -= 1;
        if self.turn.move_points == 0 {
            return Ok(self.advance_turn());
        }
        Ok(TurnOutcome::Continue)
    }

    fn consume_object(&mut self, hero: UnitId, object: ObjectId) {
        let Some(consumed) = self.state.objects.remove(object) else {
            return;
        };
        self.state.grid.clear(consumed.pos);
        if consumed.kind == ObjectKind::Vittle {
            let unit = &mut self.state.units[hero];
            unit.hp += VITTLE_HEAL;
            self.log.push(LogEvent::VittleConsumed {
                hero: unit.name.clone(),
                heal: VITTLE_HEAL,
                new_hp: unit.hp,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::test_support::*;
    use crate::content::{EnemySpec, LevelObjectSpec};

    #[test]
    fn diagonal_step_updates_grid_and_spends_a_point() {
        let mut battle = Battle::new(1, &[knight()], &empty_level(6, 6));
        let hero = battle.acting_hero().expect("hero");

        let outcome = battle.move_hero(Dir::DOWN_RIGHT).expect("move");

        assert_eq!(outcome, TurnOutcome::Continue);
        assert_eq!(battle.unit(hero).map(|u| u.pos), Some(Pos { y: 1, x: 1 }));
        assert_eq!(battle.grid().cell(Pos { y: 0, x: 0 }), Some(Cell::Empty));
        assert_eq!(battle.grid().cell(Pos { y: 1, x: 1 }), Some(Cell::Unit(hero)));
        assert_eq!(battle.move_points(), 3);
        assert!(battle.log().is_empty());
    }

    #[test]
    fn vittle_heals_ten_and_disappears() {
        let mut hero = knight();
        hero.hp = 5;
        let mut level = empty_level(6, 6);
        level.level_objects.push(LevelObjectSpec::vittle(Pos { y: 1, x: 0 }));
        let mut battle = Battle::new(1, &[hero], &level);
        let id = battle.acting_hero().expect("hero");

        battle.move_hero(Dir::DOWN).expect("move onto vittle");

        assert_eq!(battle.unit(id).map(|u| u.hp), Some(15));
        assert!(battle.state.objects.is_empty());
        assert_eq!(battle.grid().cell(Pos { y: 1, x: 0 }), Some(Cell::Unit(id)));
        assert_eq!(
            battle.log().last().map(ToString::to_string).as_deref(),
            Some("Knight consumes a vittle and heals for 10 HP! (New HP: 15)")
        );
    }

    #[test]
    fn other_objects_are_consumed_without_healing() {
        let mut hero = knight();
        hero.hp = 5;
        let mut level = empty_level(6, 6);
        level.level_objects.push(LevelObjectSpec {
            kind: ObjectKind::Other("rubble".to_string()),
            x: 0,
            y: 1,
            symbol: Some('%'),
        });
        let mut battle = Battle::new(1, &[hero], &level);
        let id = battle.acting_hero().expect("hero");

        battle.move_hero(Dir::DOWN).expect("move onto rubble");

        assert_eq!(battle.unit(id).map(|u| u.hp), Some(5));
        assert!(battle.state.objects.is_empty());
        assert_eq!(battle.grid().cell(Pos { y: 1, x: 0 }), Some(Cell::Unit(id)));
        assert!(battle.log().is_empty());
    }

    #[test]
    fn hero_without_agility_cannot_move() {
        let mut anchor = knight();
        anchor.agility = 0;
        let mut battle = Battle::new(1, &[anchor, archer()], &empty_level(5, 5));
        let id = battle.acting_hero().expect("hero");
        let before = battle.snapshot_hash();

        assert_eq!(battle.move_points(), 0);
        assert_eq!(battle.move_hero(Dir::RIGHT), Err(ActionError::NoMovePoints));
        assert_eq!(battle.unit(id).map(|u| u.pos), Some(Pos { y: 0, x: 0 }));
        assert_eq!(battle.snapshot_hash(), before);
        assert!(battle.log().is_empty());
    }

    #[test]
    fn blocked_moves_change_nothing() {
        let mut level = empty_level(3, 3);
        level.enemies.push(EnemySpec::at(grunt("Rat", 'r', 3), Pos { y: 1, x: 0 }));
        let mut battle = Battle::new(1, &[knight()], &level);

        assert_eq!(battle.move_hero(Dir::UP), Err(ActionError::Blocked));
        assert_eq!(battle.move_hero(Dir::DOWN), Err(ActionError::Blocked));
        battle.move_hero(Dir::DOWN_RIGHT).expect("diagonal is open");
        assert_eq!(battle.move_hero(Dir::DOWN), Err(ActionError::Blocked), "wall row");
        assert_eq!(battle.move_points(), 3);
    }

    #[test]
    fn pending_attack_blocks_movement() {
        let mut battle = Battle::new(1, &[knight()], &empty_level(5, 5));
        battle.begin_attack().expect("enter attack mode");

        assert_eq!(battle.move_hero(Dir::RIGHT), Err(ActionError::AttackPending));
        battle.cancel_attack().expect("leave attack mode");
        assert!(battle.move_hero(Dir::RIGHT).is_ok());
    }

    #[test]
    fn spending_last_point_hands_turn_to_next_hero() {
        let mut scout = knight();
        scout.agility = 1;
        let mut battle = Battle::new(1, &[scout, archer()], &empty_level(6, 6));

        battle.move_hero(Dir::DOWN).expect("move");

        assert_eq!(battle.turn().current, 1);
        assert_eq!(battle.move_points(), 4);
        assert_eq!(battle.log(), &[LogEvent::TurnStarted { hero: "Archer".to_string() }]);
    }
}
