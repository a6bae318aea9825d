//! Enemy phase: each enemy closes in on the nearest hero, strikes whoever is next to it and
//! may speak a line of dialogue.

use super::*;

/// Melee reach, checked in this order.
const MELEE_ORDER: [Dir; 4] = [Dir::UP, Dir::DOWN, Dir::LEFT, Dir::RIGHT];

impl Battle {
    pub(super) fn run_enemy_phase(&mut self) {
        let roster: Vec<UnitId> = self.state.enemies.clone();
        for enemy in roster {
            let Some(agility) = self.state.units.get(enemy).map(|unit| unit.agility) else {
                continue;
            };
            for _ in 0..agility {
                self.step_enemy(enemy);
            }
            self.enemy_melee(enemy);
            self.enemy_dialogue(enemy);
        }
        self.log.push(LogEvent::EnemyPhaseCompleted);
    }

    /// Manhattan-nearest hero; the earlier party member wins ties.
    fn nearest_hero(&self, from: Pos) -> Option<Pos> {
        let mut best: Option<(i32, Pos)> = None;
        for hero in self.party() {
            let distance = (hero.pos.x - from.x).abs() + (hero.pos.y - from.y).abs();
            if best.is_none_or(|(closest, _)| distance < closest) {
                best = Some((distance, hero.pos));
            }
        }
        best.map(|(_, pos)| pos)
    }

    fn step_enemy(&mut self, enemy: UnitId) {
        let from = self.state.units[enemy].pos;
        let Some(target) = self.nearest_hero(from) else {
            return;
        };
        let (dx, dy) = (target.x - from.x, target.y - from.y);
        let (sx, sy) = (dx.signum(), dy.signum());

        let grid = &self.state.grid;
        let primary = if dx.abs() >= dy.abs() { (sx, 0) } else { (0, sy) };
        let fallback = match primary {
            (0, _) if sx != 0 => Some((sx, 0)),
            (_, 0) if sy != 0 => Some((0, sy)),
            _ => None,
        };
        let open = |(x, y): (i32, i32)| {
            let to = Pos { y: from.y + y, x: from.x + x };
            ((x, y) != (0, 0) && grid.is_passable(to)).then_some(to)
        };
        if let Some(to) = open(primary).or_else(|| fallback.and_then(open)) {
            self.relocate(enemy, to);
        }
    }

    fn enemy_melee(&mut self, enemy: UnitId) {
        for dir in MELEE_ORDER {
            let Some(attacker) = self.state.units.get(enemy) else {
                return;
            };
            let (name, damage) = (attacker.name.clone(), attacker.attack);
            let at = attacker.pos.step(dir);
            let Some(hero) = self.state.hero_at(at, None) else {
                continue;
            };
            let target = &mut self.state.units[hero];
            target.hp -= damage;
            self.log.push(LogEvent::EnemyAttacked {
                enemy: name,
                hero: target.name.clone(),
                damage,
                hero_hp: target.hp,
            });
            if target.hp <= 0 {
                self.defeat_now(hero, DefeatCause::EnemyAttack);
            }
        }
    }

    fn enemy_dialogue(&mut self, enemy: UnitId) {
        let Some(unit) = self.state.units.get(enemy) else {
            return;
        };
        if unit.dialogue.is_empty() {
            return;
        }
        let (name, lines) = (unit.name.clone(), unit.dialogue.clone());
        let line = lines[self.random_index(lines.len())].clone();
        self.log.push(LogEvent::EnemySpoke { enemy: name, line });
    }
}
