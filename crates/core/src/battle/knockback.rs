//! Yeet knockback: pushes a struck enemy away from the attacker.

use super::*;

impl Battle {
    /// Pushes `target` up to `power` cells along `dir`. Hitting the wall or the battlefield edge
    /// deals `damage`; another unit simply stops the push. The caller checks for defeat.
    pub(super) fn knock_back(&mut self, target: UnitId, dir: Dir, power: i32, damage: i32) {
        let Some(start) = self.state.units.get(target).map(|unit| unit.pos) else {
            return;
        };
        let mut pos = start;
        let mut collision = None;
        for _ in 0..power {
            let next = pos.step(dir);
            match self.state.grid.cell(next) {
                Some(Cell::Empty | Cell::Object(_)) => pos = next,
                Some(Cell::Wall) => {
                    collision = Some(Obstacle::Wall);
                    break;
                }
                None => {
                    collision = Some(Obstacle::Edge);
                    break;
                }
                Some(Cell::Unit(_)) => break,
            }
            self.relocate(target, pos);
        }

        let name = self.name_of(target);
        if pos != start {
            let distance = (pos.x - start.x).abs().max((pos.y - start.y).abs());
            self.log.push(LogEvent::KnockedBack { target: name.clone(), to: pos, distance });
        }
        if let Some(obstacle) = collision {
            let unit = &mut self.state.units[target];
            unit.hp -= damage;
            self.log.push(LogEvent::KnockbackCollision {
                target: name,
                obstacle,
                damage,
                hp_left: unit.hp,
            });
        }
    }
}
