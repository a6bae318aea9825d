//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.
//! It does not own replay execution or journal policies.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Battle {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.round);
        hasher.write_u64(self.log.len() as u64);
        hasher.write_i32(self.state.wall_hp);
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(BattleOutcome::LevelComplete) => 1,
            Some(BattleOutcome::GameOver) => 2,
        });
        hasher.write_usize(self.turn.current);
        hasher.write_i32(self.turn.move_points);
        hasher.write_u8(u8::from(self.turn.awaiting_attack));
        hasher.write_u8(u8::from(self.turn.transitioning));

        for row in self.render_rows() {
            hasher.write(row.as_bytes());
        }
        for unit in self.party().chain(self.enemies()) {
            hasher.write(unit.name.as_bytes());
            hasher.write_i32(unit.pos.x);
            hasher.write_i32(unit.pos.y);
            hasher.write_i32(unit.hp);
            if let Some(burn) = unit.status.burn {
                hasher.write_i32(burn.damage);
                hasher.write_i32(burn.duration);
            }
            if let Some(sluj) = unit.status.sluj {
                hasher.write_i32(sluj.level);
                hasher.write_i32(sluj.duration);
                hasher.write_i32(sluj.counter);
            }
        }
        hasher.finish()
    }
}
