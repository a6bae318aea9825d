//! Presentation pacing between battle events.
//! Pauses never affect ordering: state changes happen before the pause and the
//! dependent outcome is only returned after it.

use std::thread;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pause {
    AttackResolved,
    LevelComplete,
}

impl Pause {
    pub fn duration(self) -> Duration {
        match self {
            Self::AttackResolved => Duration::from_millis(300),
            Self::LevelComplete => Duration::from_millis(1500),
        }
    }
}

pub trait Pacer {
    fn pause(&mut self, pause: Pause);
}

/// Returns immediately. Used by tests, replay and the fuzz harness.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _pause: Pause) {}
}

/// Blocks the calling thread for the pause's real-time duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, pause: Pause) {
        thread::sleep(pause.duration());
    }
}
