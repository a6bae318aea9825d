pub mod battle;
pub mod content;
pub mod journal;
pub mod pacing;
pub mod progression;
pub mod replay;
pub mod state;
pub mod types;

pub use battle::{Battle, TurnState};
pub use content::{EnemySpec, LevelConfig, LevelObjectSpec, UnitSpec};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use pacing::{NoPacing, Pacer, Pause, SleepPacer};
pub use progression::{StatDelta, apply_mode_up, mode_up_buff};
pub use replay::*;
pub use state::{Abilities, BattleState, Grid, Unit};
pub use types::*;
