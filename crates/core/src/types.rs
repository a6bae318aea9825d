use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct UnitId;
    pub struct ObjectId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, dir: Dir) -> Pos {
        self.offset(dir, 1)
    }

    pub fn offset(self, dir: Dir, distance: i32) -> Pos {
        Pos { y: self.y + dir.dy * distance, x: self.x + dir.dx * distance }
    }
}

/// One of the eight grid directions. `dx`/`dy` are each in `-1..=1` and never both zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Dir {
    dx: i32,
    dy: i32,
}

impl Dir {
    pub const UP: Dir = Dir { dx: 0, dy: -1 };
    pub const DOWN: Dir = Dir { dx: 0, dy: 1 };
    pub const LEFT: Dir = Dir { dx: -1, dy: 0 };
    pub const RIGHT: Dir = Dir { dx: 1, dy: 0 };
    pub const UP_LEFT: Dir = Dir { dx: -1, dy: -1 };
    pub const UP_RIGHT: Dir = Dir { dx: 1, dy: -1 };
    pub const DOWN_LEFT: Dir = Dir { dx: -1, dy: 1 };
    pub const DOWN_RIGHT: Dir = Dir { dx: 1, dy: 1 };

    pub const ALL: [Dir; 8] = [
        Dir::UP,
        Dir::DOWN,
        Dir::LEFT,
        Dir::RIGHT,
        Dir::UP_LEFT,
        Dir::UP_RIGHT,
        Dir::DOWN_LEFT,
        Dir::DOWN_RIGHT,
    ];

    pub fn new(dx: i32, dy: i32) -> Option<Dir> {
        let valid = (-1..=1).contains(&dx) && (-1..=1).contains(&dy) && (dx, dy) != (0, 0);
        valid.then_some(Dir { dx, dy })
    }

    pub fn dx(self) -> i32 {
        self.dx
    }

    pub fn dy(self) -> i32 {
        self.dy
    }
}

impl TryFrom<(i32, i32)> for Dir {
    type Error = String;

    fn try_from((dx, dy): (i32, i32)) -> Result<Self, Self::Error> {
        Dir::new(dx, dy).ok_or_else(|| format!("invalid direction ({dx}, {dy})"))
    }
}

impl From<Dir> for (i32, i32) {
    fn from(dir: Dir) -> Self {
        (dir.dx, dir.dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Unit(UnitId),
    Object(ObjectId),
}

/// Result of an action that may have advanced the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    LevelComplete,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    LevelComplete,
    GameOver,
}

/// Reasons a player action was ignored. Rejected actions never change state or log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    AttackPending,
    NoMovePoints,
    Transitioning,
    BattleOver,
    NoActingHero,
    UnknownUnit,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefeatCause {
    Attack,
    EnemyAttack,
    Burn,
    Sluj,
    Swarm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Obstacle {
    Wall,
    Edge,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    VittleConsumed { hero: String, heal: i32, new_hp: i32 },
    AttackDeclared { attacker: String, dir: Dir },
    AllyHealed { healer: String, ally: String, amount: i32, new_hp: i32 },
    AllyUnaffected { attacker: String, ally: String },
    EnemyHit { attacker: String, enemy: String, damage: i32, hp_left: i32 },
    BurnApplied { target: String, damage: i32, duration: i32 },
    SlujApplied { target: String, level: i32, duration: i32 },
    KnockedBack { target: String, to: Pos, distance: i32 },
    KnockbackCollision { target: String, obstacle: Obstacle, damage: i32, hp_left: i32 },
    WallHit { attacker: String, damage: i32, wall_hp: i32 },
    Whiff { attacker: String },
    WallCollapsed,
    SwarmHit { hero: String, enemy: String, damage: i32, at: Pos, hp_left: i32 },
    BurnTick { target: String, damage: i32 },
    SlujTick { target: String, damage: i32 },
    UnitDefeated { name: String, cause: DefeatCause },
    EnemyPhaseStarted,
    EnemyAttacked { enemy: String, hero: String, damage: i32, hero_hp: i32 },
    EnemySpoke { enemy: String, line: String },
    EnemyPhaseCompleted,
    PartyDefeated,
    TurnStarted { hero: String },
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VittleConsumed { hero, heal, new_hp } => {
                write!(f, "{hero} consumes a vittle and heals for {heal} HP! (New HP: {new_hp})")
            }
            Self::AttackDeclared { attacker, dir } => {
                write!(f, "{attacker} attacked in direction ({}, {}).", dir.dx(), dir.dy())
            }
            Self::AllyHealed { healer, ally, amount, new_hp } => {
                write!(f, "{healer} heals {ally} for {amount} HP! (New HP: {new_hp})")
            }
            Self::AllyUnaffected { attacker, ally } => {
                write!(f, "{attacker} attacks {ally} but nothing happens.")
            }
            Self::EnemyHit { attacker, enemy, damage, hp_left } => {
                write!(f, "{attacker} attacks {enemy} for {damage} damage! (HP left: {hp_left})")
            }
            Self::BurnApplied { target, damage, duration } => write!(
                f,
                "{target} is now burning for {damage} damage per turn for {duration} turns!"
            ),
            Self::SlujApplied { target, level, duration } => {
                write!(f, "{target} is afflicted with slüj (level {level}) for {duration} turns!")
            }
            Self::KnockedBack { target, to, distance } => {
                write!(f, "{target} is yeeted {distance} tile(s) to ({}, {})!", to.x, to.y)
            }
            Self::KnockbackCollision { target, obstacle, damage, hp_left } => {
                let into = match obstacle {
                    Obstacle::Wall => "the wall",
                    Obstacle::Edge => "the edge of the battlefield",
                };
                write!(
                    f,
                    "{target} slams into {into} and takes {damage} damage! (HP left: {hp_left})"
                )
            }
            Self::WallHit { attacker, damage, wall_hp } => {
                write!(f, "{attacker} attacks the wall for {damage} damage! (Wall HP: {wall_hp})")
            }
            Self::Whiff { attacker } => {
                write!(f, "{attacker} attacks, but there's nothing in range.")
            }
            Self::WallCollapsed => write!(f, "The Wall Collapses!"),
            Self::SwarmHit { hero, enemy, damage, at, hp_left } => write!(
                f,
                "{hero}'s swarm deals {damage} damage to {enemy} at ({},{})! (HP left: {hp_left})",
                at.x, at.y
            ),
            Self::BurnTick { target, damage } => {
                write!(f, "{target} is burned and takes {damage} damage!")
            }
            Self::SlujTick { target, damage } => write!(f, "{target} takes {damage} slüj damage!"),
            Self::UnitDefeated { name, cause } => match cause {
                DefeatCause::Attack | DefeatCause::EnemyAttack => write!(f, "{name} is defeated!"),
                DefeatCause::Burn => write!(f, "{name} was defeated by burn damage!"),
                DefeatCause::Sluj => write!(f, "{name} is defeated by slüj damage!"),
                DefeatCause::Swarm => write!(f, "{name} is defeated by swarm damage!"),
            },
            Self::EnemyPhaseStarted => write!(f, "Enemy turn begins."),
            Self::EnemyAttacked { enemy, hero, damage, hero_hp } => {
                write!(f, "{enemy} attacks {hero} for {damage} damage! (Hero HP: {hero_hp})")
            }
            Self::EnemySpoke { enemy, line } => write!(f, "{enemy} says: \"{line}\""),
            Self::EnemyPhaseCompleted => write!(f, "Enemy turn completed."),
            Self::PartyDefeated => write!(f, "All heroes have been defeated! Game Over."),
            Self::TurnStarted { hero } => write!(f, "Now it's {hero}'s turn."),
        }
    }
}
