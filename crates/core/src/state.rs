use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::types::*;

pub const BURN_DURATION: i32 = 3;
pub const SLUJ_DURATION: i32 = 4;
pub const VITTLE_HEAL: i32 = 10;
pub const VITTLE_SYMBOL: char = 'ౚ';
pub const UNKNOWN_OBJECT_SYMBOL: char = '?';
pub const WALL_SYMBOL: char = 'ᚙ';
pub const EMPTY_SYMBOL: char = '.';

/// Optional per-unit ability stats. A stat only does something while it is above zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abilities {
    pub heal: i32,
    pub burn: i32,
    pub sluj: i32,
    pub yeet: i32,
    pub swarm: i32,
    pub armor: i32,
    pub chain: i32,
    pub spicy: i32,
    pub spore: i32,
    pub ghis: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Burn {
    pub damage: i32,
    pub duration: i32,
}

impl Burn {
    /// Consumes one turn of the burn and returns the damage it deals.
    pub fn advance(&mut self) -> i32 {
        self.duration -= 1;
        self.damage
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sluj {
    pub level: i32,
    pub duration: i32,
    pub counter: i32,
}

impl Sluj {
    pub fn new(level: i32) -> Self {
        Self { level, duration: SLUJ_DURATION, counter: 0 }
    }

    /// Bumps the counter, spends one turn of duration, and returns the damage dealt (may be 0).
    pub fn advance(&mut self) -> i32 {
        self.counter += 1;
        let damage = match self.level {
            1 if self.counter % 4 == 0 => 1,
            2 if self.counter % 3 == 0 => 1,
            3 if self.counter % 2 == 0 => 1,
            4 => 1,
            5 => 2,
            level if level >= 6 => 3,
            _ => 0,
        };
        self.duration -= 1;
        damage
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusEffects {
    pub burn: Option<Burn>,
    // Kept after expiry so a later application stacks onto the old level.
    pub sluj: Option<Sluj>,
}

impl StatusEffects {
    pub fn apply_burn(&mut self, damage: i32) {
        self.burn = Some(Burn { damage, duration: BURN_DURATION });
    }

    /// Starts a fresh affliction or stacks onto the existing one. Returns the resulting level.
    pub fn apply_sluj(&mut self, level: i32) -> i32 {
        match &mut self.sluj {
            Some(existing) => {
                existing.level += level;
                existing.duration = SLUJ_DURATION;
                existing.level
            }
            None => {
                self.sluj = Some(Sluj::new(level));
                level
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub symbol: char,
    pub pos: Pos,
    pub hp: i32,
    pub attack: i32,
    pub range: i32,
    pub agility: i32,
    pub abilities: Abilities,
    pub status: StatusEffects,
    pub dialogue: Vec<String>,
    pub wall_segment: bool,
}

impl Unit {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Vittle,
    Other(String),
}

impl ObjectKind {
    pub fn default_symbol(&self) -> char {
        match self {
            Self::Vittle => VITTLE_SYMBOL,
            Self::Other(_) => UNKNOWN_OBJECT_SYMBOL,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LevelObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub pos: Pos,
    pub symbol: char,
}

/// Battlefield occupancy. The bottom row is the wall.
#[derive(Clone, Debug)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![Cell::Empty; rows * cols] }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    pub fn wall_row(&self) -> i32 {
        self.rows as i32 - 1
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.index(pos)])
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, Cell::Empty);
    }

    /// Empty cells and level objects can be entered; units and wall cannot.
    pub fn is_passable(&self, pos: Pos) -> bool {
        matches!(self.cell(pos), Some(Cell::Empty | Cell::Object(_)))
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.cols + (pos.x as usize)
    }
}

#[derive(Clone, Debug)]
pub struct BattleState {
    pub grid: Grid,
    pub units: SlotMap<UnitId, Unit>,
    pub party: Vec<UnitId>,
    pub enemies: Vec<UnitId>,
    pub objects: SlotMap<ObjectId, LevelObject>,
    pub wall_hp: i32,
}

impl BattleState {
    pub fn hero_at(&self, pos: Pos, except: Option<UnitId>) -> Option<UnitId> {
        self.party
            .iter()
            .copied()
            .find(|id| Some(*id) != except && self.units.get(*id).is_some_and(|u| u.pos == pos))
    }

    pub fn enemy_at(&self, pos: Pos) -> Option<UnitId> {
        self.enemies.iter().copied().find(|id| self.units.get(*id).is_some_and(|u| u.pos == pos))
    }
}
