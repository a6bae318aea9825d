//! Static roster and level schema.
//! Unit specs are plain data; the battle copies them into its own unit store.

use serde::{Deserialize, Serialize};

use crate::state::{Abilities, ObjectKind};
use crate::types::Pos;

pub mod keys {
    pub const KNIGHT: &str = "Knight";
    pub const ARCHER: &str = "Archer";
    pub const WIZARD: &str = "Wizard";
    pub const BERSERKER: &str = "Berserker";
    pub const ROGUE: &str = "Rogue";
    pub const CLERIC: &str = "Cleric";
    pub const JESTER: &str = "Jester";
    pub const MEATWALKER: &str = "Meatwalker";
    pub const SOOTHSCRIBE: &str = "Soothscribe";
    pub const NONSEQUITEUR: &str = "Nonsequiteur";
    pub const GRIOT: &str = "Griot";
    pub const TORCHER: &str = "Torcher";
    pub const SLUJIER: &str = "Slüjier";
    pub const SHRINK: &str = "Shrink";
    pub const SYCOPHANT: &str = "Sycophant";
    pub const YEETRIAN: &str = "Yeetrian";
    pub const MELLITRON: &str = "Mellitron";
    pub const GASTRONOMER: &str = "Gastronomer";
    pub const PALISADE: &str = "Palisade";
    pub const MYCELIAN: &str = "Mycelian";
    pub const PAEG: &str = "Pæg";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub name: String,
    pub symbol: char,
    pub hp: i32,
    pub attack: i32,
    pub range: i32,
    pub agility: i32,
    #[serde(flatten)]
    pub abilities: Abilities,
    #[serde(default)]
    pub dialogue: Vec<String>,
    #[serde(default)]
    pub wall_segment: bool,
}

impl UnitSpec {
    pub fn new(name: &str, symbol: char, attack: i32, range: i32, agility: i32, hp: i32) -> Self {
        Self {
            name: name.to_string(),
            symbol,
            hp,
            attack,
            range,
            agility,
            abilities: Abilities::default(),
            dialogue: Vec::new(),
            wall_segment: false,
        }
    }

    pub fn with_abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_dialogue(mut self, lines: &[&str]) -> Self {
        self.dialogue = lines.iter().map(|line| line.to_string()).collect();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySpec {
    #[serde(flatten)]
    pub unit: UnitSpec,
    pub x: i32,
    pub y: i32,
}

impl EnemySpec {
    pub fn at(unit: UnitSpec, pos: Pos) -> Self {
        Self { unit, x: pos.x, y: pos.y }
    }

    pub fn pos(&self) -> Pos {
        Pos { y: self.y, x: self.x }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelObjectSpec {
    pub kind: ObjectKind,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub symbol: Option<char>,
}

impl LevelObjectSpec {
    pub fn vittle(pos: Pos) -> Self {
        Self { kind: ObjectKind::Vittle, x: pos.x, y: pos.y, symbol: None }
    }

    pub fn pos(&self) -> Pos {
        Pos { y: self.y, x: self.x }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub wall_hp: i32,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
    #[serde(default)]
    pub level_objects: Vec<LevelObjectSpec>,
}

fn hero(name: &str, symbol: char, attack: i32, range: i32, agility: i32, hp: i32) -> UnitSpec {
    UnitSpec::new(name, symbol, attack, range, agility, hp)
}

pub fn hero_roster() -> Vec<UnitSpec> {
    vec![
        hero(keys::KNIGHT, '♞', 4, 1, 4, 18),
        hero(keys::ARCHER, '⚔', 3, 5, 4, 12),
        hero(keys::WIZARD, '✡', 2, 7, 2, 10)
            .with_abilities(Abilities { chain: 5, ..Abilities::default() }),
        hero(keys::BERSERKER, '⚒', 6, 1, 3, 20),
        hero(keys::ROGUE, '☠', 4, 2, 6, 12),
        hero(keys::CLERIC, '✝', 2, 1, 3, 12)
            .with_abilities(Abilities { heal: 4, ..Abilities::default() }),
        hero(keys::JESTER, '♣', 3, 2, 5, 10),
        hero(keys::MEATWALKER, '₻', 7, 1, 2, 22)
            .with_abilities(Abilities { heal: 1, ..Abilities::default() }),
        hero(keys::SOOTHSCRIBE, '☄', 2, 6, 3, 11),
        hero(keys::NONSEQUITEUR, '∄', 3, 3, 3, 10),
        hero(keys::GRIOT, '℣', 1, 1, 1, 10),
        hero(keys::TORCHER, '⚶', 4, 2, 3, 14)
            .with_abilities(Abilities { burn: 1, ..Abilities::default() }),
        hero(keys::SLUJIER, '🜜', 5, 1, 4, 16)
            .with_abilities(Abilities { sluj: 1, ..Abilities::default() }),
        hero(keys::SHRINK, '☊', 2, 1, 3, 12),
        hero(keys::SYCOPHANT, '♟', 0, 0, 2, 15),
        hero(keys::YEETRIAN, '⛓', 3, 2, 4, 14)
            .with_abilities(Abilities { yeet: 1, ..Abilities::default() }),
        hero(keys::MELLITRON, '丰', 1, 3, 5, 18)
            .with_abilities(Abilities { swarm: 2, ..Abilities::default() }),
        hero(keys::GASTRONOMER, '𑍐', 2, 1, 3, 15)
            .with_abilities(Abilities { spicy: 1, ..Abilities::default() }),
        hero(keys::PALISADE, 'ᱟ', 3, 1, 2, 20)
            .with_abilities(Abilities { armor: 5, ..Abilities::default() }),
        hero(keys::MYCELIAN, 'ৡ', 2, 1, 3, 15)
            .with_abilities(Abilities { spore: 1, ..Abilities::default() }),
        hero(keys::PAEG, 'ꚤ', 1, 1, 1, 1).with_abilities(Abilities {
            heal: 1,
            burn: 1,
            sluj: 1,
            yeet: 1,
            swarm: 1,
            armor: 1,
            chain: 1,
            spicy: 1,
            spore: 1,
            ghis: 1,
        }),
    ]
}

pub fn hero_by_name(name: &str) -> Option<UnitSpec> {
    hero_roster().into_iter().find(|hero| hero.name == name)
}

/// A small opening level used by the CLI defaults, the fuzz harness and smoke tests.
pub fn starter_level() -> LevelConfig {
    let goblin = |name: &str, symbol: char| {
        UnitSpec::new(name, symbol, 2, 1, 1, 8)
            .with_dialogue(&["Back to the wall!", "You shall not pass.", "Grak!"])
    };
    LevelConfig {
        level: 1,
        title: "The First Wall".to_string(),
        rows: 8,
        cols: 8,
        wall_hp: 20,
        enemies: vec![
            EnemySpec::at(goblin("Goblin", 'g'), Pos { y: 4, x: 2 }),
            EnemySpec::at(goblin("Hobgoblin", 'h'), Pos { y: 5, x: 5 }),
        ],
        level_objects: vec![LevelObjectSpec::vittle(Pos { y: 3, x: 6 })],
    }
}
