//! Mode up: the end-of-level buff a chosen hero grants the whole surviving party.
//! This module exists to keep the per-hero buff table apart from the battle rules.
//! It does not own level sequencing or hero selection.

use crate::content::{UnitSpec, keys};

/// Additive stat changes. Zero fields are left out of summaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatDelta {
    pub hp: i32,
    pub attack: i32,
    pub range: i32,
    pub agility: i32,
    pub burn: i32,
    pub sluj: i32,
    pub heal: i32,
    pub ghis: i32,
    pub yeet: i32,
    pub swarm: i32,
    pub spicy: i32,
    pub armor: i32,
    pub spore: i32,
    pub chain: i32,
}

impl StatDelta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Non-zero entries in summary order.
    pub fn entries(&self) -> Vec<(&'static str, i32)> {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Range", self.range),
            ("Agility", self.agility),
            ("Burn", self.burn),
            ("Slüj", self.sluj),
            ("Heal", self.heal),
            ("Ghïs", self.ghis),
            ("Yeet", self.yeet),
            ("Swarm", self.swarm),
            ("Spicy", self.spicy),
            ("Armor", self.armor),
            ("Spore", self.spore),
            ("Chain", self.chain),
        ]
        .into_iter()
        .filter(|(_, amount)| *amount != 0)
        .collect()
    }

    /// HP only reaches members still standing; every other stat applies to the whole party.
    fn apply_to(&self, unit: &mut UnitSpec) {
        if unit.hp > 0 {
            unit.hp += self.hp;
        }
        unit.attack += self.attack;
        unit.range += self.range;
        unit.agility += self.agility;
        let abilities = &mut unit.abilities;
        abilities.burn += self.burn;
        abilities.sluj += self.sluj;
        abilities.heal += self.heal;
        abilities.ghis += self.ghis;
        abilities.yeet += self.yeet;
        abilities.swarm += self.swarm;
        abilities.spicy += self.spicy;
        abilities.armor += self.armor;
        abilities.spore += self.spore;
        abilities.chain += self.chain;
    }
}

/// The buff bundle for `hero` after completing `level`. Heroes without their own entry grant ghïs.
pub fn mode_up_buff(hero: &str, level: i32) -> StatDelta {
    let l = level;
    match hero {
        keys::KNIGHT => StatDelta { attack: l, hp: 2 * l, ..StatDelta::default() },
        keys::ARCHER => StatDelta { range: l, ..StatDelta::default() },
        keys::BERSERKER => StatDelta { attack: 3 * l, ..StatDelta::default() },
        keys::ROGUE => StatDelta { agility: 2 * l, ..StatDelta::default() },
        keys::TORCHER => StatDelta { burn: l, ..StatDelta::default() },
        keys::SLUJIER => StatDelta { sluj: l, ..StatDelta::default() },
        keys::CLERIC => StatDelta { heal: 2 * l, ..StatDelta::default() },
        keys::SYCOPHANT => StatDelta {
            attack: l,
            hp: l,
            range: l,
            agility: l,
            burn: l,
            sluj: l,
            heal: l,
            ghis: l,
            ..StatDelta::default()
        },
        keys::YEETRIAN => StatDelta { yeet: l, ..StatDelta::default() },
        keys::MELLITRON => StatDelta { swarm: l, ..StatDelta::default() },
        keys::GASTRONOMER => StatDelta { spicy: l, ..StatDelta::default() },
        keys::PALISADE => StatDelta { armor: l, ..StatDelta::default() },
        keys::MYCELIAN => StatDelta { spore: l, ..StatDelta::default() },
        keys::WIZARD => StatDelta { chain: l, ..StatDelta::default() },
        _ => StatDelta { ghis: l, ..StatDelta::default() },
    }
}

/// Applies `hero`'s buff to `party` and returns the summary line.
/// Fallen members (hp <= 0) keep their hp but still take the other deltas.
pub fn apply_mode_up(hero: &str, level: i32, party: &mut [UnitSpec]) -> String {
    let buff = mode_up_buff(hero, level);
    for unit in party.iter_mut() {
        buff.apply_to(unit);
    }

    if buff.is_empty() {
        return format!("{hero} tries to mode up but nothing happens...");
    }
    let parts: Vec<String> =
        buff.entries().into_iter().map(|(label, amount)| format!("+{amount} {label}")).collect();
    format!("{hero} empowers the party with {}!", parts.join(", "))
}
