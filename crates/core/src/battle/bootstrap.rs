//! Battlefield construction for a new battle.
//! This module exists to isolate placement rules from the turn-driven simulation.
//! It does not own any rule that runs after the first hero's turn begins.

use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use super::*;
use crate::content::{LevelConfig, LevelObjectSpec};
use crate::pacing::NoPacing;
use crate::state::{LevelObject, StatusEffects};

impl Battle {
    pub fn new(seed: u64, party: &[UnitSpec], level: &LevelConfig) -> Self {
        let mut state = BattleState {
            grid: Grid::new(level.rows, level.cols),
            units: SlotMap::with_key(),
            party: Vec::new(),
            enemies: Vec::new(),
            objects: SlotMap::with_key(),
            wall_hp: level.wall_hp,
        };

        build_wall(&mut state.grid);
        place_heroes(&mut state, party);
        for enemy in &level.enemies {
            place_enemy(&mut state, &enemy.unit, enemy.pos());
        }
        for object in &level.level_objects {
            place_level_object(&mut state, object);
        }

        let move_points = state.party.first().map_or(0, |id| state.units[*id].agility);

        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state,
            turn: TurnState { move_points, ..TurnState::default() },
            round: 0,
            outcome: None,
            log: Vec::new(),
            pacer: Box::new(NoPacing),
        }
    }
}

fn build_wall(grid: &mut Grid) {
    let wall_row = grid.wall_row();
    for x in 0..grid.cols as i32 {
        grid.set(Pos { y: wall_row, x }, Cell::Wall);
    }
}

fn spawn(state: &mut BattleState, spec: &UnitSpec, pos: Pos) -> UnitId {
    let id = state.units.insert(Unit {
        id: UnitId::default(),
        name: spec.name.clone(),
        symbol: spec.symbol,
        pos,
        hp: spec.hp,
        attack: spec.attack,
        range: spec.range,
        agility: spec.agility,
        abilities: spec.abilities,
        status: StatusEffects::default(),
        dialogue: spec.dialogue.clone(),
        wall_segment: spec.wall_segment,
    });
    state.units[id].id = id;
    id
}

/// Heroes line up along the top row. A party wider than the grid piles up in the last
/// column, where the later hero owns the cell.
fn place_heroes(state: &mut BattleState, party: &[UnitSpec]) {
    let last_col = state.grid.cols as i32 - 1;
    for (index, spec) in party.iter().filter(|spec| spec.hp > 0).enumerate() {
        let pos = Pos { y: 0, x: (index as i32).min(last_col) };
        let id = spawn(state, spec, pos);
        state.grid.set(pos, Cell::Unit(id));
        state.party.push(id);
    }
}

/// Enemies need an empty in-bounds cell; wall-type enemies may also take over a wall cell.
fn place_enemy(state: &mut BattleState, spec: &UnitSpec, pos: Pos) {
    if spec.hp <= 0 {
        return;
    }
    let placeable = match state.grid.cell(pos) {
        Some(Cell::Empty) => true,
        Some(Cell::Wall) => spec.wall_segment,
        _ => false,
    };
    if !placeable {
        return;
    }
    let id = spawn(state, spec, pos);
    state.grid.set(pos, Cell::Unit(id));
    state.enemies.push(id);
}

fn place_level_object(state: &mut BattleState, spec: &LevelObjectSpec) {
    let pos = spec.pos();
    if pos.y >= state.grid.wall_row() || state.grid.cell(pos) != Some(Cell::Empty) {
        return;
    }
    let symbol = spec.symbol.unwrap_or_else(|| spec.kind.default_symbol());
    let id = state.objects.insert(LevelObject {
        id: ObjectId::default(),
        kind: spec.kind.clone(),
        pos,
        symbol,
    });
    state.objects[id].id = id;
    state.grid.set(pos, Cell::Object(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::test_support::*;
    use crate::content::EnemySpec;

    #[test]
    fn heroes_fill_top_row_and_overflow_into_last_column() {
        let party = vec![knight(), archer(), cleric()];
        let battle = Battle::new(7, &party, &empty_level(4, 2));

        let positions: Vec<Pos> = battle.party().map(|hero| hero.pos).collect();
        assert_eq!(positions, vec![Pos { y: 0, x: 0 }, Pos { y: 0, x: 1 }, Pos { y: 0, x: 1 }]);
        let cleric_id = battle.state.party[2];
        assert_eq!(battle.grid().cell(Pos { y: 0, x: 1 }), Some(Cell::Unit(cleric_id)));
    }

    #[test]
    fn dead_heroes_are_left_out() {
        let mut fallen = archer();
        fallen.hp = 0;
        let battle = Battle::new(7, &[fallen, knight()], &empty_level(4, 4));

        let names: Vec<&str> = battle.party().map(|hero| hero.name.as_str()).collect();
        assert_eq!(names, vec!["Knight"]);
        assert_eq!(battle.party().next().map(|hero| hero.pos), Some(Pos { y: 0, x: 0 }));
        assert_eq!(battle.move_points(), 4);
    }

    #[test]
    fn bottom_row_is_wall_with_wall_type_overlay() {
        let mut level = empty_level(4, 3);
        let mut segment = grunt("Bulwark", 'B', 10);
        segment.wall_segment = true;
        level.enemies.push(EnemySpec::at(segment, Pos { y: 3, x: 1 }));
        level.enemies.push(EnemySpec::at(grunt("Sapper", 's', 3), Pos { y: 3, x: 2 }));

        let battle = Battle::new(7, &[knight()], &level);

        assert_eq!(battle.grid().cell(Pos { y: 3, x: 0 }), Some(Cell::Wall));
        assert!(matches!(battle.grid().cell(Pos { y: 3, x: 1 }), Some(Cell::Unit(_))));
        assert_eq!(battle.grid().cell(Pos { y: 3, x: 2 }), Some(Cell::Wall));
        let names: Vec<&str> = battle.enemies().map(|enemy| enemy.name.as_str()).collect();
        assert_eq!(names, vec!["Bulwark"]);
    }

    #[test]
    fn level_objects_on_occupied_wall_or_outside_cells_are_dropped() {
        let mut level = empty_level(4, 4);
        level.enemies.push(EnemySpec::at(grunt("Rat", 'r', 3), Pos { y: 2, x: 2 }));
        level.level_objects = vec![
            LevelObjectSpec::vittle(Pos { y: 1, x: 1 }),
            LevelObjectSpec::vittle(Pos { y: 2, x: 2 }),
            LevelObjectSpec::vittle(Pos { y: 3, x: 0 }),
            LevelObjectSpec::vittle(Pos { y: 0, x: 9 }),
            LevelObjectSpec::vittle(Pos { y: 0, x: 0 }),
        ];

        let battle = Battle::new(7, &[knight()], &level);

        assert_eq!(battle.state.objects.len(), 1);
        assert_eq!(battle.glyph_at(Pos { y: 1, x: 1 }), Some('ౚ'));
        assert_eq!(battle.glyph_at(Pos { y: 2, x: 2 }), Some('r'));
    }

    #[test]
    fn every_unit_starts_without_status_effects() {
        let mut level = empty_level(5, 5);
        level.enemies.push(EnemySpec::at(grunt("Rat", 'r', 3), Pos { y: 2, x: 2 }));
        let battle = Battle::new(7, &[knight()], &level);
        assert!(battle.state.units.values().all(|unit| unit.status == StatusEffects::default()));
    }
}
