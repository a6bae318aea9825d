//! Read-only presentation queries over the battlefield.

use super::*;
use crate::state::{EMPTY_SYMBOL, WALL_SYMBOL};

impl Battle {
    pub fn cell_at(&self, pos: Pos) -> Option<Cell> {
        self.state.grid.cell(pos)
    }

    pub fn glyph_at(&self, pos: Pos) -> Option<char> {
        let glyph = match self.state.grid.cell(pos)? {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Wall => WALL_SYMBOL,
            Cell::Unit(id) => self.state.units.get(id).map_or(EMPTY_SYMBOL, |unit| unit.symbol),
            Cell::Object(id) => {
                self.state.objects.get(id).map_or(EMPTY_SYMBOL, |object| object.symbol)
            }
        };
        Some(glyph)
    }

    /// One string per grid row, top to bottom.
    pub fn render_rows(&self) -> Vec<String> {
        let grid = &self.state.grid;
        (0..grid.rows as i32)
            .map(|y| {
                (0..grid.cols as i32)
                    .filter_map(|x| self.glyph_at(Pos { y, x }))
                    .collect::<String>()
            })
            .collect()
    }
}
