//! Text export of the traced loop and interior classification

use super::grid::{Grid, Position, Symbol};
use super::tracer::LoopTrace;
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Start,
    /// On the loop, with its pipe symbol
    Loop(Symbol),
    Interior,
    Exterior,
}

impl CellClass {
    pub fn glyph(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Loop(Symbol::Vertical) => '│',
            Self::Loop(Symbol::Horizontal) => '─',
            Self::Loop(Symbol::UpRight) => '└',
            Self::Loop(Symbol::UpLeft) => '┘',
            Self::Loop(Symbol::DownLeft) => '┐',
            Self::Loop(Symbol::DownRight) => '┌',
            Self::Loop(symbol) => symbol.as_char(),
            Self::Interior => 'I',
            Self::Exterior => 'O',
        }
    }
}

/// Every grid cell classified against one traced loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopMap {
    width: usize,
    classes: Vec<CellClass>,
}

impl LoopMap {
    /// `interior` must hold positions of `grid`; others are ignored
    pub fn new(grid: &Grid, trace: &LoopTrace, interior: &[Position]) -> Self {
        let mut classes = vec![CellClass::Exterior; grid.len()];

        for &position in interior {
            if let Some(i) = grid.index_of(position) {
                classes[i] = CellClass::Interior;
            }
        }
        for cell in trace.cells() {
            if let Some(i) = grid.index_of(cell.position) {
                classes[i] = match cell.symbol {
                    Symbol::Start => CellClass::Start,
                    symbol => CellClass::Loop(symbol),
                };
            }
        }

        Self {
            width: grid.width(),
            classes,
        }
    }

    pub fn class(&self, position: Position) -> Option<CellClass> {
        if position.x >= self.width {
            return None;
        }
        self.classes.get(position.y * self.width + position.x).copied()
    }

    pub fn count(&self, class: CellClass) -> usize {
        self.classes.iter().filter(|&&c| c == class).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellClass]> + '_ {
        self.classes.chunks(self.width.max(1))
    }
}

impl fmt::Display for LoopMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows()
            .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
            .join("\n");
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2023::day_10::config::ScanConfig;
    use crate::my_solutions::year_2023::day_10::interior::interior_cells;
    use crate::my_solutions::year_2023::day_10::tracer::trace;

    fn map(text: &str) -> LoopMap {
        let grid = Grid::parse(text).unwrap();
        let trace = trace(&grid).unwrap();
        let interior = interior_cells(&grid, &trace, &ScanConfig::sequential()).unwrap();
        LoopMap::new(&grid, &trace, &interior)
    }

    #[test]
    fn test_render_square() {
        let map = map("F....\n.S-7.\n.|.|.\n.L-J.\n.....");
        assert_eq!(map.to_string(), "OOOOO\nOS─┐O\nO│I│O\nO└─┘O\nOOOOO");
        assert_eq!(map.count(CellClass::Interior), 1);
        assert_eq!(map.count(CellClass::Start), 1);
        assert_eq!(map.class(Position::new(0, 0)), Some(CellClass::Exterior));
        assert_eq!(map.class(Position::new(5, 0)), None);
    }

    #[test]
    fn test_loop_cell_count() {
        let map = map("..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ...");
        let on_loop = map.rows().flatten().filter(|c| matches!(c, CellClass::Loop(_))).count();
        assert_eq!(on_loop + map.count(CellClass::Start), 16);
        assert_eq!(map.count(CellClass::Interior), 1);
        assert_eq!(map.class(Position::new(2, 2)), Some(CellClass::Interior));
    }
}
