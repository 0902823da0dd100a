//! Walks the pipe loop from the start cell back to itself

use super::error::PipeMazeError;
use super::grid::{Cell, Grid, Position, Symbol};
use super::heading::{transition, Heading, Transition};
use crate::utils::polygon::Polygon;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// The closed loop in walk order, ending on the start cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopTrace {
    cells: Vec<Cell>,
    start: Position,
    first: Heading,
    last: Heading,
}

impl LoopTrace {
    /// Visited cells; the first is one step from the start, the last is the start
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + Clone + '_ {
        self.cells.iter().map(|cell| cell.position)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// Heading of the step that left the start
    pub fn first_heading(&self) -> Heading {
        self.first
    }

    /// Heading of the step that returned to the start
    pub fn last_heading(&self) -> Heading {
        self.last
    }

    /// Steps taken, equal to the cycle length
    pub fn step_count(&self) -> usize {
        self.cells.len()
    }

    /// Loop distance from the start to the farthest cell
    pub fn farthest_distance(&self) -> usize {
        self.step_count().div_ceil(2)
    }

    /// Loop membership, for O(1) lookups
    pub fn boundary(&self) -> HashSet<Position> {
        self.positions().collect()
    }

    /// The pipe hidden under `S`
    pub fn start_symbol(&self) -> Option<Symbol> {
        Symbol::from_openings(self.first, self.last.opposite())
    }

    /// Loop vertices as a lattice polygon, in walk order
    pub fn polygon(&self) -> Polygon {
        self.positions()
            .map(|p| (p.x as i64, p.y as i64))
            .collect()
    }
}

/// Candidate first headings, in [`Heading::START_PRIORITY`] order.
///
/// A neighbour qualifies when it is on the grid and opens back toward the start.
pub fn start_headings(grid: &Grid) -> impl Iterator<Item = Heading> + '_ {
    let start = grid.start();
    Heading::START_PRIORITY.into_iter().filter(move |&heading| {
        grid.neighbor(start, heading)
            .is_some_and(|cell| cell.symbol.opens(heading.opposite()))
    })
}

/// First heading chosen by the fixed tie-break
pub fn start_heading(grid: &Grid) -> Result<Heading, PipeMazeError> {
    start_headings(grid)
        .next()
        .ok_or(PipeMazeError::StartNotConnected {
            position: grid.start(),
        })
}

/// Trace the loop using the tie-break start heading
pub fn trace(grid: &Grid) -> Result<LoopTrace, PipeMazeError> {
    trace_with_heading(grid, start_heading(grid)?)
}

/// Trace the loop leaving the start along `first`
#[instrument(level = "debug", skip(grid), fields(start = %grid.start()))]
pub fn trace_with_heading(grid: &Grid, first: Heading) -> Result<LoopTrace, PipeMazeError> {
    let start = grid.start();
    let mut cells = Vec::new();
    let mut position = start;
    let mut heading = first;

    // A simple cycle visits each cell at most once
    for _ in 0..grid.len() {
        let cell = grid
            .neighbor(position, heading)
            .ok_or(PipeMazeError::LeftGrid { position, heading })?;
        cells.push(cell);
        position = cell.position;

        if position == start {
            debug!(steps = cells.len(), first = %first, last = %heading, "loop closed");
            return Ok(LoopTrace {
                cells,
                start,
                first,
                last: heading,
            });
        }

        heading = match transition(heading, cell.symbol) {
            Transition::Continue(next) => next,
            Transition::Invalid => {
                return Err(PipeMazeError::InvalidTransition {
                    position,
                    symbol: cell.symbol,
                    heading,
                });
            }
        };
    }

    Err(PipeMazeError::Unclosed { steps: cells.len() })
}
