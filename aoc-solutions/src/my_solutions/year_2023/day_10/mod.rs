//! Day 10: Pipe Maze
//!
//! The input is a grid of pipe segments with one start marker `S` sitting on
//! a closed loop. Part 1 asks for the loop distance to the farthest loop cell,
//! part 2 for the number of cells the loop encloses.
//!
//! ```
//! use aoc_solutions::my_solutions::year_2023::day_10::{solve, ScanConfig};
//!
//! let answers = solve(".....\n.S-7.\n.|.|.\n.L-J.\n.....", &ScanConfig::default()).unwrap();
//! assert_eq!((answers.farthest, answers.enclosed), (4, 1));
//! ```

mod config;
mod error;
mod grid;
mod heading;
mod interior;
mod render;
mod tracer;


pub use config::{ScanConfig, ScanMode, SCAN_MODE_ENV, SCAN_THREADS_ENV};
pub use error::PipeMazeError;
pub use grid::{Cell, Grid, Position, Symbol};
pub use heading::{transition, Heading, Transition};
pub use interior::{count_interior, interior_cells};
pub use render::{CellClass, LoopMap};
pub use tracer::{start_heading, start_headings, trace, trace_with_heading, LoopTrace};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["pipe-maze", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    trace: Option<LoopTrace>,
}

impl SharedData {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid with its loop, traced on first use and reused afterwards
    pub fn traced(&mut self) -> Result<(&Grid, &LoopTrace), PipeMazeError> {
        let SharedData { grid, trace } = self;
        let traced = match trace.take() {
            Some(traced) => traced,
            None => tracer::trace(grid)?,
        };
        Ok((grid, trace.insert(traced)))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        // Reject an isolated start before any tracing happens
        start_heading(&grid)?;
        Ok(SharedData { grid, trace: None })
    }
}

impl PartSolver<1> for Solver {
    #[tracing::instrument(level = "debug", name = "day_10_part_1", skip_all)]
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, trace) = shared.traced()?;
        Ok(trace.farthest_distance().to_string())
    }
}

impl PartSolver<2> for Solver {
    #[tracing::instrument(level = "debug", name = "day_10_part_2", skip_all)]
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let config = ScanConfig::from_env().map_err(SolveError::failed)?;
        let (grid, trace) = shared.traced()?;
        Ok(count_interior(grid, trace, &config)?.to_string())
    }
}

/// Both answers for one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    /// Part 1: loop distance to the farthest loop cell
    pub farthest: usize,
    /// Part 2: cells enclosed by the loop
    pub enclosed: usize,
}

/// Run the whole pipeline on `input`
pub fn solve(input: &str, config: &ScanConfig) -> Result<Answers, PipeMazeError> {
    let grid = Grid::parse(input)?;
    let trace = trace(&grid)?;
    Ok(Answers {
        farthest: trace.farthest_distance(),
        enclosed: count_interior(&grid, &trace, config)?,
    })
}

pub fn part_one(input: &str) -> Result<usize, PipeMazeError> {
    let grid = Grid::parse(input)?;
    Ok(trace(&grid)?.farthest_distance())
}

pub fn part_two(input: &str) -> Result<usize, PipeMazeError> {
    solve(input, &ScanConfig::default()).map(|answers| answers.enclosed)
}

/// Classify every cell for visualization
pub fn render(input: &str, config: &ScanConfig) -> Result<LoopMap, PipeMazeError> {
    let grid = Grid::parse(input)?;
    let trace = trace(&grid)?;
    let interior = interior_cells(&grid, &trace, config)?;
    Ok(LoopMap::new(&grid, &trace, &interior))
}
