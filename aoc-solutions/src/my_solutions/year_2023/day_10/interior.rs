//! Classifies cells off the loop as inside or outside it

use super::config::{ScanConfig, ScanMode};
use super::error::PipeMazeError;
use super::grid::{Grid, Position};
use super::tracer::LoopTrace;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Interior positions in row-major order.
///
/// Loop cells are never interior. Every other cell, stray pipes included,
/// is tested against the loop polygon.
#[instrument(level = "debug", skip_all, fields(mode = ?config.mode, threads = ?config.threads))]
pub fn interior_cells(
    grid: &Grid,
    trace: &LoopTrace,
    config: &ScanConfig,
) -> Result<Vec<Position>, PipeMazeError> {
    let boundary = trace.boundary();
    let polygon = trace.polygon();

    let is_interior = |index: usize| {
        let position = grid.position_of(index);
        (!boundary.contains(&position)
            && polygon.contains((position.x as i64, position.y as i64)))
        .then_some(position)
    };

    let interior: Vec<Position> = match (config.mode, config.threads) {
        (ScanMode::Sequential, _) => (0..grid.len()).filter_map(is_interior).collect(),
        (ScanMode::Parallel, None) => (0..grid.len()).into_par_iter().filter_map(is_interior).collect(),
        (ScanMode::Parallel, Some(threads)) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| PipeMazeError::ThreadPool(e.to_string()))?;
            pool.install(|| (0..grid.len()).into_par_iter().filter_map(is_interior).collect())
        }
    };

    debug!(interior = interior.len(), loop_cells = boundary.len(), "interior scanned");
    Ok(interior)
}

/// Number of cells enclosed by the loop
pub fn count_interior(
    grid: &Grid,
    trace: &LoopTrace,
    config: &ScanConfig,
) -> Result<usize, PipeMazeError> {
    interior_cells(grid, trace, config).map(|cells| cells.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2023::day_10::tracer::trace;

    fn scan(text: &str, config: &ScanConfig) -> Vec<Position> {
        let grid = Grid::parse(text).unwrap();
        let trace = trace(&grid).unwrap();
        interior_cells(&grid, &trace, config).unwrap()
    }

    #[test]
    fn test_single_interior_cell() {
        let cells = scan(".....\n.S-7.\n.|.|.\n.L-J.\n.....", &ScanConfig::sequential());
        assert_eq!(cells, vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_stray_pipes_are_tested_like_ground() {
        // '-' inside the loop is enclosed, the 'F' outside is not
        let text = "F......\n.S---7.\n.|.-.|.\n.|...|.\n.L---J.\n.......";
        let cells = scan(text, &ScanConfig::sequential());
        assert_eq!(cells.len(), 6);
        assert!(cells.contains(&Position::new(3, 2)));
        assert!(!cells.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_squeeze_between_pipes_is_outside() {
        let text = "..........\n\
                    .S------7.\n\
                    .|F----7|.\n\
                    .||....||.\n\
                    .||....||.\n\
                    .|L-7F-J|.\n\
                    .|..||..|.\n\
                    .L--JL--J.\n\
                    ..........";
        let cells = scan(text, &ScanConfig::sequential());
        assert_eq!(
            cells,
            vec![
                Position::new(2, 6),
                Position::new(3, 6),
                Position::new(6, 6),
                Position::new(7, 6)
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "FF7FSF7F7F7F7F7F---7\n\
                    L|LJ||||||||||||F--J\n\
                    FL-7LJLJ||||||LJL-77\n\
                    F--JF--7||LJLJ7F7FJ-\n\
                    L---JF-JLJ.||-FJLJJ7\n\
                    |F|F-JF---7F7-L7L|7|\n\
                    |FFJF7L7F-JF7|JL---7\n\
                    7-L-JL7||F7|L7F-7F7|\n\
                    L.L7LFJ|||||FJL7||LJ\n\
                    L7JLJL-JLJLJL--JLJ.L";
        let sequential = scan(text, &ScanConfig::sequential());
        let parallel = scan(text, &ScanConfig::default());
        let pooled = scan(text, &ScanConfig::default().with_threads(2));

        assert_eq!(sequential.len(), 10);
        assert_eq!(parallel, sequential);
        assert_eq!(pooled, sequential);
    }
}
