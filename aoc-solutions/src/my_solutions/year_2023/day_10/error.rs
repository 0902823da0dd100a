use super::grid::{Position, Symbol};
use super::heading::Heading;
use aoc_solver::{ParseError, SolveError};
use thiserror::Error;

/// Everything that can go wrong between raw text and the two answers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipeMazeError {
    #[error("input is empty")]
    EmptyInput,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },

    #[error("input has no start cell 'S'")]
    MissingStart,

    #[error("second start at {second}, first was at {first}")]
    MultipleStarts { first: Position, second: Position },

    #[error("no neighbour of the start at {position} connects back to it")]
    StartNotConnected { position: Position },

    #[error("cannot continue from {symbol} at {position} after moving {heading}")]
    InvalidTransition {
        position: Position,
        symbol: Symbol,
        heading: Heading,
    },

    #[error("loop leaves the grid moving {heading} from {position}")]
    LeftGrid { position: Position, heading: Heading },

    #[error("loop did not return to the start after {steps} steps")]
    Unclosed { steps: usize },

    #[error("failed to build interior scan thread pool: {0}")]
    ThreadPool(String),
}

impl PipeMazeError {
    /// Structural problems detected before any tracing starts
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::RaggedRow { .. }
                | Self::UnknownSymbol { .. }
                | Self::MissingStart
                | Self::MultipleStarts { .. }
                | Self::StartNotConnected { .. }
        )
    }
}

impl From<PipeMazeError> for ParseError {
    fn from(e: PipeMazeError) -> Self {
        match e {
            PipeMazeError::MissingStart => ParseError::MissingData(e.to_string()),
            PipeMazeError::EmptyInput => ParseError::MissingData(e.to_string()),
            other => ParseError::InvalidFormat(other.to_string()),
        }
    }
}

impl From<PipeMazeError> for SolveError {
    fn from(e: PipeMazeError) -> Self {
        SolveError::failed(e)
    }
}
