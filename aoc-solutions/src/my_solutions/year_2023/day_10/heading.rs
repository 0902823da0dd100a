//! Headings and the pipe transition table

use super::grid::{Position, Symbol};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Order in which the start cell's neighbours are tried
    pub const START_PRIORITY: [Heading; 4] =
        [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Heading of a single step from `from` to `to`, `None` unless adjacent
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::START_PRIORITY
            .into_iter()
            .find(|&heading| from.step(heading) == Some(to))
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Outcome of entering a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue(Heading),
    Invalid,
}

/// Next heading after moving `arrived` into a cell holding `symbol`.
///
/// `arrived` is the direction of motion, so the pipe is entered through its
/// `arrived.opposite()` side and left through its other opening.
pub fn transition(arrived: Heading, symbol: Symbol) -> Transition {
    use Heading::*;
    use Symbol::*;

    let next = match (symbol, arrived) {
        (Vertical, Down) => Down,
        (Vertical, Up) => Up,
        (Horizontal, Left) => Left,
        (Horizontal, Right) => Right,
        (UpRight, Down) => Right,
        (UpRight, Left) => Up,
        (UpLeft, Down) => Left,
        (UpLeft, Right) => Up,
        (DownLeft, Up) => Left,
        (DownLeft, Right) => Down,
        (DownRight, Up) => Right,
        (DownRight, Left) => Down,
        _ => return Transition::Invalid,
    };
    Transition::Continue(next)
}
