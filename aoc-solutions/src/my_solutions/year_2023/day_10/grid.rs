//! Grid of pipe symbols parsed from the puzzle text

use super::error::PipeMazeError;
use super::heading::Heading;
use std::fmt;
use std::str::FromStr;

/// A grid coordinate, `x` grows rightward and `y` grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent position one step along `heading`, if it is non-negative
    pub fn step(self, heading: Heading) -> Option<Self> {
        let Self { x, y } = self;
        match heading {
            Heading::Up => y.checked_sub(1).map(|y| Self { x, y }),
            Heading::Down => Some(Self { x, y: y + 1 }),
            Heading::Left => x.checked_sub(1).map(|x| Self { x, y }),
            Heading::Right => Some(Self { x: x + 1, y }),
        }
    }

    /// Whether `other` is one orthogonal step away
    pub fn is_adjacent(self, other: Self) -> bool {
        Heading::between(self, other).is_some()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One grid symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    UpRight,
    /// `J`
    UpLeft,
    /// `7`
    DownLeft,
    /// `F`
    DownRight,
    /// `.`
    Ground,
    /// `S`
    Start,
}

impl Symbol {
    pub const PIPES: [Symbol; 6] = [
        Symbol::Vertical,
        Symbol::Horizontal,
        Symbol::UpRight,
        Symbol::UpLeft,
        Symbol::DownLeft,
        Symbol::DownRight,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '|' => Self::Vertical,
            '-' => Self::Horizontal,
            'L' => Self::UpRight,
            'J' => Self::UpLeft,
            '7' => Self::DownLeft,
            'F' => Self::DownRight,
            '.' => Self::Ground,
            'S' => Self::Start,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Vertical => '|',
            Self::Horizontal => '-',
            Self::UpRight => 'L',
            Self::UpLeft => 'J',
            Self::DownLeft => '7',
            Self::DownRight => 'F',
            Self::Ground => '.',
            Self::Start => 'S',
        }
    }

    /// The sides a pipe connects. Ground and the start marker have none;
    /// the start's real shape is only known after tracing.
    pub fn openings(self) -> &'static [Heading] {
        match self {
            Self::Vertical => &[Heading::Up, Heading::Down],
            Self::Horizontal => &[Heading::Left, Heading::Right],
            Self::UpRight => &[Heading::Up, Heading::Right],
            Self::UpLeft => &[Heading::Up, Heading::Left],
            Self::DownLeft => &[Heading::Down, Heading::Left],
            Self::DownRight => &[Heading::Down, Heading::Right],
            Self::Ground | Self::Start => &[],
        }
    }

    pub fn opens(self, side: Heading) -> bool {
        self.openings().contains(&side)
    }

    /// The pipe whose two openings are `a` and `b`, in either order
    pub fn from_openings(a: Heading, b: Heading) -> Option<Self> {
        Self::PIPES
            .into_iter()
            .find(|pipe| a != b && pipe.opens(a) && pipe.opens(b))
    }

    pub fn is_pipe(self) -> bool {
        !self.openings().is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.as_char())
    }
}

/// A symbol at its coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub position: Position,
    pub symbol: Symbol,
}

/// Rectangular grid with exactly one start cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    symbols: Vec<Symbol>,
    start: Position,
}

impl Grid {
    /// Parse newline-separated rows of equal width.
    ///
    /// Surrounding whitespace is trimmed and `\r\n` line endings are accepted.
    pub fn parse(input: &str) -> Result<Self, PipeMazeError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PipeMazeError::EmptyInput);
        }

        let mut width = None;
        let mut height = 0;
        let mut symbols = Vec::with_capacity(input.len());
        let mut start: Option<Position> = None;

        for (y, line) in input.lines().enumerate() {
            let row_start = symbols.len();
            for (x, c) in line.chars().enumerate() {
                let position = Position::new(x, y);
                let symbol =
                    Symbol::from_char(c).ok_or(PipeMazeError::UnknownSymbol { symbol: c, position })?;

                if symbol == Symbol::Start {
                    if let Some(first) = start {
                        return Err(PipeMazeError::MultipleStarts {
                            first,
                            second: position,
                        });
                    }
                    start = Some(position);
                }
                symbols.push(symbol);
            }

            let found = symbols.len() - row_start;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(PipeMazeError::RaggedRow {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let start = start.ok_or(PipeMazeError::MissingStart)?;
        Ok(Self {
            width: width.unwrap_or_default(),
            height,
            symbols,
            start,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Row-major index of an in-bounds position
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y * self.width + position.x)
    }

    /// Position of a row-major index
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    pub fn get(&self, position: Position) -> Option<Symbol> {
        self.index_of(position).map(|i| self.symbols[i])
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.get(position).map(|symbol| Cell { position, symbol })
    }

    /// In-bounds neighbour one step along `heading`
    pub fn neighbor(&self, position: Position, heading: Heading) -> Option<Cell> {
        position.step(heading).and_then(|next| self.cell(next))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| Cell {
                position: self.position_of(i),
                symbol,
            })
    }
}

impl FromStr for Grid {
    type Err = PipeMazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions_and_start() {
        let grid = Grid::parse(".....\n.S-7.\n.|.|.\n.L-J.\n.....\n").unwrap();
        assert_eq!((grid.width(), grid.height(), grid.len()), (5, 5, 25));
        assert_eq!(grid.start(), Position::new(1, 1));
        assert_eq!(grid.get(Position::new(3, 1)), Some(Symbol::DownLeft));
        assert_eq!(grid.get(Position::new(5, 1)), None);
    }

    #[test]
    fn test_parse_crlf() {
        let grid: Grid = "S7\r\nLJ\r\n".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Symbol::UpLeft));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Grid::parse(""), Err(PipeMazeError::EmptyInput));
        assert_eq!(Grid::parse(" \n\n"), Err(PipeMazeError::EmptyInput));
    }

    #[test]
    fn test_parse_ragged() {
        assert_eq!(
            Grid::parse("S-7\n|.|\nL-"),
            Err(PipeMazeError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            Grid::parse("S-7\n|x|"),
            Err(PipeMazeError::UnknownSymbol {
                symbol: 'x',
                position: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn test_parse_start_count() {
        assert_eq!(Grid::parse("F-7\nL-J"), Err(PipeMazeError::MissingStart));
        assert_eq!(
            Grid::parse("S-7\nL-S"),
            Err(PipeMazeError::MultipleStarts {
                first: Position::new(0, 0),
                second: Position::new(2, 1)
            })
        );
    }

    #[test]
    fn test_symbol_round_trip_alphabet() {
        for c in "|-LJ7F.S".chars() {
            assert_eq!(Symbol::from_char(c).map(Symbol::as_char), Some(c));
        }
        assert_eq!(Symbol::from_char('#'), None);
    }

    #[test]
    fn test_from_openings() {
        assert_eq!(
            Symbol::from_openings(Heading::Right, Heading::Down),
            Some(Symbol::DownRight)
        );
        assert_eq!(
            Symbol::from_openings(Heading::Left, Heading::Up),
            Some(Symbol::UpLeft)
        );
        assert_eq!(Symbol::from_openings(Heading::Up, Heading::Up), None);
    }

    #[test]
    fn test_neighbor_bounds() {
        let grid = Grid::parse("S7\nLJ").unwrap();
        let origin = Position::new(0, 0);
        assert!(grid.neighbor(origin, Heading::Up).is_none());
        assert!(grid.neighbor(origin, Heading::Left).is_none());
        assert_eq!(
            grid.neighbor(origin, Heading::Right).map(|c| c.symbol),
            Some(Symbol::DownLeft)
        );
        assert!(origin.is_adjacent(Position::new(0, 1)));
        assert!(!origin.is_adjacent(Position::new(1, 1)));
    }
}
