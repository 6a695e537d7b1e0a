//! A 9×9 grid of known digits.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{digit::Digit, position::Position};

/// A 9×9 grid of known digits; empty cells are `None`.
///
/// This is the shape exchanged with callers: puzzle input, propagation
/// results, and solved boards are all `DigitGrid`s. The solving engine's
/// internal candidate state never leaves the engine.
///
/// Grids can be parsed from text for tests and tooling: digits `1`-`9` fill a
/// cell, `.`, `_`, and `0` leave it empty, and all whitespace is ignored.
///
/// # Examples
///
/// ```
/// use gridloom_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert_eq!(grid.known_count(), 30);
/// # Ok::<(), gridloom_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from the raw `[[u8; 9]; 9]` shape used by untyped
    /// callers: rows of values in 0-9, where 0 means unknown.
    ///
    /// This is the validation point for input that did not come through the
    /// typed API — anything outside 0-9 is rejected here, before it can reach
    /// the solving engine.
    ///
    /// # Errors
    ///
    /// Returns [`GridValueError`] naming the first offending cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridloom_core::{Digit, DigitGrid, Position};
    ///
    /// let mut values = [[0u8; 9]; 9];
    /// values[2][5] = 7;
    /// let grid = DigitGrid::from_values(&values)?;
    /// assert_eq!(grid[Position::new(2, 5)], Some(Digit::D7));
    ///
    /// values[0][0] = 12;
    /// assert!(DigitGrid::from_values(&values).is_err());
    /// # Ok::<(), gridloom_core::GridValueError>(())
    /// ```
    pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Self, GridValueError> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = values[pos.row() as usize][pos.col() as usize];
            grid[pos] = match value {
                0 => None,
                _ => Some(Digit::try_from_value(value).ok_or(GridValueError {
                    row: pos.row(),
                    col: pos.col(),
                    value,
                })?),
            };
        }
        Ok(grid)
    }

    /// Returns the grid in the raw `[[u8; 9]; 9]` shape, with 0 for empty
    /// cells.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0u8; 9]; 9];
        for pos in Position::ALL {
            values[pos.row() as usize][pos.col() as usize] =
                self[pos].map_or(0, Digit::value);
        }
        values
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

/// Error parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// A character that is not a digit, placeholder, or whitespace.
    #[display("unexpected character {_0:?} in grid text")]
    UnexpectedCharacter(#[error(not(source))] char),
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cell characters found.
        found: usize,
    },
}

/// Error converting raw values into a [`DigitGrid`]: a value outside 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("grid value {value} at ({row}, {col}) is outside 0-9")]
pub struct GridValueError {
    /// Row of the offending value (0-8).
    pub row: u8,
    /// Column of the offending value (0-8).
    pub col: u8,
    /// The rejected value.
    pub value: u8,
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, GridParseError> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(GridParseError::UnexpectedCharacter(c)),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::WrongCellCount { found: count });
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }
                match self[Position::new(row, col)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            if row < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
