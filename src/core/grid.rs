//! The 4×4 board, its coordinates, and move directions.
//!
//! Tiles are stored as *levels*: level 0 is an empty cell and level `k`
//! displays as `2^k`. Keeping exponents instead of values makes merges a
//! simple increment and keeps the board in 16 bytes.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Board width and height.
pub const SIZE: usize = 4;

/// Tile exponent. 0 = empty.
pub type Level = u8;

/// Highest level a tile may hold. `2^63` still fits in a `u64` score.
pub const MAX_LEVEL: Level = 63;

/// A cell position as `(column, row)`, both counted from the top-left corner.
///
/// Callers may build coordinates outside the board; the grid treats them as
/// holding no tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Whether the coordinate lies on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.col < SIZE && self.row < SIZE
    }

    /// Move one cell towards `direction`, staying on the board.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let max = SIZE - 1;
        let (col, row) = match direction {
            Direction::Left => (self.col.saturating_sub(1), self.row),
            Direction::Up => (self.col, self.row.saturating_sub(1)),
            Direction::Right => (self.col + 1, self.row),
            Direction::Down => (self.col, self.row + 1),
        };
        Self::new(col.min(max), row.min(max))
    }
}

/// `1A` is the top-left cell, `1D` the top-right one, `4A` the bottom-left.
impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_on_board() {
            let letter = char::from(b'A' + self.col as u8);
            write!(f, "{}{}", self.row + 1, letter)
        } else {
            write!(f, "({}, {})", self.col, self.row)
        }
    }
}

/// The four move directions.
///
/// The discriminant is the number of counter-clockwise quarter turns that
/// maps the direction onto "left", so every move can be resolved as a
/// leftward slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Convert an index (0=left, 1=up, 2=right, 3=down) to a direction.
    /// Returns None for other values.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Quarter turns needed to bring this direction onto "left".
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }
}

/// Errors raised when building a grid from caller-supplied rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    #[display("tile level {level} at {coord} exceeds the maximum level {}", MAX_LEVEL)]
    LevelTooHigh { coord: Coord, level: Level },
}

/// A 4×4 board of tile levels, stored row-major.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Level; SIZE]; SIZE],
}

impl Grid {
    /// A board with no tiles.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Build a grid from rows (top to bottom), validating every level.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LevelTooHigh`] if a cell exceeds [`MAX_LEVEL`].
    pub fn from_rows(rows: [[Level; SIZE]; SIZE]) -> Result<Self, GridError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &level) in cells.iter().enumerate() {
                if level > MAX_LEVEL {
                    return Err(GridError::LevelTooHigh {
                        coord: Coord::new(col, row),
                        level,
                    });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Rows from top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Level; SIZE]; SIZE] {
        &self.cells
    }

    /// One column, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> [Level; SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Level at `coord`, or `None` off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Level> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Level of the tile at `coord`, or `None` if the cell is empty or off the board.
    #[must_use]
    pub fn tile(&self, coord: Coord) -> Option<Level> {
        self.get(coord).filter(|&level| level != 0)
    }

    pub(crate) fn set(&mut self, coord: Coord, level: Level) {
        self.cells[coord.row][coord.col] = level;
    }

    /// Exchange the contents of two on-board cells.
    pub(crate) fn swap(&mut self, a: Coord, b: Coord) {
        let first = self.cells[a.row][a.col];
        self.cells[a.row][a.col] = self.cells[b.row][b.col];
        self.cells[b.row][b.col] = first;
    }

    /// Empty every cell holding `level`. Returns how many tiles were removed.
    pub(crate) fn clear_level(&mut self, level: Level) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut().flatten() {
            if *cell == level {
                *cell = 0;
                cleared += 1;
            }
        }
        cleared
    }

    /// Highest level on the board (0 for an empty board).
    #[must_use]
    pub fn max_level(&self) -> Level {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&level| level != 0).count()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Coord; SIZE * SIZE]> {
        let mut empty = SmallVec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &level) in cells.iter().enumerate() {
                if level == 0 {
                    empty.push(Coord::new(col, row));
                }
            }
        }
        empty
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&level| level != 0)
    }

    /// Rotate counter-clockwise `turns` quarter turns.
    #[must_use]
    pub(crate) fn rotated_ccw(&self, turns: u8) -> Self {
        let mut grid = *self;
        for _ in 0..turns % 4 {
            let old = grid.cells;
            grid.cells = std::array::from_fn(|i| std::array::from_fn(|j| old[j][SIZE - 1 - i]));
        }
        grid
    }

    /// Rotate clockwise `turns` quarter turns; undoes [`Grid::rotated_ccw`].
    #[must_use]
    pub(crate) fn rotated_cw(&self, turns: u8) -> Self {
        let mut grid = *self;
        for _ in 0..turns % 4 {
            let old = grid.cells;
            grid.cells = std::array::from_fn(|i| std::array::from_fn(|j| old[SIZE - 1 - j][i]));
        }
        grid
    }

    /// Build a grid whose levels are already known to be valid.
    pub(crate) const fn from_rows_unchecked(rows: [[Level; SIZE]; SIZE]) -> Self {
        Self { cells: rows }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}
