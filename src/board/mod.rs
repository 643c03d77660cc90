//! Board representation for Renju

pub mod board;


use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

// Re-exports
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// The four line directions. Each one together with its negation spans an axis.
pub const DIRECTIONS: [Pos; 4] = [
    Pos { x: 1, y: 0 },  // Horizontal
    Pos { x: 0, y: 1 },  // Vertical
    Pos { x: 1, y: 1 },  // Diagonal SE
    Pos { x: 1, y: -1 }, // Diagonal NE
];

/// Placeable stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Color that plays the given 1-based move number. Odd moves are black.
    #[inline]
    pub fn for_move(counter: u32) -> Color {
        if counter % 2 == 1 {
            Color::Black
        } else {
            Color::White
        }
    }

    #[inline]
    pub fn status(self) -> CellStatus {
        match self {
            Color::Black => CellStatus::Black,
            Color::White => CellStatus::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// What a scan sees at a coordinate.
///
/// `Edge` is never stored. It is what [`Board::status`] answers for a
/// coordinate outside the grid, and scans treat it as a blocker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Blank,
    Black,
    White,
    /// Blank cell black may not play on
    Forbidden,
    Edge,
}

impl CellStatus {
    /// Blank or forbidden: a cell a stone could still land on
    #[inline]
    pub fn is_empty_like(self) -> bool {
        matches!(self, CellStatus::Blank | CellStatus::Forbidden)
    }

    /// Whether this cell stops a run of `color` (opposing stone or board edge)
    #[inline]
    pub fn blocks(self, color: Color) -> bool {
        match self {
            CellStatus::Edge => true,
            CellStatus::Black => color == Color::White,
            CellStatus::White => color == Color::Black,
            CellStatus::Blank | CellStatus::Forbidden => false,
        }
    }
}

/// Stored cell: the move number that occupied it plus its status.
///
/// `counter` is 0 for a cell never played and [`Cell::FORBIDDEN_COUNTER`]
/// for a forbidden marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub counter: i32,
    pub status: CellStatus,
}

impl Cell {
    pub const FORBIDDEN_COUNTER: i32 = -1;

    pub const BLANK: Cell = Cell {
        counter: 0,
        status: CellStatus::Blank,
    };

    pub const FORBIDDEN: Cell = Cell {
        counter: Cell::FORBIDDEN_COUNTER,
        status: CellStatus::Forbidden,
    };

    #[inline]
    pub fn stone(counter: u32, color: Color) -> Self {
        Self {
            counter: counter as i32,
            status: color.status(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

/// Cell coordinate. `x` is the column, `y` the row.
///
/// Arithmetic may leave the board; such coordinates read as
/// [`CellStatus::Edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i32 && self.y >= 0 && self.y < BOARD_SIZE as i32
    }

    /// Row-major index, only meaningful for valid positions
    #[inline]
    pub fn to_index(self) -> usize {
        debug_assert!(self.is_valid());
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as i32,
            y: (idx / BOARD_SIZE) as i32,
        }
    }

    /// Every coordinate on the board in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl Add for Pos {
    type Output = Pos;

    #[inline]
    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;

    #[inline]
    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Pos {
    type Output = Pos;

    #[inline]
    fn neg(self) -> Pos {
        Pos::new(-self.x, -self.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
