//! Board structure with forbidden-marker tracking

use std::fmt;

use super::{Cell, CellStatus, Color, Pos, BOARD_SIZE, TOTAL_CELLS};

/// 15x15 grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::BLANK; TOTAL_CELLS],
        }
    }

    /// Status at position, `Edge` when off the board
    #[inline]
    pub fn status(&self, pos: Pos) -> CellStatus {
        if pos.is_valid() {
            self.cells[pos.to_index()].status
        } else {
            CellStatus::Edge
        }
    }

    /// Stored cell, `None` when off the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        pos.is_valid().then(|| self.cells[pos.to_index()])
    }

    /// Place a stone (without any rule processing)
    /// Use `engine::apply_move` for game moves
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, counter: u32, color: Color) {
        if pos.is_valid() {
            self.cells[pos.to_index()] = Cell::stone(counter, color);
        }
    }

    /// Mark a blank cell forbidden. Occupied cells are left alone.
    #[inline]
    pub fn mark_forbidden(&mut self, pos: Pos) {
        if self.status(pos) == CellStatus::Blank {
            self.cells[pos.to_index()] = Cell::FORBIDDEN;
        }
    }

    /// Turn every forbidden marker back into a blank cell.
    /// Returns how many markers were removed.
    pub fn clear_forbidden(&mut self) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut() {
            if cell.status == CellStatus::Forbidden {
                *cell = Cell::BLANK;
                cleared += 1;
            }
        }
        cleared
    }

    /// Positions currently holding the given status
    pub fn positions(&self, status: CellStatus) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.status == status)
            .map(|(idx, _)| Pos::from_index(idx))
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c.status, CellStatus::Black | CellStatus::White))
            .count()
    }

    pub fn forbidden_count(&self) -> usize {
        self.positions(CellStatus::Forbidden).count()
    }

    /// Check if board has no stones
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text diagram: `X` black, `O` white, `x` forbidden, `.` blank
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {:x}", x)?;
        }
        writeln!(f)?;
        for y in 0..BOARD_SIZE {
            write!(f, "{:>2}", y)?;
            for x in 0..BOARD_SIZE {
                let ch = match self.status(Pos::new(x as i32, y as i32)) {
                    CellStatus::Black => 'X',
                    CellStatus::White => 'O',
                    CellStatus::Forbidden => 'x',
                    CellStatus::Blank | CellStatus::Edge => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
