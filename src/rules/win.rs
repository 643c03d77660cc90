//! Five-in-a-row detection
//!
//! Any run of five or more wins, for either color. Overlines only matter to
//! the forbidden-move detector.

use crate::board::{Board, Color, Pos, DIRECTIONS};

use super::scan::count_row;

/// Stones needed in one line to win
pub const WIN_LENGTH: u32 = 5;

/// Length of the `color` run through `pos` along one axis, counting `pos`
/// itself whether or not it is occupied yet.
#[inline]
pub fn axis_run(board: &Board, pos: Pos, color: Color, dir: Pos) -> u32 {
    1 + count_row(board, pos, color, dir) + count_row(board, pos, color, -dir)
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn is_five(board: &Board, pos: Pos, color: Color) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| axis_run(board, pos, color, dir) >= WIN_LENGTH)
}

/// Cells of the first winning run through `pos`, ordered along the axis.
///
/// Returns `None` if no axis through `pos` holds five or more.
pub fn five_line(board: &Board, pos: Pos, color: Color) -> Option<Vec<Pos>> {
    for &dir in &DIRECTIONS {
        if axis_run(board, pos, color, dir) < WIN_LENGTH {
            continue;
        }

        let back = count_row(board, pos, color, -dir) as i32;
        let fwd = count_row(board, pos, color, dir) as i32;
        let line = (-back..=fwd)
            .map(|i| pos + Pos::new(dir.x * i, dir.y * i))
            .collect();
        return Some(line);
    }
    None
}
