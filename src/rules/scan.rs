//! Directional line scans shared by win and forbidden detection
//!
//! Both scans start one step past the origin and never read the origin
//! itself, so they can evaluate a cell "as if" a stone were already there.

use crate::board::{Board, Color, Pos};

/// Result of a gapped walk in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GapScan {
    /// Stones of the color before the first empty-like cell
    pub cnt: u32,
    /// Stones of the color over the whole walk, across at most one gap
    pub blank_cnt: u32,
    /// 1 when the walk ends on a blocker right after an empty-like cell,
    /// 2 when it ends on a blocker right after a stone (or the origin)
    pub block_stack: u32,
}

/// Count contiguous `color` stones from `start` along `dir`, origin excluded.
pub fn count_row(board: &Board, start: Pos, color: Color, dir: Pos) -> u32 {
    let target = color.status();
    let mut cnt = 0;
    let mut cur = start + dir;

    while board.status(cur) == target {
        cnt += 1;
        cur = cur + dir;
    }

    cnt
}

/// Walk from `start` along `dir` through `color` stones and at most one
/// empty-like gap.
///
/// The walk stops on the first blocker (opposing stone or edge), scoring the
/// block, or on the second empty-like cell, scoring nothing.
pub fn count_blank_row(board: &Board, start: Pos, color: Color, dir: Pos) -> GapScan {
    let target = color.status();
    let mut scan = GapScan::default();
    let mut crossed_gap = false;

    let mut prev = target;
    let mut cur = start + dir;

    loop {
        let status = board.status(cur);

        if status.blocks(color) {
            scan.block_stack += if prev.is_empty_like() { 1 } else { 2 };
            break;
        } else if status == target {
            scan.blank_cnt += 1;
            if !crossed_gap {
                scan.cnt += 1;
            }
        } else if status.is_empty_like() {
            if crossed_gap {
                break;
            }
            crossed_gap = true;
        }

        prev = status;
        cur = cur + dir;
    }

    scan
}

/// Both halves of the axis through `start`: `dir` first, then `-dir`.
#[inline]
pub fn count_blank_axis(board: &Board, start: Pos, color: Color, dir: Pos) -> (GapScan, GapScan) {
    (
        count_blank_row(board, start, color, dir),
        count_blank_row(board, start, color, -dir),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EAST: Pos = Pos::new(1, 0);
    const WEST: Pos = Pos::new(-1, 0);

    fn row_board(black: &[i32], white: &[i32]) -> Board {
        let mut board = Board::new();
        let mut counter = 1;
        for &x in black {
            board.place_stone(Pos::new(x, 7), counter, Color::Black);
            counter += 1;
        }
        for &x in white {
            board.place_stone(Pos::new(x, 7), counter, Color::White);
            counter += 1;
        }
        board
    }

    #[test]
    fn test_count_row_contiguous() {
        let board = row_board(&[5, 6, 8], &[]);
        assert_eq!(count_row(&board, Pos::new(7, 7), Color::Black, WEST), 2);
        assert_eq!(count_row(&board, Pos::new(7, 7), Color::Black, EAST), 1);
        assert_eq!(count_row(&board, Pos::new(7, 7), Color::White, EAST), 0);
    }

    #[test]
    fn test_count_row_stops_at_edge() {
        let board = row_board(&[0, 1, 2], &[]);
        assert_eq!(count_row(&board, Pos::new(3, 7), Color::Black, WEST), 3);
    }

    #[test]
    fn test_gap_scan_open_end() {
        // origin(7) 8=B 9=_ 10=_
        let board = row_board(&[8], &[]);
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(
            scan,
            GapScan {
                cnt: 1,
                blank_cnt: 1,
                block_stack: 0
            }
        );
    }

    #[test]
    fn test_gap_scan_counts_past_one_gap() {
        // origin(7) 8=B 9=_ 10=B 11=B 12=_ 13=_
        let board = row_board(&[8, 10, 11], &[]);
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(scan.cnt, 1);
        assert_eq!(scan.blank_cnt, 3);
        assert_eq!(scan.block_stack, 0);
    }

    #[test]
    fn test_gap_scan_hard_block() {
        // origin(7) 8=B 9=W
        let board = row_board(&[8], &[9]);
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(scan.block_stack, 2);

        // origin(7) 8=W: blocked right against the origin
        let board = row_board(&[], &[8]);
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(scan, GapScan { cnt: 0, blank_cnt: 0, block_stack: 2 });
    }

    #[test]
    fn test_gap_scan_soft_block() {
        // origin(7) 8=B 9=_ 10=W
        let board = row_board(&[8], &[10]);
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(scan.block_stack, 1);
        assert_eq!(scan.blank_cnt, 1);
    }

    #[test]
    fn test_gap_scan_forbidden_is_empty_like() {
        let mut board = row_board(&[8], &[10]);
        board.mark_forbidden(Pos::new(9, 7));
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(scan.block_stack, 1);
    }

    #[test]
    fn test_gap_scan_edge_blocks() {
        let board = row_board(&[13, 14], &[]);
        let scan = count_blank_row(&board, Pos::new(12, 7), Color::Black, EAST);
        assert_eq!(scan, GapScan { cnt: 2, blank_cnt: 2, block_stack: 2 });

        let board = row_board(&[14], &[]);
        let scan = count_blank_row(&board, Pos::new(13, 7), Color::Black, EAST);
        assert_eq!(scan.block_stack, 2);

        let board = Board::new();
        let scan = count_blank_row(&board, Pos::new(13, 7), Color::Black, EAST);
        assert_eq!(scan.block_stack, 1);
    }

    #[test]
    fn test_gap_scan_second_gap_need_not_be_adjacent() {
        // origin(7) 8=_ 9=B 10=_ 11=B : walk stops at 10
        let board = row_board(&[9, 11], &[]);
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(scan.cnt, 0);
        assert_eq!(scan.blank_cnt, 1);
    }

    #[test]
    fn test_axis_scans_both_ways() {
        let board = row_board(&[5, 6, 8], &[]);
        let (fwd, back) = count_blank_axis(&board, Pos::new(7, 7), Color::Black, EAST);
        assert_eq!(fwd.cnt, 1);
        assert_eq!(back.cnt, 2);
    }

    #[test]
    fn test_white_reference_color() {
        let mut board = Board::new();
        board.place_stone(Pos::new(8, 7), 2, Color::White);
        board.place_stone(Pos::new(9, 7), 1, Color::Black);
        let scan = count_blank_row(&board, Pos::new(7, 7), Color::White, EAST);
        assert_eq!(scan, GapScan { cnt: 1, blank_cnt: 1, block_stack: 2 });
    }
}
