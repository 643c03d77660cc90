//! Renju forbidden moves for Black
//!
//! A blank cell is forbidden for Black when a stone there would make a
//! double-three, a double-four or a double overline. A move that completes
//! exactly five is never forbidden, whatever else it creates.
//!
//! White is never restricted.

use crate::board::{Board, CellStatus, Color, Pos, DIRECTIONS};
use crate::config::RuleSet;

use super::scan::{count_blank_axis, GapScan};

/// What a black stone at the candidate cell makes along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPattern {
    /// Exactly five in a row
    Five,
    /// Three that can still grow into an open four
    OpenThree,
    Four,
    /// Two fours on one line (`BBB_X_BBB`)
    DoubleFour,
    /// Six or more in a row
    Overline,
    Nothing,
}

/// Raw counts behind an [`AxisPattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCounts {
    /// Contiguous black stones through the candidate, candidate included
    pub row_cnt: u32,
    /// Black stones reachable across one gap on each side, candidate included
    pub row_blank: u32,
    pub blocked: bool,
    pub forward: GapScan,
    pub backward: GapScan,
}

impl AxisCounts {
    /// Gather the counts for the axis `dir` through `pos` as if Black were on `pos`.
    pub fn scan(board: &Board, pos: Pos, dir: Pos) -> Self {
        let (forward, backward) = count_blank_axis(board, pos, Color::Black, dir);
        Self {
            row_cnt: 1 + forward.cnt + backward.cnt,
            row_blank: 1 + forward.blank_cnt + backward.blank_cnt,
            blocked: forward.block_stack + backward.block_stack > 1,
            forward,
            backward,
        }
    }

    pub fn pattern(&self) -> AxisPattern {
        if self.row_cnt == 5 {
            AxisPattern::Five
        } else if self.row_blank == 3 && !self.blocked {
            // A lone stone with a single stone across a gap on each side
            // (`B_X_B`) never becomes an open four.
            let one_sided = self.forward.blank_cnt == 0 || self.backward.blank_cnt == 0;
            if self.row_cnt != 1 || one_sided {
                AxisPattern::OpenThree
            } else {
                AxisPattern::Nothing
            }
        } else if self.row_blank == 4 {
            AxisPattern::Four
        } else if self.row_blank >= 6 {
            if self.row_blank == self.row_cnt {
                AxisPattern::Overline
            } else if self.row_blank == 7 && self.row_cnt == 1 {
                AxisPattern::DoubleFour
            } else {
                AxisPattern::Nothing
            }
        } else {
            AxisPattern::Nothing
        }
    }
}

/// Classify the axis `dir` through `pos` for a hypothetical black stone.
#[inline]
pub fn classify_axis(board: &Board, pos: Pos, dir: Pos) -> AxisPattern {
    AxisCounts::scan(board, pos, dir).pattern()
}

/// Per-cell accumulation over the four axes.
///
/// Counters start one below zero so a single qualifying axis leaves them at
/// zero; anything positive means "two or more".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tally {
    threes: i32,
    fours: i32,
    sixes: i32,
}

impl Tally {
    fn new(rule_set: RuleSet) -> Self {
        let sixes = match rule_set {
            RuleSet::V1 => 0,
            RuleSet::V2 => -1,
        };
        Self {
            threes: -1,
            fours: -1,
            sixes,
        }
    }

    fn add(&mut self, pattern: AxisPattern) {
        match pattern {
            AxisPattern::OpenThree => self.threes += 1,
            AxisPattern::Four => self.fours += 1,
            AxisPattern::DoubleFour => self.fours += 2,
            AxisPattern::Overline => self.sixes += 1,
            AxisPattern::Five | AxisPattern::Nothing => {}
        }
    }

    fn is_forbidden(&self) -> bool {
        self.threes > 0 || self.fours > 0 || self.sixes > 0
    }
}

/// Check whether a black stone on `pos` would be forbidden.
///
/// Only blank (or already forbidden) cells are evaluated; occupied and
/// off-board cells are never forbidden.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Cell being considered
/// * `rule_set` - Version of the forbidden-move rules
pub fn is_forbidden(board: &Board, pos: Pos, rule_set: RuleSet) -> bool {
    if !board.status(pos).is_empty_like() {
        return false;
    }

    let mut tally = Tally::new(rule_set);
    for &dir in &DIRECTIONS {
        let pattern = classify_axis(board, pos, dir);
        if pattern == AxisPattern::Five {
            return false;
        }
        tally.add(pattern);
    }

    tally.is_forbidden()
}

/// Recompute every forbidden marker on the board.
///
/// Existing markers are cleared first, then every blank cell is evaluated
/// against the same stone layout. Returns the number of cells marked.
pub fn mark_forbidden(board: &mut Board, rule_set: RuleSet) -> usize {
    board.clear_forbidden();

    let layout: &Board = board;
    let forbidden: Vec<Pos> = layout
        .positions(CellStatus::Blank)
        .filter(|&pos| is_forbidden(layout, pos, rule_set))
        .collect();

    for &pos in &forbidden {
        board.mark_forbidden(pos);
    }

    tracing::trace!(count = forbidden.len(), "forbidden markers recomputed");
    forbidden.len()
}
