//! Move engine: the game's transition function
//!
//! [`apply_move`] takes a snapshot and a cell and returns the next snapshot,
//! or the reason the move was not accepted. The order of operations for an
//! accepted move is:
//!
//! 1. **Legality**: a forbidden cell ends the game in White's favour, an
//!    occupied cell is rejected
//! 2. **Placement**: the stone's color follows from move parity
//! 3. **Win check**: five or more through the new stone ends the game
//! 4. **Forbidden maintenance**: after White, every blank cell is
//!    re-evaluated for Black; after Black, all markers are cleared
//!
//! # Example
//!
//! ```
//! use renju::{apply_move, EngineConfig, Pos, Snapshot};
//!
//! let config = EngineConfig::default();
//! let start = Snapshot::new();
//! let next = apply_move(&start, Pos::new(7, 7), &config).unwrap();
//! assert_eq!(next.counter, 1);
//!
//! // the cell is now taken
//! assert!(apply_move(&next, Pos::new(7, 7), &config).is_err());
//! ```

use thiserror::Error;
use tracing::debug;

use crate::board::{CellStatus, Color, Pos};
use crate::config::{EndPolicy, EngineConfig};
use crate::rules::{is_five, mark_forbidden};
use crate::state::{GameStatus, Snapshot, WinReason};

/// Why a move was not applied. The state is unchanged in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The coordinate is outside the board
    #[error("({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// The cell already holds a stone
    #[error("({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },

    /// The game is over and the end policy refuses further moves
    #[error("the game is over")]
    GameOver,
}

/// Apply one move to `state`.
///
/// # Arguments
/// * `state` - Snapshot the move is played on, left untouched
/// * `pos` - Cell being played
/// * `config` - End policy and forbidden rule version
///
/// # Returns
/// The next snapshot, or a [`Rejection`] if the move is not accepted
pub fn apply_move(state: &Snapshot, pos: Pos, config: &EngineConfig) -> Result<Snapshot, Rejection> {
    if !pos.is_valid() {
        return Err(Rejection::OutOfBounds { x: pos.x, y: pos.y });
    }

    if state.is_end() {
        return match config.end_policy {
            EndPolicy::Strict => Err(Rejection::GameOver),
            EndPolicy::RecordAfterEnd => record_after_end(state, pos),
        };
    }

    match state.board.status(pos) {
        CellStatus::Forbidden => Ok(forbidden_capture(state, pos)),
        CellStatus::Blank => Ok(place(state, pos, config)),
        _ => Err(Rejection::Occupied { x: pos.x, y: pos.y }),
    }
}

/// Apply moves in order. A rejected move is skipped and the rest of the
/// batch is still played against the then-current snapshot.
pub fn apply_moves(state: &Snapshot, moves: &[Pos], config: &EngineConfig) -> Snapshot {
    let mut current = state.clone();
    for &pos in moves {
        match apply_move(&current, pos, config) {
            Ok(next) => current = next,
            Err(rejection) => debug!(%pos, %rejection, "batch move skipped"),
        }
    }
    current
}

/// Black touched a forbidden cell: White wins, no stone is placed.
fn forbidden_capture(state: &Snapshot, pos: Pos) -> Snapshot {
    let mut next = state.clone();
    next.board.clear_forbidden();
    next.history.push(pos);
    next.status = GameStatus::Ended {
        winner: Color::White,
        reason: WinReason::ForbiddenCapture,
    };
    debug!(%pos, "black played a forbidden cell");
    next
}

fn place(state: &Snapshot, pos: Pos, config: &EngineConfig) -> Snapshot {
    let mut next = state.clone();
    let counter = state.counter + 1;
    let color = Color::for_move(counter);

    next.board.place_stone(pos, counter, color);
    next.counter = counter;
    next.history.push(pos);
    debug!(counter, %color, %pos, "stone placed");

    if is_five(&next.board, pos, color) {
        next.board.clear_forbidden();
        next.status = GameStatus::Ended {
            winner: color,
            reason: WinReason::FiveInRow,
        };
        debug!(%color, "five in a row");
        return next;
    }

    match color {
        Color::Black => {
            next.board.clear_forbidden();
        }
        Color::White => {
            mark_forbidden(&mut next.board, config.rule_set);
        }
    }

    next
}

/// Place and record a stone after the end without running any game logic.
fn record_after_end(state: &Snapshot, pos: Pos) -> Result<Snapshot, Rejection> {
    if !state.board.status(pos).is_empty_like() {
        return Err(Rejection::Occupied { x: pos.x, y: pos.y });
    }

    let mut next = state.clone();
    let counter = state.counter + 1;
    next.board.place_stone(pos, counter, Color::for_move(counter));
    next.counter = counter;
    next.history.push(pos);
    debug!(counter, %pos, "move recorded after game end");
    Ok(next)
}
