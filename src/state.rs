//! Immutable board snapshots
//!
//! Every accepted move produces a new [`Snapshot`]; nothing mutates one in
//! place once it has been handed out.

use std::fmt;

use crate::board::{Board, CellStatus, Color, Pos};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// Five or more in a row
    FiveInRow,
    /// Black played on a forbidden cell
    ForbiddenCapture,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::FiveInRow => f.write_str("five-in-a-row"),
            WinReason::ForbiddenCapture => f.write_str("forbidden-capture"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Ended { winner: Color, reason: WinReason },
}

/// Complete description of the game at one point in history
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Stones placed so far
    pub counter: u32,
    pub board: Board,
    /// Every cell played, in order, including a forbidden attempt
    pub history: Vec<Pos>,
    pub status: GameStatus,
}

impl Snapshot {
    /// Empty 15x15 board, black to move
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of the next stone
    #[inline]
    pub fn next_color(&self) -> Color {
        Color::for_move(self.counter + 1)
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.status, GameStatus::Ended { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Ended { winner, .. } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    pub fn win_reason(&self) -> Option<WinReason> {
        match self.status {
            GameStatus::Ended { reason, .. } => Some(reason),
            GameStatus::InProgress => None,
        }
    }

    pub fn forbidden_cells(&self) -> Vec<Pos> {
        self.board.positions(CellStatus::Forbidden).collect()
    }

    /// One-line summary for status bars and logs
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Ended { winner, reason } => format!("{} win! {}", winner, reason),
            GameStatus::InProgress => format!("move {}, {} to play", self.counter, self.next_color()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot() {
        let snap = Snapshot::new();
        assert_eq!(snap.counter, 0);
        assert!(snap.history.is_empty());
        assert!(!snap.is_end());
        assert_eq!(snap.winner(), None);
        assert_eq!(snap.win_reason(), None);
        assert_eq!(snap.next_color(), Color::Black);
        assert_eq!(snap.last_move(), None);
        assert!(snap.board.is_board_empty());
    }

    #[test]
    fn test_ended_accessors() {
        let snap = Snapshot {
            status: GameStatus::Ended {
                winner: Color::White,
                reason: WinReason::ForbiddenCapture,
            },
            ..Snapshot::new()
        };
        assert!(snap.is_end());
        assert_eq!(snap.winner(), Some(Color::White));
        assert_eq!(snap.win_reason(), Some(WinReason::ForbiddenCapture));
        assert_eq!(snap.status_message(), "white win! forbidden-capture");
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(WinReason::FiveInRow.to_string(), "five-in-a-row");
        assert_eq!(WinReason::ForbiddenCapture.to_string(), "forbidden-capture");
    }
}
