//! Front-end state around a [`Game`]: status text and the record text box

use tracing::{info, warn};

use crate::board::{Color, Pos};
use crate::config::{EndPolicy, EngineConfig, RuleSet};
use crate::rules::five_line;
use crate::state::{GameStatus, Snapshot, WinReason};
use crate::Game;

/// Main GUI state
pub struct GameState {
    pub game: Game,
    /// Last status line (position readout, rejection, result)
    pub message: Option<String>,
    /// Contents of the record text box
    pub record_text: String,
}

impl GameState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            game: Game::new(config),
            message: None,
            record_text: String::new(),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        self.game.current()
    }

    /// Whether a click on the board can still change the game
    pub fn accepts_moves(&self) -> bool {
        !self.snapshot().is_end() || self.game.config().end_policy == EndPolicy::RecordAfterEnd
    }

    /// Play the clicked cell and describe what happened
    pub fn try_place_stone(&mut self, pos: Pos) {
        let was_end = self.snapshot().is_end();
        let message = match self.game.try_apply_move(pos) {
            Ok(snap) if !was_end && snap.is_end() => snap.status_message(),
            Ok(_) => format!("x : {}, y : {}", pos.x, pos.y),
            Err(rejection) => rejection.to_string(),
        };
        self.message = Some(message);
    }

    pub fn undo(&mut self) {
        self.game.undo();
        self.message = None;
    }

    pub fn redo(&mut self) {
        self.game.redo();
        self.message = None;
    }

    pub fn undo_all(&mut self) {
        self.game.undo_all();
        self.message = None;
    }

    pub fn redo_all(&mut self) {
        self.game.redo_all();
        self.message = None;
    }

    pub fn clear(&mut self) {
        self.game.clear();
        self.message = None;
    }

    /// Put the current record into the text box (and the log)
    pub fn save_record(&mut self) {
        match self.game.serialize_history() {
            Ok(text) => {
                info!(record = %text, "game record saved");
                self.record_text = text;
                self.message = Some("record saved".to_string());
            }
            Err(err) => {
                warn!(%err, "could not save game record");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Replay the record in the text box
    pub fn restore_record(&mut self) {
        let text = std::mem::take(&mut self.record_text);
        self.message = match self.game.restore_from_history(&text) {
            Ok(snap) => Some(snap.status_message()),
            Err(err) => {
                warn!(%err, "could not restore game record");
                self.record_text = text;
                Some(err.to_string())
            }
        };
    }

    /// Cells of the winning five, if the game was won on the board
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let snap = self.snapshot();
        match snap.status {
            GameStatus::Ended {
                winner,
                reason: WinReason::FiveInRow,
            } => winning_line_for(snap, winner),
            _ => None,
        }
    }
}

fn winning_line_for(snap: &Snapshot, winner: Color) -> Option<Vec<Pos>> {
    // after the end the last move is not necessarily the winning one
    snap.history
        .iter()
        .rev()
        .filter(|&&pos| snap.board.status(pos) == winner.status())
        .find_map(|&pos| five_line(&snap.board, pos, winner))
}
