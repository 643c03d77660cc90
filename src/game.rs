//! The game as seen by a front-end
//!
//! [`Game`] is an ordinary value owned by its caller: it bundles the
//! configuration with the undo/redo history and exposes every operation a
//! front-end needs. Each operation returns the snapshot to render.

use tracing::{debug, info};

use crate::board::Pos;
use crate::config::EngineConfig;
use crate::engine::{apply_move, Rejection};
use crate::error::Result;
use crate::history::History;
use crate::record::{parse_history, serialize_history};
use crate::state::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct Game {
    config: EngineConfig,
    history: History,
}

impl Game {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            history: History::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Attempt one move, reporting why it was refused
    pub fn try_apply_move(&mut self, pos: Pos) -> std::result::Result<&Snapshot, Rejection> {
        let next = apply_move(self.history.current(), pos, &self.config)?;
        self.history.push(next);
        Ok(self.history.current())
    }

    /// Attempt one move. A refused move leaves the snapshot unchanged.
    pub fn apply_move(&mut self, pos: Pos) -> &Snapshot {
        if let Err(rejection) = self.try_apply_move(pos) {
            debug!(%pos, %rejection, "move rejected");
        }
        self.history.current()
    }

    /// Apply moves in order, each as its own undo step.
    /// Refused moves are skipped and the batch carries on.
    pub fn apply_moves(&mut self, moves: &[Pos]) -> &Snapshot {
        for &pos in moves {
            self.apply_move(pos);
        }
        self.history.current()
    }

    pub fn undo(&mut self) -> &Snapshot {
        if self.history.undo() {
            debug!(counter = self.current().counter, "undo");
        }
        self.history.current()
    }

    pub fn redo(&mut self) -> &Snapshot {
        if self.history.redo() {
            debug!(counter = self.current().counter, "redo");
        }
        self.history.current()
    }

    pub fn undo_all(&mut self) -> &Snapshot {
        let steps = self.history.undo_all();
        debug!(steps, "undo all");
        self.history.current()
    }

    pub fn redo_all(&mut self) -> &Snapshot {
        let steps = self.history.redo_all();
        debug!(steps, "redo all");
        self.history.current()
    }

    /// Reset to an empty board, dropping all history
    pub fn clear(&mut self) -> &Snapshot {
        self.history.clear();
        info!("board cleared");
        self.history.current()
    }

    /// Record text for the moves leading to the current snapshot
    pub fn serialize_history(&self) -> Result<String> {
        serialize_history(&self.current().history)
    }

    /// Clear the board and replay a record.
    ///
    /// The record is validated before anything is cleared, so a malformed
    /// record leaves the game untouched.
    pub fn restore_from_history(&mut self, text: &str) -> Result<&Snapshot> {
        let moves = parse_history(text)?;
        self.history.clear();
        self.apply_moves(&moves);
        info!(moves = moves.len(), counter = self.current().counter, "record restored");
        Ok(self.history.current())
    }
}
