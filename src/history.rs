//! Linear undo/redo over snapshots
//!
//! The undo stack always holds at least the initial empty snapshot; its top
//! is the current position. Pushing a new snapshot discards the redo stack,
//! so there is never more than one timeline.

use tracing::debug;

use crate::state::Snapshot;

#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self {
            undo_stack: vec![Snapshot::new()],
            redo_stack: Vec::new(),
        }
    }

    /// Current snapshot
    #[inline]
    pub fn current(&self) -> &Snapshot {
        // never empty: `undo` keeps the bottom entry
        &self.undo_stack[self.undo_stack.len() - 1]
    }

    /// Record a new position on top of the current one
    pub fn push(&mut self, snapshot: Snapshot) {
        if !self.redo_stack.is_empty() {
            debug!(discarded = self.redo_stack.len(), "redo history invalidated");
            self.redo_stack.clear();
        }
        self.undo_stack.push(snapshot);
    }

    /// Step back one snapshot. Returns false if already at the start.
    pub fn undo(&mut self) -> bool {
        if self.undo_stack.len() <= 1 {
            return false;
        }
        if let Some(snapshot) = self.undo_stack.pop() {
            self.redo_stack.push(snapshot);
        }
        true
    }

    /// Step forward one snapshot. Returns false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(snapshot);
                true
            }
            None => false,
        }
    }

    /// Rewind to the initial snapshot
    pub fn undo_all(&mut self) -> usize {
        let mut steps = 0;
        while self.undo() {
            steps += 1;
        }
        steps
    }

    /// Replay to the most recent snapshot
    pub fn redo_all(&mut self) -> usize {
        let mut steps = 0;
        while self.redo() {
            steps += 1;
        }
        steps
    }

    /// Back to a single empty snapshot with no redo history
    pub fn clear(&mut self) {
        self.undo_stack.truncate(1);
        self.undo_stack[0] = Snapshot::new();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Snapshots after the initial one on the undo side
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len() - 1
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::config::EngineConfig;
    use crate::engine::apply_move;

    fn push_moves(history: &mut History, moves: &[(i32, i32)]) {
        let config = EngineConfig::default();
        for &(x, y) in moves {
            let next = apply_move(history.current(), Pos::new(x, y), &config).unwrap();
            history.push(next);
        }
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert_eq!(history.current(), &Snapshot::new());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::new();
        assert!(!history.undo());
        assert_eq!(history.current(), &Snapshot::new());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = History::new();
        push_moves(&mut history, &[(7, 7), (8, 8), (9, 9)]);
        let tip = history.current().clone();

        assert!(history.undo());
        assert_eq!(history.current().counter, 2);
        assert!(history.redo());
        assert_eq!(history.current(), &tip);
        assert!(!history.redo());
    }

    #[test]
    fn test_undo_all_redo_all() {
        let mut history = History::new();
        push_moves(&mut history, &[(7, 7), (8, 8), (9, 9), (1, 1)]);
        let tip = history.current().clone();

        assert_eq!(history.undo_all(), 4);
        assert_eq!(history.current(), &Snapshot::new());
        assert_eq!(history.redo_depth(), 4);

        assert_eq!(history.redo_all(), 4);
        assert_eq!(history.current(), &tip);
        assert_eq!(history.undo_depth(), 4);
    }

    #[test]
    fn test_push_after_undo_drops_redo() {
        let mut history = History::new();
        push_moves(&mut history, &[(7, 7), (8, 8), (9, 9)]);
        history.undo();
        history.undo();
        push_moves(&mut history, &[(0, 0)]);

        assert!(!history.can_redo());
        assert_eq!(history.current().counter, 2);
        assert_eq!(history.current().history, vec![Pos::new(7, 7), Pos::new(0, 0)]);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        push_moves(&mut history, &[(7, 7), (8, 8)]);
        history.undo();
        history.clear();

        assert_eq!(history.current(), &Snapshot::new());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
