//! Renju rule engine with a desktop board
//!
//! A deterministic five-in-a-row engine on a fixed 15x15 board:
//! - Black moves first, colors alternate
//! - 5 or more in a row wins, for either color
//! - Double-three, double-four and overline are forbidden for Black;
//!   playing on a forbidden cell loses immediately
//! - Linear undo/redo over immutable snapshots
//!
//! # Architecture
//!
//! - [`board`]: Coordinates, cells and the 15x15 grid
//! - [`rules`]: Line scans, win detection, forbidden-move detection
//! - [`engine`]: The move transition function
//! - [`history`]: Undo/redo stacks of snapshots
//! - [`game`]: Caller-owned game value tying it all together
//! - [`record`]: JSON game records
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use renju::{Game, Pos, WinReason};
//!
//! let mut game = Game::default();
//! for x in 0..4 {
//!     game.apply_move(Pos::new(x, 0)); // black
//!     game.apply_move(Pos::new(x, 9)); // white
//! }
//! let snap = game.apply_move(Pos::new(4, 0));
//! assert_eq!(snap.win_reason(), Some(WinReason::FiveInRow));
//!
//! // rewind and replay
//! game.undo_all();
//! assert_eq!(game.redo_all().counter, 9);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod history;
pub mod record;
pub mod rules;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CellStatus, Color, Pos, BOARD_SIZE, DIRECTIONS};
pub use config::{EndPolicy, EngineConfig, RuleSet};
pub use engine::{apply_move, apply_moves, Rejection};
pub use error::{Error, Result};
pub use game::Game;
pub use history::History;
pub use state::{GameStatus, Snapshot, WinReason};
