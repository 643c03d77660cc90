//! GUI module for the Renju board
//!
//! This module provides a native Rust GUI using egui/eframe. It turns pointer
//! input into cell coordinates and draws snapshots; all game logic lives in
//! the engine.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::RenjuApp;
pub use game_state::GameState;
