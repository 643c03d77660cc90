//! Game records: the move list as JSON
//!
//! A record is an array of `{"x": .., "y": ..}` objects in play order. No
//! colors or counters are stored; replay derives them from position.

use std::path::Path;

use crate::board::Pos;
use crate::error::{Error, Result};

/// Read record text from a file
pub fn read_record(path: impl AsRef<Path>) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Serialize a move list to record text
pub fn serialize_history(moves: &[Pos]) -> Result<String> {
    Ok(serde_json::to_string(moves)?)
}

/// Parse record text, checking every coordinate is on the board
pub fn parse_history(text: &str) -> Result<Vec<Pos>> {
    let moves: Vec<Pos> = serde_json::from_str(text.trim())?;

    if let Some((index, pos)) = moves.iter().enumerate().find(|(_, pos)| !pos.is_valid()) {
        return Err(Error::OutOfRange {
            index,
            x: pos.x,
            y: pos.y,
        });
    }

    Ok(moves)
}
