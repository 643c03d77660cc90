//! Game rules for Renju
//!
//! This module implements the rule set:
//! - Line scans (contiguous and gapped runs)
//! - Win condition (5-in-a-row, overlines included)
//! - Forbidden moves for Black (double-three, double-four, overline)

pub mod forbidden;
pub mod scan;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{classify_axis, is_forbidden, mark_forbidden, AxisCounts, AxisPattern};
pub use scan::{count_blank_axis, count_blank_row, count_row, GapScan};
pub use win::{axis_run, five_line, is_five, WIN_LENGTH};
