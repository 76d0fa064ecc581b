//! Scoring module - line clear points, leveling, and drop cadence
//!
//! Classic single-table rules: one lock clears 0..=4 rows, each count has a
//! fixed point value multiplied by the current (1-based) level.

use crate::types::{BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINE_SCORES, MAX_CLEAR_ROWS};

/// Points for clearing `lines` rows in one lock at `level`.
///
/// A count above four means the collision/merge path upstream is corrupted,
/// so this asserts with a message rather than indexing out of range.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    assert!(
        lines <= MAX_CLEAR_ROWS,
        "cleared {lines} rows in a single lock; tetromino geometry caps this at {MAX_CLEAR_ROWS}"
    );
    LINE_SCORES[lines] * level
}

/// Level for a running line total: starts at 1, +1 every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / 10
}

/// Gravity interval for a level: 500ms at level 1, 50ms faster per level,
/// floored at 50ms so the threshold never goes non-positive.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
