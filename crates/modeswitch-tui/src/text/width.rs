//! Text width utilities.
//!
//! Provides unicode-aware text width calculation in terminal cells.

use unicode_width::UnicodeWidthStr;

/// Get the visual width of a string in terminal cells.
///
/// Accounts for wide characters (CJK, emoji) that take 2 cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Visual width clamped into a `u16` cell count.
pub fn cell_width(s: &str) -> u16 {
    u16::try_from(visual_width(s)).unwrap_or(u16::MAX)
}
