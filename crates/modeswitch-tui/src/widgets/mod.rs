//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`ModeSelector`] - Chat/Plan/Exec selector with responsive layout and help tooltip
//! - [`ToggleGroup`] - Generic exclusive toggle over a fixed set of options
//! - [`Tooltip`], [`HelpIndicator`] - Anchored popup and its `?` trigger
//! - [`FooterHints`] - Bottom keybinding hints

mod footer_hints;
mod mode_selector;
mod toggle_group;
mod tooltip;

pub use footer_hints::{hints_for_keybinds, FooterHints, KeyHint};
pub use mode_selector::{
    mode_help_lines, mode_options, ModeSelector, SelectorLayout, SelectorVariant,
    DEFAULT_COMPACT_BELOW,
};
pub use toggle_group::{ToggleGroup, ToggleOption};
pub use tooltip::{Align, HelpIndicator, Tooltip, DEFAULT_MAX_WIDTH};
