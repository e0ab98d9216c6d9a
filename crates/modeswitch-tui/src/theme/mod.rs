//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast) with mode accents
//! - [`IconSet`], [`BorderSet`] - Glyphs and borders with Nerd/Unicode/ASCII modes

mod colors;
mod icons;

pub use colors::Theme;
pub use icons::{BorderSet, IconMode, IconSet};
