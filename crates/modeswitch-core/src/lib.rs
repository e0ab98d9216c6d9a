//! modeswitch-core: Headless types for the modeswitch mode selector
//!
//! This crate provides the pieces that do not depend on a terminal:
//! - The three application modes and their display text
//! - Keybinding definitions and platform-aware formatting
//! - Configuration loading and saving

pub mod config;
pub mod keybinds;
pub mod mode;

// Re-export commonly used types
pub use config::{Config, ConfigError, ThemeName, CONFIG_DIR, CONFIG_FILE};
pub use keybinds::{Keybind, KeybindAction, Keybinds, ParseKeybindError, Platform};
pub use mode::{ModeOption, ParseModeError, UiMode, MODE_OPTIONS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
