//! modeswitch-tui: Terminal mode selector for chat / plan / exec
//!
//! This crate provides:
//! - The [`ModeSelector`] widget with full and compact layouts and a help tooltip
//! - Generic [`ToggleGroup`] and [`Tooltip`] building blocks
//! - Theme, icon and border sets with `NO_COLOR` fallback
//! - A demo host [`App`] that owns the mode and drives the selector

mod app;
pub mod keymap;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::{run_app, App, UiConfig, MIN_HEIGHT, MIN_WIDTH};
pub use modeswitch_core;
pub use theme::{BorderSet, IconMode, IconSet, Theme};
pub use widgets::{
    Align, FooterHints, HelpIndicator, KeyHint, ModeSelector, SelectorLayout, SelectorVariant,
    ToggleGroup, ToggleOption, Tooltip,
};

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modeswitch_core::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the demo TUI.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit, including when the loop fails.
pub fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_config(config);
    info!(mode = %app.mode, "starting tui");

    let result = run_app(&mut terminal, &mut app);

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    info!(mode = %app.mode, "tui exited");
    result.map_err(Into::into)
}

/// Returns the TUI crate version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
