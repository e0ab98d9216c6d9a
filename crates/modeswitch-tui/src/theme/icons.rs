//! Glyphs and border sets for Nerd Fonts, Unicode, and ASCII fallback.
//!
//! ASCII mode is also what `NO_COLOR` selects. Its glyphs must read without color.

use ratatui::symbols::border;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

/// Icon set based on configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Help trigger glyph. Always one cell wide.
    pub fn help(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f059}",
            IconMode::Unicode | IconMode::Ascii => "?",
        }
    }

    /// Brackets drawn around the active option.
    ///
    /// Only ASCII mode needs them, since the other modes rely on color.
    pub fn active_brackets(&self) -> Option<(&'static str, &'static str)> {
        match self.mode {
            IconMode::Ascii => Some(("[", "]")),
            IconMode::Nerd | IconMode::Unicode => None,
        }
    }
}

/// Border sets for the tooltip popup and the host's body pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderSet {
    mode: IconMode,
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Tooltip box: rounded, or square corners in ASCII mode.
    pub fn popup(&self) -> border::Set {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => border::PLAIN,
        }
    }

    /// Body pane: plain lines, doubled in ASCII mode.
    pub fn pane(&self) -> border::Set {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => border::PLAIN,
            IconMode::Ascii => border::DOUBLE,
        }
    }
}
