//! Catppuccin color palettes for the TUI, with per-mode accents.

use modeswitch_core::{ThemeName, UiMode};
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub warning: Color,

    // Mode accents (active option background) and their hover shades
    pub chat_mode: Color,
    pub chat_mode_hover: Color,
    pub plan_mode: Color,
    pub plan_mode_hover: Color,
    pub exec_mode: Color,
    pub exec_mode_hover: Color,
    /// Text drawn on top of a mode accent.
    pub on_mode: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Theme for a configured name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Accent color of a mode.
    pub fn mode_color(&self, mode: UiMode) -> Color {
        match mode {
            UiMode::Chat => self.chat_mode,
            UiMode::Plan => self.plan_mode,
            UiMode::Exec => self.exec_mode,
        }
    }

    /// Accent color of a mode while hovered.
    pub fn mode_hover_color(&self, mode: UiMode) -> Color {
        match mode {
            UiMode::Chat => self.chat_mode_hover,
            UiMode::Plan => self.plan_mode_hover,
            UiMode::Exec => self.exec_mode_hover,
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244
            overlay: Color::Rgb(69, 71, 90), // #45475a

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)
            warning: Color::Rgb(249, 226, 175), // #f9e2af (yellow)

            chat_mode: Color::Rgb(148, 226, 213),       // #94e2d5 (teal)
            chat_mode_hover: Color::Rgb(137, 220, 235), // #89dceb (sky)
            plan_mode: Color::Rgb(137, 180, 250),       // #89b4fa (blue)
            plan_mode_hover: Color::Rgb(116, 199, 236), // #74c7ec (sapphire)
            exec_mode: Color::Rgb(203, 166, 247),       // #cba6f7 (mauve)
            exec_mode_hover: Color::Rgb(245, 194, 231), // #f5c2e7 (pink)
            on_mode: Color::Rgb(30, 30, 46),

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)
            warning: Color::Rgb(223, 142, 29),  // #df8e1d (yellow)

            chat_mode: Color::Rgb(23, 146, 153),        // #179299 (teal)
            chat_mode_hover: Color::Rgb(32, 159, 181),  // #209fb5 (sapphire)
            plan_mode: Color::Rgb(30, 102, 245),        // #1e66f5 (blue)
            plan_mode_hover: Color::Rgb(114, 135, 253), // #7287fd (lavender)
            exec_mode: Color::Rgb(136, 57, 239),        // #8839ef (mauve)
            exec_mode_hover: Color::Rgb(234, 118, 203), // #ea76cb (pink)
            on_mode: Color::Rgb(239, 241, 245),

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            warning: Color::Yellow,

            chat_mode: Color::Cyan,
            chat_mode_hover: Color::LightCyan,
            plan_mode: Color::Blue,
            plan_mode_hover: Color::LightBlue,
            exec_mode: Color::Magenta,
            exec_mode_hover: Color::LightMagenta,
            on_mode: Color::Black,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}
