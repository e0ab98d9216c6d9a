//! Footer status bar widget.
//!
//! Format: `exec                    [Shift+Tab] Cycle mode │ [?] Mode help │ [Ctrl+C] Quit`

use modeswitch_core::{Keybinds, Platform, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Shift+Tab", "Ctrl+C").
    pub key: String,
    /// The action description (e.g., "Cycle mode", "Quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for every configured keybinding, in display order.
pub fn hints_for_keybinds(keybinds: &Keybinds, platform: Platform) -> Vec<KeyHint> {
    keybinds
        .iter()
        .map(|(action, bind)| KeyHint::new(bind.format(platform), action.description()))
        .collect()
}

/// Footer status bar widget.
///
/// Shows: `mode            [key] action │ [key] action`
#[derive(Debug)]
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    mode: Option<UiMode>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            mode: None,
        }
    }

    /// Set mode to display on the left.
    #[must_use]
    pub fn mode(mut self, mode: UiMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(mode) = self.mode {
            left_spans.push(Span::styled(
                mode.as_str(),
                Style::default().fg(self.theme.mode_color(mode)),
            ));
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }

            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.as_str(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.as_str(),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let left_width: usize = left_spans.iter().map(|s| visual_width(&s.content)).sum();
        let right_width: usize = right_spans.iter().map(|s| visual_width(&s.content)).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}
