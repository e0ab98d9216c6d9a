//! Tooltip popup and its `?` trigger.
//!
//! The tooltip is drawn over whatever is beneath it, anchored to the trigger:
//! below it when there is room, above otherwise, always kept inside the bounds
//! passed to `render`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget},
};

use crate::text::{cell_width, wrap_lines};
use crate::theme::{BorderSet, IconSet, Theme};

/// Default maximum tooltip width in columns.
pub const DEFAULT_MAX_WIDTH: u16 = 40;

/// Columns taken by borders and padding on each row.
const CHROME_WIDTH: u16 = 4;

/// Horizontal placement relative to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Left edges line up.
    Start,
    /// Centered on the trigger.
    #[default]
    Center,
    /// Right edges line up.
    End,
}

/// The small `?` glyph that opens a tooltip.
#[derive(Debug, Clone, Copy)]
pub struct HelpIndicator<'a> {
    theme: &'a Theme,
    icons: IconSet,
    open: bool,
}

impl<'a> HelpIndicator<'a> {
    /// Cells taken by the indicator (`" ? "`).
    pub const WIDTH: u16 = 3;

    /// Create a new indicator.
    pub fn new(theme: &'a Theme, icons: IconSet) -> Self {
        Self {
            theme,
            icons,
            open: false,
        }
    }

    /// Highlight the indicator while its tooltip is shown.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

impl Widget for HelpIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = if self.open {
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        buf.set_stringn(
            area.x,
            area.y,
            format!(" {} ", self.icons.help()),
            usize::from(area.width),
            style,
        );
    }
}

/// A bordered popup with wrapped body text.
#[derive(Debug, Clone)]
pub struct Tooltip<'a> {
    lines: Vec<Line<'static>>,
    anchor: Rect,
    theme: &'a Theme,
    borders: BorderSet,
    align: Align,
    max_width: u16,
}

impl<'a> Tooltip<'a> {
    /// Create a tooltip for the trigger at `anchor`.
    pub fn new(lines: Vec<Line<'static>>, anchor: Rect, theme: &'a Theme) -> Self {
        Self {
            lines,
            anchor,
            theme,
            borders: BorderSet::default(),
            align: Align::default(),
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Set the border set.
    #[must_use]
    pub fn borders(mut self, borders: BorderSet) -> Self {
        self.borders = borders;
        self
    }

    /// Set the horizontal alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }

    fn content_width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| cell_width(&s.content))
                    .fold(0u16, u16::saturating_add)
            })
            .max()
            .unwrap_or(0)
    }

    fn wrapped(&self, width: u16) -> Vec<Line<'static>> {
        wrap_lines(
            self.lines.clone(),
            usize::from(width.saturating_sub(CHROME_WIDTH)),
        )
    }

    /// Where the popup lands inside `bounds`. Empty when it cannot fit.
    pub fn popup_area(&self, bounds: Rect) -> Rect {
        let width = self
            .content_width()
            .saturating_add(CHROME_WIDTH)
            .min(self.max_width)
            .min(bounds.width);
        if width <= CHROME_WIDTH || bounds.height < 3 {
            return Rect::default();
        }

        let rows = u16::try_from(self.wrapped(width).len()).unwrap_or(u16::MAX);
        let height = rows.saturating_add(2).min(bounds.height);

        let x = match self.align {
            Align::Start => self.anchor.x,
            Align::Center => (self.anchor.x + self.anchor.width / 2).saturating_sub(width / 2),
            Align::End => self.anchor.right().saturating_sub(width),
        };
        let x = x.clamp(bounds.x, bounds.right() - width);

        let y = if self.anchor.bottom().saturating_add(height) <= bounds.bottom() {
            self.anchor.bottom()
        } else if self.anchor.y >= bounds.y.saturating_add(height) {
            self.anchor.y - height
        } else {
            bounds.bottom() - height
        };

        Rect::new(x, y, width, height)
    }
}

impl Widget for Tooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = area.intersection(buf.area);
        let popup = self.popup_area(bounds);
        if popup.is_empty() {
            return;
        }

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.popup())
            .border_style(Style::default().fg(self.theme.border_focused))
            .padding(Padding::horizontal(1))
            .style(Style::default().fg(self.theme.text).bg(self.theme.surface));

        let lines = self.wrapped(popup.width);
        Paragraph::new(lines).block(block).render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;

    fn body() -> Vec<Line<'static>> {
        vec![
            Line::from("First line of help"),
            Line::default(),
            Line::from("Second"),
        ]
    }

    #[test]
    fn test_popup_below_anchor_when_room() {
        let theme = Theme::default();
        let anchor = Rect::new(30, 0, 3, 1);
        let tooltip = Tooltip::new(body(), anchor, &theme);

        let popup = tooltip.popup_area(Rect::new(0, 0, 80, 24));
        // 18 columns of text + chrome, 3 rows + borders
        assert_eq!(popup, Rect::new(20, 1, 22, 5));
    }

    #[test]
    fn test_popup_above_anchor_at_bottom() {
        let theme = Theme::default();
        let anchor = Rect::new(30, 23, 3, 1);
        let popup = Tooltip::new(body(), anchor, &theme).popup_area(Rect::new(0, 0, 80, 24));
        assert_eq!(popup.bottom(), 23);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_popup_clamped_to_bounds() {
        let theme = Theme::default();
        let anchor = Rect::new(78, 0, 2, 1);
        let popup = Tooltip::new(body(), anchor, &theme).popup_area(Rect::new(0, 0, 80, 24));
        assert_eq!(popup.right(), 80);

        let popup = Tooltip::new(body(), Rect::new(0, 0, 2, 1), &theme)
            .align(Align::End)
            .popup_area(Rect::new(0, 0, 80, 24));
        assert_eq!(popup.x, 0);
    }

    #[test]
    fn test_popup_wraps_to_max_width() {
        let theme = Theme::default();
        let lines = vec![Line::from(
            "A long explanation that cannot possibly fit on a single row of a narrow tooltip",
        )];
        let popup = Tooltip::new(lines, Rect::new(0, 0, 1, 1), &theme)
            .max_width(24)
            .popup_area(Rect::new(0, 0, 80, 24));
        assert_eq!(popup.width, 24);
        assert!(popup.height > 3);
    }

    #[test]
    fn test_popup_empty_when_no_room() {
        let theme = Theme::default();
        let tooltip = Tooltip::new(body(), Rect::new(0, 0, 1, 1), &theme);
        assert!(tooltip.popup_area(Rect::new(0, 0, 4, 24)).is_empty());
        assert!(tooltip.popup_area(Rect::new(0, 0, 80, 2)).is_empty());
    }

    #[test]
    fn test_render_draws_box_with_text() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        Tooltip::new(body(), Rect::new(10, 0, 3, 1), &theme)
            .borders(BorderSet::new(IconMode::Unicode))
            .render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains("╭"));
        assert!(text.contains("│ First line of help │"));
        assert!(text.contains("│ Second"));
    }

    #[test]
    fn test_help_indicator_highlights_when_open() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, HelpIndicator::WIDTH, 1);

        let mut buf = Buffer::empty(area);
        HelpIndicator::new(&theme, IconSet::new(IconMode::Ascii)).render(area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "?");
        assert_eq!(buf[(1, 0)].fg, theme.muted);

        let mut buf = Buffer::empty(area);
        HelpIndicator::new(&theme, IconSet::new(IconMode::Ascii))
            .open(true)
            .render(area, &mut buf);
        assert_eq!(buf[(1, 0)].fg, theme.primary);
    }
}
