//! Mode selector: chat / plan / exec toggle with a help tooltip.
//!
//! The selector is controlled: it draws the mode it is given and reports
//! picks through a callback, never storing a mode itself. Which layout is
//! drawn depends only on the width of the area it is rendered into:
//!
//! - Full (`width >= compact_below`): `" Chat  Plan  Exec   ? "`, left aligned
//! - Compact: `" C  P  E   ? "`, right aligned
//!
//! Both layouts carry the same three options and the same tooltip text.

use modeswitch_core::{KeybindAction, Keybinds, Platform, UiMode, MODE_OPTIONS};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tracing::debug;

use super::toggle_group::{ToggleGroup, ToggleOption};
use super::tooltip::{Align, HelpIndicator, Tooltip};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};

/// Default width below which the compact layout is used.
pub const DEFAULT_COMPACT_BELOW: u16 = 30;

/// Which layout a given width gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorVariant {
    /// Labeled options.
    Full,
    /// Single-letter options, right aligned.
    Compact,
}

/// Hit regions of a rendered selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorLayout {
    /// Layout in use.
    pub variant: SelectorVariant,
    /// Row the toggle group is drawn into.
    pub group: Rect,
    /// One rect per visible option.
    pub options: Vec<(UiMode, Rect)>,
    /// The `?` trigger, when it fits.
    pub help: Option<Rect>,
}

/// Toggle options for the three modes, styled with the theme's mode accents.
pub fn mode_options(theme: &Theme) -> Vec<ToggleOption<UiMode>> {
    MODE_OPTIONS
        .iter()
        .map(|option| {
            let active = Style::default()
                .fg(theme.on_mode)
                .bg(theme.mode_color(option.mode));
            let hover = Style::default()
                .fg(theme.on_mode)
                .bg(theme.mode_hover_color(option.mode));
            ToggleOption::new(option.mode, option.label, active).hover_style(hover)
        })
        .collect()
}

/// Tooltip body: one paragraph per mode, then the cycling keybinding.
pub fn mode_help_lines(cycle_hint: &str, theme: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(theme.text)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(UiMode::ALL.len() * 2 + 1);
    for mode in UiMode::ALL {
        lines.push(Line::from(vec![
            Span::styled(format!("{} Mode:", mode.label()), heading),
            Span::raw(format!(" {}", mode.description())),
        ]));
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::raw("Cycle modes with: "),
        Span::styled(cycle_hint.to_string(), Style::default().fg(theme.primary)),
    ]));
    lines
}

/// Controlled chat / plan / exec selector.
#[derive(Debug, Clone)]
pub struct ModeSelector<'a> {
    mode: UiMode,
    theme: &'a Theme,
    options: Vec<ToggleOption<UiMode>>,
    icons: IconSet,
    borders: BorderSet,
    cycle_hint: String,
    compact_below: u16,
    style: Style,
    hovered: Option<UiMode>,
    help_visible: bool,
}

impl<'a> ModeSelector<'a> {
    /// Create a selector showing `mode` as active.
    pub fn new(mode: UiMode, theme: &'a Theme) -> Self {
        Self {
            mode,
            theme,
            options: mode_options(theme),
            icons: IconSet::default(),
            borders: BorderSet::default(),
            cycle_hint: Keybinds::default()
                .get(KeybindAction::ToggleMode)
                .format(Platform::current()),
            compact_below: DEFAULT_COMPACT_BELOW,
            style: Style::default(),
            hovered: None,
            help_visible: false,
        }
    }

    /// Glyph and border mode.
    #[must_use]
    pub fn icon_mode(mut self, mode: IconMode) -> Self {
        self.icons = IconSet::new(mode);
        self.borders = BorderSet::new(mode);
        self
    }

    /// Take the cycling hint from a keybinding registry.
    #[must_use]
    pub fn keybinds(mut self, keybinds: &Keybinds, platform: Platform) -> Self {
        self.cycle_hint = keybinds.get(KeybindAction::ToggleMode).format(platform);
        self
    }

    /// Set the cycling hint text directly.
    #[must_use]
    pub fn cycle_hint(mut self, hint: impl Into<String>) -> Self {
        self.cycle_hint = hint.into();
        self
    }

    /// Widths strictly below this use the compact layout.
    #[must_use]
    pub fn compact_below(mut self, width: u16) -> Self {
        self.compact_below = width;
        self
    }

    /// Style applied to the whole selector row before the options are drawn.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Option under the pointer.
    #[must_use]
    pub fn hovered(mut self, hovered: Option<UiMode>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Show the help tooltip.
    #[must_use]
    pub fn help_visible(mut self, visible: bool) -> Self {
        self.help_visible = visible;
        self
    }

    /// The mode being displayed.
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Layout used for an area of the given width.
    pub fn variant_for(&self, width: u16) -> SelectorVariant {
        if width < self.compact_below {
            SelectorVariant::Compact
        } else {
            SelectorVariant::Full
        }
    }

    fn group(&self, variant: SelectorVariant) -> ToggleGroup<'_, UiMode> {
        ToggleGroup::new(&self.options, self.mode, self.theme)
            .compact(variant == SelectorVariant::Compact)
            .icons(self.icons)
            .hovered(self.hovered)
    }

    /// Hit regions for an area.
    pub fn layout(&self, area: Rect) -> SelectorLayout {
        let variant = self.variant_for(area.width);
        let group = self.group(variant);
        let total = group
            .natural_width()
            .saturating_add(1)
            .saturating_add(HelpIndicator::WIDTH);

        let start = match variant {
            SelectorVariant::Full => area.x,
            SelectorVariant::Compact => area.right().saturating_sub(total).max(area.x),
        };
        let row = Rect::new(start, area.y, area.right() - start, area.height.min(1));
        let options = group.layout(row);

        let help_x = options
            .last()
            .map_or(start, |(_, rect)| rect.right().saturating_add(1));
        let help = (row.height > 0 && help_x.saturating_add(HelpIndicator::WIDTH) <= area.right())
            .then(|| Rect::new(help_x, area.y, HelpIndicator::WIDTH, 1));

        SelectorLayout {
            variant,
            group: row,
            options,
            help,
        }
    }

    /// Mode option at a terminal position.
    pub fn option_at(&self, area: Rect, column: u16, row: u16) -> Option<UiMode> {
        let position = Position::new(column, row);
        self.layout(area)
            .options
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(mode, _)| mode)
    }

    /// Whether a terminal position is on the `?` trigger.
    pub fn is_help_trigger(&self, area: Rect, column: u16, row: u16) -> bool {
        self.layout(area)
            .help
            .is_some_and(|rect| rect.contains(Position::new(column, row)))
    }

    /// Report a pick of `mode`.
    ///
    /// Calls `on_change(mode)` exactly once when `mode` is not the displayed
    /// mode. Returns whether it was called.
    pub fn select(&self, mode: UiMode, on_change: impl FnMut(UiMode)) -> bool {
        let changed = self.group(SelectorVariant::Full).select(mode, on_change);
        if changed {
            debug!(from = %self.mode, to = %mode, "mode selected");
        }
        changed
    }

    /// Report a click at a terminal position, if it lands on an option.
    pub fn handle_click(
        &self,
        area: Rect,
        column: u16,
        row: u16,
        on_change: impl FnMut(UiMode),
    ) -> bool {
        match self.option_at(area, column, row) {
            Some(mode) => self.select(mode, on_change),
            None => false,
        }
    }

    /// Tooltip body for the current keybinding.
    pub fn help_lines(&self) -> Vec<Line<'static>> {
        mode_help_lines(&self.cycle_hint, self.theme)
    }

    fn tooltip(&self, anchor: Rect) -> Tooltip<'a> {
        Tooltip::new(self.help_lines(), anchor, self.theme)
            .borders(self.borders)
            .align(Align::Center)
    }

    /// Where the tooltip would be drawn for `area`, within `bounds`.
    pub fn tooltip_area(&self, area: Rect, bounds: Rect) -> Option<Rect> {
        let anchor = self.layout(area).help?;
        let popup = self.tooltip(anchor).popup_area(bounds);
        (!popup.is_empty()).then_some(popup)
    }
}

impl Widget for ModeSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let layout = self.layout(area);
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), self.style);

        self.group(layout.variant).render(layout.group, buf);

        if let Some(help) = layout.help {
            HelpIndicator::new(self.theme, self.icons)
                .open(self.help_visible)
                .render(help, buf);

            // The popup may extend past `area`; it is bounded by the whole buffer.
            if self.help_visible {
                let bounds = buf.area;
                self.tooltip(help).render(bounds, buf);
            }
        }
    }
}
