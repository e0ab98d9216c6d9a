//! Exclusive toggle group widget.
//!
//! Renders a fixed list of options on one row; exactly the option equal to the
//! current value is drawn active. The group holds no selection of its own:
//! [`ToggleGroup::select`] reports the choice through a callback and the caller
//! decides what the next current value is.
//!
//! Full: `" Chat  Plan  Exec "`, compact: `" C  P  E "` (one cell run per option).

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::text::cell_width;
use crate::theme::{IconSet, Theme};

/// A selectable option.
#[derive(Debug, Clone)]
pub struct ToggleOption<T> {
    /// Value reported when the option is selected.
    pub value: T,
    /// Label in the full layout.
    pub label: String,
    /// Label in the compact layout.
    pub short_label: String,
    /// Style of the option while it is the current value.
    pub active_style: Style,
    /// Style of the active option while hovered.
    pub hover_style: Style,
}

impl<T> ToggleOption<T> {
    /// Create an option; the short label defaults to the first character of `label`.
    pub fn new(value: T, label: impl Into<String>, active_style: Style) -> Self {
        let label = label.into();
        let short_label = label.chars().next().map(String::from).unwrap_or_default();
        Self {
            value,
            label,
            short_label,
            active_style,
            hover_style: active_style,
        }
    }

    /// Set the compact label.
    #[must_use]
    pub fn short_label(mut self, short_label: impl Into<String>) -> Self {
        self.short_label = short_label.into();
        self
    }

    /// Set the hovered-while-active style.
    #[must_use]
    pub fn hover_style(mut self, style: Style) -> Self {
        self.hover_style = style;
        self
    }
}

/// Exclusive toggle group over a fixed set of options.
#[derive(Debug, Clone)]
pub struct ToggleGroup<'a, T> {
    options: &'a [ToggleOption<T>],
    value: T,
    theme: &'a Theme,
    icons: IconSet,
    compact: bool,
    hovered: Option<T>,
}

impl<'a, T: Copy + PartialEq> ToggleGroup<'a, T> {
    /// Create a toggle group showing `value` as the current option.
    pub fn new(options: &'a [ToggleOption<T>], value: T, theme: &'a Theme) -> Self {
        Self {
            options,
            value,
            theme,
            icons: IconSet::default(),
            compact: false,
            hovered: None,
        }
    }

    /// Use the compact labels.
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Option under the pointer, if any.
    #[must_use]
    pub fn hovered(mut self, hovered: Option<T>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Set the icon set (ASCII mode brackets the active option).
    #[must_use]
    pub fn icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    /// The current value.
    pub fn value(&self) -> T {
        self.value
    }

    fn label_of<'o>(&self, option: &'o ToggleOption<T>) -> &'o str {
        if self.compact {
            &option.short_label
        } else {
            &option.label
        }
    }

    /// Width of the whole group when nothing is clipped.
    pub fn natural_width(&self) -> u16 {
        self.options
            .iter()
            .map(|o| cell_width(self.label_of(o)).saturating_add(2))
            .fold(0u16, u16::saturating_add)
    }

    fn cells(&self, area: Rect) -> Vec<(&'a ToggleOption<T>, Rect)> {
        let mut cells = Vec::with_capacity(self.options.len());
        if area.height == 0 {
            return cells;
        }

        let mut x = area.x;
        for option in self.options {
            let width = cell_width(self.label_of(option)).saturating_add(2);
            if x.saturating_add(width) > area.right() {
                break;
            }
            cells.push((option, Rect::new(x, area.y, width, 1)));
            x += width;
        }
        cells
    }

    /// Hit regions of the options that fit in `area`, left to right.
    pub fn layout(&self, area: Rect) -> Vec<(T, Rect)> {
        self.cells(area)
            .into_iter()
            .map(|(option, rect)| (option.value, rect))
            .collect()
    }

    /// Option at a terminal position.
    pub fn option_at(&self, area: Rect, column: u16, row: u16) -> Option<T> {
        let position = Position::new(column, row);
        self.layout(area)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(value, _)| value)
    }

    /// Report a selection.
    ///
    /// Calls `on_change` exactly once when `value` is one of the options and
    /// differs from the current value. Returns whether it was called.
    pub fn select(&self, value: T, mut on_change: impl FnMut(T)) -> bool {
        if value == self.value || !self.options.iter().any(|o| o.value == value) {
            return false;
        }
        on_change(value);
        true
    }

    /// Hit-test a click and report the selection.
    pub fn click(&self, area: Rect, column: u16, row: u16, on_change: impl FnMut(T)) -> bool {
        match self.option_at(area, column, row) {
            Some(value) => self.select(value, on_change),
            None => false,
        }
    }

    fn style_for(&self, option: &ToggleOption<T>) -> Style {
        let active = option.value == self.value;
        let hovered = self.hovered == Some(option.value);
        match (active, hovered) {
            (true, false) => option.active_style.add_modifier(Modifier::BOLD),
            (true, true) => option.hover_style.add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(self.theme.text).bg(self.theme.overlay),
            (false, false) => Style::default().fg(self.theme.subtext).bg(self.theme.surface),
        }
    }
}

impl<T: Copy + PartialEq> Widget for ToggleGroup<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (option, rect) in self.cells(area) {
            let label = self.label_of(option);
            let (open, close) = match self.icons.active_brackets() {
                Some(brackets) if option.value == self.value => brackets,
                _ => (" ", " "),
            };
            let content = format!("{open}{label}{close}");
            buf.set_stringn(
                rect.x,
                rect.y,
                content,
                usize::from(rect.width),
                self.style_for(option),
            );
        }
    }
}
