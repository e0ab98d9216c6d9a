//! Demo host application.
//!
//! The host owns the current mode. The selector only reports picks, and the
//! host writes them back before the next frame:
//!
//! ```text
//! ┌ header: " modeswitch "  [ Chat  Plan  Exec   ? ] ┐
//! │ body: current mode and what it allows            │
//! └ footer: mode  [Shift+Tab] Cycle mode │ ...       ┘
//! ```

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use modeswitch_core::{Config, KeybindAction, Keybinds, Platform, UiMode};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::keymap;
use crate::text::cell_width;
use crate::theme::{BorderSet, IconMode, Theme};
use crate::widgets::{hints_for_keybinds, FooterHints, KeyHint, ModeSelector};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 20;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 6;

const TITLE: &str = " modeswitch ";

/// Header widths below this give the whole row to the selector.
const TITLE_MIN_WIDTH: u16 = 40;

/// UI configuration (from environment or config file).
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Icon mode (Nerd, Unicode, or ASCII).
    pub icons: IconMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl UiConfig {
    /// Create config from environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        let icons = if std::env::var("NO_COLOR").is_ok() {
            IconMode::Ascii
        } else {
            IconMode::Nerd
        };
        Self { icons }
    }

    /// Environment settings, forced to ASCII when the config asks for it.
    pub fn from_config(config: &Config) -> Self {
        if config.ascii {
            Self {
                icons: IconMode::Ascii,
            }
        } else {
            Self::from_env()
        }
    }
}

/// Host application state.
#[derive(Debug)]
pub struct App {
    /// Current mode. Only the host changes it.
    pub mode: UiMode,
    /// Active keybindings.
    pub keybinds: Keybinds,
    /// Platform used to format keybindings.
    pub platform: Platform,
    /// UI configuration.
    pub ui_config: UiConfig,
    /// Theme colors.
    pub theme: Theme,
    /// Border set based on icon mode.
    pub borders: BorderSet,
    /// Selector areas narrower than this use the compact layout.
    pub compact_below: u16,
    /// Option under the mouse pointer.
    pub hovered: Option<UiMode>,
    /// Pointer is over the `?` trigger.
    pub help_hovered: bool,
    /// Help tooltip pinned open from the keyboard or a click.
    pub help_pinned: bool,
    /// Current terminal size.
    pub terminal_size: (u16, u16),
    /// Should the app quit?
    pub should_quit: bool,
}

impl App {
    /// Create an app from a config file and explicit UI settings.
    pub fn new(config: &Config, ui_config: UiConfig) -> Self {
        Self {
            mode: config.default_mode,
            keybinds: config.keybinds.clone(),
            platform: Platform::current(),
            borders: BorderSet::new(ui_config.icons),
            ui_config,
            theme: Theme::from_name(config.theme),
            compact_below: config.compact_below,
            hovered: None,
            help_hovered: false,
            help_pinned: false,
            terminal_size: (80, 24), // Default, updated on first render
            should_quit: false,
        }
    }

    /// Create an app from a config file, reading UI settings from the environment.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, UiConfig::from_config(config))
    }

    /// Check if terminal is too small.
    pub fn is_too_small(&self) -> bool {
        self.terminal_size.0 < MIN_WIDTH || self.terminal_size.1 < MIN_HEIGHT
    }

    /// Whether the help tooltip is shown.
    pub fn help_visible(&self) -> bool {
        self.help_pinned || self.help_hovered
    }

    fn set_mode(&mut self, mode: UiMode) {
        if mode != self.mode {
            info!(from = %self.mode, to = %mode, "mode changed");
            self.mode = mode;
        }
    }

    /// Area the selector occupies on a terminal of the given size.
    pub fn selector_area(&self, area: Rect) -> Rect {
        let title = if area.width >= TITLE_MIN_WIDTH {
            cell_width(TITLE)
        } else {
            0
        };
        Rect::new(area.x + title, area.y, area.width - title, area.height.min(1))
    }

    fn terminal_area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    /// The selector as currently configured.
    pub fn selector(&self) -> ModeSelector<'_> {
        ModeSelector::new(self.mode, &self.theme)
            .icon_mode(self.ui_config.icons)
            .keybinds(&self.keybinds, self.platform)
            .compact_below(self.compact_below)
            .style(Style::default().bg(self.theme.surface))
            .hovered(self.hovered)
            .help_visible(self.help_visible())
    }

    /// Handle keyboard input.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match keymap::action_for(&self.keybinds, &key) {
            Some(KeybindAction::ToggleMode) => self.set_mode(self.mode.next()),
            Some(KeybindAction::ToggleHelp) => {
                self.help_pinned = !self.help_pinned;
                debug!(pinned = self.help_pinned, "help toggled");
            }
            Some(KeybindAction::Quit) => self.should_quit = true,
            None => match key.code {
                // Esc closes pinned help before it quits
                KeyCode::Esc if self.help_pinned => self.help_pinned = false,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Handle mouse input on the selector.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Only the size warning is drawn; there is no selector to hit.
        if self.is_too_small() {
            self.hovered = None;
            self.help_hovered = false;
            return;
        }

        let area = self.selector_area(self.terminal_area());
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let mut picked = None;
                let on_help = {
                    let selector = self.selector();
                    selector.handle_click(area, column, row, |mode| picked = Some(mode));
                    selector.is_help_trigger(area, column, row)
                };
                if let Some(mode) = picked {
                    self.set_mode(mode);
                } else if on_help {
                    self.help_pinned = !self.help_pinned;
                }
            }
            MouseEventKind::Moved => {
                let (hovered, on_help) = {
                    let selector = self.selector();
                    (
                        selector.option_at(area, column, row),
                        selector.is_help_trigger(area, column, row),
                    )
                };
                self.hovered = hovered;
                self.help_hovered = on_help;
            }
            _ => {}
        }
    }

    /// Handle terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Render the whole screen.
    pub fn render(&self, frame: &mut Frame<'_>) {
        let area = frame.area();

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            self.render_too_small(frame, area);
            return;
        }

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_body(frame, body);

        let hints: Vec<KeyHint> = hints_for_keybinds(&self.keybinds, self.platform);
        frame.render_widget(FooterHints::new(&hints, &self.theme).mode(self.mode), footer);

        // Header last so an open tooltip sits above the body and footer.
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.surface)),
            header,
        );
        let selector_area = self.selector_area(header);
        if selector_area.x > header.x {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    TITLE,
                    Style::default()
                        .fg(self.theme.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Rect::new(header.x, header.y, selector_area.x - header.x, 1),
            );
        }
        frame.render_widget(self.selector(), selector_area);
    }

    fn render_body(&self, frame: &mut Frame<'_>, area: Rect) {
        let accent = self.theme.mode_color(self.mode);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.pane())
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled(
                format!(" {} Mode ", self.mode.label()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.theme.base));

        let cycle = self
            .keybinds
            .get(KeybindAction::ToggleMode)
            .format(self.platform);
        let lines = vec![
            Line::from(Span::styled(
                self.mode.description(),
                Style::default().fg(self.theme.text),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Click a mode or press ", Style::default().fg(self.theme.subtext)),
                Span::styled(cycle, Style::default().fg(self.theme.primary)),
                Span::styled(" to switch.", Style::default().fg(self.theme.subtext)),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_too_small(&self, frame: &mut Frame<'_>, area: Rect) {
        let message = format!("Terminal too small ({MIN_WIDTH}x{MIN_HEIGHT} minimum)");
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(self.theme.warning))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            middle,
        );
    }
}

/// Run the app main loop until it quits.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    // Get initial terminal size
    if let Ok(size) = terminal.size() {
        app.terminal_size = (size.width, size.height);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Handle events (16ms poll = ~60fps)
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_app_to_string;
    use crossterm::event::KeyModifiers;
    use modeswitch_core::{Keybind, ThemeName};

    fn test_app() -> App {
        let mut app = App::new(
            &Config::default(),
            UiConfig {
                icons: IconMode::Unicode,
            },
        );
        app.platform = Platform::Other;
        app
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn hover(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_app_from_config() {
        let config = Config {
            default_mode: UiMode::Plan,
            compact_below: 50,
            theme: ThemeName::Latte,
            ascii: true,
            ..Config::default()
        };
        let app = App::from_config(&config);
        assert_eq!(app.mode, UiMode::Plan);
        assert_eq!(app.compact_below, 50);
        assert_eq!(app.ui_config.icons, IconMode::Ascii);
        assert_eq!(app.theme.base, Theme::latte().base);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_cycle_key_walks_modes() {
        let mut app = test_app();
        assert_eq!(app.mode, UiMode::Exec);

        let shift_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        app.handle_key_event(shift_tab);
        assert_eq!(app.mode, UiMode::Chat);
        app.handle_key_event(shift_tab);
        assert_eq!(app.mode, UiMode::Plan);
        app.handle_key_event(shift_tab);
        assert_eq!(app.mode, UiMode::Exec);
    }

    #[test]
    fn test_custom_cycle_key() {
        let mut app = test_app();
        app.keybinds
            .set(KeybindAction::ToggleMode, Keybind::key("m").ctrl().shift());

        app.handle_key_event(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.mode, UiMode::Exec);

        app.handle_key_event(KeyEvent::new(
            KeyCode::Char('M'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(app.mode, UiMode::Chat);
    }

    #[test]
    fn test_help_toggle_and_escape() {
        let mut app = test_app();
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);

        app.handle_key_event(question);
        assert!(app.help_visible());
        app.handle_key_event(question);
        assert!(!app.help_visible());

        // Esc closes pinned help first, then quits
        app.handle_key_event(question);
        app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.help_pinned);
        assert!(!app.should_quit);
        app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selector_area_responsive() {
        let app = test_app();
        assert_eq!(
            app.selector_area(Rect::new(0, 0, 80, 24)),
            Rect::new(12, 0, 68, 1)
        );
        assert_eq!(
            app.selector_area(Rect::new(0, 0, 25, 10)),
            Rect::new(0, 0, 25, 1)
        );
    }

    #[test]
    fn test_click_changes_mode() {
        let mut app = test_app();
        // Full layout after the title: Chat 12..18, Plan 18..24, Exec 24..30
        app.handle_mouse(click(14, 0));
        assert_eq!(app.mode, UiMode::Chat);
        app.handle_mouse(click(20, 0));
        assert_eq!(app.mode, UiMode::Plan);

        // Clicks off the selector are ignored
        app.handle_mouse(click(20, 5));
        assert_eq!(app.mode, UiMode::Plan);
    }

    #[test]
    fn test_click_help_trigger_pins_tooltip() {
        let mut app = test_app();
        app.handle_mouse(click(32, 0));
        assert!(app.help_pinned);
        app.handle_mouse(click(32, 0));
        assert!(!app.help_pinned);
    }

    #[test]
    fn test_mouse_ignored_when_too_small() {
        let mut app = test_app();
        app.handle_mouse(hover(32, 0));
        assert!(app.help_visible());

        app.handle_resize(30, 4);
        app.handle_mouse(click(2, 0));
        assert_eq!(app.mode, UiMode::Exec);
        app.handle_mouse(hover(32, 0));
        assert!(!app.help_visible());
        assert_eq!(app.hovered, None);

        app.handle_resize(80, 24);
        app.handle_mouse(click(14, 0));
        assert_eq!(app.mode, UiMode::Chat);
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut app = test_app();
        app.handle_mouse(hover(20, 0));
        assert_eq!(app.hovered, Some(UiMode::Plan));
        assert!(!app.help_visible());

        app.handle_mouse(hover(32, 0));
        assert_eq!(app.hovered, None);
        assert!(app.help_visible());

        app.handle_mouse(hover(50, 10));
        assert!(!app.help_visible());
    }

    #[test]
    fn test_resize_handling() {
        let mut app = test_app();
        assert_eq!(app.terminal_size, (80, 24));

        app.handle_resize(120, 40);
        assert_eq!(app.terminal_size, (120, 40));
    }

    #[test]
    fn test_is_too_small() {
        let mut app = test_app();
        assert!(!app.is_too_small());

        app.terminal_size = (19, 24);
        assert!(app.is_too_small());

        app.terminal_size = (80, 5);
        assert!(app.is_too_small());

        app.terminal_size = (20, 6);
        assert!(!app.is_too_small());
    }

    #[test]
    fn test_render_full_screen() {
        let app = test_app();
        let screen = render_app_to_string(&app, 80, 12);
        let lines: Vec<&str> = screen.lines().collect();

        assert!(lines[0].starts_with(" modeswitch"));
        assert!(lines[0].contains("Chat  Plan  Exec"));
        assert!(lines[1].contains("Exec Mode"));
        assert!(screen.contains("AI edits files and executes commands"));
        assert!(lines[11].starts_with("exec"));
        assert!(lines[11].ends_with("[Ctrl+C] Quit"));
    }

    #[test]
    fn test_render_narrow_uses_compact_selector() {
        let app = test_app();
        let screen = render_app_to_string(&app, 24, 8);
        let first = screen.lines().next().unwrap_or_default();
        assert!(first.contains("C  P  E"));
        assert!(!first.contains("modeswitch"));
    }

    #[test]
    fn test_render_pinned_help_over_body() {
        let mut app = test_app();
        app.help_pinned = true;
        let screen = render_app_to_string(&app, 80, 20);

        assert!(screen.contains("Chat Mode:"));
        assert!(screen.contains("Cycle modes with: Shift+Tab"));
    }

    #[test]
    fn test_render_too_small() {
        let app = test_app();
        let screen = render_app_to_string(&app, 40, 4);
        assert!(screen.contains("Terminal too small"));
        assert!(!screen.contains("Chat"));
    }

    #[test]
    fn test_ascii_config_forces_ascii_icons() {
        let config = Config {
            ascii: true,
            ..Config::default()
        };
        let ui = UiConfig::from_config(&config);
        assert_eq!(ui.icons, IconMode::Ascii);

        let app = App::new(&config, ui);
        assert_eq!(app.borders.mode(), IconMode::Ascii);
        let screen = render_app_to_string(&app, 60, 8);
        assert!(screen.contains("[Exec]"));
        assert!(screen.contains("╔"));
    }
}
