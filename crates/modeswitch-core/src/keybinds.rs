//! Keybinding definitions and display formatting.
//!
//! A [`Keybind`] is a logical key combination. It is stored in config files in
//! its `"Ctrl+Shift+M"` form and rendered for display per [`Platform`]. Matching
//! against terminal key events happens in the TUI crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform conventions for displaying key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// macOS modifier symbols (⌃⌥⇧⌘), no separators.
    Mac,
    /// `Ctrl+Alt+Shift+Meta+Key` style.
    #[default]
    Other,
}

impl Platform {
    /// Platform of the running binary.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

/// A key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keybind {
    /// Key name: a single character (`"m"`, `"?"`) or a named key (`"tab"`, `"f1"`).
    pub key: String,
    /// Control modifier.
    pub ctrl: bool,
    /// Shift modifier.
    pub shift: bool,
    /// Alt / Option modifier.
    pub alt: bool,
    /// Meta / Command / Super modifier.
    pub meta: bool,
}

impl Keybind {
    /// A binding with no modifiers. The key is stored lowercased, with
    /// named-key aliases folded (`"Escape"` becomes `"esc"`).
    pub fn key(key: impl AsRef<str>) -> Self {
        Self {
            key: canonical_key(key.as_ref()),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// Add the control modifier.
    #[must_use]
    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Add the shift modifier.
    #[must_use]
    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Add the alt modifier.
    #[must_use]
    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Add the meta modifier.
    #[must_use]
    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Human-readable key name (`"M"`, `"Tab"`, `"F5"`).
    pub fn display_key(&self) -> String {
        let lower = self.key.to_ascii_lowercase();
        let named = match lower.as_str() {
            "tab" => Some("Tab"),
            "esc" | "escape" => Some("Esc"),
            "enter" | "return" => Some("Enter"),
            "space" => Some("Space"),
            "backspace" => Some("Backspace"),
            "delete" | "del" => Some("Delete"),
            "up" => Some("Up"),
            "down" => Some("Down"),
            "left" => Some("Left"),
            "right" => Some("Right"),
            "home" => Some("Home"),
            "end" => Some("End"),
            "pageup" => Some("PageUp"),
            "pagedown" => Some("PageDown"),
            _ => None,
        };
        if let Some(name) = named {
            return name.to_string();
        }

        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Format the combination for display on the given platform.
    pub fn format(&self, platform: Platform) -> String {
        let key = self.display_key();
        match platform {
            Platform::Mac => {
                let mut out = String::new();
                if self.ctrl {
                    out.push('⌃');
                }
                if self.alt {
                    out.push('⌥');
                }
                if self.shift {
                    out.push('⇧');
                }
                if self.meta {
                    out.push('⌘');
                }
                out.push_str(&key);
                out
            }
            Platform::Other => {
                let mut parts: Vec<&str> = Vec::with_capacity(5);
                if self.ctrl {
                    parts.push("Ctrl");
                }
                if self.alt {
                    parts.push("Alt");
                }
                if self.shift {
                    parts.push("Shift");
                }
                if self.meta {
                    parts.push("Meta");
                }
                parts.push(&key);
                parts.join("+")
            }
        }
    }
}

fn canonical_key(key: &str) -> String {
    let lower = key.to_lowercase();
    match lower.as_str() {
        "escape" => "esc".to_string(),
        "return" => "enter".to_string(),
        "del" => "delete".to_string(),
        _ => lower,
    }
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Platform::Other))
    }
}

/// Errors from parsing a keybinding string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeybindError {
    /// The string was empty or had no key after the modifiers.
    #[error("keybinding is missing a key")]
    MissingKey,

    /// A modifier name was not recognized.
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
}

impl FromStr for Keybind {
    type Err = ParseKeybindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // A trailing "+" after a separator is the plus key itself ("Ctrl++").
        let (modifiers, key) = if s == "+" {
            ("", "+")
        } else if let Some(rest) = s.strip_suffix("++") {
            (rest, "+")
        } else {
            s.rsplit_once('+').unwrap_or(("", s))
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ParseKeybindError::MissingKey);
        }

        let mut bind = Keybind::key(key);
        for part in modifiers.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => bind.ctrl = true,
                "shift" => bind.shift = true,
                "alt" | "option" | "opt" => bind.alt = true,
                "meta" | "cmd" | "command" | "super" => bind.meta = true,
                _ => return Err(ParseKeybindError::UnknownModifier(part.to_string())),
            }
        }
        Ok(bind)
    }
}

impl TryFrom<String> for Keybind {
    type Error = ParseKeybindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Keybind> for String {
    fn from(value: Keybind) -> Self {
        value.to_string()
    }
}

/// Logical actions that have a keybinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Cycle to the next mode.
    ToggleMode,
    /// Show or hide the mode help.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

impl KeybindAction {
    /// All actions in display order.
    pub const ALL: [KeybindAction; 3] = [Self::ToggleMode, Self::ToggleHelp, Self::Quit];

    /// Short description for hint bars and listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::ToggleMode => "Cycle mode",
            Self::ToggleHelp => "Mode help",
            Self::Quit => "Quit",
        }
    }

    /// Snake-case identifier used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToggleMode => "toggle_mode",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
        }
    }
}

/// Registry of keybindings, one per action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinds {
    /// Cycle modes.
    #[serde(default = "default_toggle_mode")]
    pub toggle_mode: Keybind,

    /// Pin or unpin the mode help.
    #[serde(default = "default_toggle_help")]
    pub toggle_help: Keybind,

    /// Quit.
    #[serde(default = "default_quit")]
    pub quit: Keybind,
}

fn default_toggle_mode() -> Keybind {
    Keybind::key("tab").shift()
}

fn default_toggle_help() -> Keybind {
    Keybind::key("?")
}

fn default_quit() -> Keybind {
    Keybind::key("c").ctrl()
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            toggle_mode: default_toggle_mode(),
            toggle_help: default_toggle_help(),
            quit: default_quit(),
        }
    }
}

impl Keybinds {
    /// Binding for an action.
    pub fn get(&self, action: KeybindAction) -> &Keybind {
        match action {
            KeybindAction::ToggleMode => &self.toggle_mode,
            KeybindAction::ToggleHelp => &self.toggle_help,
            KeybindAction::Quit => &self.quit,
        }
    }

    /// Replace the binding for an action.
    pub fn set(&mut self, action: KeybindAction, keybind: Keybind) {
        match action {
            KeybindAction::ToggleMode => self.toggle_mode = keybind,
            KeybindAction::ToggleHelp => self.toggle_help = keybind,
            KeybindAction::Quit => self.quit = keybind,
        }
    }

    /// Iterate over `(action, binding)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (KeybindAction, &Keybind)> {
        KeybindAction::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_other_platform() {
        let bind = Keybind::key("m").ctrl().shift();
        assert_eq!(bind.format(Platform::Other), "Ctrl+Shift+M");
        assert_eq!(Keybind::key("tab").shift().format(Platform::Other), "Shift+Tab");
        assert_eq!(Keybind::key("?").format(Platform::Other), "?");
    }

    #[test]
    fn test_format_mac_platform() {
        let bind = Keybind::key("m").ctrl().shift();
        assert_eq!(bind.format(Platform::Mac), "⌃⇧M");
        let all = Keybind::key("k").ctrl().alt().shift().meta();
        assert_eq!(all.format(Platform::Mac), "⌃⌥⇧⌘K");
        assert_eq!(all.format(Platform::Other), "Ctrl+Alt+Shift+Meta+K");
    }

    #[test]
    fn test_display_key_names() {
        assert_eq!(Keybind::key("escape").display_key(), "Esc");
        assert_eq!(Keybind::key("PAGEUP").display_key(), "PageUp");
        assert_eq!(Keybind::key("f5").display_key(), "F5");
    }

    #[test]
    fn test_parse_modifiers() {
        let bind: Keybind = "Ctrl+Shift+M".parse().unwrap();
        assert!(bind.ctrl && bind.shift && !bind.alt && !bind.meta);
        assert_eq!(bind.key, "m");

        let bind: Keybind = "cmd + option + p".parse().unwrap();
        assert!(bind.meta && bind.alt);
        assert_eq!(bind.key, "p");
    }

    #[test]
    fn test_parse_plus_key() {
        let bind: Keybind = "Ctrl++".parse().unwrap();
        assert!(bind.ctrl);
        assert_eq!(bind.key, "+");

        let bind: Keybind = "+".parse().unwrap();
        assert_eq!(bind, Keybind::key("+"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Keybind>(), Err(ParseKeybindError::MissingKey));
        assert_eq!("Ctrl+".parse::<Keybind>(), Err(ParseKeybindError::MissingKey));
        assert_eq!(
            "Hyper+X".parse::<Keybind>(),
            Err(ParseKeybindError::UnknownModifier("Hyper".into()))
        );
    }

    #[test]
    fn test_keybind_serializes_as_string() {
        let bind = Keybind::key("m").ctrl().shift();
        let json = serde_json::to_string(&bind).unwrap();
        assert_eq!(json, "\"Ctrl+Shift+M\"");
        let parsed: Keybind = serde_json::from_str(&json).unwrap();
        assert!(parsed.ctrl && parsed.shift);
        assert!(serde_json::from_str::<Keybind>("\"Bogus+Q\"").is_err());
    }

    #[test]
    fn test_display_parse_round_trip() {
        let mut binds: Vec<Keybind> = Keybinds::default()
            .iter()
            .map(|(_, bind)| bind.clone())
            .collect();
        binds.push(Keybind::key("m").ctrl().shift());
        binds.push(Keybind::key("Escape").alt());
        binds.push(Keybind::key("f5").meta());
        binds.push(Keybind::key("+").ctrl());

        for bind in binds {
            let parsed: Keybind = bind.to_string().parse().unwrap();
            assert_eq!(parsed, bind, "{bind}");
        }
    }

    #[test]
    fn test_key_stored_canonical() {
        assert_eq!(Keybind::key("Tab"), Keybind::key("tab"));
        assert_eq!(Keybind::key("RETURN").key, "enter");
        assert_eq!("Ctrl+C".parse::<Keybind>().unwrap(), Keybind::key("c").ctrl());
    }

    #[test]
    fn test_default_keybinds() {
        let binds = Keybinds::default();
        assert_eq!(
            binds.get(KeybindAction::ToggleMode).format(Platform::Other),
            "Shift+Tab"
        );
        assert_eq!(binds.get(KeybindAction::ToggleHelp).key, "?");
        assert_eq!(binds.get(KeybindAction::Quit).to_string(), "Ctrl+C");
    }

    #[test]
    fn test_set_and_iter() {
        let mut binds = Keybinds::default();
        binds.set(KeybindAction::ToggleMode, Keybind::key("m").ctrl().shift());
        let pairs: Vec<_> = binds.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, KeybindAction::ToggleMode);
        assert_eq!(pairs[0].1.to_string(), "Ctrl+Shift+M");
    }

    #[test]
    fn test_partial_keybinds_fill_defaults() {
        let binds: Keybinds = serde_json::from_str(r#"{"quit": "Ctrl+Q"}"#).unwrap();
        assert_eq!(binds.quit.to_string(), "Ctrl+Q");
        assert_eq!(binds.toggle_mode, Keybind::key("tab").shift());
    }
}
