//! Matching terminal key events against configured keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use modeswitch_core::{KeybindAction, Keybind, Keybinds};

/// Terminal key code for a binding's key, if it names one.
pub fn key_code(bind: &Keybind) -> Option<KeyCode> {
    let lower = bind.key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = bind.key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => {
                    let n = lower.strip_prefix('f')?.parse::<u8>().ok()?;
                    KeyCode::F(n)
                }
            }
        }
    };
    Some(code)
}

/// Whether a key event triggers a binding.
///
/// Letters compare case-insensitively, with an upper-case letter counting as
/// shifted. Other characters ignore shift, since terminals report `?` either
/// way. `Shift+Tab` also matches `BackTab`.
pub fn matches(bind: &Keybind, event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }

    let mods = event.modifiers;
    if bind.ctrl != mods.contains(KeyModifiers::CONTROL)
        || bind.alt != mods.contains(KeyModifiers::ALT)
        || bind.meta != mods.intersects(KeyModifiers::SUPER | KeyModifiers::META)
    {
        return false;
    }

    match (key_code(bind), event.code) {
        (Some(KeyCode::Tab), KeyCode::BackTab) => bind.shift,
        (Some(KeyCode::Char(want)), KeyCode::Char(got)) if want.is_alphabetic() => {
            let shifted = mods.contains(KeyModifiers::SHIFT) || got.is_uppercase();
            want.to_lowercase().eq(got.to_lowercase()) && bind.shift == shifted
        }
        (Some(KeyCode::Char(want)), KeyCode::Char(got)) => want == got,
        (Some(code), got) => code == got && bind.shift == mods.contains(KeyModifiers::SHIFT),
        (None, _) => false,
    }
}

/// The first action whose binding matches the event.
pub fn action_for(keybinds: &Keybinds, event: &KeyEvent) -> Option<KeybindAction> {
    keybinds
        .iter()
        .find(|(_, bind)| matches(bind, event))
        .map(|(action, _)| action)
}
