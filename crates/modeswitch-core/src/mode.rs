//! Application modes.
//!
//! The host application runs in exactly one of three modes at a time. What a
//! mode allows is decided by the host; this module only names the modes and
//! carries their display text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three mutually exclusive operating modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Read-only exploration and conversation.
    Chat,
    /// Plans are proposed but files are left untouched.
    Plan,
    /// Files are edited and commands executed.
    #[default]
    Exec,
}

impl UiMode {
    /// All modes in display order.
    pub const ALL: [UiMode; 3] = [UiMode::Chat, UiMode::Plan, UiMode::Exec];

    /// Lowercase identifier (`"chat"`, `"plan"`, `"exec"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Plan => "plan",
            Self::Exec => "exec",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Plan => "Plan",
            Self::Exec => "Exec",
        }
    }

    /// One-line explanation shown in help text.
    pub fn description(self) -> &'static str {
        match self {
            Self::Chat => "Read-only exploration and conversation",
            Self::Plan => "AI proposes plans but does not edit files",
            Self::Exec => "AI edits files and executes commands",
        }
    }

    /// The mode that follows this one when cycling (chat, plan, exec, chat).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Chat => Self::Plan,
            Self::Plan => Self::Exec,
            Self::Exec => Self::Chat,
        }
    }

    /// Position in [`UiMode::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Chat => 0,
            Self::Plan => 1,
            Self::Exec => 2,
        }
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected chat, plan or exec)")]
pub struct ParseModeError(pub String);

impl FromStr for UiMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "plan" => Ok(Self::Plan),
            "exec" => Ok(Self::Exec),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Static descriptor pairing a mode with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeOption {
    /// The mode this option selects.
    pub mode: UiMode,
    /// Label shown on the option.
    pub label: &'static str,
}

/// The selectable options, in display order.
pub const MODE_OPTIONS: [ModeOption; 3] = [
    ModeOption {
        mode: UiMode::Chat,
        label: "Chat",
    },
    ModeOption {
        mode: UiMode::Plan,
        label: "Plan",
    },
    ModeOption {
        mode: UiMode::Exec,
        label: "Exec",
    },
];
