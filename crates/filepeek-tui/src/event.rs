//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    // Focus
    FocusNext,
    FocusPrev,

    // Widget actions
    /// Open the selector, choose the highlighted entry, or press the button.
    Activate,
    /// Press the preview button regardless of focus.
    Preview,
    /// Choose the catalog entry at a zero-based position.
    SelectIndex(usize),

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            // Esc closes the dropdown or the help overlay
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            // Focus
            (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::FocusNext,
            (KeyCode::BackTab, _) => KeyAction::FocusPrev,

            (KeyCode::Enter, _) => KeyAction::Activate,
            (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::Activate,
            (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::Preview,

            // Direct selection by position
            (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
                KeyAction::SelectIndex(c as usize - '1' as usize)
            }

            // UI toggles
            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,
            (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Selection",
            bindings: vec![
                KeyBinding { keys: "Enter/Space", description: "Open selector / choose" },
                KeyBinding { keys: "j/k ↑/↓", description: "Move in selector" },
                KeyBinding { keys: "1-3", description: "Choose file directly" },
                KeyBinding { keys: "Esc", description: "Close selector" },
            ],
        },
        HelpSection {
            title: "Preview",
            bindings: vec![
                KeyBinding { keys: "p", description: "Preview selected file" },
                KeyBinding { keys: "j/k ↑/↓", description: "Scroll content" },
                KeyBinding { keys: "Ctrl-u/d", description: "Page up/down" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
            ],
        },
        HelpSection {
            title: "General",
            bindings: vec![
                KeyBinding { keys: "Tab/S-Tab", description: "Cycle focus" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}
