//! Keybinding system
//!
//! Maps keyboard input to commands.
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `KeyPattern`: Textual representation of a key (e.g., "ctrl+k", "esc")
//! - `Keymap`: Collection of bindings with matching logic
//!
//! Key patterns are textual and serializable so bindings can live in files.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+k", "shift+tab"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+K"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "G" (case-sensitive, uppercase implies SHIFT)
/// - With modifiers: "ctrl+k", "shift+tab", "ctrl+shift+c"
/// - Special keys: "tab", "enter", "esc", "backspace", "home", "end", arrows
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();
    if pattern.is_empty() || pattern.contains(' ') {
        return None;
    }

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings
    ///
    /// Bindings with unparseable patterns are dropped with a warning.
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed: Vec<_> = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern: {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to this key event, in binding order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                // BackTab arrives with or without SHIFT depending on terminal
                if pattern.code == KeyCode::BackTab {
                    key.code == KeyCode::BackTab
                } else {
                    key.code == pattern.code && key.modifiers == pattern.modifiers
                }
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// Get all bindings
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Find the hint for a specific command (returns first match)
    pub fn hint_for_command(&self, command: CommandId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
    }

    /// Find all hints for a specific command
    pub fn hints_for_command(&self, command: CommandId) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
            .collect()
    }

    /// Get a compact hint string for a command (e.g., "Ctrl+Q/Ctrl+D")
    /// Deduplicates hints and joins with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for hint in self.hints_for_command(command) {
            if !unique_hints.contains(&hint) {
                unique_hints.push(hint);
            }
        }

        if unique_hints.is_empty() {
            return None;
        }
        Some(unique_hints.join("/"))
    }
}
