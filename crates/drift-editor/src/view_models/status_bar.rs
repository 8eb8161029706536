//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::command_id::CommandId;
use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// Commands advertised on the right of the status bar
const HINT_COMMANDS: [CommandId; 2] = [CommandId::SlashMenuOpen, CommandId::GlobalQuit];

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Emoji/icon for the status
    pub emoji: &'static str,
    /// The message text
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// What the cursor is in, or the live slash menu query
    pub context: String,
    /// Key hints as (keys, title) pairs
    pub hints: Vec<(String, &'static str)>,
    /// Foreground style (color based on kind)
    pub message_style: Style,
    /// Background color for the bar
    pub bg_color: Color,
    /// Style for metadata (timestamp, context)
    pub metadata_style: Style,
    pub hint_key_style: Style,
    pub hint_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let editor = &state.editor;

        let context = if editor.slash_menu.is_open() {
            format!(
                "{}{} · {} matches",
                editor.slash_menu.config().trigger,
                editor.slash_menu.query(),
                editor.slash_menu.filtered().len()
            )
        } else {
            editor.document().current_block().label().to_string()
        };

        let hints = HINT_COMMANDS
            .iter()
            .filter_map(|command| {
                state
                    .keymap
                    .compact_hint_for_command(*command)
                    .map(|hint| (hint, command.title()))
            })
            .collect();

        let (emoji, message, timestamp, message_style) = match state.status_bar.latest() {
            Some(msg) => {
                let fg_color = match msg.kind {
                    StatusKind::Success => theme.status_success,
                    StatusKind::Error => theme.status_error,
                    StatusKind::Warning => theme.status_warning,
                    StatusKind::Info => theme.status_info,
                };
                (
                    msg.kind.emoji(),
                    msg.message.clone(),
                    msg.timestamp.format("%H:%M:%S").to_string(),
                    Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                )
            }
            None => (
                "👋",
                format!(
                    "Type {} to insert a block",
                    editor.slash_menu.config().trigger
                ),
                String::new(),
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        };

        Self {
            emoji,
            message,
            timestamp,
            context,
            hints,
            message_style,
            bg_color: theme.bg_secondary,
            metadata_style: Style::default().fg(theme.text_muted),
            hint_key_style: theme.key_hint(),
            hint_style: theme.key_description(),
        }
    }
}
