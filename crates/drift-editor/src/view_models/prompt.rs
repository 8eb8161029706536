//! Prompt View Model
//!
//! Shared by the single-line input popups (image URL, tab rename).

use crate::state::AppState;
use crate::theme::Theme;
use ratatui::style::{Modifier, Style};

/// View model for a single-line input popup
#[derive(Debug, Clone)]
pub struct PromptViewModel {
    pub title: String,
    pub message: String,
    /// Input text, or placeholder when empty
    pub input: String,
    pub input_style: Style,
    /// Column of the text cursor, relative to the input start
    pub cursor_offset: u16,
    pub footer: String,
}

impl PromptViewModel {
    /// Popup asking for an image URL
    pub fn image(state: &AppState) -> Self {
        let prompt = &state.image_prompt;
        Self::build(
            &state.theme,
            " Insert Image ",
            &prompt.message,
            &prompt.input,
            "https://...",
            " Enter insert · Esc cancel ",
        )
    }

    /// Popup renaming the active tab
    pub fn rename_tab(state: &AppState) -> Self {
        Self::build(
            &state.theme,
            " Rename Tab ",
            "New title:",
            &state.rename_tab.input,
            &state.editor.active().title,
            " Enter rename · Esc cancel ",
        )
    }

    fn build(
        theme: &Theme,
        title: &str,
        message: &str,
        input: &str,
        placeholder: &str,
        footer: &str,
    ) -> Self {
        let (shown, input_style) = if input.is_empty() {
            (
                placeholder.to_string(),
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            (input.to_string(), Style::default().fg(theme.text_primary))
        };

        Self {
            title: title.to_string(),
            message: message.to_string(),
            input: shown,
            input_style,
            cursor_offset: input.chars().count() as u16,
            footer: footer.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ImagePromptState;

    #[test]
    fn test_placeholder_when_empty() {
        let mut state = AppState::default();
        state.image_prompt = ImagePromptState::new("Enter image URL:");
        let vm = PromptViewModel::image(&state);
        assert_eq!(vm.message, "Enter image URL:");
        assert_eq!(vm.input, "https://...");
        assert_eq!(vm.cursor_offset, 0);
    }

    #[test]
    fn test_shows_input() {
        let mut state = AppState::default();
        state.image_prompt.input = "a.png".to_string();
        let vm = PromptViewModel::image(&state);
        assert_eq!(vm.input, "a.png");
        assert_eq!(vm.cursor_offset, 5);
    }

    #[test]
    fn test_rename_shows_current_title_as_placeholder() {
        let mut state = AppState::default();
        let vm = PromptViewModel::rename_tab(&state);
        assert_eq!(vm.title, " Rename Tab ");
        assert_eq!(vm.input, "API Documentation");
        assert_eq!(vm.cursor_offset, 0);

        state.rename_tab.input = "Guide".to_string();
        let vm = PromptViewModel::rename_tab(&state);
        assert_eq!(vm.input, "Guide");
        assert_eq!(vm.cursor_offset, 5);
    }
}
