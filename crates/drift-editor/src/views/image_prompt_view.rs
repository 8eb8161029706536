use crate::actions::{Action, ImagePromptAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::PromptViewModel;
use crate::views::prompt_popup::render_prompt;
use crate::views::{View, ViewId};
use ratatui::{layout::Rect, Frame};

/// Floating popup asking for an image URL
#[derive(Debug, Clone)]
pub struct ImagePromptView;

impl ImagePromptView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImagePromptView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ImagePromptView {
    fn view_id(&self) -> ViewId {
        ViewId::ImagePrompt
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render_prompt(&PromptViewModel::image(state), &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => ImagePromptAction::Char(c),
            TextInputAction::Backspace => ImagePromptAction::Backspace,
            TextInputAction::ClearLine => ImagePromptAction::Clear,
            TextInputAction::Escape => ImagePromptAction::Cancel,
            TextInputAction::Confirm => ImagePromptAction::Submit,
        };
        Some(Action::ImagePrompt(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::ImagePrompt(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ImagePromptState;
    use ratatui::{backend::TestBackend, layout::Position, Terminal};

    #[test]
    fn test_renders_message_and_input() {
        let mut state = AppState::default();
        state.image_prompt = ImagePromptState::new("Enter image URL:");
        state.image_prompt.input = "https://x.io/cat.png".to_string();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| ImagePromptView::new().render(&state, f.area(), f))
            .unwrap();

        let buf = terminal.backend().buffer();
        let text: String = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Insert Image"));
        assert!(text.contains("Enter image URL:"));
        assert!(text.contains("https://x.io/cat.png"));
    }

    #[test]
    fn test_translates_text_input() {
        let view = ImagePromptView::new();
        assert!(matches!(
            view.translate_text_input(TextInputAction::Escape),
            Some(Action::ImagePrompt(ImagePromptAction::Cancel))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::ClearLine),
            Some(Action::ImagePrompt(ImagePromptAction::Clear))
        ));
        assert!(view.translate_click(Position::new(0, 0)).is_none());
    }
}
