//! Text Input Translation Middleware
//!
//! Translates generic TextInput actions into view-specific actions
//! using the active view's translate_text_input method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates TextInput actions via the active view
pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::TextInput(input) = action {
            if let Some(view) = state.view_stack.last() {
                if let Some(translated) = view.translate_text_input(*input) {
                    log::debug!(
                        "TextInputMiddleware: Translating {:?} to {:?}",
                        input,
                        translated
                    );
                    dispatcher.dispatch(translated);
                    return false;
                }
            }
            log::debug!("TextInput action not handled by active view: {:?}", input);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{EditorAction, EditorInput, ImagePromptAction, TextInputAction};
    use crate::views::ImagePromptView;
    use drift_config::AppConfig;
    use std::sync::mpsc;

    #[test]
    fn test_translates_via_active_view() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut state = AppState::new(AppConfig::default());
        let mut middleware = TextInputMiddleware::new();

        let action = Action::TextInput(TextInputAction::Confirm);
        assert!(!middleware.handle(&action, &state, &dispatcher));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Editor(EditorAction::Input(EditorInput::Enter)))
        ));

        state.view_stack.push(Box::new(ImagePromptView::new()));
        assert!(!middleware.handle(&action, &state, &dispatcher));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::ImagePrompt(ImagePromptAction::Submit))
        ));
    }
}
