//! Pointer Middleware
//!
//! Mouse clicks only arrive while mouse capture is on, which is while the
//! slash menu listens for outside clicks. The active view decides what a
//! click means.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates raw mouse clicks via the active view
pub struct PointerMiddleware;

impl PointerMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PointerMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PointerMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::MouseClicked(position)) = action {
            match state
                .view_stack
                .last()
                .and_then(|view| view.translate_click(*position))
            {
                Some(translated) => dispatcher.dispatch(translated),
                None => log::debug!("Click at {:?} ignored by active view", position),
            }
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::EditorAction;
    use crate::views::ImagePromptView;
    use drift_config::AppConfig;
    use ratatui::layout::Position;
    use std::sync::mpsc;

    #[test]
    fn test_click_goes_to_editor() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut state = AppState::new(AppConfig::default());
        let mut middleware = PointerMiddleware::new();
        let click = Action::Global(GlobalAction::MouseClicked(Position::new(3, 4)));

        assert!(!middleware.handle(&click, &state, &dispatcher));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Editor(EditorAction::Click(p))) if p == Position::new(3, 4)
        ));

        state.view_stack.push(Box::new(ImagePromptView::new()));
        assert!(!middleware.handle(&click, &state, &dispatcher));
        assert!(rx.try_recv().is_err());
    }
}
