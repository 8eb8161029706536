//! Navigation Translation Middleware
//!
//! Translates generic Navigation actions into view-specific actions
//! using the active view's translate_navigation method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates Navigation actions via the active view
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Navigate(nav) = action {
            if let Some(view) = state.view_stack.last() {
                if let Some(translated) = view.translate_navigation(*nav) {
                    log::debug!(
                        "NavigationMiddleware: Translating {:?} to {:?}",
                        nav,
                        translated
                    );
                    dispatcher.dispatch(translated);
                    return false;
                }
            }
            log::debug!("Navigation action not handled by active view: {:?}", nav);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{EditorAction, EditorInput, NavigationAction};
    use drift_config::AppConfig;
    use std::sync::mpsc;

    #[test]
    fn test_editor_maps_navigation_to_input() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::new(AppConfig::default());
        let mut middleware = NavigationMiddleware::new();

        let action = Action::Navigate(NavigationAction::Previous);
        assert!(!middleware.handle(&action, &state, &dispatcher));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Editor(EditorAction::Input(EditorInput::Up)))
        ));
    }
}
