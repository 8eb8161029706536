//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Capabilities
//! Route keys based on view capabilities. Views with TEXT_INPUT route
//! character keys to text input rather than keybindings, views with
//! CURSOR_NAVIGATION get the arrow keys as cursor movement.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
///
/// # Layers
/// 1. **Priority keys**: Ctrl+C (quit), Esc (close or text escape) - always work
/// 2. **Capabilities**: TEXT_INPUT routes chars to text input
/// 3. **Keymap + Gating**: Look up in keymap, check view accepts action
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event using the three-layer approach
    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.view_stack.last();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            let ctrl_or_alt = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

            if let KeyCode::Char(c) = key.code {
                if !ctrl_or_alt {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }

                // Ctrl+U - Unix line kill (clear line)
                if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'u' {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
            }

            if key.code == KeyCode::Backspace {
                if key.modifiers.contains(KeyModifiers::SUPER) {
                    // Cmd+Backspace on Mac - clear entire line
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                } else {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                }
                return false;
            }

            if key.code == KeyCode::Enter {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                return false;
            }

            if capabilities.supports_item_navigation() && !ctrl_or_alt {
                match key.code {
                    KeyCode::Down => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Next));
                        return false;
                    }
                    KeyCode::Up => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                        return false;
                    }
                    _ => {}
                }
            }

            if capabilities.supports_cursor_navigation() && !ctrl_or_alt {
                let nav = match key.code {
                    KeyCode::Left => Some(NavigationAction::Left),
                    KeyCode::Right => Some(NavigationAction::Right),
                    KeyCode::Home => Some(NavigationAction::LineStart),
                    KeyCode::End => Some(NavigationAction::LineEnd),
                    _ => None,
                };
                if let Some(nav) = nav {
                    dispatcher.dispatch(Action::Navigate(nav));
                    return false;
                }
            }

            // Other keys fall through to Layer 3 (Ctrl+ combinations)
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        for cmd_id in state.keymap.match_key(&key) {
            let action = cmd_id.to_action();

            match view {
                Some(view) if view.accepts_action(&action) => {
                    log::debug!("Layer 3: Command {:?} accepted by view, dispatching", cmd_id);
                    dispatcher.dispatch(action);
                    return false;
                }
                Some(view) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                None => {
                    dispatcher.dispatch(action);
                    return false;
                }
            }
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{EditorAction, StatusBarAction};
    use crate::views::ImagePromptView;
    use drift_config::AppConfig;
    use std::sync::mpsc::{self, Receiver};

    fn setup() -> (AppState, Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (AppState::new(AppConfig::default()), Dispatcher::new(tx), rx)
    }

    fn press(state: &AppState, dispatcher: &Dispatcher, code: KeyCode, modifiers: KeyModifiers) {
        let mut middleware = KeyboardMiddleware::new();
        let action = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)));
        assert!(!middleware.handle(&action, state, dispatcher));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (state, dispatcher, rx) = setup();
        press(&state, &dispatcher, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_chars_become_text_input_in_editor() {
        let (state, dispatcher, rx) = setup();
        press(&state, &dispatcher, KeyCode::Char('/'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Char('/')))
        ));
    }

    #[test]
    fn test_esc_is_text_escape_in_editor() {
        let (state, dispatcher, rx) = setup();
        press(&state, &dispatcher, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Escape))
        ));
    }

    #[test]
    fn test_arrows_become_navigation() {
        let (state, dispatcher, rx) = setup();
        press(&state, &dispatcher, KeyCode::Down, KeyModifiers::NONE);
        press(&state, &dispatcher, KeyCode::Left, KeyModifiers::NONE);
        press(&state, &dispatcher, KeyCode::End, KeyModifiers::NONE);
        assert!(matches!(rx.try_recv(), Ok(Action::Navigate(NavigationAction::Next))));
        assert!(matches!(rx.try_recv(), Ok(Action::Navigate(NavigationAction::Left))));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Navigate(NavigationAction::LineEnd))
        ));
    }

    #[test]
    fn test_keymap_commands_in_editor() {
        let (state, dispatcher, rx) = setup();
        press(&state, &dispatcher, KeyCode::Char('k'), KeyModifiers::CONTROL);
        press(&state, &dispatcher, KeyCode::Home, KeyModifiers::CONTROL);
        press(&state, &dispatcher, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Editor(EditorAction::OpenSlashMenu))
        ));
        assert!(matches!(rx.try_recv(), Ok(Action::Navigate(NavigationAction::ToTop))));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::StatusBar(StatusBarAction::Clear))
        ));
    }

    #[test]
    fn test_gating_rejects_editor_commands_in_prompt() {
        let (mut state, dispatcher, rx) = setup();
        state.view_stack.push(Box::new(ImagePromptView::new()));

        press(&state, &dispatcher, KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert!(rx.try_recv().is_err());

        press(&state, &dispatcher, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (state, dispatcher, _rx) = setup();
        let mut middleware = KeyboardMiddleware::new();
        assert!(middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
    }
}
