//! Rename Tab Reducer
//!
//! Handles typing into the rename popup. Starting, submitting and
//! cancelling touch the tabs and the view stack, so the app reducer
//! handles those.

use crate::actions::RenameTabAction;
use crate::state::RenameTabState;

/// Reduce rename tab state
pub fn reduce_rename_tab(mut state: RenameTabState, action: &RenameTabAction) -> RenameTabState {
    match action {
        RenameTabAction::Char(c) => state.input.push(*c),
        RenameTabAction::Backspace => {
            state.input.pop();
        }
        RenameTabAction::Clear => state.input.clear(),
        RenameTabAction::Start | RenameTabAction::Submit | RenameTabAction::Cancel => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_starts_from_title() {
        let mut state = RenameTabState::new("Guide");
        state = reduce_rename_tab(state, &RenameTabAction::Backspace);
        state = reduce_rename_tab(state, &RenameTabAction::Char('o'));
        assert_eq!(state.input, "Guido");

        state = reduce_rename_tab(state, &RenameTabAction::Clear);
        assert!(state.input.is_empty());
    }
}
