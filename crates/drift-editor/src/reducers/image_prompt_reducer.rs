//! Image Prompt Reducer
//!
//! Handles typing into the image URL popup. Submitting and cancelling
//! touch the document and view stack, so the app reducer handles those.

use crate::actions::ImagePromptAction;
use crate::state::ImagePromptState;

/// Reduce image prompt state
pub fn reduce_image_prompt(
    mut state: ImagePromptState,
    action: &ImagePromptAction,
) -> ImagePromptState {
    match action {
        ImagePromptAction::Char(c) => state.input.push(*c),
        ImagePromptAction::Backspace => {
            state.input.pop();
        }
        ImagePromptAction::Clear => state.input.clear(),
        ImagePromptAction::Submit | ImagePromptAction::Cancel => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut state = ImagePromptState::new("Enter image URL:");
        for c in "https://x.io/a.png".chars() {
            state = reduce_image_prompt(state, &ImagePromptAction::Char(c));
        }
        state = reduce_image_prompt(state, &ImagePromptAction::Backspace);
        assert_eq!(state.input, "https://x.io/a.pn");
        assert_eq!(state.url(), Some("https://x.io/a.pn"));

        state = reduce_image_prompt(state, &ImagePromptAction::Clear);
        assert_eq!(state.url(), None);
        assert_eq!(state.message, "Enter image URL:");
    }

    #[test]
    fn test_blank_input_is_no_url() {
        let mut state = ImagePromptState::new("?");
        state = reduce_image_prompt(state, &ImagePromptAction::Char(' '));
        assert_eq!(state.url(), None);
    }
}
