//! Image URL prompt actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePromptAction {
    Char(char),
    Backspace,
    Clear,
    /// Insert the image with the entered URL
    Submit,
    /// Close the prompt without inserting anything
    Cancel,
}
