//! Image Prompt State

/// State of the image URL popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePromptState {
    /// Question shown above the input
    pub message: String,
    /// URL typed so far
    pub input: String,
}

impl ImagePromptState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            input: String::new(),
        }
    }

    /// Entered URL, or `None` if blank
    pub fn url(&self) -> Option<&str> {
        let url = self.input.trim();
        (!url.is_empty()).then_some(url)
    }
}
