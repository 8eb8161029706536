//! Rename Tab State

/// State of the tab rename popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameTabState {
    /// Title typed so far
    pub input: String,
}

impl RenameTabState {
    /// Start editing from the current title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            input: title.into(),
        }
    }
}
