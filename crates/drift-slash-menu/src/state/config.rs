//! Slash menu behaviour settings.

/// Where the trigger character may open the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerPosition {
    /// Anywhere, even in the middle of a word.
    #[default]
    Anywhere,
    /// Only at the start of a block or after whitespace.
    WordStart,
}

/// How Backspace affects the query while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackspacePolicy {
    /// Backspace edits the document only; the query keeps growing.
    #[default]
    Retain,
    /// Backspace also drops the last query character, and closes the menu
    /// when it erases the trigger itself.
    Track,
}

/// Behaviour settings for [`SlashMenu`](crate::SlashMenu).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashMenuConfig {
    /// Character that opens the menu
    pub trigger: char,
    pub trigger_position: TriggerPosition,
    pub backspace: BackspacePolicy,
    /// Message passed to the URL prompt for image commands
    pub image_prompt: String,
}

impl Default for SlashMenuConfig {
    fn default() -> Self {
        Self {
            trigger: '/',
            trigger_position: TriggerPosition::default(),
            backspace: BackspacePolicy::default(),
            image_prompt: "Enter image URL:".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlashMenuConfig::default();
        assert_eq!(config.trigger, '/');
        assert_eq!(config.trigger_position, TriggerPosition::Anywhere);
        assert_eq!(config.backspace, BackspacePolicy::Retain);
        assert_eq!(config.image_prompt, "Enter image URL:");
    }
}
