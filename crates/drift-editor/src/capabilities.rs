//! Panel capability system
//!
//! Views declare what kind of keyboard input they take, and the keyboard
//! middleware routes keys based on these flags instead of on view types.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Character keys are text, not keybindings
        const TEXT_INPUT = 1 << 0;

        /// Up/Down move between items or lines
        const ITEM_NAVIGATION = 1 << 1;

        /// Left/Right/Home/End move a text cursor
        const CURSOR_NAVIGATION = 1 << 2;
    }
}

impl PanelCapabilities {
    /// Check if the view routes character keys to text input
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if the view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if the view has a movable text cursor
    pub fn supports_cursor_navigation(self) -> bool {
        self.contains(Self::CURSOR_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
        assert!(!caps.supports_cursor_navigation());
    }

    #[test]
    fn test_combined_capabilities() {
        let caps = PanelCapabilities::TEXT_INPUT | PanelCapabilities::CURSOR_NAVIGATION;
        assert!(caps.accepts_text_input());
        assert!(caps.supports_cursor_navigation());
        assert!(!caps.supports_item_navigation());
    }
}
