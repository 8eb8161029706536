//! Actions module
//!
//! Actions use a tagged architecture:
//! - Generic actions (Navigation, TextInput) that the active view translates
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular view

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod editor;
pub mod image_prompt;
pub mod rename_tab;
pub mod status_bar;

pub use editor::{EditorAction, EditorInput};
pub use global::GlobalAction;
pub use image_prompt::ImagePromptAction;
pub use navigation::NavigationAction;
pub use rename_tab::RenameTabAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Document editor and its slash menu
    Editor(EditorAction),
    /// Image URL prompt popup
    ImagePrompt(ImagePromptAction),
    /// Tab rename popup
    RenameTab(RenameTabAction),
    StatusBar(StatusBarAction),
}
