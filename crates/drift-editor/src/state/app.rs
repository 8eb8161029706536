//! Application State

use crate::keymap::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::{EditorView, View};
use drift_config::AppConfig;

use super::{EditorState, ImagePromptState, RenameTabState, StatusBarState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub editor: EditorState,
    pub image_prompt: ImagePromptState,
    pub rename_tab: RenameTabState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(EditorView::new())],
            editor: EditorState::new(&app_config),
            image_prompt: ImagePromptState::default(),
            rename_tab: RenameTabState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("editor", &self.editor)
            .field("image_prompt", &self.image_prompt)
            .field("rename_tab", &self.rename_tab)
            .field("status_bar", &self.status_bar)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            editor: self.editor.clone(),
            image_prompt: self.image_prompt.clone(),
            rename_tab: self.rename_tab.clone(),
            status_bar: self.status_bar.clone(),
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            app_config: self.app_config.clone(),
        }
    }
}
