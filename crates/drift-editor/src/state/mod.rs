//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod editor;
mod image_prompt;
mod rename_tab;
mod status_bar;

pub use app::AppState;
pub use editor::{DeferredPrompt, EditorHost, EditorState, PointerCapture};
pub use image_prompt::ImagePromptState;
pub use rename_tab::RenameTabState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
