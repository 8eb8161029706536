//! View Models
//!
//! Pre-computed presentation data, built from state right before rendering.

mod editor;
mod prompt;
mod status_bar;

pub use editor::EditorViewModel;
pub use prompt::PromptViewModel;
pub use status_bar::StatusBarViewModel;
