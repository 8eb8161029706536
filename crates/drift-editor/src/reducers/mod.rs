pub mod app_reducer;
pub mod editor_reducer;
pub mod image_prompt_reducer;
pub mod rename_tab_reducer;
pub mod status_bar_reducer;
