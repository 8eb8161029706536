use crate::actions::{Action, GlobalAction, ImagePromptAction, RenameTabAction};
use crate::reducers::{
    editor_reducer, image_prompt_reducer, rename_tab_reducer, status_bar_reducer,
};
use crate::state::{AppState, ImagePromptState, RenameTabState, StatusKind, StatusMessage};
use crate::views::{self, ImagePromptView, RenameTabView, ViewId};
use drift_slash_menu::DocumentSurface;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.editor.slash_menu.teardown(&mut state.editor.pointer);
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Resize(area)) => {
            state.editor.screen = *area;
            state.editor.set_viewport(views::document_area(*area));
        }
        Action::Global(GlobalAction::PushView(new_view)) => {
            let is_duplicate = state
                .view_stack
                .last()
                .is_some_and(|top| top.view_id() == new_view.view_id());

            if is_duplicate {
                log::debug!("View already on top of the stack: {:?}", new_view.view_id());
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        Action::Global(GlobalAction::Close) => {
            // Close the top-most view; closing the editor quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.editor.slash_menu.teardown(&mut state.editor.pointer);
                state.running = false;
            }
        }
        Action::ImagePrompt(ImagePromptAction::Submit) => {
            state = submit_image(state);
        }
        Action::ImagePrompt(ImagePromptAction::Cancel) => {
            state = close_image_prompt(state);
            state.status_bar.push(StatusMessage::new(
                StatusKind::Info,
                "Image insertion cancelled",
            ));
        }
        Action::RenameTab(RenameTabAction::Start)
            if state.view_stack.last().map(|v| v.view_id()) != Some(ViewId::RenameTab) =>
        {
            state.editor.close_menu();
            state.rename_tab = RenameTabState::new(state.editor.active().title.clone());
            state.view_stack.push(Box::new(RenameTabView::new()));
        }
        Action::RenameTab(RenameTabAction::Submit) => {
            state = submit_rename(state);
        }
        Action::RenameTab(RenameTabAction::Cancel) => {
            state = close_rename(state);
        }
        _ => {}
    }

    // Run sub-reducers for component-specific actions
    match action {
        Action::Editor(editor_action) => {
            state.editor = editor_reducer::reduce_editor(state.editor, editor_action);
        }
        Action::ImagePrompt(prompt_action) => {
            state.image_prompt =
                image_prompt_reducer::reduce_image_prompt(state.image_prompt, prompt_action);
        }
        Action::RenameTab(rename_action) => {
            state.rename_tab = rename_tab_reducer::reduce_rename_tab(state.rename_tab, rename_action);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, status_action);
        }
        _ => {}
    }

    // Follow-ups the editor asked for while handling the action
    if let Some(event) = state.editor.last_event.take() {
        if let Some(message) = status_bar_reducer::message_for_event(&event) {
            state.status_bar.push(message);
        }
    }
    if let Some(message) = state.editor.pending_prompt.take() {
        state.image_prompt = ImagePromptState::new(message);
        state.view_stack.push(Box::new(ImagePromptView::new()));
    }

    state
}

fn submit_image(mut state: AppState) -> AppState {
    let Some(url) = state.image_prompt.url().map(str::to_string) else {
        log::debug!("Image prompt submitted without URL");
        state = close_image_prompt(state);
        state.status_bar.push(StatusMessage::new(
            StatusKind::Warning,
            "No URL entered, image skipped",
        ));
        return state;
    };

    state = close_image_prompt(state);
    match state.editor.document_mut().insert_image(&url) {
        Ok(()) => {
            state.editor.active_mut().dirty = true;
            state.status_bar.push(StatusMessage::new(
                StatusKind::Success,
                format!("Inserted image {}", url),
            ));
        }
        Err(e) => {
            log::warn!("Failed to insert image {}: {}", url, e);
            state
                .status_bar
                .push(StatusMessage::new(StatusKind::Error, e.to_string()));
        }
    }
    state
}

fn close_image_prompt(mut state: AppState) -> AppState {
    if state.view_stack.last().map(|v| v.view_id()) == Some(ViewId::ImagePrompt) {
        state.view_stack.pop();
    }
    state.image_prompt = ImagePromptState::default();
    state
}

fn submit_rename(mut state: AppState) -> AppState {
    let title = state.rename_tab.input.trim().to_string();
    state = close_rename(state);
    if state.editor.rename_tab(&title) {
        state.status_bar.push(StatusMessage::new(
            StatusKind::Info,
            format!("Renamed tab to {}", title),
        ));
    } else {
        log::debug!("Ignoring blank tab title");
    }
    state
}

fn close_rename(mut state: AppState) -> AppState {
    if state.view_stack.last().map(|v| v.view_id()) == Some(ViewId::RenameTab) {
        state.view_stack.pop();
    }
    state.rename_tab = RenameTabState::default();
    state
}
