//! Editor Reducer
//!
//! Every key is offered to the slash menu first; whatever the menu forwards
//! is applied to the active document afterwards.

use crate::actions::{EditorAction, EditorInput};
use crate::domain_models::Document;
use crate::state::{DeferredPrompt, EditorState};
use drift_slash_menu::{CloseReason, MenuLayout, SlashMenuEvent};
use ratatui::layout::Position;

/// Reduce editor state
pub fn reduce_editor(mut state: EditorState, action: &EditorAction) -> EditorState {
    match action {
        EditorAction::Input(input) => handle_input(&mut state, *input),
        EditorAction::OpenSlashMenu => {
            let trigger = state.slash_menu.config().trigger;
            handle_input(&mut state, EditorInput::Char(trigger));
        }
        EditorAction::Click(position) => handle_click(&mut state, *position),
        EditorAction::NewTab => state.open_tab(),
        EditorAction::CloseTab => {
            let index = state.active_tab;
            state.close_tab(index);
        }
        EditorAction::NextTab => state.next_tab(),
        EditorAction::PreviousTab => state.previous_tab(),
    }
    state
}

fn handle_input(state: &mut EditorState, input: EditorInput) {
    // Text never lands in a rule or image, so the trigger offset must not either
    if matches!(input, EditorInput::Char(_)) {
        state.document_mut().ensure_editable();
    }

    let mut prompt = DeferredPrompt::default();
    let (menu, mut host) = state.split_host(&mut prompt);

    let outcome = menu.handle_key(input.to_menu_key(), &mut host);
    let edited = outcome.forward_to_document && input.edits_text();
    if outcome.forward_to_document {
        apply_to_document(host.document, input);
    }

    if edited || is_executed(&outcome.event) {
        state.active_mut().dirty = true;
    }
    state.pending_prompt = prompt.take();
    state.last_event = outcome.event;
}

fn handle_click(state: &mut EditorState, position: Position) {
    let Some(layout) = MenuLayout::compute(&state.slash_menu, state.screen, state.menu_height)
    else {
        // Menu closed, nothing listens for clicks
        return;
    };

    if let Some(index) = layout.command_index_at(position) {
        let mut prompt = DeferredPrompt::default();
        let (menu, mut host) = state.split_host(&mut prompt);
        let event = menu.execute_at(index, &mut host);
        if is_executed(&event) {
            state.active_mut().dirty = true;
        }
        state.last_event = event;
        state.pending_prompt = prompt.take();
        return;
    }

    let event = state
        .slash_menu
        .handle_click(position, layout.area, &mut state.pointer);
    if event == Some(SlashMenuEvent::Closed(CloseReason::OutsideClick)) {
        if let Some(offset) = state.document().offset_at(position) {
            state.document_mut().set_cursor(offset);
        }
    }
    state.last_event = event;
}

fn is_executed(event: &Option<SlashMenuEvent>) -> bool {
    matches!(event, Some(SlashMenuEvent::Executed { .. }))
}

fn apply_to_document(document: &mut Document, input: EditorInput) {
    match input {
        EditorInput::Char(c) => document.insert_char(c),
        EditorInput::Backspace => document.backspace(),
        EditorInput::Enter => document.enter(),
        EditorInput::Escape => {}
        EditorInput::Up => document.move_up(),
        EditorInput::Down => document.move_down(),
        EditorInput::Left => document.move_left(),
        EditorInput::Right => document.move_right(),
        EditorInput::Home => document.move_home(),
        EditorInput::End => document.move_end(),
        EditorInput::DocumentStart => document.move_to_start(),
        EditorInput::DocumentEnd => document.move_to_end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Block, BlockContent};
    use drift_config::{AppConfig, BackspaceMode};
    use drift_slash_menu::{BlockKind, DocumentSurface, HeadingLevel};
    use ratatui::layout::Rect;

    fn editor(config: &AppConfig) -> EditorState {
        let mut state = EditorState::new(config);
        *state.document_mut() = Document::new(vec![Block::paragraph("intro"), Block::paragraph("")]);
        state.screen = Rect::new(0, 0, 80, 24);
        state.set_viewport(Rect::new(1, 1, 78, 21));
        state.document_mut().move_to_end();
        state
    }

    fn input(state: EditorState, input: EditorInput) -> EditorState {
        reduce_editor(state, &EditorAction::Input(input))
    }

    fn type_str(mut state: EditorState, text: &str) -> EditorState {
        for c in text.chars() {
            state = input(state, EditorInput::Char(c));
        }
        state
    }

    fn text_of(state: &EditorState, block: usize) -> &str {
        &state.document().blocks()[block].text
    }

    #[test]
    fn test_trigger_opens_menu_and_reaches_document() {
        let state = type_str(editor(&AppConfig::default()), "/");

        assert!(state.slash_menu.is_open());
        assert!(state.pointer.enabled);
        assert_eq!(text_of(&state, 1), "/");
        assert!(matches!(state.last_event, Some(SlashMenuEvent::Opened { .. })));
    }

    #[test]
    fn test_heading_command_toggles_block() {
        let state = type_str(editor(&AppConfig::default()), "/heading 2");
        assert_eq!(state.slash_menu.query(), "heading 2");

        let state = input(state, EditorInput::Enter);

        assert!(!state.slash_menu.is_open());
        assert!(!state.pointer.enabled);
        assert_eq!(
            state.document().blocks()[1].content,
            BlockContent::Text(BlockKind::Heading(HeadingLevel::Two))
        );
        // Only the trigger is removed, the query text stays
        assert_eq!(text_of(&state, 1), "heading 2");
    }

    #[test]
    fn test_navigation_keys_are_swallowed_while_open() {
        let state = type_str(editor(&AppConfig::default()), "/");
        let cursor = state.document().cursor();

        let state = input(state, EditorInput::Down);
        assert_eq!(state.slash_menu.selected_index(), 1);
        assert_eq!(state.document().cursor(), cursor);

        let state = input(state, EditorInput::Up);
        let state = input(state, EditorInput::Up);
        assert_eq!(
            state.slash_menu.selected_index(),
            state.slash_menu.filtered().len() - 1
        );
    }

    #[test]
    fn test_escape_closes_without_editing() {
        let state = type_str(editor(&AppConfig::default()), "/quo");
        let state = input(state, EditorInput::Escape);

        assert!(!state.slash_menu.is_open());
        assert_eq!(text_of(&state, 1), "/quo");
        assert_eq!(
            state.last_event,
            Some(SlashMenuEvent::Closed(CloseReason::Cancelled))
        );
    }

    #[test]
    fn test_enter_without_matches_is_noop() {
        let state = type_str(editor(&AppConfig::default()), "/xyzzy");
        let state = input(state, EditorInput::Enter);

        assert!(state.slash_menu.is_open());
        assert_eq!(state.document().blocks().len(), 2);
        assert_eq!(text_of(&state, 1), "/xyzzy");
    }

    #[test]
    fn test_enter_when_closed_splits_block() {
        let state = type_str(editor(&AppConfig::default()), "ab");
        let state = input(state, EditorInput::Left);
        let state = input(state, EditorInput::Enter);

        assert_eq!(text_of(&state, 1), "a");
        assert_eq!(text_of(&state, 2), "b");
    }

    #[test]
    fn test_backspace_tracking_closes_on_trigger() {
        let config = AppConfig {
            backspace: BackspaceMode::Track,
            ..Default::default()
        };
        let state = type_str(editor(&config), "/h");
        let state = input(state, EditorInput::Backspace);
        assert!(state.slash_menu.is_open());
        assert_eq!(state.slash_menu.query(), "");

        let state = input(state, EditorInput::Backspace);
        assert!(!state.slash_menu.is_open());
        assert_eq!(text_of(&state, 1), "");
    }

    #[test]
    fn test_open_slash_menu_types_trigger() {
        let state = reduce_editor(
            editor(&AppConfig::default()),
            &EditorAction::OpenSlashMenu,
        );
        assert!(state.slash_menu.is_open());
        assert_eq!(text_of(&state, 1), "/");
    }

    #[test]
    fn test_image_command_requests_prompt() {
        let state = type_str(editor(&AppConfig::default()), "/image");
        let state = input(state, EditorInput::Enter);

        assert_eq!(state.pending_prompt.as_deref(), Some("Enter image URL:"));
        assert_eq!(text_of(&state, 1), "image");
    }

    #[test]
    fn test_command_typed_after_divider_removes_trigger() {
        let mut state = editor(&AppConfig::default());
        *state.document_mut() = Document::new(vec![
            Block::paragraph("intro"),
            Block::rule(),
            Block::paragraph(""),
        ]);
        state.set_viewport(Rect::new(1, 1, 78, 21));
        state.document_mut().move_to_end();
        let state = input(state, EditorInput::Left);
        assert_eq!(state.document().current_block().content, BlockContent::Rule);

        let state = type_str(state, "/h1");
        assert!(state.slash_menu.is_open());
        let state = input(state, EditorInput::Enter);

        assert!(!state.slash_menu.is_open());
        let blocks = state.document().blocks();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[1].content, BlockContent::Rule);
        assert_eq!(
            blocks[2].content,
            BlockContent::Text(BlockKind::Heading(HeadingLevel::One))
        );
        assert_eq!(blocks[2].text, "h1");
        assert!(blocks.iter().all(|block| !block.text.contains('/')));
    }

    #[test]
    fn test_click_on_item_executes_it() {
        let state = type_str(editor(&AppConfig::default()), "/divider");
        let layout =
            MenuLayout::compute(&state.slash_menu, state.screen, state.menu_height).unwrap();
        let inner = layout.inner();

        // Row 0 is the group header, row 1 the only match
        let state = reduce_editor(
            state,
            &EditorAction::Click(Position::new(inner.x + 3, inner.y + 1)),
        );

        assert!(!state.slash_menu.is_open());
        assert!(state
            .document()
            .blocks()
            .iter()
            .any(|block| block.content == BlockContent::Rule));
    }

    #[test]
    fn test_click_outside_closes_and_moves_cursor() {
        let state = type_str(editor(&AppConfig::default()), "/");
        let state = reduce_editor(state, &EditorAction::Click(Position::new(3, 1)));

        assert!(!state.slash_menu.is_open());
        assert!(!state.pointer.enabled);
        assert_eq!(
            state.last_event,
            Some(SlashMenuEvent::Closed(CloseReason::OutsideClick))
        );
        // Column 2 of "intro"
        assert_eq!(state.document().cursor(), 2);
        assert_eq!(state.document().char_at(2), Some('t'));
    }

    #[test]
    fn test_typing_marks_tab_dirty() {
        let state = editor(&AppConfig::default());
        assert!(!state.active().dirty);

        let state = input(state, EditorInput::Left);
        assert!(!state.active().dirty);

        let state = type_str(state, "x");
        assert!(state.active().dirty);
    }

    #[test]
    fn test_executed_command_marks_tab_dirty() {
        let mut state = type_str(editor(&AppConfig::default()), "/");
        state.active_mut().dirty = false;

        let state = input(state, EditorInput::Escape);
        assert!(!state.active().dirty);

        let mut state = type_str(state, "/quote");
        state.active_mut().dirty = false;
        let state = input(state, EditorInput::Enter);
        assert!(state.active().dirty);
    }

    #[test]
    fn test_tab_actions() {
        let state = reduce_editor(editor(&AppConfig::default()), &EditorAction::NewTab);
        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.active_tab, 1);
        assert_eq!(text_of(&state, 0), "New Document");

        let state = reduce_editor(state, &EditorAction::PreviousTab);
        assert_eq!(state.active_tab, 0);
        assert_eq!(text_of(&state, 0), "intro");

        let state = reduce_editor(state, &EditorAction::NextTab);
        let state = reduce_editor(state, &EditorAction::CloseTab);
        assert_eq!(state.tabs.len(), 1);
        assert_eq!(text_of(&state, 0), "intro");

        // The last tab stays open
        let state = reduce_editor(state, &EditorAction::CloseTab);
        assert_eq!(state.tabs.len(), 1);
    }

    #[test]
    fn test_new_tab_is_edited_independently() {
        let state = reduce_editor(editor(&AppConfig::default()), &EditorAction::NewTab);
        let state = type_str(state, "/divider");
        let state = input(state, EditorInput::Enter);

        assert!(state.active().dirty);
        assert!(!state.tabs[0].dirty);
        assert!(state
            .document()
            .blocks()
            .iter()
            .any(|block| block.content == BlockContent::Rule));
        assert!(state.tabs[0]
            .document
            .blocks()
            .iter()
            .all(|block| block.content != BlockContent::Rule));
    }
}
