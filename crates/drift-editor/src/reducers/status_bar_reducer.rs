//! Status Bar Reducer
//!
//! Handles status bar state updates.

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusKind, StatusMessage};
use drift_slash_menu::{find_command, BlockEdit, SlashMenuEvent};

/// Reduce status bar state
pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Clear => {
            state.clear();
        }
    }
    state
}

/// Status message for a slash menu event, if it deserves one
///
/// Opening and filtering are shown live in the status bar, so only
/// executed commands leave a message. Image commands report once the URL
/// prompt is answered.
pub fn message_for_event(event: &SlashMenuEvent) -> Option<StatusMessage> {
    let SlashMenuEvent::Executed { command_id, edit } = event else {
        return None;
    };

    let title = find_command(command_id).map_or(*command_id, |command| command.title);
    let message = match edit {
        BlockEdit::Toggle(_) => format!("Toggled {}", title),
        BlockEdit::HorizontalRule | BlockEdit::Insert(_) => format!("Inserted {}", title),
        BlockEdit::Image => return None,
    };
    Some(StatusMessage::new(StatusKind::Success, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_slash_menu::{BlockKind, CloseReason, Content};
    use ratatui::layout::Position;

    #[test]
    fn test_clear() {
        let mut state = StatusBarState::default();
        state.push(StatusMessage::new(StatusKind::Info, "hello"));
        let state = reduce_status_bar(state, &StatusBarAction::Clear);
        assert!(state.latest().is_none());
    }

    #[test]
    fn test_executed_messages() {
        let toggled = message_for_event(&SlashMenuEvent::Executed {
            command_id: "quote",
            edit: BlockEdit::Toggle(BlockKind::Blockquote),
        })
        .unwrap();
        assert_eq!(toggled.message, "Toggled Quote");
        assert_eq!(toggled.kind, StatusKind::Success);

        let inserted = message_for_event(&SlashMenuEvent::Executed {
            command_id: "board",
            edit: BlockEdit::Insert(Content::Placeholder("Kanban Board".to_string())),
        })
        .unwrap();
        assert_eq!(inserted.message, "Inserted Kanban Board");
    }

    #[test]
    fn test_quiet_events() {
        assert!(message_for_event(&SlashMenuEvent::Opened {
            anchor: Position::new(0, 0)
        })
        .is_none());
        assert!(message_for_event(&SlashMenuEvent::Closed(CloseReason::Cancelled)).is_none());
        assert!(message_for_event(&SlashMenuEvent::Executed {
            command_id: "image",
            edit: BlockEdit::Image,
        })
        .is_none());
    }
}
