//! Events emitted by the slash menu for the host application to handle.

use crate::model::BlockEdit;
use ratatui::layout::Position;

/// Why the menu closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Escape was pressed.
    Cancelled,
    /// A command was executed.
    Executed,
    /// The user clicked outside the menu bounds.
    OutsideClick,
    /// The trigger character was erased (only with [`BackspacePolicy::Track`](crate::BackspacePolicy::Track)).
    TriggerErased,
    /// The host asked the menu to close (view switch, shutdown, ...).
    Requested,
}

/// Events emitted by the slash menu.
///
/// The menu performs its document edits through the host's
/// [`DocumentSurface`](crate::DocumentSurface), so these events are purely
/// informational: status bars, logging, redraw decisions.
#[derive(Debug, Clone, PartialEq)]
pub enum SlashMenuEvent {
    /// The trigger character was typed and the menu opened.
    Opened {
        /// Screen position the menu is anchored to.
        anchor: Position,
    },

    /// The filter query changed and the list was recomputed.
    QueryChanged {
        /// The new query.
        query: String,
        /// Number of commands in the filtered list.
        matches: usize,
    },

    /// A command was executed and the menu closed.
    Executed {
        /// Identifier of the executed command.
        command_id: &'static str,
        /// The edit that was applied.
        edit: BlockEdit,
    },

    /// The menu closed without executing a command.
    Closed(CloseReason),
}

/// Result of feeding one key to the slash menu.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOutcome {
    /// `true` if the host should still apply the key to the document.
    ///
    /// Characters (including the trigger itself) and Backspace always reach
    /// the document; navigation, Enter and Escape are swallowed while the
    /// menu is open.
    pub forward_to_document: bool,
    /// What happened in the menu, if anything.
    pub event: Option<SlashMenuEvent>,
}

impl KeyOutcome {
    /// The key is none of the menu's business.
    pub fn forward() -> Self {
        Self {
            forward_to_document: true,
            event: None,
        }
    }

    /// The key reaches the document and the menu reports an event.
    pub fn forward_with(event: SlashMenuEvent) -> Self {
        Self {
            forward_to_document: true,
            event: Some(event),
        }
    }

    /// The menu consumed the key.
    pub fn consumed(event: Option<SlashMenuEvent>) -> Self {
        Self {
            forward_to_document: false,
            event,
        }
    }
}
