//! Palette session state.

use ratatui::layout::Position;

/// State of one open palette, from the trigger to the close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSession {
    /// Screen position captured when the trigger was typed.
    /// Not recomputed while the palette stays open.
    pub anchor: Position,
    /// Document offset the trigger character was typed at.
    pub trigger_offset: usize,
    /// Filter text typed after the trigger.
    pub query: String,
    /// Index into the flattened filtered list.
    pub selected_index: usize,
}

impl PaletteSession {
    pub fn new(anchor: Position, trigger_offset: usize) -> Self {
        Self {
            anchor,
            trigger_offset,
            query: String::new(),
            selected_index: 0,
        }
    }

    /// Move selection down, wrapping to the top
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Move selection up, wrapping to the bottom
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = PaletteSession::new(Position::new(4, 2), 10);
        assert!(session.query.is_empty());
        assert_eq!(session.selected_index, 0);
        assert_eq!(session.trigger_offset, 10);
    }

    #[test]
    fn test_wraparound() {
        let mut session = PaletteSession::new(Position::default(), 0);

        session.select_prev(3);
        assert_eq!(session.selected_index, 2);

        session.select_next(3);
        assert_eq!(session.selected_index, 0);

        session.select_next(3);
        session.select_next(3);
        assert_eq!(session.selected_index, 2);
        session.select_next(3);
        assert_eq!(session.selected_index, 0);
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut session = PaletteSession::new(Position::default(), 0);
        session.select_next(0);
        session.select_prev(0);
        assert_eq!(session.selected_index, 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut session = PaletteSession::new(Position::default(), 0);
        session.select_next(1);
        assert_eq!(session.selected_index, 0);
        session.select_prev(1);
        assert_eq!(session.selected_index, 0);
    }
}
