//! Trigger detection.

use super::config::TriggerPosition;
use super::session::PaletteSession;
use crate::action::MenuKey;
use crate::traits::DocumentSurface;

/// Recognises the trigger character and resolves where the menu opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerDetector {
    trigger: char,
    position: TriggerPosition,
}

impl TriggerDetector {
    pub fn new(trigger: char, position: TriggerPosition) -> Self {
        Self { trigger, position }
    }

    pub fn trigger(&self) -> char {
        self.trigger
    }

    /// Check if `key` types the trigger character
    pub fn is_trigger(&self, key: MenuKey) -> bool {
        key == MenuKey::Char(self.trigger)
    }

    /// Start a session for a trigger typed at the current cursor.
    ///
    /// Must be called before the trigger character is inserted, so the
    /// cursor still points at the offset the trigger will occupy. Returns
    /// `None` when the position is not allowed or has no screen coordinates;
    /// the trigger is then inserted as plain text.
    pub fn detect<S: DocumentSurface + ?Sized>(&self, surface: &S) -> Option<PaletteSession> {
        let cursor = surface.cursor();

        if self.position == TriggerPosition::WordStart && !Self::at_word_start(surface, cursor) {
            log::debug!("Trigger at offset {} is inside a word, ignoring", cursor);
            return None;
        }

        match surface.coords_at(cursor) {
            Ok(anchor) => Some(PaletteSession::new(anchor, cursor)),
            Err(e) => {
                log::debug!("Trigger at offset {} has no anchor: {}", cursor, e);
                None
            }
        }
    }

    fn at_word_start<S: DocumentSurface + ?Sized>(surface: &S, cursor: usize) -> bool {
        match cursor.checked_sub(1).and_then(|prev| surface.char_at(prev)) {
            None => true,
            Some(c) => c.is_whitespace(),
        }
    }
}
