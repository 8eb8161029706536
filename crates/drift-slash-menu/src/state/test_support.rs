//! In-memory host used by the state tests.

use crate::action::MenuKey;
use crate::event::KeyOutcome;
use crate::model::{BlockKind, Content};
use crate::state::SlashMenu;
use crate::traits::{DocumentSurface, PointerListener, SurfaceError, UrlPrompt};
use ratatui::layout::Position;
use std::ops::Range;

/// A single-line document that records every edit primitive it receives.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub text: Vec<char>,
    pub cursor: usize,
    /// When false, `coords_at` fails as if the document was never drawn.
    pub laid_out: bool,
    pub edits: Vec<String>,
    pub installs: usize,
    pub removals: usize,
    pub listening: bool,
    pub prompt_answer: Option<String>,
    pub prompts: Vec<String>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            laid_out: true,
            ..Default::default()
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut host = Self::new();
        host.text = text.chars().collect();
        host.cursor = host.text.len();
        host
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Feed a key to the menu, then apply it to the document if forwarded.
    pub fn press(&mut self, menu: &mut SlashMenu, key: MenuKey) -> KeyOutcome {
        let outcome = menu.handle_key(key, self);
        if outcome.forward_to_document {
            match key {
                MenuKey::Char(c) => {
                    self.text.insert(self.cursor, c);
                    self.cursor += 1;
                }
                MenuKey::Backspace if self.cursor > 0 => {
                    self.cursor -= 1;
                    self.text.remove(self.cursor);
                }
                _ => {}
            }
        }
        outcome
    }

    pub fn type_str(&mut self, menu: &mut SlashMenu, text: &str) {
        for c in text.chars() {
            self.press(menu, MenuKey::Char(c));
        }
    }
}

impl DocumentSurface for FakeHost {
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset).copied()
    }

    fn coords_at(&self, offset: usize) -> Result<Position, SurfaceError> {
        if !self.laid_out {
            return Err(SurfaceError::NotLaidOut(offset));
        }
        Ok(Position::new(offset as u16 + 2, 1))
    }

    fn delete_range(&mut self, range: Range<usize>) -> Result<(), SurfaceError> {
        if range.end > self.text.len() {
            return Err(SurfaceError::OutOfBounds {
                offset: range.end,
                len: self.text.len(),
            });
        }
        self.edits.push(format!("delete {}..{}", range.start, range.end));
        let removed = range.len();
        self.text.drain(range.clone());
        if self.cursor > range.start {
            self.cursor = self.cursor.saturating_sub(removed).max(range.start);
        }
        Ok(())
    }

    fn toggle_block(&mut self, kind: BlockKind) -> Result<(), SurfaceError> {
        self.edits.push(format!("toggle {:?}", kind));
        Ok(())
    }

    fn insert_horizontal_rule(&mut self) -> Result<(), SurfaceError> {
        self.edits.push("rule".to_string());
        Ok(())
    }

    fn insert_image(&mut self, src: &str) -> Result<(), SurfaceError> {
        self.edits.push(format!("image {}", src));
        Ok(())
    }

    fn insert_content(&mut self, content: &Content) -> Result<(), SurfaceError> {
        self.edits.push(format!("insert {}", content.text()));
        Ok(())
    }
}

impl PointerListener for FakeHost {
    fn install_pointer_listener(&mut self) {
        assert!(!self.listening, "pointer listener installed twice");
        self.listening = true;
        self.installs += 1;
    }

    fn remove_pointer_listener(&mut self) {
        assert!(self.listening, "pointer listener removed while not installed");
        self.listening = false;
        self.removals += 1;
    }
}

impl UrlPrompt for FakeHost {
    fn prompt_url(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.prompt_answer.clone()
    }
}
