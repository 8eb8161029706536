//! Editor State
//!
//! Open document tabs, the slash menu, and the host glue the menu edits
//! through.

use crate::domain_models::{Document, DocumentTab};
use drift_config::AppConfig;
use drift_slash_menu::{
    BlockKind, CloseReason, Content, DocumentSurface, PointerListener, SlashMenu, SlashMenuEvent,
    SurfaceError, UrlPrompt,
};
use ratatui::layout::{Position, Rect};
use std::ops::Range;

/// Mouse capture, the terminal's stand-in for a global pointer listener.
///
/// The main loop enables or disables terminal mouse capture to match
/// `enabled` after every action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerCapture {
    pub enabled: bool,
}

impl PointerListener for PointerCapture {
    fn install_pointer_listener(&mut self) {
        log::debug!("Mouse capture requested");
        self.enabled = true;
    }

    fn remove_pointer_listener(&mut self) {
        log::debug!("Mouse capture released");
        self.enabled = false;
    }
}

/// URL prompt that cannot block the event loop.
///
/// Records the request and answers "no URL"; the editor then opens the
/// image prompt popup, which inserts the image itself on submit.
#[derive(Debug, Default)]
pub struct DeferredPrompt {
    requested: Option<String>,
}

impl DeferredPrompt {
    /// Message of the prompt that was requested, if any
    pub fn take(&mut self) -> Option<String> {
        self.requested.take()
    }
}

impl UrlPrompt for DeferredPrompt {
    fn prompt_url(&mut self, message: &str) -> Option<String> {
        self.requested = Some(message.to_string());
        None
    }
}

/// Short-lived bundle of everything the slash menu edits through
pub struct EditorHost<'a> {
    pub document: &'a mut Document,
    pub pointer: &'a mut PointerCapture,
    pub prompt: &'a mut DeferredPrompt,
}

impl DocumentSurface for EditorHost<'_> {
    fn cursor(&self) -> usize {
        self.document.cursor()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.document.char_at(offset)
    }

    fn coords_at(&self, offset: usize) -> Result<Position, SurfaceError> {
        self.document.coords_at(offset)
    }

    fn delete_range(&mut self, range: Range<usize>) -> Result<(), SurfaceError> {
        self.document.delete_range(range)
    }

    fn toggle_block(&mut self, kind: BlockKind) -> Result<(), SurfaceError> {
        self.document.toggle_block(kind)
    }

    fn insert_horizontal_rule(&mut self) -> Result<(), SurfaceError> {
        self.document.insert_horizontal_rule()
    }

    fn insert_image(&mut self, src: &str) -> Result<(), SurfaceError> {
        self.document.insert_image(src)
    }

    fn insert_content(&mut self, content: &Content) -> Result<(), SurfaceError> {
        self.document.insert_content(content)
    }
}

impl PointerListener for EditorHost<'_> {
    fn install_pointer_listener(&mut self) {
        self.pointer.install_pointer_listener();
    }

    fn remove_pointer_listener(&mut self) {
        self.pointer.remove_pointer_listener();
    }
}

impl UrlPrompt for EditorHost<'_> {
    fn prompt_url(&mut self, message: &str) -> Option<String> {
        self.prompt.prompt_url(message)
    }
}

/// Editor state
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Open documents, never empty
    pub tabs: Vec<DocumentTab>,
    /// Index of the tab being edited
    pub active_tab: usize,
    next_tab_id: u64,
    pub slash_menu: SlashMenu,
    pub pointer: PointerCapture,
    /// Full terminal area, used to place the slash menu
    pub screen: Rect,
    /// Maximum visible rows of the slash menu
    pub menu_height: u16,
    /// Message of an image prompt the last command asked for
    pub pending_prompt: Option<String>,
    /// Last slash menu event, picked up by the status bar
    pub last_event: Option<SlashMenuEvent>,
}

impl EditorState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            tabs: vec![DocumentTab::new(0, "API Documentation", Document::starter())],
            active_tab: 0,
            next_tab_id: 1,
            slash_menu: SlashMenu::new(config.slash_menu_config()),
            pointer: PointerCapture::default(),
            screen: Rect::default(),
            menu_height: config.menu_height,
            pending_prompt: None,
            last_event: None,
        }
    }

    /// The tab being edited
    pub fn active(&self) -> &DocumentTab {
        &self.tabs[self.active_tab]
    }

    pub fn active_mut(&mut self) -> &mut DocumentTab {
        &mut self.tabs[self.active_tab]
    }

    pub fn document(&self) -> &Document {
        &self.active().document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.active_mut().document
    }

    /// Borrow the slash menu together with a host over the active document
    pub fn split_host<'a>(
        &'a mut self,
        prompt: &'a mut DeferredPrompt,
    ) -> (&'a mut SlashMenu, EditorHost<'a>) {
        let host = EditorHost {
            document: &mut self.tabs[self.active_tab].document,
            pointer: &mut self.pointer,
            prompt,
        };
        (&mut self.slash_menu, host)
    }

    /// Lay out every open document in the same text area
    pub fn set_viewport(&mut self, viewport: Rect) {
        for tab in &mut self.tabs {
            tab.document.set_viewport(viewport);
        }
    }

    /// Open a new untitled tab after the others and switch to it
    pub fn open_tab(&mut self) {
        self.close_menu();
        let mut tab = DocumentTab::untitled(self.next_tab_id);
        self.next_tab_id += 1;
        tab.document.set_viewport(self.document().viewport());
        log::debug!("Opening tab {}", tab.id);
        self.tabs.push(tab);
        self.active_tab = self.tabs.len() - 1;
    }

    /// Close the tab at `index`.
    ///
    /// The last tab cannot be closed. Closing the active tab activates the
    /// first remaining one. Returns the closed tab.
    pub fn close_tab(&mut self, index: usize) -> Option<DocumentTab> {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            log::debug!("Refusing to close tab {} of {}", index, self.tabs.len());
            return None;
        }
        self.close_menu();

        let closed = self.tabs.remove(index);
        if index == self.active_tab {
            self.active_tab = 0;
        } else if index < self.active_tab {
            self.active_tab -= 1;
        }
        log::debug!("Closed tab {} ({})", closed.id, closed.title);
        Some(closed)
    }

    /// Switch to the tab at `index`
    pub fn select_tab(&mut self, index: usize) {
        if index >= self.tabs.len() || index == self.active_tab {
            return;
        }
        self.close_menu();
        self.active_tab = index;
    }

    /// Switch to the next tab, wrapping around
    pub fn next_tab(&mut self) {
        self.select_tab((self.active_tab + 1) % self.tabs.len());
    }

    /// Switch to the previous tab, wrapping around
    pub fn previous_tab(&mut self) {
        let len = self.tabs.len();
        self.select_tab((self.active_tab + len - 1) % len);
    }

    /// Rename the active tab. Blank titles are ignored.
    pub fn rename_tab(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.active_mut().title = title.to_string();
        true
    }

    /// Close the slash menu without touching the document. The menu is
    /// anchored in the active document, so it closes before the active
    /// document changes.
    pub fn close_menu(&mut self) {
        if let Some(event) = self
            .slash_menu
            .close(CloseReason::Requested, &mut self.pointer)
        {
            self.last_event = Some(event);
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
