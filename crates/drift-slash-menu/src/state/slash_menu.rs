//! The slash menu controller.

use super::config::{BackspacePolicy, SlashMenuConfig};
use super::filter::FilteredCommands;
use super::session::PaletteSession;
use super::trigger::TriggerDetector;
use crate::action::MenuKey;
use crate::event::{CloseReason, KeyOutcome, SlashMenuEvent};
use crate::model::{BlockEdit, Command, COMMANDS};
use crate::traits::{PointerListener, SlashMenuHost};
use ratatui::layout::{Position, Rect};

/// Slash menu state machine.
///
/// Closed until the trigger character is typed at a position with screen
/// coordinates; open until a command runs, Escape is pressed, the user
/// clicks outside the menu, or the host closes it.
#[derive(Debug, Clone)]
pub struct SlashMenu {
    config: SlashMenuConfig,
    detector: TriggerDetector,
    commands: &'static [Command],
    session: Option<PaletteSession>,
    filtered: FilteredCommands<'static>,
    listening: bool,
}

impl Default for SlashMenu {
    fn default() -> Self {
        Self::new(SlashMenuConfig::default())
    }
}

impl SlashMenu {
    /// Create a menu offering the built-in command catalogue
    pub fn new(config: SlashMenuConfig) -> Self {
        Self::with_commands(config, COMMANDS)
    }

    /// Create a menu offering a custom command set
    pub fn with_commands(config: SlashMenuConfig, commands: &'static [Command]) -> Self {
        let detector = TriggerDetector::new(config.trigger, config.trigger_position);
        Self {
            config,
            detector,
            commands,
            session: None,
            filtered: FilteredCommands::new(commands, ""),
            listening: false,
        }
    }

    pub fn config(&self) -> &SlashMenuConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PaletteSession> {
        self.session.as_ref()
    }

    pub fn anchor(&self) -> Option<Position> {
        self.session.as_ref().map(|s| s.anchor)
    }

    /// Current query, empty while closed
    pub fn query(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.query.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.selected_index)
    }

    /// Commands matching the current query
    pub fn filtered(&self) -> &FilteredCommands<'static> {
        &self.filtered
    }

    /// The command Enter would run
    pub fn selected_command(&self) -> Option<&'static Command> {
        self.session
            .as_ref()
            .and_then(|s| self.filtered.get(s.selected_index))
    }

    /// Check if the outside-click listener is currently installed
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Feed one key to the menu before it reaches the document.
    ///
    /// The returned [`KeyOutcome`] tells the host whether to apply the key to
    /// the document afterwards.
    pub fn handle_key<H: SlashMenuHost + ?Sized>(
        &mut self,
        key: MenuKey,
        host: &mut H,
    ) -> KeyOutcome {
        if self.detector.is_trigger(key) {
            if let Some(session) = self.detector.detect(&*host) {
                return self.open(session, host);
            }
        }

        if self.session.is_none() {
            return KeyOutcome::forward();
        }

        // A trigger refused by the position policy is plain text, not query
        if self.detector.is_trigger(key) {
            return KeyOutcome::forward();
        }

        match key {
            MenuKey::Char(c) => {
                if let Some(session) = self.session.as_mut() {
                    session.query.push(c);
                }
                KeyOutcome::forward_with(self.refilter())
            }
            MenuKey::Backspace => self.handle_backspace(host),
            MenuKey::Escape => KeyOutcome::consumed(self.close(CloseReason::Cancelled, host)),
            MenuKey::Up => {
                let len = self.filtered.len();
                if let Some(session) = self.session.as_mut() {
                    session.select_prev(len);
                }
                KeyOutcome::consumed(None)
            }
            MenuKey::Down => {
                let len = self.filtered.len();
                if let Some(session) = self.session.as_mut() {
                    session.select_next(len);
                }
                KeyOutcome::consumed(None)
            }
            MenuKey::Enter => KeyOutcome::consumed(self.execute_selected(host)),
            MenuKey::Other => KeyOutcome::forward(),
        }
    }

    /// Run the selected command. No-op when nothing matches.
    pub fn execute_selected<H: SlashMenuHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Option<SlashMenuEvent> {
        let index = self.selected_index();
        self.execute_at(index, host)
    }

    /// Run the command at `index` in the flattened filtered list.
    ///
    /// Removes the trigger character, applies the command's edit and closes
    /// the menu. Edit failures are logged; the menu closes either way.
    pub fn execute_at<H: SlashMenuHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
    ) -> Option<SlashMenuEvent> {
        let trigger_offset = self.session.as_ref()?.trigger_offset;
        let command = self.filtered.get(index)?;

        if host.char_at(trigger_offset) == Some(self.detector.trigger()) {
            if let Err(e) = host.delete_range(trigger_offset..trigger_offset + 1) {
                log::warn!("Failed to remove trigger at {}: {}", trigger_offset, e);
            }
        } else {
            log::debug!("Trigger no longer at offset {}, nothing to remove", trigger_offset);
        }

        let edit = BlockEdit::for_command(command);
        log::debug!("Executing slash command '{}': {:?}", command.id, edit);
        if let Err(e) = edit.apply(host, &self.config.image_prompt) {
            log::warn!("Slash command '{}' failed: {}", command.id, e);
        }

        self.close(CloseReason::Executed, host);

        Some(SlashMenuEvent::Executed {
            command_id: command.id,
            edit,
        })
    }

    /// Handle a pointer click at a screen position.
    ///
    /// `bounds` is the area the menu was last drawn in (see
    /// [`menu_bounds`](crate::menu_bounds)). Clicks inside are ignored;
    /// clicks outside close the menu.
    pub fn handle_click<P: PointerListener + ?Sized>(
        &mut self,
        position: Position,
        bounds: Rect,
        pointer: &mut P,
    ) -> Option<SlashMenuEvent> {
        if !self.is_open() || bounds.contains(position) {
            return None;
        }
        self.close(CloseReason::OutsideClick, pointer)
    }

    /// Close the menu, removing the pointer listener.
    ///
    /// Returns `None` if the menu was already closed.
    pub fn close<P: PointerListener + ?Sized>(
        &mut self,
        reason: CloseReason,
        pointer: &mut P,
    ) -> Option<SlashMenuEvent> {
        let session = self.session.take()?;
        log::debug!(
            "Slash menu closed ({:?}) with query {:?}",
            reason,
            session.query
        );
        self.release_listener(pointer);
        self.filtered = FilteredCommands::new(self.commands, "");
        Some(SlashMenuEvent::Closed(reason))
    }

    /// Close the menu when the host goes away.
    pub fn teardown<P: PointerListener + ?Sized>(&mut self, pointer: &mut P) {
        self.close(CloseReason::Requested, pointer);
        self.release_listener(pointer);
    }

    fn open<H: SlashMenuHost + ?Sized>(
        &mut self,
        session: PaletteSession,
        host: &mut H,
    ) -> KeyOutcome {
        let anchor = session.anchor;
        if self.session.is_some() {
            log::debug!("Slash menu restarted at offset {}", session.trigger_offset);
        } else {
            log::debug!("Slash menu opened at offset {}", session.trigger_offset);
        }
        self.session = Some(session);
        self.filtered = FilteredCommands::new(self.commands, "");

        if !self.listening {
            host.install_pointer_listener();
            self.listening = true;
        }

        KeyOutcome::forward_with(SlashMenuEvent::Opened { anchor })
    }

    fn handle_backspace<P: PointerListener + ?Sized>(&mut self, pointer: &mut P) -> KeyOutcome {
        if self.config.backspace == BackspacePolicy::Retain {
            return KeyOutcome::forward();
        }

        let popped = self
            .session
            .as_mut()
            .and_then(|session| session.query.pop())
            .is_some();

        if popped {
            KeyOutcome::forward_with(self.refilter())
        } else {
            match self.close(CloseReason::TriggerErased, pointer) {
                Some(event) => KeyOutcome::forward_with(event),
                None => KeyOutcome::forward(),
            }
        }
    }

    fn refilter(&mut self) -> SlashMenuEvent {
        let query = self.query().to_string();
        self.filtered = FilteredCommands::new(self.commands, &query);
        if let Some(session) = self.session.as_mut() {
            session.selected_index = 0;
        }
        SlashMenuEvent::QueryChanged {
            query,
            matches: self.filtered.len(),
        }
    }

    fn release_listener<P: PointerListener + ?Sized>(&mut self, pointer: &mut P) {
        if self.listening {
            pointer.remove_pointer_listener();
            self.listening = false;
        }
    }
}
