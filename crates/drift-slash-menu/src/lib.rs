//! # drift-slash-menu
//!
//! A standalone slash-command palette for block-based document editors.
//! Typing the trigger character (`/` by default) opens a filterable,
//! categorized list of block commands anchored at the cursor; confirming
//! a command removes the trigger character and performs a structural edit.
//!
//! ## Design Principles
//!
//! This crate is **instrumented**: it never owns the document, the
//! terminal, or the mouse. The host application hands it the pieces it
//! needs through small traits:
//!
//! - [`DocumentSurface`] for cursor lookups and block edit primitives
//! - [`PointerListener`] for the outside-click listener that only lives
//!   while the menu is open
//! - [`UrlPrompt`] for commands that need user input (images)
//!
//! The menu answers every key with a [`KeyOutcome`] telling the host
//! whether the key should still reach the document, plus an optional
//! [`SlashMenuEvent`] describing what happened.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drift_slash_menu::{MenuKey, SlashMenu, SlashMenuConfig, SlashMenuWidget};
//!
//! let mut menu = SlashMenu::new(SlashMenuConfig::default());
//!
//! // Feed keys before they reach the document
//! let outcome = menu.handle_key(MenuKey::Char('/'), &mut host);
//! if outcome.forward_to_document {
//!     document.insert_char('/');
//! }
//!
//! // Render the overlay on top of the editor
//! frame.render_widget(SlashMenuWidget::new(&menu, &theme), frame.area());
//! ```

pub mod action;
pub mod event;
pub mod model;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::MenuKey;
pub use event::{CloseReason, KeyOutcome, SlashMenuEvent};
pub use model::{
    find_command, BlockEdit, BlockKind, Category, Command, Content, HeadingLevel, COMMANDS,
};
pub use state::{
    filter_commands, group_by_category, BackspacePolicy, CommandGroup, FilteredCommands,
    PaletteSession, SlashMenu, SlashMenuConfig, TriggerDetector, TriggerPosition,
};
pub use traits::{
    DefaultTheme, DocumentSurface, MenuTheme, NoOpPointerListener, PointerListener,
    SlashMenuHost, SurfaceError, UrlPrompt,
};
pub use widget::{menu_bounds, MenuLayout, SlashMenuWidget};
