//! Extension traits connecting the slash menu to its host.

mod document_surface;
mod pointer_listener;
mod theme_provider;
mod url_prompt;

pub use document_surface::{DocumentSurface, SurfaceError};
pub use pointer_listener::{NoOpPointerListener, PointerListener};
pub use theme_provider::{DefaultTheme, MenuTheme};
pub use url_prompt::UrlPrompt;

/// Everything the menu needs from its host while handling a key.
///
/// Implemented automatically for any type providing the three parts, so a
/// host usually bundles short-lived borrows of its document, pointer state
/// and prompt into one struct.
pub trait SlashMenuHost: DocumentSurface + PointerListener + UrlPrompt {}

impl<T: DocumentSurface + PointerListener + UrlPrompt + ?Sized> SlashMenuHost for T {}
