//! Trait for prompting the user for a URL.

/// Synchronously asks the user for a URL.
///
/// Returns `None` when the user cancels. Hosts that cannot block (e.g. a
/// terminal UI) can return `None` and remember that a prompt was requested,
/// then insert the image themselves once the user has answered.
pub trait UrlPrompt {
    fn prompt_url(&mut self, message: &str) -> Option<String>;
}
