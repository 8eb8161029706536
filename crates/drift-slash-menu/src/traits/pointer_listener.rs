//! Trait for the outside-click pointer listener.

/// A global pointer listener used to close the menu on outside clicks.
///
/// The menu installs the listener when it opens and removes it on every
/// close path, so a host never accumulates listeners across open/close
/// cycles. In a terminal host this is typically mouse capture.
pub trait PointerListener {
    /// Start delivering pointer clicks to the host.
    fn install_pointer_listener(&mut self);

    /// Stop delivering pointer clicks.
    fn remove_pointer_listener(&mut self);
}

/// A pointer listener that does nothing, for hosts without a pointer.
#[derive(Debug, Clone, Default)]
pub struct NoOpPointerListener;

impl PointerListener for NoOpPointerListener {
    fn install_pointer_listener(&mut self) {}

    fn remove_pointer_listener(&mut self) {}
}
