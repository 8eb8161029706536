pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Global
        KeyBinding::new("ctrl+q", "Ctrl+Q", GlobalQuit),
        // Editor
        KeyBinding::new("ctrl+k", "Ctrl+K", SlashMenuOpen),
        KeyBinding::new("ctrl+home", "Ctrl+Home", DocumentStart),
        KeyBinding::new("ctrl+end", "Ctrl+End", DocumentEnd),
        // Tabs
        KeyBinding::new("ctrl+n", "Ctrl+N", TabNew),
        KeyBinding::new("ctrl+w", "Ctrl+W", TabClose),
        KeyBinding::new("ctrl+pagedown", "Ctrl+PgDn", TabNext),
        KeyBinding::new("ctrl+pageup", "Ctrl+PgUp", TabPrevious),
        KeyBinding::new("f2", "F2", TabRename),
        // Status bar
        KeyBinding::new("ctrl+l", "Ctrl+L", StatusBarClear),
    ];

    Keymap::new(bindings)
}
