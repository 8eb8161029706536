//! Status Bar Actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBarAction {
    /// Clear all status messages
    Clear,
}
