//! Document Tab
//!
//! An open document with its title and unsaved-changes flag. Tabs live only
//! in memory.

use super::Document;

/// Title given to new tabs
pub const UNTITLED: &str = "Untitled Document";

/// One open document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTab {
    /// Stable id, unique within a session
    pub id: u64,
    pub title: String,
    /// Edited since the tab was opened
    pub dirty: bool,
    pub document: Document,
}

impl DocumentTab {
    pub fn new(id: u64, title: impl Into<String>, document: Document) -> Self {
        Self {
            id,
            title: title.into(),
            dirty: false,
            document,
        }
    }

    /// A new tab with the placeholder page
    pub fn untitled(id: u64) -> Self {
        Self::new(id, UNTITLED, Document::untitled())
    }

    /// Label for the tab bar, with a marker for unsaved changes
    pub fn label(&self) -> String {
        if self.dirty {
            format!("{} •", self.title)
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_tab() {
        let tab = DocumentTab::untitled(7);
        assert_eq!(tab.id, 7);
        assert_eq!(tab.title, UNTITLED);
        assert!(!tab.dirty);
        assert_eq!(tab.document.blocks()[0].text, "New Document");
        assert_eq!(tab.document.cursor(), tab.document.len());
    }

    #[test]
    fn test_label_marks_dirty() {
        let mut tab = DocumentTab::new(1, "Guide", Document::default());
        assert_eq!(tab.label(), "Guide");
        tab.dirty = true;
        assert_eq!(tab.label(), "Guide •");
    }
}
