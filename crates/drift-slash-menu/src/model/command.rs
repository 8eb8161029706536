//! Command descriptors.

use strum::{Display, EnumIter};

/// Category a command is listed under.
///
/// The declaration order is the display order of the groups in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Category {
    Suggested,
    Basic,
    Visual,
    Media,
    Database,
    Collaboration,
    Professional,
    Advanced,
    #[strum(to_string = "AI")]
    Ai,
}

/// A static description of one block-insertion command.
///
/// Commands carry no behaviour; the edit they perform is resolved from
/// [`Command::id`] by [`BlockEdit::for_command`](crate::BlockEdit::for_command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Unique, stable identifier (e.g. `"heading-1"`)
    pub id: &'static str,
    /// Display name
    pub title: &'static str,
    /// One-line help text
    pub description: &'static str,
    /// Extra search terms
    pub keywords: &'static [&'static str],
    pub category: Category,
    /// Show a "NEW" badge
    pub is_new: bool,
    /// Show a "RECENT" badge
    pub is_recent: bool,
}

impl Command {
    /// Create a command without badges
    pub const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        keywords: &'static [&'static str],
        category: Category,
    ) -> Self {
        Self {
            id,
            title,
            description,
            keywords,
            category,
            is_new: false,
            is_recent: false,
        }
    }

    /// Mark the command with a "NEW" badge
    pub const fn new_badge(self) -> Self {
        Self {
            is_new: true,
            ..self
        }
    }

    /// Check if this command matches an already lowercased query.
    ///
    /// A command matches when the query is a substring of its title, of its
    /// description, or of any of its keywords. All comparisons are
    /// case-insensitive.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(query_lower))
    }

    /// Badge text shown next to the title, if any
    pub fn badge(&self) -> Option<&'static str> {
        if self.is_new {
            Some("NEW")
        } else if self.is_recent {
            Some("RECENT")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const HEADING: Command = Command {
        id: "heading-1",
        title: "Heading 1",
        description: "Big section heading",
        keywords: &["heading", "h1", "title", "large"],
        category: Category::Basic,
        is_new: false,
        is_recent: false,
    };

    #[test]
    fn test_matches_title_description_and_keywords() {
        assert!(HEADING.matches("head"));
        assert!(HEADING.matches("section"));
        assert!(HEADING.matches("larg"));
        assert!(!HEADING.matches("bullet"));
    }

    #[test]
    fn test_matches_keyword_case_insensitively() {
        let command = Command {
            keywords: &["UML"],
            ..HEADING
        };
        assert!(command.matches("uml"));
    }

    #[test]
    fn test_category_order_and_labels() {
        let labels: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Suggested",
                "Basic",
                "Visual",
                "Media",
                "Database",
                "Collaboration",
                "Professional",
                "Advanced",
                "AI"
            ]
        );
    }

    #[test]
    fn test_badge() {
        assert_eq!(HEADING.badge(), None);
        assert_eq!(HEADING.new_badge().badge(), Some("NEW"));
        let recent = Command {
            is_recent: true,
            ..HEADING
        };
        assert_eq!(recent.badge(), Some("RECENT"));
        // "NEW" wins when both are set
        assert_eq!(recent.new_badge().badge(), Some("NEW"));
    }
}
