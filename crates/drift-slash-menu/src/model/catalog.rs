//! Built-in command catalogue
//!
//! The full set of block commands offered by the slash menu. The slice is
//! process-wide static configuration; it is never mutated at runtime.

use super::command::{Category, Command};

/// All built-in commands, in declaration order.
pub static COMMANDS: &[Command] = &[
    // Suggested
    Command::new(
        "enhanced-code",
        "Enhanced Code Block",
        "Code with language selection and filename",
        &["code", "programming", "enhanced", "language"],
        Category::Suggested,
    )
    .new_badge(),
    Command::new(
        "bulleted-list",
        "Bulleted List",
        "Create a simple bulleted list",
        &["list", "bullet", "ul"],
        Category::Suggested,
    ),
    Command::new(
        "checklist",
        "Interactive Checklist",
        "Task list with completion tracking",
        &["todo", "task", "checkbox", "check", "interactive"],
        Category::Suggested,
    )
    .new_badge(),
    Command::new(
        "divider",
        "Divider",
        "Visually divide blocks",
        &["divider", "separator", "hr"],
        Category::Suggested,
    ),
    Command::new(
        "heading-2",
        "Heading 2",
        "Medium section heading",
        &["heading", "h2", "title"],
        Category::Suggested,
    ),
    // Basic blocks
    Command::new(
        "text",
        "Text",
        "Just start writing with plain text",
        &["text", "paragraph", "plain"],
        Category::Basic,
    ),
    Command::new(
        "heading-1",
        "Heading 1",
        "Big section heading",
        &["heading", "h1", "title", "large"],
        Category::Basic,
    ),
    Command::new(
        "heading-3",
        "Heading 3",
        "Small section heading",
        &["heading", "h3", "title", "small"],
        Category::Basic,
    ),
    Command::new(
        "numbered-list",
        "Numbered List",
        "Create a list with numbering",
        &["list", "numbered", "ordered", "ol"],
        Category::Basic,
    ),
    Command::new(
        "quote",
        "Quote",
        "Capture a quote",
        &["quote", "blockquote", "citation"],
        Category::Basic,
    ),
    Command::new(
        "callout",
        "Callout",
        "Make writing stand out",
        &["callout", "note", "info", "warning"],
        Category::Basic,
    ),
    Command::new(
        "link",
        "Link",
        "Add a hyperlink",
        &["link", "url", "hyperlink"],
        Category::Basic,
    ),
    // Visual & layout
    Command::new(
        "columns",
        "Columns",
        "Side-by-side content layout",
        &["columns", "layout", "side by side"],
        Category::Visual,
    )
    .new_badge(),
    Command::new(
        "collapse",
        "Collapsible Section",
        "Expand/collapse content sections",
        &["collapse", "expand", "toggle", "accordion"],
        Category::Visual,
    )
    .new_badge(),
    Command::new(
        "status-tag",
        "Status Tag",
        "Colored status labels",
        &["status", "tag", "label", "badge"],
        Category::Visual,
    )
    .new_badge(),
    // Media
    Command::new(
        "image",
        "Image",
        "Upload or embed with a link",
        &["image", "picture", "photo", "upload"],
        Category::Media,
    ),
    Command::new(
        "gallery",
        "Image Gallery",
        "Multiple images with lightbox",
        &["gallery", "images", "photos", "lightbox"],
        Category::Media,
    )
    .new_badge(),
    Command::new(
        "video",
        "Video",
        "Embed a video",
        &["video", "embed", "youtube", "vimeo"],
        Category::Media,
    ),
    Command::new(
        "file",
        "File Attachment",
        "Upload a file with preview",
        &["file", "upload", "attachment", "pdf"],
        Category::Media,
    ),
    Command::new(
        "bookmark",
        "Web Bookmark",
        "Save a link to any web page",
        &["bookmark", "link", "url", "web"],
        Category::Media,
    ),
    // Database & organization
    Command::new(
        "table",
        "Advanced Table",
        "Editable table with formatting",
        &["table", "grid", "data", "spreadsheet"],
        Category::Database,
    ),
    Command::new(
        "board",
        "Kanban Board",
        "Project board with drag/drop cards",
        &["board", "kanban", "project", "cards"],
        Category::Database,
    )
    .new_badge(),
    Command::new(
        "database-view",
        "Database View",
        "Structured data with filters",
        &["database", "data", "filter", "sort"],
        Category::Database,
    )
    .new_badge(),
    // Collaboration & scheduling
    Command::new(
        "calendar",
        "Calendar",
        "Interactive calendar and scheduling",
        &["calendar", "schedule", "date", "event"],
        Category::Collaboration,
    )
    .new_badge(),
    Command::new(
        "vote",
        "Voting Poll",
        "Create polls with live results",
        &["vote", "poll", "survey", "feedback"],
        Category::Collaboration,
    )
    .new_badge(),
    Command::new(
        "mention",
        "Mention User",
        "Tag users with notifications",
        &["mention", "tag", "user", "notify"],
        Category::Collaboration,
    )
    .new_badge(),
    Command::new(
        "checkin",
        "Check-in Tracker",
        "Attendance and presence tracking",
        &["checkin", "attendance", "presence", "track"],
        Category::Collaboration,
    )
    .new_badge(),
    // Professional
    Command::new(
        "formula",
        "Math Formula",
        "LaTeX formula rendering",
        &["formula", "math", "latex", "equation"],
        Category::Professional,
    )
    .new_badge(),
    Command::new(
        "prd-template",
        "PRD Template",
        "Product Requirements Document template",
        &["prd", "product", "requirements", "template"],
        Category::Professional,
    )
    .new_badge(),
    Command::new(
        "encrypted-text",
        "Encrypted Content",
        "Password-protected text blocks",
        &["encrypted", "secure", "password", "private"],
        Category::Professional,
    )
    .new_badge(),
    // Diagrams
    Command::new(
        "flowchart",
        "Flowchart",
        "Process flow and decision diagrams",
        &["flowchart", "process", "diagram", "workflow"],
        Category::Visual,
    )
    .new_badge(),
    Command::new(
        "mindmap",
        "Mind Map",
        "Brainstorm ideas with connected nodes",
        &["mindmap", "brainstorm", "ideas", "nodes"],
        Category::Visual,
    )
    .new_badge(),
    Command::new(
        "uml",
        "UML Diagram",
        "Unified Modeling Language diagrams",
        &["uml", "diagram", "modeling", "class"],
        Category::Visual,
    )
    .new_badge(),
    Command::new(
        "chart",
        "Charts & Graphs",
        "Data visualization charts",
        &["chart", "graph", "data", "visualization"],
        Category::Visual,
    )
    .new_badge(),
    // AI
    Command::new(
        "ai-summary",
        "AI Summary",
        "Summarize content above with AI",
        &["ai", "summary", "summarize"],
        Category::Ai,
    ),
    Command::new(
        "ai-explain",
        "AI Explain",
        "Explain selected code or text",
        &["ai", "explain", "code", "help"],
        Category::Ai,
    ),
    Command::new(
        "ai-improve",
        "AI Improve",
        "Enhance writing with AI suggestions",
        &["ai", "improve", "enhance", "suggestions"],
        Category::Ai,
    )
    .new_badge(),
];

/// Look up a built-in command by identifier
pub fn find_command(id: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = COMMANDS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COMMANDS.len());
    }

    #[test]
    fn test_catalogue_size() {
        assert_eq!(COMMANDS.len(), 37);
    }

    #[test]
    fn test_find_command() {
        let heading = find_command("heading-1").unwrap();
        assert_eq!(heading.title, "Heading 1");
        assert!(find_command("does-not-exist").is_none());
    }

    #[test]
    fn test_every_command_has_keywords() {
        for command in COMMANDS {
            assert!(!command.keywords.is_empty(), "{} has no keywords", command.id);
            assert!(!command.title.is_empty());
        }
    }
}
