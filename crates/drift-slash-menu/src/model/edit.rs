//! Structural edits performed by commands.

use super::command::Command;
use crate::traits::{DocumentSurface, SurfaceError, UrlPrompt};

/// Heading levels offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// Numeric level (1-3)
    pub fn level(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Block types that can be toggled on the block under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading(HeadingLevel),
    BulletList,
    OrderedList,
    CodeBlock,
    Blockquote,
}

/// Content fragments inserted as new blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A highlighted note block.
    Callout(String),
    /// Generic placeholder for a command without a dedicated edit,
    /// labeled with the command's title.
    Placeholder(String),
}

impl Content {
    /// Text shown for this fragment in the document
    pub fn text(&self) -> String {
        match self {
            Self::Callout(text) => text.clone(),
            Self::Placeholder(title) => format!("{} block", title),
        }
    }
}

/// The edit a command performs on the document.
///
/// Every command identifier resolves to exactly one variant. Identifiers
/// without a dedicated edit fall back to [`Content::Placeholder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEdit {
    /// Toggle the block under the cursor to (or back from) a block kind
    Toggle(BlockKind),
    /// Insert a horizontal rule
    HorizontalRule,
    /// Ask the user for an image URL and insert the image
    Image,
    /// Insert a content fragment
    Insert(Content),
}

impl BlockEdit {
    /// Resolve the edit for a command.
    ///
    /// `enhanced-code` is the only code command in the catalogue and toggles
    /// a plain code block; language and filename selection are not modelled.
    /// Ids without a dedicated edit insert a "<title> block" paragraph.
    pub fn for_command(command: &Command) -> Self {
        match command.id {
            "heading-1" => Self::Toggle(BlockKind::Heading(HeadingLevel::One)),
            "heading-2" => Self::Toggle(BlockKind::Heading(HeadingLevel::Two)),
            "heading-3" => Self::Toggle(BlockKind::Heading(HeadingLevel::Three)),
            "bulleted-list" => Self::Toggle(BlockKind::BulletList),
            "numbered-list" => Self::Toggle(BlockKind::OrderedList),
            "enhanced-code" => Self::Toggle(BlockKind::CodeBlock),
            "quote" => Self::Toggle(BlockKind::Blockquote),
            "divider" => Self::HorizontalRule,
            "image" => Self::Image,
            "callout" => Self::Insert(Content::Callout("💡 Important note".to_string())),
            _ => Self::Insert(Content::Placeholder(command.title.to_string())),
        }
    }

    /// Apply this edit through the host's editing primitives.
    ///
    /// [`BlockEdit::Image`] asks the prompt for a URL with `prompt_message`;
    /// a cancelled or blank answer leaves the document untouched.
    pub fn apply<H>(&self, host: &mut H, prompt_message: &str) -> Result<(), SurfaceError>
    where
        H: DocumentSurface + UrlPrompt + ?Sized,
    {
        match self {
            Self::Toggle(kind) => host.toggle_block(*kind),
            Self::HorizontalRule => host.insert_horizontal_rule(),
            Self::Image => match host.prompt_url(prompt_message) {
                Some(url) if !url.trim().is_empty() => host.insert_image(url.trim()),
                _ => {
                    log::debug!("Image insertion skipped: no URL given");
                    Ok(())
                }
            },
            Self::Insert(content) => host.insert_content(content),
        }
    }
}
