//! Block Document
//!
//! A document is a list of single-line blocks addressed by a flat character
//! offset. Blocks are separated by one virtual newline, so offset `n` sits
//! between two characters of a block or right before the separator.
//!
//! The document also remembers where it was last laid out on screen, which
//! is what [`DocumentSurface::coords_at`] needs to anchor the slash menu.

use drift_slash_menu::{BlockKind, Content, DocumentSurface, HeadingLevel, SurfaceError};
use ratatui::layout::{Position, Rect};
use std::ops::Range;

/// What a block renders as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// Editable text block of a given kind
    Text(BlockKind),
    /// Highlighted note
    Callout,
    /// Horizontal rule
    Rule,
    /// Embedded image with its source URL
    Image(String),
}

/// One line of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub content: BlockContent,
    pub text: String,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            content: BlockContent::Text(kind),
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading(level), text)
    }

    pub fn callout(text: impl Into<String>) -> Self {
        Self {
            content: BlockContent::Callout,
            text: text.into(),
        }
    }

    pub fn rule() -> Self {
        Self {
            content: BlockContent::Rule,
            text: String::new(),
        }
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self {
            content: BlockContent::Image(src.into()),
            text: String::new(),
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the cursor can type into this block
    pub fn is_editable(&self) -> bool {
        matches!(self.content, BlockContent::Text(_) | BlockContent::Callout)
    }

    fn is_empty_paragraph(&self) -> bool {
        self.content == BlockContent::Text(BlockKind::Paragraph) && self.text.is_empty()
    }

    /// Human readable block type
    pub fn label(&self) -> &'static str {
        match &self.content {
            BlockContent::Text(kind) => match kind {
                BlockKind::Paragraph => "Paragraph",
                BlockKind::Heading(HeadingLevel::One) => "Heading 1",
                BlockKind::Heading(HeadingLevel::Two) => "Heading 2",
                BlockKind::Heading(HeadingLevel::Three) => "Heading 3",
                BlockKind::BulletList => "Bulleted list",
                BlockKind::OrderedList => "Numbered list",
                BlockKind::CodeBlock => "Code",
                BlockKind::Blockquote => "Quote",
            },
            BlockContent::Callout => "Callout",
            BlockContent::Rule => "Divider",
            BlockContent::Image(_) => "Image",
        }
    }
}

/// Byte index of the `col`-th character
fn byte_index(text: &str, col: usize) -> usize {
    text.char_indices().nth(col).map_or(text.len(), |(i, _)| i)
}

/// A block document with a cursor and its last on-screen layout
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Never empty
    blocks: Vec<Block>,
    cursor: usize,
    viewport: Rect,
    scroll: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    pub fn new(mut blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            blocks.push(Block::paragraph(""));
        }
        Self {
            blocks,
            cursor: 0,
            viewport: Rect::default(),
            scroll: 0,
        }
    }

    /// Sample page shown on startup
    pub fn starter() -> Self {
        use HeadingLevel::*;

        let mut doc = Self::new(vec![
            Block::heading(One, "API Documentation"),
            Block::paragraph(
                "This document outlines the REST API endpoints and authentication flow for our application.",
            ),
            Block::heading(Two, "Authentication"),
            Block::paragraph(
                "All API requests require authentication using Bearer tokens. Include the token in the Authorization header:",
            ),
            Block::heading(Three, "Login Endpoint"),
            Block::new(BlockKind::CodeBlock, "POST /api/auth/login"),
            Block::paragraph("Authenticates a user and returns an access token."),
            Block::heading(Two, "User Management"),
            Block::paragraph("Endpoints for managing user accounts and profiles."),
            Block::paragraph(""),
        ]);
        doc.cursor = doc.len();
        doc
    }

    /// Content of a freshly opened tab
    pub fn untitled() -> Self {
        let mut doc = Self::new(vec![
            Block::heading(HeadingLevel::One, "New Document"),
            Block::paragraph("Start writing..."),
        ]);
        doc.cursor = doc.len();
        doc
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total length in characters, separators included
    pub fn len(&self) -> usize {
        self.blocks.iter().map(Block::len).sum::<usize>() + self.blocks.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Index of the first block on screen
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Block the cursor is in
    pub fn current_block(&self) -> &Block {
        let (index, _) = self.locate(self.cursor);
        &self.blocks[index]
    }

    /// Record where the text area is drawn
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.ensure_cursor_visible();
    }

    /// Resolve an offset into (block index, column)
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let mut start = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            let end = start + block.len();
            if offset <= end {
                return (index, offset - start);
            }
            start = end + 1;
        }
        let last = self.blocks.len() - 1;
        (last, self.blocks[last].len())
    }

    /// Offset of a column in a block
    pub fn offset_of(&self, block: usize, col: usize) -> usize {
        self.blocks[..block]
            .iter()
            .map(|b| b.len() + 1)
            .sum::<usize>()
            + col
    }

    /// Marker drawn before a block's text
    pub fn prefix(&self, index: usize) -> String {
        match &self.blocks[index].content {
            BlockContent::Text(BlockKind::Heading(level)) => {
                format!("{} ", "#".repeat(level.level() as usize))
            }
            BlockContent::Text(BlockKind::BulletList) => "• ".to_string(),
            BlockContent::Text(BlockKind::OrderedList) => {
                let number = self.blocks[..index]
                    .iter()
                    .rev()
                    .take_while(|b| b.content == BlockContent::Text(BlockKind::OrderedList))
                    .count()
                    + 1;
                format!("{}. ", number)
            }
            BlockContent::Text(BlockKind::CodeBlock) => "  ".to_string(),
            BlockContent::Text(BlockKind::Blockquote) => "│ ".to_string(),
            BlockContent::Callout => "▌ ".to_string(),
            BlockContent::Text(BlockKind::Paragraph) | BlockContent::Rule | BlockContent::Image(_) => {
                String::new()
            }
        }
    }

    fn prefix_width(&self, index: usize) -> usize {
        self.prefix(index).chars().count()
    }

    /// Offset under a screen position, if it is inside the viewport
    pub fn offset_at(&self, position: Position) -> Option<usize> {
        if !self.viewport.contains(position) {
            return None;
        }
        let row = self.scroll + (position.y - self.viewport.y) as usize;
        if row >= self.blocks.len() {
            return Some(self.len());
        }
        let col = ((position.x - self.viewport.x) as usize)
            .saturating_sub(self.prefix_width(row))
            .min(self.blocks[row].len());
        Some(self.offset_of(row, col))
    }

    /// Move the cursor, clamped to the document
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len());
        self.ensure_cursor_visible();
    }

    /// Move the cursor into a new empty paragraph when it sits on a rule or image.
    ///
    /// Text typed afterwards lands at the cursor offset.
    pub fn ensure_editable(&mut self) {
        let (index, _) = self.locate(self.cursor);
        if self.blocks[index].is_editable() {
            return;
        }
        self.blocks.insert(index + 1, Block::paragraph(""));
        self.set_cursor(self.offset_of(index + 1, 0));
    }

    pub fn insert_char(&mut self, c: char) {
        self.ensure_editable();
        let (index, col) = self.locate(self.cursor);
        let block = &mut self.blocks[index];
        let at = byte_index(&block.text, col);
        block.text.insert(at, c);
        self.set_cursor(self.cursor + 1);
    }

    /// Delete backwards from the cursor
    ///
    /// At the start of a styled block the style is removed first; at the
    /// start of a paragraph the block merges into the previous one.
    pub fn backspace(&mut self) {
        let (index, col) = self.locate(self.cursor);

        if !self.blocks[index].is_editable() {
            self.remove_block(index);
            self.set_cursor(self.cursor.saturating_sub(usize::from(index > 0)));
            return;
        }

        if col > 0 {
            let block = &mut self.blocks[index];
            let at = byte_index(&block.text, col - 1);
            block.text.remove(at);
            self.set_cursor(self.cursor - 1);
            return;
        }

        if self.blocks[index].content != BlockContent::Text(BlockKind::Paragraph) {
            self.blocks[index].content = BlockContent::Text(BlockKind::Paragraph);
            return;
        }

        if index == 0 {
            return;
        }

        if self.blocks[index - 1].is_editable() {
            let text = self.blocks.remove(index).text;
            self.blocks[index - 1].text.push_str(&text);
        } else {
            self.remove_block(index - 1);
        }
        self.set_cursor(self.cursor - 1);
    }

    /// Split the block at the cursor
    pub fn enter(&mut self) {
        let (index, col) = self.locate(self.cursor);
        let block = &mut self.blocks[index];

        if !block.is_editable() {
            self.blocks.insert(index + 1, Block::paragraph(""));
            self.set_cursor(self.offset_of(index + 1, 0));
            return;
        }

        let continues_list = matches!(
            block.content,
            BlockContent::Text(BlockKind::BulletList | BlockKind::OrderedList)
        );

        // Enter on an empty list item leaves the list
        if continues_list && block.is_empty() {
            block.content = BlockContent::Text(BlockKind::Paragraph);
            return;
        }

        let rest = block.text.split_off(byte_index(&block.text, col));
        let next = if continues_list {
            Block {
                content: block.content.clone(),
                text: rest,
            }
        } else {
            Block::paragraph(rest)
        };
        self.blocks.insert(index + 1, next);
        self.set_cursor(self.cursor + 1);
    }

    pub fn move_left(&mut self) {
        self.set_cursor(self.cursor.saturating_sub(1));
    }

    pub fn move_right(&mut self) {
        self.set_cursor(self.cursor + 1);
    }

    pub fn move_up(&mut self) {
        let (index, col) = self.locate(self.cursor);
        if index > 0 {
            let target = col.min(self.blocks[index - 1].len());
            self.set_cursor(self.offset_of(index - 1, target));
        }
    }

    pub fn move_down(&mut self) {
        let (index, col) = self.locate(self.cursor);
        if index + 1 < self.blocks.len() {
            let target = col.min(self.blocks[index + 1].len());
            self.set_cursor(self.offset_of(index + 1, target));
        }
    }

    /// Move to the start of the current block
    pub fn move_home(&mut self) {
        let (index, _) = self.locate(self.cursor);
        self.set_cursor(self.offset_of(index, 0));
    }

    /// Move to the end of the current block
    pub fn move_end(&mut self) {
        let (index, _) = self.locate(self.cursor);
        self.set_cursor(self.offset_of(index, self.blocks[index].len()));
    }

    pub fn move_to_start(&mut self) {
        self.set_cursor(0);
    }

    pub fn move_to_end(&mut self) {
        self.set_cursor(self.len());
    }

    fn remove_block(&mut self, index: usize) {
        self.blocks.remove(index);
        if self.blocks.is_empty() {
            self.blocks.push(Block::paragraph(""));
        }
    }

    /// Insert a block after the current one, or in place of an empty paragraph.
    ///
    /// Void blocks (rules, images) get an empty paragraph after them so
    /// typing can continue.
    fn insert_block(&mut self, block: Block) {
        let (index, _) = self.locate(self.cursor);
        let void = !block.is_editable();
        let len = block.len();

        let at = if self.blocks[index].is_empty_paragraph() {
            self.blocks[index] = block;
            index
        } else {
            self.blocks.insert(index + 1, block);
            index + 1
        };

        if void {
            self.blocks.insert(at + 1, Block::paragraph(""));
            self.set_cursor(self.offset_of(at + 1, 0));
        } else {
            self.set_cursor(self.offset_of(at, len));
        }
    }

    fn ensure_cursor_visible(&mut self) {
        let height = self.viewport.height as usize;
        if height == 0 {
            return;
        }
        let (index, _) = self.locate(self.cursor);
        if index < self.scroll {
            self.scroll = index;
        } else if index >= self.scroll + height {
            self.scroll = index + 1 - height;
        }
    }
}

impl DocumentSurface for Document {
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        let (index, col) = self.locate(offset);
        let block = &self.blocks[index];
        if col < block.len() {
            block.text.chars().nth(col)
        } else if index + 1 < self.blocks.len() && offset <= self.len() {
            Some('\n')
        } else {
            None
        }
    }

    fn coords_at(&self, offset: usize) -> Result<Position, SurfaceError> {
        if self.viewport.is_empty() {
            return Err(SurfaceError::NotLaidOut(offset));
        }
        if offset > self.len() {
            return Err(SurfaceError::OutOfBounds {
                offset,
                len: self.len(),
            });
        }

        let (index, col) = self.locate(offset);
        let height = self.viewport.height as usize;
        if index < self.scroll || index >= self.scroll + height {
            return Err(SurfaceError::NotLaidOut(offset));
        }

        let x = self.viewport.x as usize + self.prefix_width(index) + col;
        let x = x.min(self.viewport.right().saturating_sub(1) as usize) as u16;
        let y = self.viewport.y + (index - self.scroll) as u16;
        Ok(Position::new(x, y))
    }

    fn delete_range(&mut self, range: Range<usize>) -> Result<(), SurfaceError> {
        let len = self.len();
        if range.start > range.end || range.end > len {
            return Err(SurfaceError::OutOfBounds {
                offset: range.end,
                len,
            });
        }

        let (index, start_col) = self.locate(range.start);
        let (end_index, end_col) = self.locate(range.end);
        if index != end_index {
            return Err(SurfaceError::Unsupported(
                "deleting across blocks".to_string(),
            ));
        }

        let block = &mut self.blocks[index];
        let from = byte_index(&block.text, start_col);
        let to = byte_index(&block.text, end_col);
        block.text.replace_range(from..to, "");

        let removed = range.end - range.start;
        let cursor = if self.cursor >= range.end {
            self.cursor - removed
        } else if self.cursor > range.start {
            range.start
        } else {
            self.cursor
        };
        self.set_cursor(cursor);
        Ok(())
    }

    fn toggle_block(&mut self, kind: BlockKind) -> Result<(), SurfaceError> {
        let (index, _) = self.locate(self.cursor);
        let block = &mut self.blocks[index];
        block.content = match &block.content {
            BlockContent::Text(current) if *current == kind => {
                BlockContent::Text(BlockKind::Paragraph)
            }
            BlockContent::Text(_) | BlockContent::Callout => BlockContent::Text(kind),
            other => {
                return Err(SurfaceError::Unsupported(format!(
                    "cannot turn {:?} into {:?}",
                    other, kind
                )))
            }
        };
        Ok(())
    }

    fn insert_horizontal_rule(&mut self) -> Result<(), SurfaceError> {
        self.insert_block(Block::rule());
        Ok(())
    }

    fn insert_image(&mut self, src: &str) -> Result<(), SurfaceError> {
        self.insert_block(Block::image(src));
        Ok(())
    }

    fn insert_content(&mut self, content: &Content) -> Result<(), SurfaceError> {
        let block = match content {
            Content::Callout(text) => Block::callout(text.clone()),
            Content::Placeholder(_) => Block::paragraph(content.text()),
        };
        self.insert_block(block);
        Ok(())
    }
}
