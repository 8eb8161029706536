//! Trait for the document the slash menu edits.

use crate::model::{BlockKind, Content};
use ratatui::layout::Position;
use std::ops::Range;
use thiserror::Error;

/// Errors reported by a document surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The offset has no screen coordinates yet (not laid out, scrolled away).
    #[error("No screen coordinates for offset {0}")]
    NotLaidOut(usize),

    /// The offset or range lies outside the document.
    #[error("Offset {offset} out of bounds (document length {len})")]
    OutOfBounds {
        /// Requested offset
        offset: usize,
        /// Current document length
        len: usize,
    },

    /// The document cannot perform the requested edit here.
    #[error("Unsupported edit: {0}")]
    Unsupported(String),
}

/// The editable document the menu is attached to.
///
/// Offsets are character offsets into the document's linear text, where
/// block boundaries count as one character. The menu only ever asks for the
/// cursor, single characters around it, and screen coordinates; all edits go
/// through the primitives below.
///
/// # Example
///
/// ```ignore
/// impl DocumentSurface for Document {
///     fn cursor(&self) -> usize {
///         self.cursor
///     }
///
///     fn coords_at(&self, offset: usize) -> Result<Position, SurfaceError> {
///         let viewport = self.viewport.ok_or(SurfaceError::NotLaidOut(offset))?;
///         let (row, col) = self.row_col(offset);
///         Ok(Position::new(viewport.x + col, viewport.y + row))
///     }
///
///     // ... editing primitives
/// }
/// ```
pub trait DocumentSurface {
    /// Current cursor offset.
    fn cursor(&self) -> usize;

    /// Character at `offset`, if any.
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Screen coordinates of `offset`.
    fn coords_at(&self, offset: usize) -> Result<Position, SurfaceError>;

    /// Delete the characters in `range`.
    fn delete_range(&mut self, range: Range<usize>) -> Result<(), SurfaceError>;

    /// Toggle the block under the cursor to `kind`, or back to a paragraph
    /// if it already is one.
    fn toggle_block(&mut self, kind: BlockKind) -> Result<(), SurfaceError>;

    /// Insert a horizontal rule after the block under the cursor.
    fn insert_horizontal_rule(&mut self) -> Result<(), SurfaceError>;

    /// Insert an image block pointing at `src`.
    fn insert_image(&mut self, src: &str) -> Result<(), SurfaceError>;

    /// Insert a content fragment as a new block.
    fn insert_content(&mut self, content: &Content) -> Result<(), SurfaceError>;
}
