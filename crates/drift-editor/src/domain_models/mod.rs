mod document;
mod document_tab;

pub use document::{Block, BlockContent, Document};
pub use document_tab::{DocumentTab, UNTITLED};
