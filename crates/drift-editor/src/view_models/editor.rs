//! Editor View Model

use crate::domain_models::{BlockContent, Document};
use crate::state::AppState;
use crate::theme::Theme;
use drift_slash_menu::{BlockKind, DocumentSurface};
use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
};

/// View model for the document panel
#[derive(Debug, Clone)]
pub struct EditorViewModel {
    /// Tab strip shown in the panel title
    pub tabs: Vec<TabViewModel>,
    /// One line per visible block
    pub lines: Vec<Line<'static>>,
    /// Terminal cursor, if the document cursor is on screen
    pub cursor: Option<Position>,
}

/// View model for a single document tab
#[derive(Debug, Clone)]
pub struct TabViewModel {
    /// Title with the unsaved-changes marker
    pub display_text: String,
    pub style: Style,
}

impl EditorViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let document = state.editor.document();
        let viewport = document.viewport();
        let width = viewport.width as usize;

        let style_active = Style::default()
            .fg(theme.selected_fg)
            .bg(theme.accent_secondary)
            .add_modifier(Modifier::BOLD);
        let style_inactive = Style::default().fg(theme.text_muted);

        let tabs = state
            .editor
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| TabViewModel {
                display_text: format!(" {} ", tab.label()),
                style: if index == state.editor.active_tab {
                    style_active
                } else {
                    style_inactive
                },
            })
            .collect();

        let lines = document
            .blocks()
            .iter()
            .enumerate()
            .skip(document.scroll())
            .take(viewport.height as usize)
            .map(|(index, _)| block_line(document, index, width, theme))
            .collect();

        Self {
            tabs,
            lines,
            cursor: document.coords_at(document.cursor()).ok(),
        }
    }

    /// Tab strip as a single line, tabs separated by a thin bar
    pub fn title_line(&self, separator: Style) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (index, tab) in self.tabs.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("│", separator));
            }
            spans.push(Span::styled(tab.display_text.clone(), tab.style));
        }
        Line::from(spans)
    }
}

fn block_line(document: &Document, index: usize, width: usize, theme: &Theme) -> Line<'static> {
    let block = &document.blocks()[index];
    let prefix = document.prefix(index);

    match &block.content {
        BlockContent::Rule => Line::styled("─".repeat(width), Style::default().fg(theme.text_muted)),
        BlockContent::Image(src) => Line::from(vec![
            Span::styled("🖼  ", Style::default().fg(theme.block_media)),
            Span::styled(
                src.clone(),
                Style::default()
                    .fg(theme.block_media)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        BlockContent::Callout => Line::from(vec![
            Span::styled(prefix, Style::default().fg(theme.block_callout)),
            Span::styled(block.text.clone(), Style::default().fg(theme.text_primary)),
        ]),
        BlockContent::Text(kind) => {
            let (prefix_style, text_style) = text_styles(*kind, theme);
            Line::from(vec![
                Span::styled(prefix, prefix_style),
                Span::styled(block.text.clone(), text_style),
            ])
        }
    }
}

fn text_styles(kind: BlockKind, theme: &Theme) -> (Style, Style) {
    let text = Style::default().fg(theme.text_primary);
    let marker = Style::default().fg(theme.text_muted);
    match kind {
        BlockKind::Paragraph => (marker, text),
        BlockKind::Heading(_) => {
            let heading = Style::default()
                .fg(theme.block_heading)
                .add_modifier(Modifier::BOLD);
            (heading, heading)
        }
        BlockKind::BulletList | BlockKind::OrderedList => (marker.fg(theme.accent_primary), text),
        BlockKind::CodeBlock => {
            let code = Style::default()
                .fg(theme.text_secondary)
                .bg(theme.block_code_bg);
            (code, code)
        }
        BlockKind::Blockquote => (
            marker.fg(theme.block_quote),
            Style::default()
                .fg(theme.block_quote)
                .add_modifier(Modifier::ITALIC),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Block;
    use drift_slash_menu::HeadingLevel;
    use ratatui::layout::Rect;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_follow_blocks() {
        let mut state = AppState::default();
        *state.editor.document_mut() = Document::new(vec![
            Block::heading(HeadingLevel::Two, "Setup"),
            Block::new(BlockKind::BulletList, "one"),
            Block::rule(),
            Block::image("https://x.io/a.png"),
        ]);
        state.editor.set_viewport(Rect::new(1, 1, 10, 5));

        let vm = EditorViewModel::from_state(&state);

        assert_eq!(vm.lines.len(), 4);
        assert_eq!(line_text(&vm.lines[0]), "## Setup");
        assert_eq!(line_text(&vm.lines[1]), "• one");
        assert_eq!(line_text(&vm.lines[2]), "─".repeat(10));
        assert!(line_text(&vm.lines[3]).contains("https://x.io/a.png"));
        assert_eq!(vm.cursor, Some(Position::new(4, 1)));
    }

    #[test]
    fn test_only_visible_blocks() {
        let mut state = AppState::default();
        state.editor.set_viewport(Rect::new(1, 1, 40, 3));

        let vm = EditorViewModel::from_state(&state);
        assert_eq!(vm.lines.len(), 3);
        // Starter document keeps its cursor on the last, visible line
        assert_eq!(vm.cursor, Some(Position::new(1, 3)));
    }

    #[test]
    fn test_no_cursor_before_layout() {
        let vm = EditorViewModel::from_state(&AppState::default());
        assert!(vm.lines.is_empty());
        assert_eq!(vm.cursor, None);
    }

    #[test]
    fn test_tab_strip_marks_active_and_dirty() {
        let mut state = AppState::default();
        state.editor.open_tab();
        state.editor.active_mut().dirty = true;

        let vm = EditorViewModel::from_state(&state);

        assert_eq!(vm.tabs.len(), 2);
        assert_eq!(vm.tabs[0].display_text, " API Documentation ");
        assert_eq!(vm.tabs[1].display_text, " Untitled Document • ");
        assert_ne!(vm.tabs[0].style, vm.tabs[1].style);
        assert_eq!(
            line_text(&vm.title_line(Style::default())),
            " API Documentation │ Untitled Document • "
        );
    }
}
