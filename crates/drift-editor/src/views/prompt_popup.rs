//! Centered single-line input popup shared by the prompt views

use crate::theme::Theme;
use crate::view_models::PromptViewModel;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the prompt as a small centered panel with a text cursor
pub fn render_prompt(vm: &PromptViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let popup_width = (area.width * 60 / 100).clamp(20.min(area.width), 70);
    let popup_height = 5.min(area.height);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(vm.title.clone(), theme.panel_title()))
        .title_bottom(Line::styled(vm.footer.clone(), theme.key_description()))
        .border_style(theme.panel_border())
        .style(Style::default().bg(theme.bg_panel));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let lines = vec![
        Line::styled(vm.message.clone(), Style::default().fg(theme.text_secondary)),
        Line::from(""),
        Line::styled(vm.input.clone(), vm.input_style),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    if inner.height >= 3 {
        let x = (inner.x + vm.cursor_offset).min(inner.right().saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y + 2));
    }
}
