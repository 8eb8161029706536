use crate::actions::{Action, EditorAction, EditorInput, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::{EditorViewModel, StatusBarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{editor_frame, layout, View, ViewId};
use drift_slash_menu::SlashMenuWidget;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Document editor - the base view
#[derive(Debug, Clone)]
pub struct EditorView;

impl EditorView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for EditorView {
    fn view_id(&self) -> ViewId {
        ViewId::Editor
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
            | PanelCapabilities::ITEM_NAVIGATION
            | PanelCapabilities::CURSOR_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let input = match nav {
            NavigationAction::Next => EditorInput::Down,
            NavigationAction::Previous => EditorInput::Up,
            NavigationAction::Left => EditorInput::Left,
            NavigationAction::Right => EditorInput::Right,
            NavigationAction::LineStart => EditorInput::Home,
            NavigationAction::LineEnd => EditorInput::End,
            NavigationAction::ToTop => EditorInput::DocumentStart,
            NavigationAction::ToBottom => EditorInput::DocumentEnd,
        };
        Some(Action::Editor(EditorAction::Input(input)))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let input = match input {
            TextInputAction::Char(c) => EditorInput::Char(c),
            TextInputAction::Backspace => EditorInput::Backspace,
            TextInputAction::Escape => EditorInput::Escape,
            TextInputAction::Confirm => EditorInput::Enter,
            // Blocks are edited one character at a time
            TextInputAction::ClearLine => return None,
        };
        Some(Action::Editor(EditorAction::Input(input)))
    }

    fn translate_click(&self, position: Position) -> Option<Action> {
        Some(Action::Editor(EditorAction::Click(position)))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Editor(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::RenameTab(_)
                | Action::StatusBar(_)
                | Action::Global(_)
        )
    }
}

/// Render the document panel, the status bar and the slash menu overlay
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let screen = layout(area);

    let vm = EditorViewModel::from_state(state);

    let frame = editor_frame()
        .title(vm.title_line(theme.panel_border()))
        .border_style(theme.panel_border())
        .style(Style::default().bg(theme.bg_primary));
    let inner = frame.inner(screen.editor);
    f.render_widget(frame, screen.editor);
    f.render_widget(Paragraph::new(vm.lines), inner);

    let status = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status), screen.status_bar);

    // Overlay over the whole screen, it clamps itself to the area
    f.render_widget(
        SlashMenuWidget::new(&state.editor.slash_menu, theme).max_rows(state.editor.menu_height),
        area,
    );

    if let Some(cursor) = vm.cursor {
        f.set_cursor_position(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use crate::reducers::app_reducer::reduce;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(state: &AppState) -> Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| crate::views::render(state, f.area(), f))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn laid_out() -> AppState {
        reduce(
            AppState::default(),
            &Action::Global(GlobalAction::Resize(Rect::new(0, 0, 80, 24))),
        )
    }

    #[test]
    fn test_renders_document_and_status() {
        let text = screen_text(&draw(&laid_out()));
        assert!(text.contains("API Documentation"));
        assert!(text.contains("## Authentication"));
        assert!(text.contains("Type / to insert a block"));
    }

    #[test]
    fn test_renders_slash_menu_when_open() {
        let state = reduce(
            laid_out(),
            &Action::Editor(EditorAction::Input(EditorInput::Char('/'))),
        );
        let text = screen_text(&draw(&state));
        assert!(text.contains("Suggested"));
        assert!(text.contains("Heading 2"));
    }

    #[test]
    fn test_translations() {
        let view = EditorView::new();
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm),
            Some(Action::Editor(EditorAction::Input(EditorInput::Enter)))
        ));
        assert!(view.translate_text_input(TextInputAction::ClearLine).is_none());
        assert!(matches!(
            view.translate_navigation(NavigationAction::ToBottom),
            Some(Action::Editor(EditorAction::Input(EditorInput::DocumentEnd)))
        ));
    }
}
