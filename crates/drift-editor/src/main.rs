use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Position, Rect},
    Terminal,
};
use std::io;

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use drift_config::AppConfig;
use middleware::{
    keyboard_middleware::KeyboardMiddleware, logging::LoggingMiddleware,
    navigation_middleware::NavigationMiddleware, pointer_middleware::PointerMiddleware,
    text_input_middleware::TextInputMiddleware,
};
use state::AppState;
use store::Store;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    match logger::init() {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    log::info!("Starting drift-editor");
    let app_config = AppConfig::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut store = Store::new(AppState::new(app_config));

    // Middleware runs in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PointerMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(TextInputMiddleware::new()));

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal, whatever happened
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting drift-editor");
    result
}

fn run_app(terminal: &mut Term, store: &mut Store) -> io::Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize(Rect::new(
        0,
        0,
        size.width,
        size.height,
    ))));

    let mut mouse_captured = false;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Some(action) = translate_event(event::read()?) {
                store.dispatch(action);
            }
        }

        sync_mouse_capture(terminal, store.state(), &mut mouse_captured)?;
    }

    Ok(())
}

/// Map a terminal event to the action it triggers
fn translate_event(event: Event) -> Option<Action> {
    match event {
        // Only process key press events (ignore key release)
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Action::Global(GlobalAction::KeyPressed(key)))
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => Some(
            Action::Global(GlobalAction::MouseClicked(Position::new(mouse.column, mouse.row))),
        ),
        Event::Resize(width, height) => Some(Action::Global(GlobalAction::Resize(Rect::new(
            0, 0, width, height,
        )))),
        _ => None,
    }
}

/// Capture the mouse exactly while the slash menu listens for clicks
fn sync_mouse_capture(terminal: &mut Term, state: &AppState, captured: &mut bool) -> io::Result<()> {
    let wanted = state.editor.pointer.enabled;
    if wanted == *captured {
        return Ok(());
    }

    if wanted {
        execute!(terminal.backend_mut(), EnableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    log::debug!("Mouse capture {}", if wanted { "enabled" } else { "disabled" });
    *captured = wanted;
    Ok(())
}
