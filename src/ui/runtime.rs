use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Announces startup, then draws the first frame into `terminal`.
///
/// The "starting..." line is emitted exactly once, before anything is drawn.
pub fn mount<B: Backend>(app: &App, terminal: &mut Terminal<B>) -> Result<(), B::Error> {
    tracing::info!("starting...");
    terminal.draw(|frame| draw(frame, app))?;
    app.take_redraw();
    tracing::debug!("first frame drawn");
    Ok(())
}

pub fn run(config: &Config) -> io::Result<()> {
    let mut app = App::new(config);

    let (mut terminal, guard) = setup_terminal()?;
    mount(&app, &mut terminal)?;
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                app.on_resize();
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(
        name = %app.name().unwrap_or_default(),
        count = app.count().unwrap_or(0),
        "shutting down"
    );
    drop(guard);
    Ok(())
}
