//! Startup announcement and first frame, captured through a tracing writer.

mod common;

use common::*;
use hello_stores::ui::runtime::mount;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn mount_with_capture() -> (String, Terminal<TestBackend>) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let app = default_app();
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        mount(&app, &mut terminal).unwrap();
    });
    (log.contents(), terminal)
}

#[test]
fn starting_is_logged_exactly_once() {
    let (log, _terminal) = mount_with_capture();
    assert_eq!(log.matches("starting...").count(), 1, "log was: {log}");
}

#[test]
fn starting_precedes_first_frame() {
    let (log, _terminal) = mount_with_capture();
    let starting = log.find("starting...").expect("no startup line");
    let drawn = log.find("first frame drawn").expect("no first frame");
    assert!(starting < drawn, "log was: {log}");
}

#[test]
fn mount_draws_the_greeting() {
    let (_log, terminal) = mount_with_capture();
    let buffer = terminal.backend().buffer();
    let screen: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
    assert!(screen.contains("Hello World!"));
}

#[test]
fn mount_clears_pending_redraw() {
    let app = default_app();
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    mount(&app, &mut terminal).unwrap();
    assert!(!app.take_redraw());
}
