//! Shared test helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hello_stores::config::{Config, EditTrigger};
use hello_stores::store::NotifyPolicy;
use hello_stores::ui::app::App;

pub fn config_with(count_seed: bool, notify: NotifyPolicy, trigger: EditTrigger) -> Config {
    let mut config = Config::default();
    config.stores.count_seed = count_seed;
    config.stores.notify = notify;
    config.ui.edit_trigger = trigger;
    config
}

/// App with default settings: seed "World", silent seed, notify always.
pub fn default_app() -> App {
    App::new(&Config::default())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Types `text` into the editor.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.on_key(key(KeyCode::Char(ch)));
    }
}

/// Clears the editor buffer with backspaces.
pub fn clear_editor(app: &mut App) {
    app.on_key(key(KeyCode::End));
    for _ in 0..app.editor().len() {
        app.on_key(key(KeyCode::Backspace));
    }
}

/// Replaces the editor contents and presses Enter.
pub fn submit_name(app: &mut App, name: &str) {
    clear_editor(app);
    type_text(app, name);
    app.on_key(key(KeyCode::Enter));
}
