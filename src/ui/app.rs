use crate::config::{Config, EditTrigger};
use crate::store::{CommentarySelector, NameChangeCounter, NameStore};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::mvi::Reducer;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::cell::Cell;
use std::rc::Rc;

/// Composition root: owns the stores and the editor, wires them together.
pub struct App {
    should_quit: bool,
    names: NameStore,
    counter: NameChangeCounter,
    commentary: CommentarySelector,
    editor: EditorState,
    edit_trigger: EditTrigger,
    needs_redraw: Rc<Cell<bool>>,
}

impl App {
    /// Builds the store graph, then seeds the name.
    ///
    /// With `count_seed` the seed is a regular write and the counter starts
    /// at 1. Otherwise the seed is silent and the counter stays unset until
    /// the first edit.
    pub fn new(config: &Config) -> Self {
        let names = NameStore::new(config.stores.notify);
        let counter = NameChangeCounter::new(&names);
        let commentary = CommentarySelector::new(&counter);

        // Registered last, so derived stores are current when it fires.
        let needs_redraw = Rc::new(Cell::new(true));
        {
            let needs_redraw = Rc::clone(&needs_redraw);
            names.subscribe(move |_| needs_redraw.set(true));
        }

        let seed = config.stores.seed_name.clone();
        if config.stores.count_seed {
            names.set(seed.clone());
        } else {
            names.seed(seed.clone());
        }

        let editor = EditorReducer::reduce(EditorState::default(), EditorIntent::Load { value: seed });

        Self {
            should_quit: false,
            names,
            counter,
            commentary,
            editor,
            edit_trigger: config.ui.edit_trigger,
            needs_redraw,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn names(&self) -> &NameStore {
        &self.names
    }

    pub fn name(&self) -> Option<String> {
        self.names.who()
    }

    pub fn count(&self) -> Option<u64> {
        self.counter.count()
    }

    pub fn comment(&self) -> Option<&'static str> {
        self.commentary.comment()
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn edit_trigger(&self) -> EditTrigger {
        self.edit_trigger
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn on_resize(&mut self) {
        self.needs_redraw.set(true);
    }

    /// Routes a key press to the editor and publishes the result.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let intent = match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                EditorIntent::Insert(ch)
            }
            KeyCode::Backspace => EditorIntent::Backspace,
            KeyCode::Delete => EditorIntent::Delete,
            KeyCode::Left => EditorIntent::MoveLeft,
            KeyCode::Right => EditorIntent::MoveRight,
            KeyCode::Home => EditorIntent::Home,
            KeyCode::End => EditorIntent::End,
            KeyCode::Esc => EditorIntent::Load {
                value: self.names.who().unwrap_or_default(),
            },
            KeyCode::Enter => {
                self.commit();
                return;
            }
            _ => return,
        };

        self.dispatch(intent);
    }

    /// Publishes the buffer the way an HTML `change` event would: only
    /// when it differs from the stored name.
    pub fn commit(&mut self) {
        if self.edit_trigger != EditTrigger::Change {
            return;
        }
        if self.names.who().as_deref() != Some(self.editor.buffer.as_str()) {
            self.names.set(self.editor.buffer.clone());
        }
    }

    fn dispatch(&mut self, intent: EditorIntent) {
        let before = self.editor.buffer.clone();
        self.editor = EditorReducer::reduce(std::mem::take(&mut self.editor), intent);
        self.needs_redraw.set(true);

        if self.edit_trigger == EditTrigger::Input && self.editor.buffer != before {
            self.names.set(self.editor.buffer.clone());
        }
    }
}
