use super::app::App;
use super::events::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct EventHandler;

impl EventHandler {
    /// Apply `event` to the picker. Returns true when the picker should close.
    pub fn handle(event: &Event, app: &mut App) -> bool {
        match event {
            Event::Key(key) => Self::handle_key(*key, app),
            Event::Resize(w, h) => {
                app.update_terminal_size(*w as usize, *h as usize);
                false
            }
        }
    }

    fn handle_key(key: KeyEvent, app: &mut App) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => true,
            KeyCode::Up => {
                app.select_up();
                false
            }
            KeyCode::Char('k') | KeyCode::Char('p') if ctrl => {
                app.select_up();
                false
            }
            KeyCode::Down => {
                app.select_down();
                false
            }
            KeyCode::Char('j') | KeyCode::Char('n') if ctrl => {
                app.select_down();
                false
            }
            KeyCode::Char('u') if ctrl => {
                app.clear_query();
                false
            }
            KeyCode::Enter => app.choose(),
            KeyCode::Esc => {
                if app.query.is_empty() {
                    true
                } else {
                    app.clear_query();
                    false
                }
            }
            KeyCode::Backspace => {
                app.query_pop();
                false
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                app.query_push(c);
                false
            }
            _ => false,
        }
    }
}
