//! Terminal input handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dirwm_config::keybinds::Key;
use dirwm_config::KeyBinding;
use dirwm_fs::WatchRegistry;

use super::core::DirwmApp;

/// Translate a crossterm key press into the binding it would match.
pub(super) fn binding_for(event: &KeyEvent) -> Option<KeyBinding> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char(c) if ctrl => Key::Char(c.to_ascii_lowercase()),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };
    Some(KeyBinding { key, ctrl })
}

impl<W: WatchRegistry> DirwmApp<W> {
    /// React to one terminal event.
    pub fn handle_input(&mut self, event: &Event) {
        match event {
            Event::Key(key) => {
                if let Some(binding) = binding_for(key) {
                    if self.quit_bindings.contains(&binding) {
                        self.request_quit();
                    }
                }
            }
            Event::Resize(cols, rows) => {
                tracing::debug!("terminal resized to {cols}x{rows}");
                self.needs_redraw = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::test_support::app;
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        app.handle_input(&press(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_exit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_input(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_exit());
    }

    #[test]
    fn plain_c_does_not_quit() {
        let mut app = app();
        app.handle_input(&press(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!app.should_exit());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        app.handle_input(&release);
        assert!(!app.should_exit());
    }

    #[test]
    fn resize_requests_redraw() {
        let mut app = app();
        app.take_redraw();
        app.handle_input(&Event::Resize(120, 40));
        assert!(app.take_redraw());
    }

    #[test]
    fn binding_for_uppercase_ctrl_letter() {
        let event = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL);
        assert_eq!(
            binding_for(&event),
            Some(KeyBinding {
                key: Key::Char('c'),
                ctrl: true
            })
        );
    }
}
