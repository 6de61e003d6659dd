//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Message, Mode, Screen};

/// Map a key event to an optional message based on current screen.
pub fn map_key_event(app: &App, key: KeyEvent) -> Option<Message> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global bindings (work on any screen)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    match app.screen {
        Screen::Editor => map_editor_keys(app, key),
        Screen::Results => map_results_keys(key),
    }
}

fn map_editor_keys(app: &App, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::F(2) => Some(Message::ToggleMode),
        KeyCode::F(3) if app.mode == Mode::Dataset => Some(Message::LoadData),
        KeyCode::F(5) => Some(Message::Generate),
        KeyCode::F(6) => Some(Message::Export),
        KeyCode::Tab => Some(Message::NextField),
        KeyCode::BackTab => Some(Message::PrevField),
        KeyCode::Enter => Some(Message::InputNewline),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::InputChar(c))
        }
        _ => None,
    }
}

fn map_results_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Vim-style navigation
        KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrev),

        KeyCode::F(5) => Some(Message::Generate),
        KeyCode::F(6) => Some(Message::Export),
        KeyCode::Esc | KeyCode::Backspace => Some(Message::Back),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
