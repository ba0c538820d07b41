//! Keyboard mapping: crossterm key events to game commands.
//!
//! Arrows for casual players, hjkl and wasd for the rest. Commands fire on
//! key press only; the terminal gives us no reliable release events, so
//! there is no held-key repeat beyond what the terminal itself delivers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Command;

/// Map a key event to a command, if any.
pub fn map_key(event: &KeyEvent) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('w') => Some(Command::Rotate),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(Command::SoftDrop),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('m') => Some(Command::ToggleMute),
        KeyCode::Char('r') => Some(Command::Restart),
        _ => None,
    }
}

/// Quit on `q`, Escape or Ctrl-C.
pub fn should_quit(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
