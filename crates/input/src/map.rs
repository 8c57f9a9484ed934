//! Key mapping from terminal events to viewer commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Quit,
    /// Repaint the whole terminal on the next frame.
    Redraw,
}

/// Map a key press to a command, if it has one.
pub fn map_key(key: KeyEvent) -> Option<ViewerCommand> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(ViewerCommand::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ViewerCommand::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ViewerCommand::Redraw),
        _ => None,
    }
}
