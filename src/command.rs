use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A keypress that means something to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Home,
    End,
    Next,
    Prev,
    R,
    Q,
}

impl Command {
    /// Translate a key event into a `Command`.  Keys that don't mean anything
    /// return `None`.
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'k') | KeyCode::Up => Some(Command::Up),
            KeyCode::Char('s' | 'j') | KeyCode::Down => Some(Command::Down),
            KeyCode::Char('a' | 'h') | KeyCode::Left => Some(Command::Left),
            KeyCode::Char('d' | 'l') | KeyCode::Right => Some(Command::Right),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Esc => Some(Command::Esc),
            KeyCode::Home => Some(Command::Home),
            KeyCode::End => Some(Command::End),
            KeyCode::Tab => Some(Command::Next),
            KeyCode::BackTab => Some(Command::Prev),
            KeyCode::Char('r') => Some(Command::R),
            KeyCode::Char('q') => Some(Command::Q),
            _ => None,
        }
    }
}
