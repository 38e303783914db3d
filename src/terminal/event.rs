use crate::field::KeyCode;
use crossterm::event::{
    Event as CrosstermEvent, KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers as CrosstermKeyModifiers,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyCode),
    /// Ctrl+C while in raw mode.
    Interrupt,
    Resize { width: u16, height: u16 },
}

/// Converts a crossterm event; key releases and mouse input yield `None`.
pub fn map_event(event: CrosstermEvent) -> Option<TerminalEvent> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(map_key_event(key)),
        CrosstermEvent::Resize(width, height) => Some(TerminalEvent::Resize { width, height }),
        _ => None,
    }
}

pub fn map_key_event(key: CrosstermKeyEvent) -> TerminalEvent {
    if key.modifiers.contains(CrosstermKeyModifiers::CONTROL)
        && matches!(key.code, CrosstermKeyCode::Char('c' | 'C'))
    {
        return TerminalEvent::Interrupt;
    }
    TerminalEvent::Key(map_key_code(key.code))
}

/// Keys a masked field does not act on collapse to [`KeyCode::Unknown`].
pub fn map_key_code(code: CrosstermKeyCode) -> KeyCode {
    match code {
        CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Tab => KeyCode::Tab,
        CrosstermKeyCode::BackTab => KeyCode::BackTab,
        CrosstermKeyCode::Esc => KeyCode::Esc,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Delete => KeyCode::Delete,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        CrosstermKeyCode::Up => KeyCode::Up,
        CrosstermKeyCode::Down => KeyCode::Down,
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::{TerminalEvent, map_event, map_key_code, map_key_event};
    use crate::field::KeyCode;
    use crossterm::event::{
        Event, KeyCode as CrosstermKeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    };

    #[test]
    fn maps_editing_and_navigation_keys() {
        assert_eq!(map_key_code(CrosstermKeyCode::Char('7')), KeyCode::Char('7'));
        assert_eq!(map_key_code(CrosstermKeyCode::Backspace), KeyCode::Backspace);
        assert_eq!(map_key_code(CrosstermKeyCode::Tab), KeyCode::Tab);
        assert_eq!(map_key_code(CrosstermKeyCode::F(5)), KeyCode::Unknown);
        assert_eq!(map_key_code(CrosstermKeyCode::Home), KeyCode::Unknown);
        assert_eq!(map_key_code(CrosstermKeyCode::PageDown), KeyCode::Unknown);
    }

    #[test]
    fn ctrl_c_interrupts() {
        let key = KeyEvent::new(CrosstermKeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(key), TerminalEvent::Interrupt);

        let plain = KeyEvent::new(CrosstermKeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key_event(plain), TerminalEvent::Key(KeyCode::Char('c')));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(CrosstermKeyCode::Char('1'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(key)), None);
        assert_eq!(
            map_event(Event::Resize(80, 24)),
            Some(TerminalEvent::Resize {
                width: 80,
                height: 24
            })
        );
    }
}
