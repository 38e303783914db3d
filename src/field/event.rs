#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
}

impl KeyCode {
    /// Keys the host keeps handling itself: tab, enter and the arrows.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::Tab
                | Self::BackTab
                | Self::Enter
                | Self::Left
                | Self::Right
                | Self::Up
                | Self::Down
        )
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Char(ch) => Some(ch),
            _ => None,
        }
    }
}

impl From<char> for KeyCode {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

/// Notifications a host raises on a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Key(KeyCode),
    Blur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The host must skip its own handling of the event.
    pub prevent_default: bool,
}

impl EventOutcome {
    pub fn pass_through() -> Self {
        Self {
            prevent_default: false,
        }
    }

    pub fn suppressed() -> Self {
        Self {
            prevent_default: true,
        }
    }
}
