/// The text-entry surface a [`MaskedField`](super::MaskedField) drives.
///
/// Offsets are in characters. Hosts clamp cursor offsets that point past the
/// end of the content.
pub trait HostField {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: String);
    fn selection_start(&self) -> usize;
    fn set_selection(&mut self, offset: usize);
}

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// In-memory field content with a collapsed selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl HostField for TextBuffer {
    fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Replacing the content leaves the cursor at its end.
    fn set_value(&mut self, value: String) {
        self.cursor = char_count(value.as_str());
        self.value = value;
    }

    fn selection_start(&self) -> usize {
        self.cursor
    }

    fn set_selection(&mut self, offset: usize) {
        self.cursor = offset.min(char_count(self.value.as_str()));
    }
}
