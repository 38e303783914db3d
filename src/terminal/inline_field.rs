use crate::core::error::MaskResult;
use crate::core::identifier::IdentifierRegistry;
use crate::field::{
    EventOutcome, FieldConfig, FieldEvent, HostField, KeyCode, MaskedField, TextBuffer,
};
use unicode_width::UnicodeWidthChar;

const LABEL_SEPARATOR: &str = ": ";

/// A run of field text; `pending` runs still show the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub pending: bool,
}

/// A masked field drawn on a single terminal line as `label: value`.
#[derive(Debug)]
pub struct InlineField {
    label: String,
    buffer: TextBuffer,
    field: MaskedField,
}

impl InlineField {
    pub fn bind(
        registry: &IdentifierRegistry,
        label: impl Into<String>,
        config: impl Into<FieldConfig>,
    ) -> MaskResult<Self> {
        let mut buffer = TextBuffer::default();
        let field = MaskedField::bind(registry, &mut buffer, config)?;
        Ok(Self {
            label: label.into(),
            buffer,
            field,
        })
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn value(&self) -> &str {
        self.buffer.value()
    }

    /// Forwards `event` to the mask, then performs the host's own handling
    /// for keys the mask lets through.
    pub fn handle(&mut self, registry: &IdentifierRegistry, event: FieldEvent) -> EventOutcome {
        let outcome = self.field.handle(registry, &mut self.buffer, event);
        if !outcome.prevent_default
            && let FieldEvent::Key(key) = event
        {
            self.default_key_action(key);
        }
        outcome
    }

    fn default_key_action(&mut self, key: KeyCode) {
        let cursor = self.buffer.cursor();
        match key {
            KeyCode::Left => self.buffer.set_selection(cursor.saturating_sub(1)),
            KeyCode::Right => self.buffer.set_selection(cursor + 1),
            _ => {}
        }
    }

    pub fn prefix(&self) -> String {
        format!("{}{}", self.label, LABEL_SEPARATOR)
    }

    /// Splits the value into runs of typed text and untouched placeholder.
    pub fn segments(&self, registry: &IdentifierRegistry) -> Vec<Segment> {
        let placeholder: Vec<char> = self.field.placeholder().chars().collect();
        let mut segments = Vec::<Segment>::new();

        for (idx, ch) in self.buffer.value().chars().enumerate() {
            let pending = self.field.mask().is_placeholder_at(registry, idx)
                && placeholder.get(idx) == Some(&ch);
            match segments.last_mut() {
                Some(last) if last.pending == pending => last.text.push(ch),
                _ => segments.push(Segment {
                    text: ch.to_string(),
                    pending,
                }),
            }
        }
        segments
    }

    /// Terminal column of the edit cursor, counting the label prefix.
    pub fn cursor_col(&self) -> usize {
        let prefix = self.prefix();
        prefix
            .chars()
            .chain(self.buffer.value().chars().take(self.buffer.cursor()))
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }
}
