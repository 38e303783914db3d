mod config;
mod event;
mod host;

pub use config::{FailHook, FieldConfig, FieldSettings, FieldSpec, MatchHook};
pub use event::{EventOutcome, FieldEvent, KeyCode};
pub use host::{HostField, TextBuffer, char_count};

use crate::core::error::{MaskError, MaskResult};
use crate::core::identifier::IdentifierRegistry;
use crate::mask::Mask;

/// Per-field masking state: reacts to focus, key and blur notifications on
/// one host field.
///
/// The registry is passed to every handler, so identifiers added or removed
/// after binding apply from the next event on.
pub struct MaskedField {
    mask: Mask,
    placeholder: Vec<char>,
    clear_on_fail: bool,
    on_match: Option<MatchHook>,
    on_fail: Option<FailHook>,
}

impl MaskedField {
    /// Validates `config` and conforms any existing host content.
    ///
    /// Content that already matches is kept; otherwise it is reshaped with
    /// the mask when possible. Both cases fire `on_match`. Content that cannot
    /// be reshaped is left untouched.
    pub fn bind<H: HostField + ?Sized>(
        registry: &IdentifierRegistry,
        host: &mut H,
        config: impl Into<FieldConfig>,
    ) -> MaskResult<Self> {
        let FieldConfig {
            settings,
            on_match,
            on_fail,
        } = config.into();

        let mask = match settings.mask {
            Some(mask) if !mask.is_empty() => Mask::new(mask),
            other => return Err(MaskError::InvalidMask(other)),
        };
        let placeholder: Vec<char> = match settings.placeholder {
            Some(placeholder) if !placeholder.is_empty() => placeholder.chars().collect(),
            _ => mask.chars().to_vec(),
        };
        if placeholder.len() != mask.len() {
            log::warn!(
                "placeholder has {} characters but mask {:?} has {}",
                placeholder.len(),
                mask.as_str(),
                mask.len()
            );
        }

        let mut field = Self {
            mask,
            placeholder,
            clear_on_fail: settings.clear_on_fail,
            on_match,
            on_fail,
        };

        let current = host.value().to_string();
        if field.mask.matches(registry, current.as_str()) {
            field.fire_match(current.as_str());
        } else if let Some(masked) = field.mask.apply(registry, current.as_str()) {
            host.set_value(masked.clone());
            field.fire_match(masked.as_str());
        }

        log::debug!("bound field to mask {:?}", field.mask.as_str());
        Ok(field)
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn placeholder(&self) -> String {
        self.placeholder.iter().collect()
    }

    pub fn clear_on_fail(&self) -> bool {
        self.clear_on_fail
    }

    pub fn handle<H: HostField + ?Sized>(
        &mut self,
        registry: &IdentifierRegistry,
        host: &mut H,
        event: FieldEvent,
    ) -> EventOutcome {
        match event {
            FieldEvent::Focus => {
                self.focus(registry, host);
                EventOutcome::pass_through()
            }
            FieldEvent::Key(key) => self.key_press(registry, host, key),
            FieldEvent::Blur => {
                self.blur(registry, host);
                EventOutcome::pass_through()
            }
        }
    }

    /// Shows the placeholder in an empty field, or puts the cursor where
    /// typing should resume.
    pub fn focus<H: HostField + ?Sized>(&self, registry: &IdentifierRegistry, host: &mut H) {
        let first = self.mask.next_placeholder(registry, 0);

        if host.value().is_empty() {
            host.set_value(self.placeholder());
            host.set_selection(first.unwrap_or(self.placeholder.len()));
            return;
        }

        let value: Vec<char> = host.value().chars().collect();
        if self.mask.matches(registry, host.value()) {
            host.set_selection(self.placeholder.len());
            return;
        }

        // Resume after the last position holding an accepted character.
        let resume = value
            .iter()
            .enumerate()
            .fold(first.unwrap_or(0), |resume, (idx, &ch)| {
                if self.mask.accepts_at(registry, idx, ch) {
                    idx + 1
                } else {
                    resume
                }
            });
        host.set_selection(
            self.mask
                .next_placeholder(registry, resume)
                .unwrap_or(value.len()),
        );
    }

    /// Applies one keystroke at the host cursor.
    pub fn key_press<H: HostField + ?Sized>(
        &self,
        registry: &IdentifierRegistry,
        host: &mut H,
        key: KeyCode,
    ) -> EventOutcome {
        if key.is_navigation() {
            return EventOutcome::pass_through();
        }

        let mut value: Vec<char> = host.value().chars().collect();
        let cursor = host.selection_start().min(value.len());
        let typed = key.as_char();
        let accepted = typed.is_some_and(|ch| self.mask.accepts_at(registry, cursor, ch));
        let repeats_current = typed.is_some() && typed == value.get(cursor).copied();
        let next_stop = self.mask.next_placeholder(registry, cursor + 1);

        log::trace!("key {key:?} at {cursor}: accepted={accepted} next={next_stop:?}");

        if !accepted && !repeats_current {
            match key {
                KeyCode::Backspace if cursor > 0 => {
                    let prev = cursor - 1;
                    if let (Some(slot), Some(blank)) =
                        (value.get_mut(prev), self.placeholder_char(prev))
                    {
                        *slot = blank;
                    }
                    host.set_value(value.into_iter().collect());
                    host.set_selection(prev);
                }
                KeyCode::Char(' ') => {
                    let next_is_blank = self.mask.is_placeholder_at(registry, cursor + 1)
                        && value.get(cursor + 1).copied() == self.placeholder_char(cursor + 1);
                    if next_is_blank && let Some(next_stop) = next_stop {
                        host.set_selection(next_stop);
                    }
                }
                _ => {}
            }
            return EventOutcome::suppressed();
        }

        if let Some(ch) = typed {
            match value.get_mut(cursor) {
                Some(slot) => *slot = ch,
                None => value.push(ch),
            }
        }
        let len = value.len();
        host.set_value(value.into_iter().collect());
        host.set_selection(next_stop.unwrap_or(len));

        EventOutcome::suppressed()
    }

    /// Validates the content, firing `on_match` or `on_fail`.
    pub fn blur<H: HostField + ?Sized>(&mut self, registry: &IdentifierRegistry, host: &mut H) {
        let value = host.value().to_string();
        if self.mask.matches(registry, value.as_str()) {
            self.fire_match(value.as_str());
            return;
        }

        if let Some(on_fail) = self.on_fail.as_mut() {
            on_fail();
        }
        if self.clear_on_fail {
            host.set_value(String::new());
        }
    }

    fn fire_match(&mut self, value: &str) {
        if let Some(on_match) = self.on_match.as_mut() {
            on_match(value);
        }
    }

    /// Placeholder character at `index`, falling back to the mask when the
    /// placeholder is shorter.
    fn placeholder_char(&self, index: usize) -> Option<char> {
        self.placeholder
            .get(index)
            .copied()
            .or_else(|| self.mask.char_at(index))
    }
}

impl std::fmt::Debug for MaskedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskedField")
            .field("mask", &self.mask.as_str())
            .field("placeholder", &self.placeholder())
            .field("clear_on_fail", &self.clear_on_fail)
            .finish_non_exhaustive()
    }
}

/// Focus, one key per character, blur: the sequence a user typing `text`
/// into the field produces.
pub fn simulate_input<H: HostField + ?Sized>(
    field: &mut MaskedField,
    registry: &IdentifierRegistry,
    host: &mut H,
    text: &str,
) {
    field.handle(registry, host, FieldEvent::Focus);
    for ch in text.chars() {
        field.handle(registry, host, FieldEvent::Key(KeyCode::Char(ch)));
    }
    field.handle(registry, host, FieldEvent::Blur);
}
