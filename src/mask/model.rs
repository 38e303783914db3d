use crate::core::identifier::IdentifierRegistry;
use crate::mask::{cursor, matcher};

/// What a single mask position means under a given registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSlot {
    /// Must appear verbatim.
    Literal(char),
    /// Any character accepted by the identifier may appear.
    Placeholder(char),
}

impl MaskSlot {
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// A mask split into positions.
///
/// Slots are resolved against the registry on every call rather than stored,
/// so identifier changes take effect without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    source: String,
    chars: Vec<char>,
}

impl Mask {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let chars = source.chars().collect();
        Self { source, chars }
    }

    pub fn as_str(&self) -> &str {
        self.source.as_str()
    }

    pub fn chars(&self) -> &[char] {
        self.chars.as_slice()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn slot(&self, registry: &IdentifierRegistry, index: usize) -> Option<MaskSlot> {
        self.char_at(index).map(|ch| {
            if registry.is_identifier(ch) {
                MaskSlot::Placeholder(ch)
            } else {
                MaskSlot::Literal(ch)
            }
        })
    }

    pub fn is_placeholder_at(&self, registry: &IdentifierRegistry, index: usize) -> bool {
        self.slot(registry, index).is_some_and(MaskSlot::is_placeholder)
    }

    /// Whether `ch` satisfies the class at `index`. False at literal positions
    /// and past the end.
    pub fn accepts_at(&self, registry: &IdentifierRegistry, index: usize, ch: char) -> bool {
        self.char_at(index)
            .is_some_and(|mask_char| registry.accepts(mask_char, ch))
    }

    pub fn placeholder_positions<'a>(
        &'a self,
        registry: &'a IdentifierRegistry,
    ) -> impl Iterator<Item = usize> + 'a {
        self.chars
            .iter()
            .enumerate()
            .filter(|(_, ch)| registry.is_identifier(**ch))
            .map(|(idx, _)| idx)
    }

    pub fn matches(&self, registry: &IdentifierRegistry, candidate: &str) -> bool {
        let candidate: Vec<char> = candidate.chars().collect();
        matcher::matches_chars(registry, candidate.as_slice(), self.chars())
    }

    pub fn apply(&self, registry: &IdentifierRegistry, raw: &str) -> Option<String> {
        let raw: Vec<char> = raw.chars().collect();
        matcher::apply_mask_chars(registry, raw.as_slice(), self.chars())
    }

    pub fn next_placeholder(&self, registry: &IdentifierRegistry, from: usize) -> Option<usize> {
        cursor::next_identifier_in(registry, self.chars(), from)
    }
}

impl From<&str> for Mask {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Mask {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
