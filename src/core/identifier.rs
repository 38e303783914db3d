//! Placeholder identifiers: the characters that stand for "any character of a
//! class" inside a mask string.

use crate::core::error::{MaskError, MaskResult};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const DIGIT_IDENTIFIER: char = '#';
pub const LETTER_IDENTIFIER: char = 'a';

/// Test applied to a single typed character.
#[derive(Clone)]
pub enum CharClass {
    /// `0-9`.
    Digit,
    /// `A-Z` and `a-z`.
    AsciiLetter,
    /// Regular expression, matched anywhere in the one-character string.
    Pattern(Regex),
    Predicate(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl CharClass {
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    pub fn predicate(test: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(test))
    }

    pub fn accepts(&self, ch: char) -> bool {
        match self {
            Self::Digit => ch.is_ascii_digit(),
            Self::AsciiLetter => ch.is_ascii_alphabetic(),
            Self::Pattern(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(ch.encode_utf8(&mut buf))
            }
            Self::Predicate(test) => test(ch),
        }
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit => f.write_str("Digit"),
            Self::AsciiLetter => f.write_str("AsciiLetter"),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Declarative identifier, as written in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierDef {
    pub character: String,
    #[serde(rename = "match")]
    pub pattern: String,
}

impl IdentifierDef {
    pub fn new(character: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            pattern: pattern.into(),
        }
    }
}

/// Table of placeholder characters shared by every field bound against it.
///
/// Mutations are order-sensitive: adding or removing an identifier changes how
/// all fields using this registry match from their next event on.
#[derive(Debug, Clone)]
pub struct IdentifierRegistry {
    identifiers: IndexMap<char, CharClass>,
}

impl IdentifierRegistry {
    /// Registry holding the built-ins: `#` for digits and `a` for ASCII letters.
    pub fn new() -> Self {
        let mut identifiers = IndexMap::new();
        identifiers.insert(DIGIT_IDENTIFIER, CharClass::Digit);
        identifiers.insert(LETTER_IDENTIFIER, CharClass::AsciiLetter);
        Self { identifiers }
    }

    pub fn empty() -> Self {
        Self {
            identifiers: IndexMap::new(),
        }
    }

    pub fn add(&mut self, def: IdentifierDef) -> MaskResult<()> {
        let character = self.vacant_character(def.character.as_str())?;
        if def.pattern.is_empty() {
            return Err(MaskError::MissingPattern(character));
        }
        let class = CharClass::pattern(def.pattern.as_str()).map_err(|source| {
            MaskError::InvalidPattern {
                character,
                pattern: def.pattern.clone(),
                source,
            }
        })?;

        log::debug!("registering identifier '{character}' matching {:?}", def.pattern);
        self.identifiers.insert(character, class);
        Ok(())
    }

    pub fn add_class(&mut self, character: &str, class: CharClass) -> MaskResult<()> {
        let character = self.vacant_character(character)?;
        log::debug!("registering identifier '{character}' as {class:?}");
        self.identifiers.insert(character, class);
        Ok(())
    }

    /// Removes an identifier, returning its class. Remaining entries keep
    /// their order.
    pub fn remove(&mut self, character: char) -> MaskResult<CharClass> {
        let removed = self
            .identifiers
            .shift_remove(&character)
            .ok_or(MaskError::IdentifierNotFound(character))?;
        log::debug!("removed identifier '{character}'");
        Ok(removed)
    }

    pub fn lookup(&self, character: char) -> Option<&CharClass> {
        self.identifiers.get(&character)
    }

    pub fn is_identifier(&self, character: char) -> bool {
        self.identifiers.contains_key(&character)
    }

    /// Whether `ch` may stand where `mask_char` appears. Always false for a
    /// literal `mask_char`.
    pub fn accepts(&self, mask_char: char, ch: char) -> bool {
        self.lookup(mask_char)
            .is_some_and(|class| class.accepts(ch))
    }

    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.identifiers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    fn vacant_character(&self, character: &str) -> MaskResult<char> {
        let mut chars = character.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(MaskError::InvalidCharacter(character.to_string()));
        };
        if self.is_identifier(ch) {
            return Err(MaskError::DuplicateIdentifier(ch));
        }
        Ok(ch)
    }
}

impl Default for IdentifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{CharClass, IdentifierDef, IdentifierRegistry};
    use crate::core::error::ErrorKind;

    #[test]
    fn builtins_cover_digits_and_letters() {
        let registry = IdentifierRegistry::new();
        assert!(registry.accepts('#', '7'));
        assert!(!registry.accepts('#', 'x'));
        assert!(registry.accepts('a', 'Q'));
        assert!(!registry.accepts('a', 'é'));
        assert!(!registry.accepts('-', '-'));
        assert_eq!(registry.characters().collect::<Vec<_>>(), vec!['#', 'a']);
    }

    #[test]
    fn added_identifier_can_be_looked_up_and_removed() {
        let mut registry = IdentifierRegistry::new();
        registry
            .add(IdentifierDef::new("@", "[abc]"))
            .expect("add identifier");

        let class = registry.lookup('@').expect("registered");
        assert!(class.accepts('b'));
        assert!(!class.accepts('d'));

        registry.remove('@').expect("remove identifier");
        assert!(registry.lookup('@').is_none());
    }

    #[test]
    fn duplicate_character_is_rejected() {
        let mut registry = IdentifierRegistry::new();
        let err = registry
            .add(IdentifierDef::new("#", "[0-5]"))
            .expect_err("duplicate");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn character_must_be_a_single_code_point() {
        let mut registry = IdentifierRegistry::new();
        for bad in ["", "@@", "ab"] {
            let err = registry
                .add(IdentifierDef::new(bad, "[abc]"))
                .expect_err("invalid character");
            assert_eq!(err.kind(), ErrorKind::Validation, "{bad:?}");
        }
        registry
            .add(IdentifierDef::new("é", "[éè]"))
            .expect("multi-byte single character");
        assert!(registry.accepts('é', 'è'));
    }

    #[test]
    fn empty_or_broken_pattern_is_rejected() {
        let mut registry = IdentifierRegistry::new();
        let empty = registry
            .add(IdentifierDef::new("@", ""))
            .expect_err("empty pattern");
        assert_eq!(empty.kind(), ErrorKind::Validation);

        let broken = registry
            .add(IdentifierDef::new("@", "[abc"))
            .expect_err("unclosed class");
        assert_eq!(broken.kind(), ErrorKind::Validation);
        assert!(!registry.is_identifier('@'));
    }

    #[test]
    fn removing_unknown_character_is_not_found() {
        let mut registry = IdentifierRegistry::new();
        let err = registry.remove('@').expect_err("not registered");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn removal_keeps_remaining_order() {
        let mut registry = IdentifierRegistry::new();
        registry
            .add_class("x", CharClass::predicate(|ch| ch.is_ascii_hexdigit()))
            .expect("add predicate");
        registry.remove('#').expect("remove builtin");
        assert_eq!(registry.characters().collect::<Vec<_>>(), vec!['a', 'x']);
        assert!(registry.accepts('x', 'F'));
        assert!(!registry.is_identifier('#'));
    }
}
