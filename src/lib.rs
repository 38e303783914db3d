//! Input masks for text-entry fields.
//!
//! A mask such as `(###) ###-####` mixes placeholder characters, which stand
//! for a class of characters, with literals that must appear verbatim. The
//! [`field::MaskedField`] controller keeps a host field's content conforming
//! to its mask while the user types.

pub mod config;
pub mod core;
pub mod field;
pub mod form;
pub mod logging;
pub mod mask;
pub mod terminal;

pub use self::core::{
    CharClass, ErrorKind, IdentifierDef, IdentifierRegistry, MaskError, MaskResult,
};
pub use field::{FieldConfig, FieldEvent, HostField, KeyCode, MaskedField, TextBuffer};
pub use form::MaskForm;
pub use mask::{Mask, apply_mask, matches, next_identifier_index};
