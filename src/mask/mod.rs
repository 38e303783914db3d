mod cursor;
mod matcher;
mod model;

pub use cursor::{next_identifier_in, next_identifier_index};
pub use matcher::{apply_mask, apply_mask_chars, matches, matches_chars};
pub use model::{Mask, MaskSlot};
