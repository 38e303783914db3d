pub mod event;
pub mod inline_field;
pub mod terminal;

pub use event::{TerminalEvent, map_event, map_key_code, map_key_event};
pub use inline_field::{InlineField, Segment};
pub use terminal::Terminal;
