pub mod error;
pub mod identifier;

pub use error::{ErrorKind, MaskError, MaskResult};
pub use identifier::{CharClass, IdentifierDef, IdentifierRegistry};
