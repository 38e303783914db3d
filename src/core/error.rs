use thiserror::Error;

/// Coarse classification of [`MaskError`], matching how callers react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad mask string or bad identifier definition.
    Validation,
    /// Removing or addressing something that is not registered.
    NotFound,
    /// A configuration document could not be parsed.
    Config,
    Io,
}

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("invalid mask string: {0:?}")]
    InvalidMask(Option<String>),

    #[error("identifier character must be exactly one character, got {0:?}")]
    InvalidCharacter(String),

    #[error("identifier for '{0}' must have a non-empty match pattern")]
    MissingPattern(char),

    #[error("invalid match pattern {pattern:?} for identifier '{character}': {source}")]
    InvalidPattern {
        character: char,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("identifier already exists for character '{0}'")]
    DuplicateIdentifier(char),

    #[error("could not find identifier for character '{0}'")]
    IdentifierNotFound(char),

    #[error("no field named {0:?}")]
    FieldNotFound(String),

    #[error("field {0:?} is already bound")]
    DuplicateField(String),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMask(_)
            | Self::InvalidCharacter(_)
            | Self::MissingPattern(_)
            | Self::InvalidPattern { .. }
            | Self::DuplicateIdentifier(_)
            | Self::DuplicateField(_) => ErrorKind::Validation,
            Self::IdentifierNotFound(_) | Self::FieldNotFound(_) => ErrorKind::NotFound,
            Self::Yaml(_) | Self::Json(_) => ErrorKind::Config,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

pub type MaskResult<T> = Result<T, MaskError>;

#[cfg(test)]
mod tests {
    use super::{ErrorKind, MaskError};

    #[test]
    fn registry_errors_are_classified() {
        assert_eq!(
            MaskError::DuplicateIdentifier('#').kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            MaskError::IdentifierNotFound('@').kind(),
            ErrorKind::NotFound
        );
        assert_eq!(MaskError::InvalidMask(None).kind(), ErrorKind::Validation);
    }

    #[test]
    fn messages_name_the_character() {
        let err = MaskError::IdentifierNotFound('@');
        assert_eq!(err.to_string(), "could not find identifier for character '@'");
    }
}
