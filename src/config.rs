//! Declarative mask documents.
//!
//! ```yaml
//! identifiers:
//!   - character: "@"
//!     match: "[abc]"
//! fields:
//!   phone: "(###) ###-####"
//!   code:
//!     mask: "aa-##"
//!     placeholder: "__-__"
//!     clear_on_fail: false
//! ```

use crate::core::error::{MaskError, MaskResult};
use crate::core::identifier::{IdentifierDef, IdentifierRegistry};
use crate::field::FieldSpec;
use crate::form::MaskForm;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MaskDocument {
    /// Added on top of the built-in `#` and `a`.
    #[serde(default)]
    pub identifiers: Vec<IdentifierDef>,
    #[serde(default)]
    pub fields: IndexMap<String, FieldSpec>,
}

impl MaskDocument {
    pub fn from_yaml_str(source: &str) -> MaskResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> MaskResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads `path` as JSON when its extension is `.json`, as YAML otherwise.
    pub fn load(path: impl AsRef<Path>) -> MaskResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| MaskError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loading mask document {}", path.display());

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(source.as_str())
        } else {
            Self::from_yaml_str(source.as_str())
        }
    }

    pub fn registry(&self) -> MaskResult<IdentifierRegistry> {
        let mut registry = IdentifierRegistry::new();
        for def in &self.identifiers {
            registry.add(def.clone())?;
        }
        Ok(registry)
    }

    /// Builds a form with every declared field bound to empty content.
    pub fn into_form(self) -> MaskResult<MaskForm> {
        let mut form = MaskForm::new(self.registry()?);
        for (name, spec) in self.fields {
            form.bind(name, String::new(), spec)?;
        }
        Ok(form)
    }
}
