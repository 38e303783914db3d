use serde::{Deserialize, Serialize};
use std::fmt;

pub type MatchHook = Box<dyn FnMut(&str) + Send>;
pub type FailHook = Box<dyn FnMut() + Send>;

fn default_clear_on_fail() -> bool {
    true
}

/// Serializable part of a field binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    #[serde(default)]
    pub mask: Option<String>,
    /// Shown in an empty focused field. Defaults to the mask.
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default = "default_clear_on_fail", alias = "clearOnFail")]
    pub clear_on_fail: bool,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            mask: None,
            placeholder: None,
            clear_on_fail: true,
        }
    }
}

/// A field entry in a configuration file: a bare mask or the full settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldSpec {
    Mask(String),
    Settings(FieldSettings),
}

impl From<FieldSpec> for FieldSettings {
    fn from(value: FieldSpec) -> Self {
        match value {
            FieldSpec::Mask(mask) => Self {
                mask: Some(mask),
                ..Self::default()
            },
            FieldSpec::Settings(settings) => settings,
        }
    }
}

/// Everything needed to bind a field: settings plus lifecycle hooks.
#[derive(Default)]
pub struct FieldConfig {
    pub settings: FieldSettings,
    pub on_match: Option<MatchHook>,
    pub on_fail: Option<FailHook>,
}

impl FieldConfig {
    pub fn new(mask: impl Into<String>) -> Self {
        Self::default().with_mask(mask)
    }

    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.settings.mask = Some(mask.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.settings.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_clear_on_fail(mut self, clear_on_fail: bool) -> Self {
        self.settings.clear_on_fail = clear_on_fail;
        self
    }

    pub fn on_match(mut self, hook: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_match = Some(Box::new(hook));
        self
    }

    pub fn on_fail(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.on_fail = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("settings", &self.settings)
            .field("on_match", &self.on_match.is_some())
            .field("on_fail", &self.on_fail.is_some())
            .finish()
    }
}

impl From<&str> for FieldConfig {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldConfig {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<FieldSettings> for FieldConfig {
    fn from(settings: FieldSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }
}

impl From<FieldSpec> for FieldConfig {
    fn from(value: FieldSpec) -> Self {
        FieldSettings::from(value).into()
    }
}
