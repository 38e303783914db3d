use crate::core::error::{MaskError, MaskResult};
use crate::core::identifier::IdentifierRegistry;
use crate::field::{
    EventOutcome, FieldConfig, FieldEvent, HostField, MaskedField, TextBuffer, simulate_input,
};
use indexmap::IndexMap;

struct BoundField {
    buffer: TextBuffer,
    field: MaskedField,
}

/// Named fields bound against one shared identifier registry.
pub struct MaskForm {
    registry: IdentifierRegistry,
    fields: IndexMap<String, BoundField>,
}

impl MaskForm {
    pub fn new(registry: IdentifierRegistry) -> Self {
        Self {
            registry,
            fields: IndexMap::new(),
        }
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    /// Identifier changes made here affect every bound field.
    pub fn registry_mut(&mut self) -> &mut IdentifierRegistry {
        &mut self.registry
    }

    pub fn bind(
        &mut self,
        name: impl Into<String>,
        initial_value: impl Into<String>,
        config: impl Into<FieldConfig>,
    ) -> MaskResult<()> {
        let name = name.into();
        if self.fields.contains_key(name.as_str()) {
            return Err(MaskError::DuplicateField(name));
        }

        let mut buffer = TextBuffer::new(initial_value);
        let field = MaskedField::bind(&self.registry, &mut buffer, config)?;
        log::debug!("form field {name:?} bound");
        self.fields.insert(name, BoundField { buffer, field });
        Ok(())
    }

    pub fn dispatch(&mut self, name: &str, event: FieldEvent) -> MaskResult<EventOutcome> {
        let bound = self
            .fields
            .get_mut(name)
            .ok_or_else(|| MaskError::FieldNotFound(name.to_string()))?;
        Ok(bound.field.handle(&self.registry, &mut bound.buffer, event))
    }

    /// Focuses `name`, types `text` one character at a time and blurs it.
    pub fn type_text(&mut self, name: &str, text: &str) -> MaskResult<&str> {
        let bound = self
            .fields
            .get_mut(name)
            .ok_or_else(|| MaskError::FieldNotFound(name.to_string()))?;
        simulate_input(&mut bound.field, &self.registry, &mut bound.buffer, text);
        Ok(bound.buffer.value())
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|bound| bound.buffer.value())
    }

    pub fn cursor(&self, name: &str) -> Option<usize> {
        self.fields.get(name).map(|bound| bound.buffer.cursor())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for MaskForm {
    fn default() -> Self {
        Self::new(IdentifierRegistry::new())
    }
}

impl std::fmt::Debug for MaskForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskForm")
            .field("registry", &self.registry)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
