//! Form state with value/error lookup and identifier derivation.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{FormError, Result, ValidationErrors};

/// The in-progress state of one form instance.
///
/// Tracks the current value and validation errors for every field, and
/// derives the DOM id and input name for a field following the nested
/// bracket convention (`form_field` / `form[field]`). Renderers only read
/// from it; they never mutate it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    name: String,
    values: HashMap<String, String>,
    errors: ValidationErrors,
}

impl FormState {
    /// Creates an empty form state with the given form name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
            errors: ValidationErrors::new(),
        }
    }

    /// Binds a form state from a JSON object of submitted data.
    ///
    /// Only objects of scalar values are accepted; anything else is a
    /// [`FormError::Parse`].
    pub fn from_json(name: impl Into<String>, data: &Value) -> Result<Self> {
        let Value::Object(entries) = data else {
            return Err(FormError::Parse("expected a JSON object".to_string()));
        };

        let mut form = Self::new(name);
        for (field, value) in entries {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                Value::Array(_) | Value::Object(_) => {
                    return Err(FormError::Parse(format!(
                        "unsupported value for field {field}"
                    )));
                }
            };
            form.values.insert(field.clone(), value);
        }
        Ok(form)
    }

    /// Builder method to set a field value.
    #[must_use]
    pub fn with_value(mut self, field: &str, value: impl Into<String>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Builder method to record a validation error for a field.
    #[must_use]
    pub fn with_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }

    /// Returns the form name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current value of a field.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Returns the value of a field, or a [`FormError::MissingField`].
    pub fn require(&self, field: &str) -> Result<&str> {
        self.value(field)
            .ok_or_else(|| FormError::MissingField(field.to_string()))
    }

    /// Returns whether a field currently has a validation error.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.get(field).is_some()
    }

    /// Returns the first error message for a field, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.first(field)
    }

    /// Returns the full error collection.
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns `Ok` when no validation errors are recorded.
    pub fn check(&self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FormError::Validation(self.errors.clone()))
        }
    }

    /// Derives the DOM id for a field (`form_field`).
    pub fn input_id(&self, field: &str) -> String {
        format!("{}_{field}", self.name)
    }

    /// Derives the HTML input name for a field (`form[field]`).
    pub fn input_name(&self, field: &str) -> String {
        format!("{}[{field}]", self.name)
    }
}
