//! The capability a bound request payload exposes to the executors

use serde::{Deserialize, Serialize};

use crate::outcome::ValidationError;

/// Per-field validation result recorded during binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValidation {
    /// The field passed every rule applied to it
    Valid,

    /// The field failed a rule
    Invalid(ValidationError),
}

/// A field paired with the validation result recorded for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    field: String,
    validation: FieldValidation,
}

impl FieldError {
    /// Creates a field error with an explicit validation result
    pub fn new(field: impl Into<String>, validation: FieldValidation) -> Self {
        Self {
            field: field.into(),
            validation,
        }
    }

    /// Creates an entry for a field that passed validation
    pub fn valid(field: impl Into<String>) -> Self {
        Self::new(field, FieldValidation::Valid)
    }

    /// Creates an entry for a field that failed validation
    pub fn invalid(field: impl Into<String>, error: ValidationError) -> Self {
        Self::new(field, FieldValidation::Invalid(error))
    }

    /// Gets the field name
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Gets the recorded validation result
    pub fn validation(&self) -> &FieldValidation {
        &self.validation
    }

    /// Gets the error, if the field failed validation
    pub fn error(&self) -> Option<&ValidationError> {
        match &self.validation {
            FieldValidation::Valid => None,
            FieldValidation::Invalid(error) => Some(error),
        }
    }
}

/// Capability a bound request payload must expose before it can be executed.
///
/// The binding and rule-evaluation phase happens upstream; by the time a
/// command reaches an executor these accessors are pure reads over state
/// recorded there. The contract: `is_valid()` returns false iff at least one
/// entry in `errors()` carries an [`FieldValidation::Invalid`] result.
pub trait Command {
    /// True iff every field-level validation succeeded during binding
    fn is_valid(&self) -> bool;

    /// Field results recorded during binding, in declaration order
    fn errors(&self) -> &[FieldError];

    /// Type name used in log lines and fault messages
    fn type_name(&self) -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

/// Pure projection from a bound command into the model its handler consumes.
///
/// Implemented per command type by the caller; model-variant executors invoke
/// it after validation and before the handler. The projection must not fail —
/// fallible conversion belongs in the handler itself.
pub trait IntoModel<M>: Command {
    /// Converts the command into its model representation
    fn into_model(self) -> M;
}
