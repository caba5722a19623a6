//! Test support for exercising executors without a real binding layer

use crate::command::{Command, FieldError};
use crate::outcome::ValidationError;

/// Command stub with scripted validity, field errors and an optional payload.
///
/// The binding phase is out of scope for this crate, so tests (ours and
/// downstream users') script its result instead:
///
/// ```
/// use commandant::testing::StubCommand;
/// use commandant::{Command, ValidationError};
///
/// let command = StubCommand::invalid().with_error("email", ValidationError::required("email"));
/// assert!(!command.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct StubCommand {
    valid: bool,
    errors: Vec<FieldError>,
    payload: String,
}

impl StubCommand {
    /// Creates a stub that passed validation
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            payload: String::new(),
        }
    }

    /// Creates a stub that failed validation; add errors with
    /// [`with_error`](Self::with_error)
    pub fn invalid() -> Self {
        Self {
            valid: false,
            errors: Vec::new(),
            payload: String::new(),
        }
    }

    /// Records a failed field
    pub fn with_error(mut self, field: &str, error: ValidationError) -> Self {
        self.errors.push(FieldError::invalid(field, error));
        self
    }

    /// Records a field entry verbatim, including contract-breaking ones
    pub fn with_field(mut self, entry: FieldError) -> Self {
        self.errors.push(entry);
        self
    }

    /// Sets the payload handed to model conversions
    pub fn with_payload(mut self, payload: &str) -> Self {
        self.payload = payload.to_string();
        self
    }

    /// Gets the payload
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl Command for StubCommand {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn type_name(&self) -> &'static str {
        "StubCommand"
    }
}
