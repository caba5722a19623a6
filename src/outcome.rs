//! Success-or-failure vocabulary shared by every executor

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind tag carried by every [`ValidationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// A required value was missing
    Required,

    /// A value was present but malformed
    Format,

    /// A value fell outside its allowed range
    Range,

    /// A domain rule rejected the value
    Domain,

    /// A fault raised by a handler, downgraded to a validation error
    UnknownError,
}

/// A single validation failure with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    kind: ValidationKind,
}

impl ValidationError {
    /// Creates a validation error with an explicit kind
    pub fn new(message: impl Into<String>, kind: ValidationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Creates an error for a missing required field
    pub fn required(field: &str) -> Self {
        Self::new(format!("{field}: required"), ValidationKind::Required)
    }

    /// Creates an error for a malformed field value
    pub fn malformed(field: &str, detail: &str) -> Self {
        Self::new(format!("{field}: {detail}"), ValidationKind::Format)
    }

    /// Creates an error for a value outside its allowed range
    pub fn out_of_range(field: &str, detail: &str) -> Self {
        Self::new(format!("{field}: {detail}"), ValidationKind::Range)
    }

    /// Creates an error for a rejected domain rule
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(message, ValidationKind::Domain)
    }

    /// Creates the error used to wrap unexpected handler faults
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(message, ValidationKind::UnknownError)
    }

    /// Gets the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the error kind
    pub fn kind(&self) -> ValidationKind {
        self.kind
    }
}

/// Error returned when constructing [`ValidationErrors`] from an empty list
#[derive(Debug, Error)]
#[error("validation error list may not be empty")]
pub struct EmptyErrors;

/// A non-empty, order-preserving list of validation errors.
///
/// Order is the order in which failures were recorded; duplicates are kept.
/// Non-emptiness is part of the type: the only constructors either take a
/// first error or return [`EmptyErrors`] for an empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ValidationError>", into = "Vec<ValidationError>")]
pub struct ValidationErrors {
    head: ValidationError,
    tail: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a list holding a single error
    pub fn of(error: ValidationError) -> Self {
        Self {
            head: error,
            tail: Vec::new(),
        }
    }

    /// Creates a list from a first error and any number of further errors
    pub fn new(first: ValidationError, rest: impl IntoIterator<Item = ValidationError>) -> Self {
        Self {
            head: first,
            tail: rest.into_iter().collect(),
        }
    }

    /// Appends an error, preserving insertion order
    pub fn push(&mut self, error: ValidationError) {
        self.tail.push(error);
    }

    /// Number of errors in the list, always at least one
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always false; the list is non-empty by construction
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first error recorded
    pub fn first(&self) -> &ValidationError {
        &self.head
    }

    /// Iterates the errors in recorded order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Consumes the list into a plain vector
    pub fn into_vec(self) -> Vec<ValidationError> {
        let mut all = Vec::with_capacity(1 + self.tail.len());
        all.push(self.head);
        all.extend(self.tail);
        all
    }
}

impl TryFrom<Vec<ValidationError>> for ValidationErrors {
    type Error = EmptyErrors;

    fn try_from(errors: Vec<ValidationError>) -> Result<Self, EmptyErrors> {
        let mut iter = errors.into_iter();
        match iter.next() {
            Some(head) => Ok(Self {
                head,
                tail: iter.collect(),
            }),
            None => Err(EmptyErrors),
        }
    }
}

impl From<ValidationErrors> for Vec<ValidationError> {
    fn from(errors: ValidationErrors) -> Self {
        errors.into_vec()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        for error in self.iter() {
            write!(f, "{sep}{error}")?;
            sep = ", ";
        }
        Ok(())
    }
}

/// Result of executing a command: the handler's value, or the validation
/// failures that prevented or replaced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Outcome<S> {
    /// The handler ran and produced a value
    Valid(S),

    /// At least one failure; order-preserving, never empty
    Invalid(ValidationErrors),
}

impl<S> Outcome<S> {
    /// Creates a successful outcome
    pub fn valid(value: S) -> Self {
        Outcome::Valid(value)
    }

    /// Creates a failed outcome from an error list
    pub fn invalid(errors: ValidationErrors) -> Self {
        Outcome::Invalid(errors)
    }

    /// Creates a failed outcome from a single error
    pub fn failure(error: ValidationError) -> Self {
        Outcome::Invalid(ValidationErrors::of(error))
    }

    /// Checks whether the outcome carries a value
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    /// Checks whether the outcome carries failures
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Gets the value if the outcome is valid
    pub fn value(&self) -> Option<&S> {
        match self {
            Outcome::Valid(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
    }

    /// Gets the errors if the outcome is invalid
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(errors) => Some(errors),
        }
    }

    /// Maps the success value, leaving failures untouched
    pub fn map<U>(self, f: impl FnOnce(S) -> U) -> Outcome<U> {
        match self {
            Outcome::Valid(value) => Outcome::Valid(f(value)),
            Outcome::Invalid(errors) => Outcome::Invalid(errors),
        }
    }

    /// Chains another fallible step onto a successful outcome
    pub fn and_then<U>(self, f: impl FnOnce(S) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Valid(value) => f(value),
            Outcome::Invalid(errors) => Outcome::Invalid(errors),
        }
    }

    /// Converts into a standard result
    pub fn into_result(self) -> Result<S, ValidationErrors> {
        match self {
            Outcome::Valid(value) => Ok(value),
            Outcome::Invalid(errors) => Err(errors),
        }
    }
}

impl<S> From<Result<S, ValidationErrors>> for Outcome<S> {
    fn from(result: Result<S, ValidationErrors>) -> Self {
        match result {
            Ok(value) => Outcome::Valid(value),
            Err(errors) => Outcome::Invalid(errors),
        }
    }
}
