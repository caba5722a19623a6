//! # Commandant
//!
//! A command execution layer for web services: bound-and-validated request
//! commands are dispatched to business-logic handlers through one of four
//! executor strategies, and every result — success, validation failure or
//! contained handler fault — is normalized into a uniform [`Outcome`].
//!
//! ## Usage
//!
//! ```
//! use commandant::{executor_for, Command, Executor, FieldError, Outcome};
//!
//! struct SignUp {
//!     email: String,
//!     errors: Vec<FieldError>,
//! }
//!
//! impl Command for SignUp {
//!     fn is_valid(&self) -> bool {
//!         self.errors.iter().all(|e| e.error().is_none())
//!     }
//!
//!     fn errors(&self) -> &[FieldError] {
//!         &self.errors
//!     }
//! }
//!
//! // resolved once at composition time, reused for every request
//! let executor = executor_for(|command: SignUp| Outcome::valid(command.email));
//!
//! let outcome = executor.execute(SignUp {
//!     email: "al@example.com".into(),
//!     errors: Vec::new(),
//! });
//! assert_eq!(outcome, Outcome::valid("al@example.com".to_string()));
//! ```
//!
//! ## Modules
//!
//! - `command` - The capability a bound request payload exposes to the executors
//! - `executor` - Executor strategies, the shared execution sequence and the
//!   compile-time resolver
//! - `outcome` - Success-or-failure vocabulary shared by every executor
//! - `testing` - Stub commands for exercising executors in tests

pub mod command;
pub mod executor;
pub mod outcome;
pub mod testing;

mod text;

pub use command::{Command, FieldError, FieldValidation, IntoModel};
pub use executor::{executor_for, DeferredExecutor, Executor, IntoExecutor};
pub use outcome::{EmptyErrors, Outcome, ValidationError, ValidationErrors, ValidationKind};
