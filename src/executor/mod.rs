//! Executor strategies, the shared execution sequence and the resolver.
//!
//! Every strategy runs the same sequence over a command: validate, invoke the
//! handler, normalize the result, log the outcome. An invalid command
//! short-circuits before the handler; a handler panic is downgraded to an
//! [`Outcome::Invalid`] at the executor boundary, so `execute` always returns
//! a value in both calling conventions.
//!
//! The four strategies differ only in how the handler is shaped and invoked:
//!
//! | Strategy | Handler | Invocation |
//! |---|---|---|
//! | [`blocking::FromCommand`] | `Fn(C) -> Outcome<S>` | calling thread |
//! | [`blocking::FromModel`] | `Fn(M) -> Outcome<M>` | calling thread, after conversion |
//! | [`deferred::FromCommand`] | `Fn(C) -> Future<Outcome<S>>` | caller's runtime |
//! | [`deferred::FromModel`] | `Fn(M) -> Future<Outcome<M>>` | caller's runtime, after conversion |
//!
//! [`resolver::executor_for`] selects the strategy from the handler's shape at
//! compile time.

use std::any::Any;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::command::{Command, FieldValidation};
use crate::outcome::{Outcome, ValidationError, ValidationErrors};
use crate::text;

pub mod blocking;
pub mod deferred;
pub mod resolver;

pub use resolver::{executor_for, IntoExecutor};

/// Blocking strategy interface: validation, invocation and fault containment
/// all complete on the calling thread before `execute` returns.
pub trait Executor<C: Command> {
    /// Success type produced by the wrapped handler
    type Value;

    /// Runs the command through the execution sequence
    fn execute(&self, command: C) -> Outcome<Self::Value>;
}

/// Deferred strategy interface: `execute` may suspend, but the returned
/// future always completes with an outcome, never with a panic. Scheduling is
/// entirely the caller's; the strategy spawns nothing.
#[async_trait]
pub trait DeferredExecutor<C>: Send + Sync
where
    C: Command + Send + 'static,
{
    /// Success type produced by the wrapped handler
    type Value;

    /// Runs the command through the execution sequence
    async fn execute(&self, command: C) -> Outcome<Self::Value>;
}

/// Collects the failures recorded on an invalid command and completes without
/// invoking the handler.
///
/// Only entries carrying an `Invalid` result are collected, in recorded
/// order. An entry recorded as `Valid` on a command that reports itself
/// invalid breaks the [`Command`] contract; it is logged and skipped. Should
/// that leave nothing to collect, a single `UnknownError` stands in so the
/// executor stays total.
pub(crate) fn short_circuit<C: Command, S>(command: &C) -> Outcome<S> {
    let name = text::simple_type_name(command.type_name());

    let mut collected = Vec::with_capacity(command.errors().len());
    for entry in command.errors() {
        match entry.validation() {
            FieldValidation::Invalid(error) => collected.push(error.clone()),
            FieldValidation::Valid => {
                warn!(
                    "{name} reports invalid but field '{}' carries no error; skipping",
                    entry.field()
                );
            }
        }
    }

    let errors = match ValidationErrors::try_from(collected) {
        Ok(errors) => errors,
        Err(_) => {
            error!("{name} reports invalid without any field errors");
            ValidationErrors::of(ValidationError::unknown(format!(
                "Failed to execute {}",
                text::humanize(name)
            )))
        }
    };

    debug!(
        "{name} failed validation with {}",
        text::count_of(errors.len(), "failure")
    );
    Outcome::Invalid(errors)
}

/// Logs the completed outcome without altering it
pub(crate) fn log_outcome<S>(name: &str, outcome: &Outcome<S>) {
    match outcome {
        Outcome::Valid(_) => debug!("{name} executed successfully"),
        Outcome::Invalid(errors) => debug!(
            "{name} completed with {}: [{errors}]",
            text::count_of(errors.len(), "failure")
        ),
    }
}

/// Downgrades a handler panic to an `Invalid` outcome, logging the payload
/// detail at error level
pub(crate) fn recover<S>(name: &str, payload: Box<dyn Any + Send>) -> Outcome<S> {
    error!("handler for {name} panicked: {}", panic_detail(payload.as_ref()));

    let outcome = Outcome::failure(ValidationError::unknown(format!(
        "Failed to execute {}",
        text::humanize(name)
    )));
    log_outcome(name, &outcome);
    outcome
}

fn panic_detail(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("(non-string panic)")
}
