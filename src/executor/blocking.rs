//! Blocking executor strategies

use std::marker::PhantomData;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::command::Command;
use crate::outcome::Outcome;
use crate::text;

use super::Executor;

/// Blocking strategy over a handler that consumes the command itself
pub struct FromCommand<H, C, S> {
    handler: H,
    _shape: PhantomData<fn(C) -> S>,
}

impl<H, C, S> FromCommand<H, C, S>
where
    C: Command,
    H: Fn(C) -> Outcome<S>,
{
    /// Wraps a blocking command handler
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _shape: PhantomData,
        }
    }
}

impl<H, C, S> Executor<C> for FromCommand<H, C, S>
where
    C: Command,
    H: Fn(C) -> Outcome<S>,
{
    type Value = S;

    fn execute(&self, command: C) -> Outcome<S> {
        if !command.is_valid() {
            return super::short_circuit(&command);
        }

        let name = text::simple_type_name(command.type_name());
        match catch_unwind(AssertUnwindSafe(|| (self.handler)(command))) {
            Ok(outcome) => {
                super::log_outcome(name, &outcome);
                outcome
            }
            Err(payload) => super::recover(name, payload),
        }
    }
}

/// Blocking strategy over a handler that consumes the command's model.
///
/// The conversion runs after validation and outside the fault-containment
/// boundary, which wraps exactly the handler invocation.
pub struct FromModel<F, H, C, M> {
    convert: F,
    handler: H,
    _shape: PhantomData<fn(C) -> M>,
}

impl<F, H, C, M> FromModel<F, H, C, M>
where
    C: Command,
    F: Fn(C) -> M,
    H: Fn(M) -> Outcome<M>,
{
    /// Wraps a blocking model handler together with its command conversion
    pub fn new(convert: F, handler: H) -> Self {
        Self {
            convert,
            handler,
            _shape: PhantomData,
        }
    }
}

impl<F, H, C, M> Executor<C> for FromModel<F, H, C, M>
where
    C: Command,
    F: Fn(C) -> M,
    H: Fn(M) -> Outcome<M>,
{
    type Value = M;

    fn execute(&self, command: C) -> Outcome<M> {
        if !command.is_valid() {
            return super::short_circuit(&command);
        }

        let name = text::simple_type_name(command.type_name());
        let model = (self.convert)(command);
        match catch_unwind(AssertUnwindSafe(|| (self.handler)(model))) {
            Ok(outcome) => {
                super::log_outcome(name, &outcome);
                outcome
            }
            Err(payload) => super::recover(name, payload),
        }
    }
}
