//! Deferred executor strategies.
//!
//! These strategies return before the outcome is known and rely entirely on
//! the caller's runtime to drive the handler future. Two continuations are
//! composed onto it: an observer that logs the eventual outcome without
//! altering it, and a recovery step that downgrades a panic to an
//! [`Outcome::Invalid`]. Recovery wraps the observer, so it still runs if
//! logging itself panics.

use std::future::Future;
use std::marker::PhantomData;
use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;

use crate::command::Command;
use crate::outcome::Outcome;
use crate::text;

use super::DeferredExecutor;

/// Deferred strategy over a handler that consumes the command itself
pub struct FromCommand<H, C, Fut> {
    handler: H,
    _shape: PhantomData<fn(C) -> Fut>,
}

impl<H, C, Fut> FromCommand<H, C, Fut>
where
    C: Command,
    H: Fn(C) -> Fut,
    Fut: Future,
{
    /// Wraps a deferred command handler
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _shape: PhantomData,
        }
    }
}

#[async_trait]
impl<H, C, S, Fut> DeferredExecutor<C> for FromCommand<H, C, Fut>
where
    C: Command + Send + 'static,
    S: Send + 'static,
    H: Fn(C) -> Fut + Send + Sync,
    Fut: Future<Output = Outcome<S>> + Send + 'static,
{
    type Value = S;

    async fn execute(&self, command: C) -> Outcome<S> {
        if !command.is_valid() {
            return super::short_circuit(&command);
        }

        let name = text::simple_type_name(command.type_name());
        let observed = (self.handler)(command)
            .inspect(move |outcome| super::log_outcome(name, outcome));
        match AssertUnwindSafe(observed).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => super::recover(name, payload),
        }
    }
}

/// Deferred strategy over a handler that consumes the command's model.
///
/// As with [`blocking::FromModel`](super::blocking::FromModel), the
/// conversion runs after validation and before the handler future is built.
pub struct FromModel<F, H, C, Fut> {
    convert: F,
    handler: H,
    _shape: PhantomData<fn(C) -> Fut>,
}

impl<F, H, C, Fut> FromModel<F, H, C, Fut>
where
    C: Command,
    Fut: Future,
{
    /// Wraps a deferred model handler together with its command conversion
    pub fn new(convert: F, handler: H) -> Self {
        Self {
            convert,
            handler,
            _shape: PhantomData,
        }
    }
}

#[async_trait]
impl<F, H, C, M, Fut> DeferredExecutor<C> for FromModel<F, H, C, Fut>
where
    C: Command + Send + 'static,
    M: Send + 'static,
    F: Fn(C) -> M + Send + Sync,
    H: Fn(M) -> Fut + Send + Sync,
    Fut: Future<Output = Outcome<M>> + Send + 'static,
{
    type Value = M;

    async fn execute(&self, command: C) -> Outcome<M> {
        if !command.is_valid() {
            return super::short_circuit(&command);
        }

        let name = text::simple_type_name(command.type_name());
        let model = (self.convert)(command);
        let observed = (self.handler)(model)
            .inspect(move |outcome| super::log_outcome(name, outcome));
        match AssertUnwindSafe(observed).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => super::recover(name, payload),
        }
    }
}
