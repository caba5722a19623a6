//! Compile-time selection of an executor strategy from a handler's shape.
//!
//! [`executor_for`] inspects the handler's argument and return types through
//! trait resolution and yields the one strategy that fits: blocking for
//! handlers returning [`Outcome`] directly, deferred for handlers returning a
//! future of one; command-input for handlers taking the command, model-input
//! for handlers taking a type the command projects into via
//! [`IntoModel`]. Selection is static and zero-cost; a handler matching no
//! shape is rejected when the call is compiled, not on the first request.
//!
//! The command type is rarely inferable from a model handler alone, so calls
//! name it explicitly:
//!
//! ```ignore
//! let executor = executor_for::<SignUpCommand, _, _>(|model: Profile| async move {
//!     Outcome::valid(model)
//! });
//! ```

use std::future::Future;

use crate::command::{Command, IntoModel};
use crate::outcome::Outcome;

use super::{blocking, deferred};

/// Marker types naming the four accepted handler shapes.
///
/// Markers only steer trait resolution; they are never constructed. When a
/// command projects into itself (`IntoModel<Self>`), a `Fn(C) -> Outcome<C>`
/// handler fits two shapes and resolution is rejected as ambiguous; passing
/// the marker explicitly picks one.
pub mod shape {
    use std::marker::PhantomData;

    /// `Fn(C) -> Outcome<S>`
    pub struct BlockingCommand(());

    /// `Fn(M) -> Outcome<M>` with `C: IntoModel<M>`
    pub struct BlockingModel<M>(PhantomData<M>);

    /// `Fn(C) -> impl Future<Output = Outcome<S>>`
    pub struct DeferredCommand(());

    /// `Fn(M) -> impl Future<Output = Outcome<M>>` with `C: IntoModel<M>`
    pub struct DeferredModel<M>(PhantomData<M>);
}

/// Resolves a handler into the executor strategy its shape selects.
///
/// Implemented for every handler matching one of the four shapes in
/// [`shape`]; `Shape` is inferred. Bring a missing implementation into scope
/// by adjusting the handler, not by implementing this trait — it is not meant
/// to be implemented outside the crate.
#[diagnostic::on_unimplemented(
    message = "no executor strategy accepts a `{C}` handler of type `{Self}`",
    label = "unsupported handler shape",
    note = "blocking handlers are `Fn(C) -> Outcome<S>` or `Fn(M) -> Outcome<M>`; deferred handlers return a future of the same",
    note = "for model handlers, implement `IntoModel<M>` for `{C}` so the command can be projected into the model"
)]
pub trait IntoExecutor<C, Shape>: Sized {
    /// The strategy selected for this handler shape
    type Executor;

    /// Wraps the handler in its strategy
    fn into_executor(self) -> Self::Executor;
}

/// Resolves an executor for `handler`, selecting the strategy from its shape.
///
/// The turbofish names the command type when it cannot be inferred:
/// `executor_for::<SignUp, _, _>(handler)`.
pub fn executor_for<C, Shape, H>(handler: H) -> H::Executor
where
    H: IntoExecutor<C, Shape>,
{
    handler.into_executor()
}

impl<H, C, S> IntoExecutor<C, shape::BlockingCommand> for H
where
    C: Command,
    H: Fn(C) -> Outcome<S>,
{
    type Executor = blocking::FromCommand<H, C, S>;

    fn into_executor(self) -> Self::Executor {
        blocking::FromCommand::new(self)
    }
}

impl<H, C, M> IntoExecutor<C, shape::BlockingModel<M>> for H
where
    C: IntoModel<M>,
    H: Fn(M) -> Outcome<M>,
{
    type Executor = blocking::FromModel<fn(C) -> M, H, C, M>;

    fn into_executor(self) -> Self::Executor {
        blocking::FromModel::new(<C as IntoModel<M>>::into_model as fn(C) -> M, self)
    }
}

impl<H, C, S, Fut> IntoExecutor<C, shape::DeferredCommand> for H
where
    C: Command,
    H: Fn(C) -> Fut,
    Fut: Future<Output = Outcome<S>>,
{
    type Executor = deferred::FromCommand<H, C, Fut>;

    fn into_executor(self) -> Self::Executor {
        deferred::FromCommand::new(self)
    }
}

impl<H, C, M, Fut> IntoExecutor<C, shape::DeferredModel<M>> for H
where
    C: IntoModel<M>,
    H: Fn(M) -> Fut,
    Fut: Future<Output = Outcome<M>>,
{
    type Executor = deferred::FromModel<fn(C) -> M, H, C, Fut>;

    fn into_executor(self) -> Self::Executor {
        deferred::FromModel::new(<C as IntoModel<M>>::into_model as fn(C) -> M, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{DeferredExecutor, Executor};
    use crate::outcome::ValidationError;
    use crate::testing::StubCommand;

    #[derive(Debug, PartialEq)]
    struct Note {
        body: String,
    }

    impl IntoModel<Note> for StubCommand {
        fn into_model(self) -> Note {
            Note {
                body: self.payload().to_string(),
            }
        }
    }

    #[test]
    fn test_blocking_command_handler_resolves_and_executes() {
        let executor = executor_for(|_: StubCommand| Outcome::valid(1));
        assert_eq!(executor.execute(StubCommand::valid()), Outcome::valid(1));
    }

    #[test]
    fn test_blocking_model_handler_resolves_with_the_projection() {
        let executor = executor_for::<StubCommand, _, _>(|model: Note| Outcome::valid(model));

        let outcome = executor.execute(StubCommand::valid().with_payload("hello"));
        assert_eq!(
            outcome,
            Outcome::valid(Note {
                body: "hello".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_deferred_command_handler_resolves_and_executes() {
        let executor = executor_for(|_: StubCommand| async { Outcome::valid(1) });
        assert_eq!(executor.execute(StubCommand::valid()).await, Outcome::valid(1));
    }

    #[tokio::test]
    async fn test_deferred_model_handler_resolves_with_the_projection() {
        let executor = executor_for::<StubCommand, _, _>(|model: Note| async move {
            Outcome::valid(model)
        });

        let outcome = executor
            .execute(StubCommand::valid().with_payload("hello"))
            .await;
        assert_eq!(
            outcome,
            Outcome::valid(Note {
                body: "hello".to_string()
            })
        );
    }

    #[test]
    fn test_resolution_is_deterministic_for_a_given_shape() {
        // a command handler resolves to the blocking command strategy even
        // though StubCommand also projects into a model
        let handler = |_: StubCommand| Outcome::valid("done");
        let executor: blocking::FromCommand<_, StubCommand, &str> = executor_for(handler);

        let command = StubCommand::invalid().with_error("email", ValidationError::required("email"));
        assert!(executor.execute(command).is_invalid());
    }
}
