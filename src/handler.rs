//! Typed async step handlers.
//!
//! Handlers are stored as [`StepHandler`], an `Arc`'d function from
//! [`CapturedArguments`] to a boxed future. The [`IntoStepHandler`]
//! conversion lets step definitions be written as plain async closures
//! over `String` arguments while recording the arity the registry checks
//! against the pattern's capture-group count at registration time.

use std::{future::Future, sync::Arc};

use futures::future::BoxFuture;

use crate::step::CapturedArguments;

/// Error type propagated unmodified from a handler to the runner.
///
/// Assertion failures and automation-driver errors travel through the
/// dispatcher as this opaque boxed error; the dispatcher adds no
/// wrapping or recovery.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Future returned by a dispatched handler.
pub type HandlerFuture = BoxFuture<'static, Result<(), HandlerError>>;

/// Alias for registered asynchronous step handlers.
///
/// A `StepHandler` is an `Arc` to a function returning a boxed
/// [`Future`], enabling asynchronous execution of step side effects.
/// The dispatcher awaits the future to completion before returning.
pub type StepHandler = Arc<dyn Fn(CapturedArguments) -> HandlerFuture + Send + Sync>;

/// Conversion from an async closure into a [`StepHandler`].
///
/// The `Args` parameter distinguishes implementations by argument count;
/// [`IntoStepHandler::ARITY`] is the declared arity the registry
/// validates against the pattern.
pub trait IntoStepHandler<Args>: Send + Sync + 'static {
    /// Number of `String` arguments the handler accepts.
    const ARITY: usize;

    /// Box the handler behind the uniform [`StepHandler`] shape.
    fn into_handler(self) -> StepHandler;
}

macro_rules! step_argument {
    ($name:ident) => {
        String
    };
}

macro_rules! impl_into_step_handler {
    ($arity:literal $(, $arg:ident)*) => {
        impl<F, Fut> IntoStepHandler<($(step_argument!($arg),)*)> for F
        where
            F: Fn($(step_argument!($arg)),*) -> Fut + Clone + Send + Sync + 'static,
            Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
        {
            const ARITY: usize = $arity;

            fn into_handler(self) -> StepHandler {
                Arc::new(move |arguments: CapturedArguments| {
                    let handler = self.clone();
                    Box::pin(async move {
                        let [$($arg),*] = arguments.into_array::<$arity>()?;
                        handler($($arg),*).await
                    })
                })
            }
        }
    };
}

impl_into_step_handler!(0);
impl_into_step_handler!(1, a);
impl_into_step_handler!(2, a, b);
impl_into_step_handler!(3, a, b, c);
impl_into_step_handler!(4, a, b, c, d);
