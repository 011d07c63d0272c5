//! # Handlers
//!
//! A handler is the terminal point of a dispatch: it receives the fired
//! payload, the fired meta and the args bound at registration time, and
//! produces a response asynchronously.
//!
//! # Arity
//!
//! Every handler sees the same three-argument contract
//! `(payload, meta, args)`. Closures may declare fewer parameters; the extra
//! arguments are dropped before the closure runs. The `Args` marker type
//! parameter keeps the four closure shapes apart so the compiler selects
//! the right one at registration:
//!
//! | Closure | Marker |
//! |---|---|
//! | `Fn() -> Fut` | `()` |
//! | `Fn(P) -> Fut` | `(P,)` |
//! | `Fn(P, M) -> Fut` | `(P, M)` |
//! | `Fn(P, M, Option<A>) -> Fut` | `(P, M, A)` |
//!
//! In every case `Fut` resolves to `Result<R, E>` where `E` converts into a
//! [`BoxError`].
//!
//! Handlers are always asynchronous. A handler that computes its response
//! synchronously returns an already completed future, such as
//! [`std::future::ready`]:
//!
//! ```rust,ignore
//! router.register("double", |n: u32| std::future::ready(Ok::<_, Infallible>(n * 2)))?;
//! ```
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|payload: Order| async move { Ok::<_, Infallible>(payload.total) }`
//! 2. **Struct implementation**: `impl Handler<MyMarker, P, M, A> for MyHandler`

use crate::error::BoxError;
use std::future::Future;

/// The callable invoked when a registered pattern matches.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle actions with payload `{P}` and meta `{M}`",
    label = "not an action handler",
    note = "Handlers are closures taking up to `(payload, meta, Option<args>)` and returning a future of `Result<_, _>`."
)]
pub trait Handler<Args, P, M, A>: Send + Sync + 'static {
    /// The value produced on success.
    type Response: Send + 'static;

    /// Execute the handler.
    fn call(
        &self,
        payload: P,
        meta: M,
        args: Option<A>,
    ) -> impl Future<Output = Result<Self::Response, BoxError>> + Send;
}

impl<F, Fut, R, E, P, M, A> Handler<(), P, M, A> for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send,
    R: Send + 'static,
    E: Into<BoxError>,
{
    type Response = R;

    fn call(
        &self,
        _payload: P,
        _meta: M,
        _args: Option<A>,
    ) -> impl Future<Output = Result<Self::Response, BoxError>> + Send {
        let fut = (self)();
        async move { fut.await.map_err(Into::into) }
    }
}

impl<F, Fut, R, E, P, M, A> Handler<(P,), P, M, A> for F
where
    F: Fn(P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send,
    R: Send + 'static,
    E: Into<BoxError>,
{
    type Response = R;

    fn call(
        &self,
        payload: P,
        _meta: M,
        _args: Option<A>,
    ) -> impl Future<Output = Result<Self::Response, BoxError>> + Send {
        let fut = (self)(payload);
        async move { fut.await.map_err(Into::into) }
    }
}

impl<F, Fut, R, E, P, M, A> Handler<(P, M), P, M, A> for F
where
    F: Fn(P, M) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send,
    R: Send + 'static,
    E: Into<BoxError>,
{
    type Response = R;

    fn call(
        &self,
        payload: P,
        meta: M,
        _args: Option<A>,
    ) -> impl Future<Output = Result<Self::Response, BoxError>> + Send {
        let fut = (self)(payload, meta);
        async move { fut.await.map_err(Into::into) }
    }
}

impl<F, Fut, R, E, P, M, A> Handler<(P, M, A), P, M, A> for F
where
    F: Fn(P, M, Option<A>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send,
    R: Send + 'static,
    E: Into<BoxError>,
{
    type Response = R;

    fn call(
        &self,
        payload: P,
        meta: M,
        args: Option<A>,
    ) -> impl Future<Output = Result<Self::Response, BoxError>> + Send {
        let fut = (self)(payload, meta, args);
        async move { fut.await.map_err(Into::into) }
    }
}
