//! Testing utilities for lambda-actions.
//!
//! This module provides handlers that make it easy to assert what a router
//! did.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every invocation and answers with a fixed
//!   response
//! - [`FailingHandler`]: counts invocations and always fails with
//!   [`HandlerFailure`]

use lambda_actions_core::{BoxError, Handler};
use parking_lot::Mutex;
use std::{
    marker::PhantomData,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};
use thiserror::Error;

/// Marker selecting the [`Handler`] impls of the handlers in this module.
pub enum Spy {}

// ============================================================================
// Recording Handler
// ============================================================================

/// One recorded handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation<P, M, A> {
    /// The payload the handler received.
    pub payload: P,
    /// The meta the handler received.
    pub meta: M,
    /// The registration args the handler received.
    pub args: Option<A>,
}

/// A handler that records every invocation and returns a clone of a fixed
/// response.
///
/// Clones share the same record, so keep one clone for assertions and
/// register the other.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new(json!({ "pong": true }));
/// router.register("ping", recorder.clone())?;
///
/// router.dispatch("ping", payload, meta).await?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<P, M, A, R> {
    invocations: Arc<Mutex<Vec<Invocation<P, M, A>>>>,
    response: R,
}

impl<P, M, A, R> RecordingHandler<P, M, A, R> {
    /// Create a handler answering every call with `response`.
    pub fn new(response: R) -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            response,
        }
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.invocations.lock().len()
    }

    /// Returns true if the handler ran at least once.
    pub fn was_called(&self) -> bool {
        self.count() > 0
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.invocations.lock().clear();
    }
}

impl<P: Clone, M: Clone, A: Clone, R> RecordingHandler<P, M, A, R> {
    /// Get a clone of the recorded invocations.
    pub fn invocations(&self) -> Vec<Invocation<P, M, A>> {
        self.invocations.lock().clone()
    }

    /// The most recent invocation, if any.
    pub fn last(&self) -> Option<Invocation<P, M, A>> {
        self.invocations.lock().last().cloned()
    }
}

impl<P, M, A, R: Clone> Clone for RecordingHandler<P, M, A, R> {
    fn clone(&self) -> Self {
        Self {
            invocations: self.invocations.clone(),
            response: self.response.clone(),
        }
    }
}

impl<P, M, A, R> Handler<Spy, P, M, A> for RecordingHandler<P, M, A, R>
where
    P: Send + 'static,
    M: Send + 'static,
    A: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    type Response = R;

    async fn call(&self, payload: P, meta: M, args: Option<A>) -> Result<R, BoxError> {
        self.invocations.lock().push(Invocation {
            payload,
            meta,
            args,
        });
        Ok(self.response.clone())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// The error returned by [`FailingHandler`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerFailure(pub String);

/// A handler that always fails with [`HandlerFailure`].
///
/// `R` is the response type the router expects; it is never produced.
pub struct FailingHandler<R> {
    message: String,
    count: Arc<AtomicUsize>,
    _response: PhantomData<fn() -> R>,
}

impl<R> FailingHandler<R> {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            count: Arc::new(AtomicUsize::new(0)),
            _response: PhantomData,
        }
    }

    /// Number of times the handler ran.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<R> Clone for FailingHandler<R> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            count: self.count.clone(),
            _response: PhantomData,
        }
    }
}

impl<P, M, A, R> Handler<Spy, P, M, A> for FailingHandler<R>
where
    P: Send + 'static,
    M: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    type Response = R;

    async fn call(&self, _payload: P, _meta: M, _args: Option<A>) -> Result<R, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Err(Box::new(HandlerFailure(self.message.clone())))
    }
}
