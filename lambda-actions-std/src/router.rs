//! # Action Router
//!
//! The [`Router`] owns an ordered list of registered actions and a
//! persistent [`RouterConfig`]. Registration validates each pattern against
//! the ones already stored; dispatch finds the first registration whose
//! pattern matches the fired action and awaits its handler.
//!
//! # Matching
//!
//! - A string action is tested against exact and regex patterns in
//!   registration order. The first match wins, even if a later pattern would
//!   also match.
//! - A sequence action must equal a sequence pattern element by element.
//!
//! # Sharing
//!
//! Registration takes `&mut self` and dispatch takes `&self`, so a router
//! cannot be modified while a dispatch is in flight. Once populated it can be
//! wrapped in an `Arc` and dispatched from many tasks. The configuration is
//! the only state a dispatch may write.

use crate::{config::RouterConfig, fire::Fire};
use futures::future::BoxFuture;
use lambda_actions_core::{
    Action, ActionError, BoxError, Handler, IntoAction, IntoPattern, Pattern, PatternFamily,
};
use parking_lot::RwLock;
use std::{fmt, marker::PhantomData};

/// Type-erased handler so registrations of different closure types can share
/// one list.
trait ErasedHandler<P, M, A, R>: Send + Sync {
    fn call_erased(&self, payload: P, meta: M, args: Option<A>) -> BoxFuture<'_, Result<R, BoxError>>;
}

/// Bridges a typed [`Handler`] into the erased list.
struct ErasedHandlerWrapper<H, T> {
    handler: H,
    _marker: PhantomData<fn() -> T>,
}

impl<H, T> ErasedHandlerWrapper<H, T> {
    const fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

impl<H, T, P, M, A> ErasedHandler<P, M, A, H::Response> for ErasedHandlerWrapper<H, T>
where
    H: Handler<T, P, M, A>,
    T: 'static,
    P: 'static,
    M: 'static,
    A: 'static,
{
    fn call_erased(
        &self,
        payload: P,
        meta: M,
        args: Option<A>,
    ) -> BoxFuture<'_, Result<H::Response, BoxError>> {
        Box::pin(self.handler.call(payload, meta, args))
    }
}

/// One registered action. Immutable once stored.
struct Registration<P, M, A, R> {
    pattern: Pattern,
    handler: Box<dyn ErasedHandler<P, M, A, R>>,
    args: Option<A>,
}

/// Matches fired actions against registered patterns and invokes the
/// matching handler.
///
/// Type parameters:
/// - `P`: payload forwarded to handlers
/// - `M`: meta forwarded to handlers
/// - `A`: args bound at registration, cloned into every call
/// - `R`: the handlers' response
///
/// # Example
///
/// ```rust,ignore
/// let mut router: Router<Order, Context, (), Receipt> = Router::new();
/// router.register("checkout", |order: Order| async move { checkout(order).await })?;
/// router.register(Pattern::regex(r"^refund-\d+$"), refund)?;
///
/// let receipt = router.dispatch("checkout", order, ctx).await?;
/// ```
pub struct Router<P, M, A, R> {
    actions: Vec<Registration<P, M, A, R>>,
    config: RwLock<RouterConfig>,
}

impl<P, M, A, R> Router<P, M, A, R> {
    /// Create an empty router with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create an empty router with the given configuration.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            actions: Vec::new(),
            config: RwLock::new(config),
        }
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true until the first successful registration.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The family shared by the registered patterns, if any.
    pub fn family(&self) -> Option<PatternFamily> {
        self.actions.last().map(|r| r.pattern.family())
    }

    /// Registered patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.actions.iter().map(|r| &r.pattern)
    }

    /// The configuration currently in effect.
    pub fn config(&self) -> RouterConfig {
        *self.config.read()
    }

    /// Replace the configuration for all later dispatches.
    pub fn set_config(&self, config: RouterConfig) {
        *self.config.write() = config;
    }
}

impl<P, M, A, R> Router<P, M, A, R>
where
    P: Send + 'static,
    M: Send + 'static,
    A: Clone + Send + Sync + 'static,
    R: Send + 'static,
{
    /// Register `handler` for `pattern`.
    ///
    /// # Errors
    ///
    /// - [`ActionError::PatternFamilyMismatch`] if its family differs from
    ///   the patterns already registered. A value that fails to convert is
    ///   still checked first, by its shape: lists are sequences, anything
    ///   else is scalar.
    /// - [`ActionError::InvalidPatternType`] if `pattern` cannot be converted
    /// - [`ActionError::DuplicatePattern`] if an equal pattern is registered
    pub fn register<T, H>(&mut self, pattern: impl IntoPattern, handler: H) -> Result<(), ActionError>
    where
        H: Handler<T, P, M, A, Response = R>,
        T: 'static,
    {
        let pattern = self.convert(pattern)?;
        self.insert(pattern, Box::new(ErasedHandlerWrapper::new(handler)), None)
    }

    /// Register `handler` for `pattern`, binding `args` to every invocation.
    ///
    /// Fails like [`Router::register`].
    pub fn register_with_args<T, H>(
        &mut self,
        pattern: impl IntoPattern,
        handler: H,
        args: A,
    ) -> Result<(), ActionError>
    where
        H: Handler<T, P, M, A, Response = R>,
        T: 'static,
    {
        let pattern = self.convert(pattern)?;
        self.insert(pattern, Box::new(ErasedHandlerWrapper::new(handler)), Some(args))
    }

    /// Builder form of [`Router::register`].
    pub fn with_action<T, H>(mut self, pattern: impl IntoPattern, handler: H) -> Result<Self, ActionError>
    where
        H: Handler<T, P, M, A, Response = R>,
        T: 'static,
    {
        self.register(pattern, handler)?;
        Ok(self)
    }

    /// Convert `pattern`, reporting a family mismatch ahead of an invalid
    /// type.
    fn convert(&self, pattern: impl IntoPattern) -> Result<Pattern, ActionError> {
        match pattern.into_pattern() {
            Ok(pattern) => Ok(pattern),
            Err(ActionError::InvalidPatternType { pattern, family }) => {
                self.check_family(&pattern, family)?;
                Err(ActionError::InvalidPatternType { pattern, family })
            }
            Err(err) => Err(err),
        }
    }

    fn check_family(&self, pattern: &dyn fmt::Display, family: PatternFamily) -> Result<(), ActionError> {
        match self.family() {
            Some(expected) if expected != family => Err(ActionError::PatternFamilyMismatch {
                pattern: pattern.to_string(),
                expected,
            }),
            _ => Ok(()),
        }
    }

    fn insert(
        &mut self,
        pattern: Pattern,
        handler: Box<dyn ErasedHandler<P, M, A, R>>,
        args: Option<A>,
    ) -> Result<(), ActionError> {
        self.check_family(&pattern, pattern.family())?;
        if self.patterns().any(|existing| *existing == pattern) {
            return Err(ActionError::DuplicatePattern(pattern.to_string()));
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                pattern = %pattern,
                family = ?pattern.family(),
                position = self.actions.len(),
                "Registered action"
            );
        }

        self.actions.push(Registration {
            pattern,
            handler,
            args,
        });
        Ok(())
    }

    /// Dispatch `action` with `payload` and `meta` under the current
    /// configuration.
    ///
    /// Resolves to `Ok(Some(response))` when a handler ran, and to
    /// `Ok(None)` when nothing matched and the configuration is lenient.
    ///
    /// # Errors
    ///
    /// - [`ActionError::NoActionsRegistered`] if the router is empty, whatever
    ///   the configuration says
    /// - [`ActionError::InvalidActionType`] if `action` is neither a string nor
    ///   a list of strings
    /// - [`ActionError::FamilyMismatchOnDispatch`] if the action's shape
    ///   differs from the registered family
    /// - [`ActionError::ActionNotFound`] if nothing matched and the
    ///   configuration is strict
    /// - [`ActionError::Handler`] carrying the handler's own error
    pub async fn dispatch(
        &self,
        action: impl IntoAction,
        payload: P,
        meta: M,
    ) -> Result<Option<R>, ActionError> {
        let action = match action.into_action() {
            Ok(action) => action,
            Err(ActionError::InvalidActionType(raw)) if self.is_empty() => {
                return Err(ActionError::NoActionsRegistered { action: raw });
            }
            Err(err) => return Err(err),
        };
        self.fire(Fire::with(action, payload, meta)).await
    }

    /// Install `config` and dispatch.
    ///
    /// The configuration stays in effect for later dispatches.
    pub async fn dispatch_with(
        &self,
        action: impl IntoAction,
        payload: P,
        meta: M,
        config: RouterConfig,
    ) -> Result<Option<R>, ActionError> {
        self.set_config(config);
        self.dispatch(action, payload, meta).await
    }

    /// Dispatch a prepared [`Fire`] request.
    ///
    /// Fails like [`Router::dispatch`].
    pub async fn fire(&self, fire: Fire<P, M>) -> Result<Option<R>, ActionError> {
        let Fire {
            action,
            payload,
            meta,
            config,
        } = fire;

        if let Some(config) = config {
            self.set_config(config);
        }
        if self.is_empty() {
            return Err(ActionError::NoActionsRegistered {
                action: action.to_string(),
            });
        }

        let Some(registration) = self.lookup(&action)? else {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(action = %action, "No action matched");
            }
            if self.config().not_found_is_error {
                return Err(ActionError::ActionNotFound(action.to_string()));
            }
            return Ok(None);
        };

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(action = %action, pattern = %registration.pattern, "Dispatching action");
        }

        registration
            .handler
            .call_erased(payload, meta, registration.args.clone())
            .await
            .map(Some)
            .map_err(ActionError::Handler)
    }

    /// First registration matching `action`, in registration order.
    fn lookup(&self, action: &Action) -> Result<Option<&Registration<P, M, A, R>>, ActionError> {
        if let Some(registered) = self.family() {
            if registered != action.family() {
                #[cfg(feature = "tracing")]
                {
                    tracing::warn!(
                        action = %action,
                        registered = ?registered,
                        "Fired action does not match the registered family"
                    );
                }
                return Err(ActionError::FamilyMismatchOnDispatch {
                    action: action.to_string(),
                    fired: action.family(),
                    registered,
                });
            }
        }
        Ok(self.actions.iter().find(|r| r.pattern.matches(action)))
    }
}

impl<P, M, A, R> Default for Router<P, M, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, M, A, R> fmt::Debug for Router<P, M, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("patterns", &self.patterns().collect::<Vec<_>>())
            .field("config", &self.config())
            .finish()
    }
}
