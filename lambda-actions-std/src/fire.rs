//! Dispatch requests.

use crate::config::RouterConfig;
use lambda_actions_core::Action;

/// Everything one dispatch needs: the action, its payload and meta, and an
/// optional configuration to install before matching.
///
/// # Example
///
/// ```rust,ignore
/// let request = Fire::new(["POST", "users"])
///     .payload(new_user)
///     .meta(request_context);
/// router.fire(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Fire<P, M> {
    pub(crate) action: Action,
    pub(crate) payload: P,
    pub(crate) meta: M,
    pub(crate) config: Option<RouterConfig>,
}

impl<P: Default, M: Default> Fire<P, M> {
    /// Create a request with default payload and meta.
    pub fn new(action: impl Into<Action>) -> Self {
        Self::with(action, P::default(), M::default())
    }
}

impl<P, M> Fire<P, M> {
    /// Create a request with an explicit payload and meta.
    pub fn with(action: impl Into<Action>, payload: P, meta: M) -> Self {
        Self {
            action: action.into(),
            payload,
            meta,
            config: None,
        }
    }

    /// Replace the payload.
    pub fn payload(mut self, payload: P) -> Self {
        self.payload = payload;
        self
    }

    /// Replace the meta.
    pub fn meta(mut self, meta: M) -> Self {
        self.meta = meta;
        self
    }

    /// Install `config` on the router before this request is matched.
    ///
    /// The router keeps it for every later dispatch as well.
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The action being fired.
    pub fn action(&self) -> &Action {
        &self.action
    }
}
