//! # lambda-actions - In-Process Action Dispatcher
//!
//! `lambda-actions` multiplexes one entry point (a serverless function, a
//! queue consumer, a command loop) over many logical operations. Register a
//! handler per action pattern, then dispatch the inbound action with its
//! payload and metadata.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lambda_actions::prelude::*;
//!
//! let mut router: Router<Value, Value, (), Value> = Router::new();
//! router.register("ping", || async { Ok::<_, Infallible>(json!({ "pong": true })) })?;
//! router.register(Pattern::regex(r"^user-\d+$"), load_user)?;
//!
//! let response = router.dispatch("ping", Value::Null, Value::Null).await?;
//! ```
//!
//! ## Pattern Families
//!
//! A router holds either string patterns (exact and regex) or sequence
//! patterns, never both:
//!
//! ```rust,ignore
//! router.register(["GET", "users"], list_users)?;
//! router.register(["POST", "users"], create_user)?;
//! router.dispatch(["POST", "users"], body, ctx).await?;
//! ```
//!
//! ## Misses
//!
//! An unmatched action fails with `ActionNotFound` unless the router's
//! configuration says otherwise. The configuration persists: passing one to
//! [`Router::dispatch_with`] keeps it for later dispatches too.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use lambda_actions_core::{
    // Actions
    Action,
    // Error types
    ActionError,
    BoxError,
    ERROR_PREFIX,
    ErrorKind,
    // Handler
    Handler,
    IntoAction,
    // Patterns
    IntoPattern,
    Pattern,
    PatternFamily,
    regex,
};

pub use lambda_actions_std::{Fire, Router, RouterConfig};

#[cfg(feature = "json")]
pub use lambda_actions_core::serde_json;

/// Testing utilities.
pub mod testing {
    pub use lambda_actions_std::testing::{
        FailingHandler, HandlerFailure, Invocation, RecordingHandler, Spy,
    };
}

/// Prelude module - common imports for lambda-actions.
///
/// # Usage
///
/// ```rust,ignore
/// use lambda_actions::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, ActionError, BoxError, ErrorKind, Fire, Handler, Pattern, PatternFamily, Router,
        RouterConfig,
    };
}
