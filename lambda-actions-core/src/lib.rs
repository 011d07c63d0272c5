//! # lambda-actions-core
//!
//! Core types for the lambda-actions dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that declares handlers or builds patterns without needing the router
//! itself.
//!
//! # Building Blocks
//!
//! - [`Pattern`]: a registered matching rule. Exact strings and regular
//!   expressions form one [`PatternFamily`]; string sequences form the
//!   other. A router never mixes the two.
//! - [`Action`]: what a caller fires, a single string or a list of strings.
//! - [`Handler`]: the async callable invoked on a match, taking up to
//!   `(payload, meta, args)`.
//!
//! # Error Types
//!
//! - [`ActionError`] - every registration and dispatch failure
//! - [`ErrorKind`] - the stable classification of an [`ActionError`]
//! - [`BoxError`] - boxed handler failures
//!
//! # Features
//!
//! - `json`: build [`Action`]s and [`Pattern`]s from `serde_json::Value`s.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod error;
mod handler;
#[cfg(feature = "json")]
mod json;
mod pattern;

// Re-exports
pub use action::{Action, IntoAction};
pub use error::{ActionError, BoxError, ERROR_PREFIX, ErrorKind};
pub use handler::Handler;
pub use pattern::{IntoPattern, Pattern, PatternFamily};

pub use regex;
#[cfg(feature = "json")]
pub use serde_json;
