//! # lambda-actions-std
//!
//! Standard implementations for the lambda-actions dispatcher.
//!
//! This crate provides:
//! - **Routing**: [`Router`], matching fired actions to registered handlers
//! - **Configuration**: [`RouterConfig`], persistent per router
//! - **Requests**: [`Fire`], a dispatch request with optional payload, meta
//!   and config
//! - **Testing**: recording and failing handlers in [`testing`]
//!
//! # Features
//!
//! - `tracing`: log registrations and dispatches through `tracing`
//! - `serde`: (de)serialize [`RouterConfig`]
//! - `json`: dispatch `serde_json::Value` actions

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use lambda_actions_core;

// Modules
pub mod config;
pub mod fire;
pub mod router;
pub mod testing;

pub use config::RouterConfig;
pub use fire::Fire;
pub use router::Router;
