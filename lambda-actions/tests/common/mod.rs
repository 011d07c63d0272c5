#![allow(dead_code)]

use std::sync::{Arc, Once};
use thiserror::Error;

// ============================================================================
// Test Payload Types
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestPayload {
    pub test: String,
}

impl TestPayload {
    pub fn new(test: &str) -> Arc<Self> {
        Arc::new(Self { test: test.into() })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestMeta {
    pub key: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resp {
    pub resp: String,
}

impl Resp {
    pub fn new(resp: &str) -> Self {
        Self { resp: resp.into() }
    }
}

// ============================================================================
// Test Errors
// ============================================================================

#[derive(Debug, Error, PartialEq)]
#[error("upstream rejected order {order}")]
pub struct UpstreamError {
    pub order: u32,
}

// ============================================================================
// Logging
// ============================================================================

static TRACING: Once = Once::new();

/// Route `tracing` output to the test writer, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
