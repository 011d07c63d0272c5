//! Router configuration.

/// Behaviour switches for a [`Router`](crate::Router).
///
/// A router keeps one configuration for its whole life. Passing a config to
/// [`Router::dispatch_with`](crate::Router::dispatch_with) replaces it for
/// that call *and every later call*, exactly like
/// [`Router::set_config`](crate::Router::set_config).
///
/// With the `serde` feature the struct reads from camelCase keys, missing
/// keys taking their defaults:
///
/// ```json
/// { "notFoundIsError": false }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RouterConfig {
    /// Fail with `ActionNotFound` when nothing matches. When `false` an
    /// unmatched dispatch resolves to `None`.
    pub not_found_is_error: bool,
}

impl RouterConfig {
    /// The default, strict configuration.
    pub const fn new() -> Self {
        Self {
            not_found_is_error: true,
        }
    }

    /// A configuration where unmatched actions resolve to `None`.
    pub const fn lenient() -> Self {
        Self {
            not_found_is_error: false,
        }
    }

    /// Set whether unmatched actions are errors.
    pub const fn not_found_is_error(mut self, value: bool) -> Self {
        self.not_found_is_error = value;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}
