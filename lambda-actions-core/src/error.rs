//! Error types for lambda-actions.
//!
//! Every failure of `register` or `dispatch` is an [`ActionError`]. Each
//! variant maps to a stable [`ErrorKind`] that hosts can match on or log,
//! and the message always starts with [`ERROR_PREFIX`].
//!
//! Handler failures are carried by [`ActionError::Handler`], which is
//! transparent: its `Display` and `source()` are the handler's own.

use crate::pattern::PatternFamily;
use thiserror::Error;

/// A boxed error type for handler failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Prefix carried by every router error message.
pub const ERROR_PREFIX: &str = "LambdaActions:";

/// Errors produced while registering or dispatching actions.
#[derive(Error, Debug)]
pub enum ActionError {
    /// The pattern is not a string, a regular expression or a string list.
    #[error("LambdaActions: action {pattern} must be of type: string | string[] | RegExp")]
    InvalidPatternType {
        /// The rejected value.
        pattern: String,
        /// The family the value claims by its shape: lists are sequences,
        /// everything else is scalar.
        family: PatternFamily,
    },

    /// A structurally equal pattern is already registered.
    #[error("LambdaActions: duplicate action {0}")]
    DuplicatePattern(String),

    /// The pattern's family differs from the previously registered patterns.
    #[error("LambdaActions: the action {pattern} must be a {expected}, like the previous registered actions")]
    PatternFamilyMismatch {
        /// The rejected pattern.
        pattern: String,
        /// The family fixed by earlier registrations.
        expected: PatternFamily,
    },

    /// Dispatch was attempted before anything was registered.
    #[error("LambdaActions: trying to fire '{action}' before registering any actions")]
    NoActionsRegistered {
        /// The action that was fired.
        action: String,
    },

    /// The fired action's shape does not match the registered family.
    #[error(
        "LambdaActions: the fired action ({}) '{action}' is incompatible with the registered actions ({registered})",
        .fired.action_shape()
    )]
    FamilyMismatchOnDispatch {
        /// The action that was fired.
        action: String,
        /// Family of the fired action.
        fired: PatternFamily,
        /// Family of the registered patterns.
        registered: PatternFamily,
    },

    /// The fired action is neither a string nor a list of strings.
    #[error("LambdaActions: the fired action {0} must be one of: string[] | string")]
    InvalidActionType(String),

    /// No registered pattern matched and the router is strict about misses.
    #[error("LambdaActions: the fired action '{0}' wasn't matched")]
    ActionNotFound(String),

    /// The matched handler failed.
    #[error(transparent)]
    Handler(BoxError),
}

impl ActionError {
    /// The stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::InvalidPatternType { .. } => ErrorKind::InvalidPatternType,
            ActionError::DuplicatePattern(_) => ErrorKind::DuplicatePattern,
            ActionError::PatternFamilyMismatch { .. } => ErrorKind::PatternFamilyMismatch,
            ActionError::NoActionsRegistered { .. } => ErrorKind::NoActionsRegistered,
            ActionError::FamilyMismatchOnDispatch { .. } => ErrorKind::FamilyMismatchOnDispatch,
            ActionError::InvalidActionType(_) => ErrorKind::InvalidActionType,
            ActionError::ActionNotFound(_) => ErrorKind::ActionNotFound,
            ActionError::Handler(_) => ErrorKind::Handler,
        }
    }

    /// HTTP-style status hint for translating the error into a response.
    ///
    /// Handler failures carry no hint; their meaning belongs to the handler.
    pub fn status_code(&self) -> Option<u16> {
        match self.kind() {
            ErrorKind::FamilyMismatchOnDispatch | ErrorKind::InvalidActionType => Some(400),
            ErrorKind::ActionNotFound => Some(404),
            ErrorKind::InvalidPatternType
            | ErrorKind::DuplicatePattern
            | ErrorKind::PatternFamilyMismatch
            | ErrorKind::NoActionsRegistered => Some(500),
            ErrorKind::Handler => None,
        }
    }

    /// Returns true if this error came from the matched handler.
    pub fn is_handler(&self) -> bool {
        matches!(self, ActionError::Handler(_))
    }

    /// Unwraps the handler's own error, if this is a handler failure.
    pub fn into_handler_error(self) -> Result<BoxError, Self> {
        match self {
            ActionError::Handler(err) => Ok(err),
            other => Err(other),
        }
    }
}

/// Stable, greppable classification of an [`ActionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ActionError::InvalidPatternType`].
    InvalidPatternType,
    /// See [`ActionError::DuplicatePattern`].
    DuplicatePattern,
    /// See [`ActionError::PatternFamilyMismatch`].
    PatternFamilyMismatch,
    /// See [`ActionError::NoActionsRegistered`].
    NoActionsRegistered,
    /// See [`ActionError::FamilyMismatchOnDispatch`].
    FamilyMismatchOnDispatch,
    /// See [`ActionError::InvalidActionType`].
    InvalidActionType,
    /// See [`ActionError::ActionNotFound`].
    ActionNotFound,
    /// See [`ActionError::Handler`].
    Handler,
}

impl ErrorKind {
    /// The kind's name, identical to the variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidPatternType => "InvalidPatternType",
            ErrorKind::DuplicatePattern => "DuplicatePattern",
            ErrorKind::PatternFamilyMismatch => "PatternFamilyMismatch",
            ErrorKind::NoActionsRegistered => "NoActionsRegistered",
            ErrorKind::FamilyMismatchOnDispatch => "FamilyMismatchOnDispatch",
            ErrorKind::InvalidActionType => "InvalidActionType",
            ErrorKind::ActionNotFound => "ActionNotFound",
            ErrorKind::Handler => "Handler",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
