//! Fired actions.

use crate::{
    error::ActionError,
    pattern::{PatternFamily, write_sequence},
};
use std::fmt;

/// The identifier a caller wants routed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// A single string, matched against exact and regex patterns.
    Name(String),
    /// An ordered list of strings, matched against sequence patterns.
    Sequence(Vec<String>),
}

impl Action {
    /// The pattern family this action can be matched against.
    pub const fn family(&self) -> PatternFamily {
        match self {
            Action::Name(_) => PatternFamily::Scalar,
            Action::Sequence(_) => PatternFamily::Sequence,
        }
    }

    /// The action as a string, if it is a [`Action::Name`].
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Action::Name(name) => Some(name),
            Action::Sequence(_) => None,
        }
    }

    /// The action's parts, if it is a [`Action::Sequence`].
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Action::Name(_) => None,
            Action::Sequence(parts) => Some(parts),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Name(name) => f.write_str(name),
            Action::Sequence(parts) => write_sequence(f, parts),
        }
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Action::Name(name.to_owned())
    }
}

impl From<String> for Action {
    fn from(name: String) -> Self {
        Action::Name(name)
    }
}

impl From<Vec<String>> for Action {
    fn from(parts: Vec<String>) -> Self {
        Action::Sequence(parts)
    }
}

impl From<Vec<&str>> for Action {
    fn from(parts: Vec<&str>) -> Self {
        Action::Sequence(parts.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Action {
    fn from(parts: &[&str]) -> Self {
        Action::Sequence(parts.iter().map(|p| (*p).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Action {
    fn from(parts: [&str; N]) -> Self {
        Action::Sequence(parts.into_iter().map(str::to_owned).collect())
    }
}

/// Conversion into an [`Action`] at dispatch time.
///
/// Strings and string lists convert infallibly. Dynamic inputs (such as
/// JSON values) fail with [`ActionError::InvalidActionType`] when they are
/// neither a string nor a list of strings.
pub trait IntoAction {
    /// Perform the conversion.
    fn into_action(self) -> Result<Action, ActionError>;
}

impl IntoAction for Action {
    fn into_action(self) -> Result<Action, ActionError> {
        Ok(self)
    }
}

macro_rules! infallible_into_action {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoAction for $ty {
                fn into_action(self) -> Result<Action, ActionError> {
                    Ok(Action::from(self))
                }
            }
        )+
    };
}

infallible_into_action!(&str, String, Vec<String>, Vec<&str>, &[&str]);

impl<const N: usize> IntoAction for [&str; N] {
    fn into_action(self) -> Result<Action, ActionError> {
        Ok(Action::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Action::from("ping"), Action::Name("ping".into()));
        assert_eq!(
            Action::from(["POST", "users"]),
            Action::Sequence(vec!["POST".into(), "users".into()])
        );
        assert_eq!(
            Action::from(vec!["a", "b"]),
            Action::from(["a", "b"].as_slice())
        );
    }

    #[test]
    fn test_family_and_accessors() {
        let name = Action::from("ping");
        assert_eq!(name.family(), PatternFamily::Scalar);
        assert_eq!(name.as_name(), Some("ping"));
        assert_eq!(name.as_sequence(), None);

        let seq = Action::from(["GET", "users"]);
        assert_eq!(seq.family(), PatternFamily::Sequence);
        assert_eq!(seq.as_sequence().map(<[String]>::len), Some(2));
        assert_eq!(seq.to_string(), "[GET, users]");
    }
}
