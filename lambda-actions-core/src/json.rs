//! Conversions from JSON values.
//!
//! Hosts usually pull the action out of a JSON event. These conversions
//! accept the shapes the router understands and reject everything else with
//! the matching error kind.

use crate::{
    action::{Action, IntoAction},
    error::ActionError,
    pattern::{IntoPattern, Pattern, PatternFamily},
};
use serde_json::Value;

fn string_list(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}

impl TryFrom<&Value> for Action {
    type Error = ActionError;

    /// Strings become [`Action::Name`], arrays of strings become
    /// [`Action::Sequence`].
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => Ok(Action::Name(name.clone())),
            Value::Array(items) => string_list(items)
                .map(Action::Sequence)
                .ok_or_else(|| ActionError::InvalidActionType(value.to_string())),
            other => Err(ActionError::InvalidActionType(other.to_string())),
        }
    }
}

impl IntoAction for &Value {
    fn into_action(self) -> Result<Action, ActionError> {
        Action::try_from(self)
    }
}

impl IntoAction for Value {
    fn into_action(self) -> Result<Action, ActionError> {
        Action::try_from(&self)
    }
}

impl TryFrom<&Value> for Pattern {
    type Error = ActionError;

    /// Strings become exact patterns, arrays of strings become sequences and
    /// `{"regex": "<source>"}` becomes a compiled regular expression.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let family = if value.is_array() {
            PatternFamily::Sequence
        } else {
            PatternFamily::Scalar
        };
        let invalid = || ActionError::InvalidPatternType {
            pattern: value.to_string(),
            family,
        };
        match value {
            Value::String(exact) => Ok(Pattern::Exact(exact.clone())),
            Value::Array(items) => string_list(items).map(Pattern::Sequence).ok_or_else(invalid),
            Value::Object(map) if map.len() == 1 => match map.get("regex") {
                Some(Value::String(source)) => Pattern::regex(source),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}

impl IntoPattern for &Value {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Pattern::try_from(self)
    }
}

impl IntoPattern for Value {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Pattern::try_from(&self)
    }
}
