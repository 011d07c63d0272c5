//! Patterns that registered actions are matched by.
//!
//! A [`Pattern`] is one of three shapes: an exact string, a regular
//! expression, or an ordered sequence of strings. Exact and regex patterns
//! form the [`PatternFamily::Scalar`] family; sequences form
//! [`PatternFamily::Sequence`]. A router only ever holds patterns of one
//! family.

use crate::{action::Action, error::ActionError};
use regex::Regex;
use std::fmt;

/// The shape shared by all patterns registered on one router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternFamily {
    /// Exact strings and regular expressions.
    Scalar,
    /// Ordered sequences of strings.
    Sequence,
}

impl PatternFamily {
    /// Returns true for [`PatternFamily::Sequence`].
    pub const fn is_sequence(self) -> bool {
        matches!(self, PatternFamily::Sequence)
    }

    /// How an action of this family reads in messages: `string` or
    /// `string[]`. Unlike `Display`, regexes are not mentioned since an
    /// action is never one.
    pub const fn action_shape(self) -> &'static str {
        match self {
            PatternFamily::Scalar => "string",
            PatternFamily::Sequence => "string[]",
        }
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternFamily::Scalar => f.write_str("string|RegEx"),
            PatternFamily::Sequence => f.write_str("string[]"),
        }
    }
}

/// A registered matching rule.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches a string action equal to this one.
    Exact(String),
    /// Matches a string action the expression finds a match in.
    Regex(Regex),
    /// Matches a sequence action equal element by element.
    Sequence(Vec<String>),
}

impl Pattern {
    /// Compile a regular expression pattern.
    ///
    /// Fails with [`ActionError::InvalidPatternType`] if `source` is not a
    /// valid expression.
    pub fn regex(source: &str) -> Result<Self, ActionError> {
        Regex::new(source)
            .map(Pattern::Regex)
            .map_err(|_| ActionError::InvalidPatternType {
                pattern: format!("/{source}/"),
                family: PatternFamily::Scalar,
            })
    }

    /// Build a sequence pattern from anything yielding strings.
    pub fn sequence<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pattern::Sequence(parts.into_iter().map(Into::into).collect())
    }

    /// The family this pattern belongs to.
    pub const fn family(&self) -> PatternFamily {
        match self {
            Pattern::Exact(_) | Pattern::Regex(_) => PatternFamily::Scalar,
            Pattern::Sequence(_) => PatternFamily::Sequence,
        }
    }

    /// Test whether `action` is matched by this pattern.
    ///
    /// Actions of the other family never match.
    pub fn matches(&self, action: &Action) -> bool {
        match (self, action) {
            (Pattern::Exact(expected), Action::Name(name)) => expected == name,
            (Pattern::Regex(re), Action::Name(name)) => re.is_match(name),
            (Pattern::Sequence(expected), Action::Sequence(parts)) => expected == parts,
            _ => false,
        }
    }
}

// Regexes compare by their source text, inline flags included.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pattern::Exact(a), Pattern::Exact(b)) => a == b,
            (Pattern::Regex(a), Pattern::Regex(b)) => a.as_str() == b.as_str(),
            (Pattern::Sequence(a), Pattern::Sequence(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(s) => f.write_str(s),
            Pattern::Regex(re) => write!(f, "/{}/", re.as_str()),
            Pattern::Sequence(parts) => write_sequence(f, parts),
        }
    }
}

pub(crate) fn write_sequence(f: &mut fmt::Formatter<'_>, parts: &[String]) -> fmt::Result {
    f.write_str("[")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(part)?;
    }
    f.write_str("]")
}

/// Conversion into a [`Pattern`] at registration time.
///
/// Strings become [`Pattern::Exact`], compiled regexes become
/// [`Pattern::Regex`] and string lists become [`Pattern::Sequence`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be registered as an action pattern",
    label = "expected a string, a `Regex` or a list of strings",
    note = "Use `Pattern::regex` to register a regular expression from its source."
)]
pub trait IntoPattern {
    /// Perform the conversion.
    fn into_pattern(self) -> Result<Pattern, ActionError>;
}

impl IntoPattern for Pattern {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(self)
    }
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(Pattern::Exact(self.to_owned()))
    }
}

impl IntoPattern for String {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(Pattern::Exact(self))
    }
}

impl IntoPattern for Regex {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(Pattern::Regex(self))
    }
}

impl IntoPattern for Vec<String> {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(Pattern::Sequence(self))
    }
}

impl IntoPattern for Vec<&str> {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(Pattern::sequence(self))
    }
}

impl IntoPattern for &[&str] {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(Pattern::sequence(self.iter().copied()))
    }
}

impl<const N: usize> IntoPattern for [&str; N] {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        Ok(Pattern::sequence(self))
    }
}

impl<T: IntoPattern> IntoPattern for Result<T, ActionError> {
    fn into_pattern(self) -> Result<Pattern, ActionError> {
        self?.into_pattern()
    }
}
