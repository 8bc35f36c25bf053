//! Navigation intents and the symbols that trigger them.

use serde::{Deserialize, Serialize};

/// The closed set of things a user can ask a paginated message to do.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    /// Go to page 1.
    First,
    /// Go one page back.
    Back,
    /// Go one page forward.
    Next,
    /// Go to the last page.
    Last,
    /// Ask the owner for a page number.
    Jump,
    /// Show help text for a while.
    Info,
    /// End the session.
    Stop,
}

/// The visible marker of an affordance, typically a unicode emoji.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from its display text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Display text of the symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Self(text)
    }
}
