use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single answer as read back from the presentation surface.
///
/// Absence of an answer is modeled by the caller (`Option<Response>`), not by
/// a variant here: an unanswered question is valid data, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Raw text from a free-text input.
    Text(String),
    /// The value of the checked radio button or the selected dropdown entry.
    Choice(String),
    /// Every checked value of a checkbox group, as a set.
    Choices(BTreeSet<String>),
}

impl Response {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    #[must_use]
    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_deduplicate_and_ignore_order() {
        let a = Response::choices(["Blue", "Red", "Red"]);
        let b = Response::choices(["Red", "Blue"]);
        assert_eq!(a, b);
    }
}
