use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{QuestionId, Response};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Answer-input modality of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    FreeText,
    MultiSelect,
    SingleSelect,
    Dropdown,
}

/// Expected answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKey {
    /// Exact expected string (free text, single select, dropdown).
    Single(String),
    /// Expected set of checked values (multi select).
    Multiple(BTreeSet<String>),
}

/// One quiz question: immutable after construction.
///
/// Callers are expected to hand in a well-formed question (key values drawn
/// from `options` where applicable); this type does not police that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
    options: Vec<String>,
    key: AnswerKey,
}

impl Question {
    /// A question answered by typing text. Compared after trimming
    /// surrounding whitespace, case-sensitive.
    #[must_use]
    pub fn free_text(id: QuestionId, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::FreeText,
            options: Vec::new(),
            key: AnswerKey::Single(answer.into()),
        }
    }

    /// A question answered by checking any number of options.
    #[must_use]
    pub fn multi_select<I, S, A, T>(
        id: QuestionId,
        prompt: impl Into<String>,
        options: I,
        answers: A,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        A: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::MultiSelect,
            options: options.into_iter().map(Into::into).collect(),
            key: AnswerKey::Multiple(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// A question answered by picking exactly one radio option.
    #[must_use]
    pub fn single_select<I, S>(
        id: QuestionId,
        prompt: impl Into<String>,
        options: I,
        answer: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::SingleSelect,
            options: options.into_iter().map(Into::into).collect(),
            key: AnswerKey::Single(answer.into()),
        }
    }

    /// A question answered by choosing one entry from a dropdown list.
    #[must_use]
    pub fn dropdown<I, S>(
        id: QuestionId,
        prompt: impl Into<String>,
        options: I,
        answer: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::Dropdown,
            options: options.into_iter().map(Into::into).collect(),
            key: AnswerKey::Single(answer.into()),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Options in declared order. Empty for free-text questions.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    /// Whether `response` matches this question's key.
    ///
    /// `None` (unanswered) is always incorrect. Free text is trimmed before
    /// comparison; everything is case-sensitive; multi-select compares as
    /// sets, so check order never matters. A response whose shape does not
    /// match the question kind reads as unanswered.
    #[must_use]
    pub fn grade(&self, response: Option<&Response>) -> bool {
        let Some(response) = response else {
            return false;
        };
        match (self.kind, &self.key, response) {
            (QuestionKind::FreeText, AnswerKey::Single(key), Response::Text(text)) => {
                text.trim() == key
            }
            (
                QuestionKind::SingleSelect | QuestionKind::Dropdown,
                AnswerKey::Single(key),
                Response::Choice(value),
            ) => value == key,
            (QuestionKind::MultiSelect, AnswerKey::Multiple(key), Response::Choices(values)) => {
                values == key
            }
            _ => false,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: u32) -> QuestionId {
        QuestionId::new(id)
    }

    #[test]
    fn free_text_trims_surrounding_whitespace() {
        let question = Question::free_text(qid(0), "Capital of France?", "Paris");
        assert!(question.grade(Some(&Response::text("  Paris "))));
    }

    #[test]
    fn free_text_is_case_sensitive() {
        let question = Question::free_text(qid(0), "Water symbol?", "H2O");
        assert!(!question.grade(Some(&Response::text("h2o"))));
        assert!(question.grade(Some(&Response::text("H2O"))));
    }

    #[test]
    fn unanswered_is_incorrect_not_an_error() {
        let question = Question::free_text(qid(0), "Capital of France?", "Paris");
        assert!(!question.grade(None));
    }

    #[test]
    fn multi_select_compares_as_sets() {
        let question = Question::multi_select(
            qid(1),
            "Primary colors?",
            ["Red", "Green", "Blue", "Yellow"],
            ["Red", "Blue", "Yellow"],
        );
        assert!(question.grade(Some(&Response::choices(["Yellow", "Red", "Blue"]))));
        assert!(!question.grade(Some(&Response::choices(["Red", "Blue"]))));
        assert!(!question.grade(Some(&Response::choices(["Red", "Green", "Blue", "Yellow"]))));
    }

    #[test]
    fn single_select_requires_exact_value() {
        let question = Question::single_select(qid(2), "2 + 2?", ["3", "4", "5", "6"], "4");
        assert!(question.grade(Some(&Response::choice("4"))));
        assert!(!question.grade(Some(&Response::choice("5"))));
        assert!(!question.grade(None));
    }

    #[test]
    fn dropdown_requires_exact_value() {
        let question = Question::dropdown(
            qid(3),
            "Largest planet?",
            ["Mars", "Venus", "Jupiter", "Saturn"],
            "Jupiter",
        );
        assert!(question.grade(Some(&Response::choice("Jupiter"))));
        assert!(!question.grade(Some(&Response::choice("jupiter"))));
    }

    #[test]
    fn mismatched_response_shape_reads_as_unanswered() {
        let question = Question::single_select(qid(2), "2 + 2?", ["3", "4"], "4");
        assert!(!question.grade(Some(&Response::text("4"))));
    }
}
