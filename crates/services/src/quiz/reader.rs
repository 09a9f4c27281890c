use std::collections::{BTreeSet, HashMap};

use quiz_core::model::{Question, QuestionId, QuestionKind, Response};

/// Read-back contract of the presentation surface.
///
/// The surface is the source of truth for user input; the engine only pulls
/// answers through this port, once per question, at scoring time. Each lookup
/// mirrors one widget family: a text value, the set of checked boxes, the
/// checked-or-absent radio value, and the selected dropdown entry.
pub trait ResponseReader {
    fn text_value(&self, question: QuestionId) -> Option<String>;
    fn checked_values(&self, question: QuestionId) -> BTreeSet<String>;
    fn picked_value(&self, question: QuestionId) -> Option<String>;
    fn selected_value(&self, question: QuestionId) -> Option<String>;
}

/// Pull the answer for `question` through the kind-specific lookup.
///
/// Returns `None` for anything unanswered (empty text counts as a response;
/// an empty checkbox set does not).
#[must_use]
pub fn response_for(reader: &dyn ResponseReader, question: &Question) -> Option<Response> {
    match question.kind() {
        QuestionKind::FreeText => reader.text_value(question.id()).map(Response::Text),
        QuestionKind::MultiSelect => {
            let checked = reader.checked_values(question.id());
            if checked.is_empty() {
                None
            } else {
                Some(Response::Choices(checked))
            }
        }
        QuestionKind::SingleSelect => reader.picked_value(question.id()).map(Response::Choice),
        QuestionKind::Dropdown => reader.selected_value(question.id()).map(Response::Choice),
    }
}

/// In-memory `ResponseReader`.
///
/// Used as the form store behind the Dioxus surface (where it outlives page
/// navigation, so answers on revisited pages are not lost) and directly in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct RecordedResponses {
    texts: HashMap<QuestionId, String>,
    checks: HashMap<QuestionId, BTreeSet<String>>,
    picks: HashMap<QuestionId, String>,
    selections: HashMap<QuestionId, String>,
}

impl RecordedResponses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text entered for a free-text question.
    pub fn enter_text(&mut self, question: QuestionId, text: impl Into<String>) {
        self.texts.insert(question, text.into());
    }

    /// Flip one checkbox value on or off.
    pub fn toggle(&mut self, question: QuestionId, option: impl Into<String>) {
        let option = option.into();
        let checked = self.checks.entry(question).or_default();
        if !checked.remove(&option) {
            checked.insert(option);
        }
    }

    /// Set the checked radio value.
    pub fn pick(&mut self, question: QuestionId, option: impl Into<String>) {
        self.picks.insert(question, option.into());
    }

    /// Set the selected dropdown entry.
    pub fn select(&mut self, question: QuestionId, option: impl Into<String>) {
        self.selections.insert(question, option.into());
    }

    #[must_use]
    pub fn is_checked(&self, question: QuestionId, option: &str) -> bool {
        self.checks
            .get(&question)
            .is_some_and(|checked| checked.contains(option))
    }

    #[must_use]
    pub fn is_picked(&self, question: QuestionId, option: &str) -> bool {
        self.picks.get(&question).is_some_and(|picked| picked == option)
    }
}

impl ResponseReader for RecordedResponses {
    fn text_value(&self, question: QuestionId) -> Option<String> {
        self.texts.get(&question).cloned()
    }

    fn checked_values(&self, question: QuestionId) -> BTreeSet<String> {
        self.checks.get(&question).cloned().unwrap_or_default()
    }

    fn picked_value(&self, question: QuestionId) -> Option<String> {
        self.picks.get(&question).cloned()
    }

    fn selected_value(&self, question: QuestionId) -> Option<String> {
        self.selections.get(&question).cloned()
    }
}
