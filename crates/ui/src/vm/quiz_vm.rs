use quiz_core::Clock;
use quiz_core::model::{Question, QuestionId, ScoreReport};
use services::{
    EngineConfig, EngineError, NavDirection, NavOutcome, PageControls, PagePlan, QuizEngine,
    QuizProgress, RecordedResponses, ResponseReader, TickOutcome,
};

use crate::vm::time_fmt::format_datetime;

/// Everything the surface can do to a running attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizIntent {
    Previous,
    Next,
    Submit,
    Tick,
    EditText(QuestionId, String),
    ToggleChoice(QuestionId, String),
    PickChoice(QuestionId, String),
    SelectOption(QuestionId, String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Finalized,
}

/// Display model for the score dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreVm {
    pub correct: usize,
    pub total: usize,
    /// Two-decimal percentage, e.g. `80.00`.
    pub percentage: String,
    pub completed_at_str: String,
}

#[must_use]
pub fn map_score(report: &ScoreReport) -> ScoreVm {
    ScoreVm {
        correct: report.correct,
        total: report.total,
        percentage: format!("{:.2}", report.percentage()),
        completed_at_str: format_datetime(report.completed_at),
    }
}

/// View model for one quiz attempt: the engine plus the form store the
/// rendered controls bind to.
///
/// The store outlives page navigation, so answers given on earlier pages are
/// still there when a page is revisited and when scoring reads them back.
pub struct QuizVm {
    engine: QuizEngine,
    responses: RecordedResponses,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `EngineError` when the engine rejects the bank or config.
    pub fn start(
        questions: Vec<Question>,
        config: EngineConfig,
        clock: Clock,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            engine: QuizEngine::start(questions, config, clock)?,
            responses: RecordedResponses::new(),
        })
    }

    /// Apply one user gesture or timer tick.
    pub fn apply(&mut self, intent: QuizIntent) -> QuizOutcome {
        match intent {
            QuizIntent::Previous => {
                self.engine.navigate(NavDirection::Previous, &self.responses);
                QuizOutcome::Continue
            }
            QuizIntent::Next => match self.engine.navigate(NavDirection::Next, &self.responses) {
                NavOutcome::Finalized(_) => QuizOutcome::Finalized,
                NavOutcome::PageChanged | NavOutcome::Unchanged => QuizOutcome::Continue,
            },
            QuizIntent::Submit => match self.engine.submit(&self.responses) {
                Some(_) => QuizOutcome::Finalized,
                None => QuizOutcome::Continue,
            },
            QuizIntent::Tick => match self.engine.tick(&self.responses) {
                TickOutcome::Finalized(_) => QuizOutcome::Finalized,
                TickOutcome::Running { .. } | TickOutcome::Halted => QuizOutcome::Continue,
            },
            QuizIntent::EditText(question, text) => {
                self.responses.enter_text(question, text);
                QuizOutcome::Continue
            }
            QuizIntent::ToggleChoice(question, option) => {
                self.responses.toggle(question, option);
                QuizOutcome::Continue
            }
            QuizIntent::PickChoice(question, option) => {
                self.responses.pick(question, option);
                QuizOutcome::Continue
            }
            QuizIntent::SelectOption(question, option) => {
                self.responses.select(question, option);
                QuizOutcome::Continue
            }
        }
    }

    #[must_use]
    pub fn page_plan(&self) -> PagePlan {
        self.engine.current_page_plan()
    }

    #[must_use]
    pub fn controls(&self) -> PageControls {
        self.engine.controls()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.engine.progress()
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.engine.remaining_seconds()
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.engine.is_finalized()
    }

    #[must_use]
    pub fn score(&self) -> Option<ScoreVm> {
        self.engine.report().map(map_score)
    }

    // Control bindings: what the rendered widgets show for one question.

    #[must_use]
    pub fn text_value(&self, question: QuestionId) -> String {
        self.responses.text_value(question).unwrap_or_default()
    }

    #[must_use]
    pub fn is_checked(&self, question: QuestionId, option: &str) -> bool {
        self.responses.is_checked(question, option)
    }

    #[must_use]
    pub fn is_picked(&self, question: QuestionId, option: &str) -> bool {
        self.responses.is_picked(question, option)
    }

    /// Selected dropdown entry, or the empty placeholder value.
    #[must_use]
    pub fn selected_value(&self, question: QuestionId) -> String {
        self.responses.selected_value(question).unwrap_or_default()
    }
}
