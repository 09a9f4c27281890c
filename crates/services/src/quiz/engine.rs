use chrono::{DateTime, Utc};

use quiz_core::model::{AttemptId, AdvanceOutcome, Question, QuizSession, ScoreReport, SessionTick};
use quiz_core::{Clock, Paging};

use crate::error::EngineError;
use crate::quiz::plan::{PagePlan, plan_page};
use crate::quiz::progress::QuizProgress;
use crate::quiz::reader::{ResponseReader, response_for};

/// Compiled-in defaults; the binary may override both.
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_DURATION_SECS: u32 = 300;

/// Engine knobs: questions per page and countdown length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub page_size: usize,
    pub duration_secs: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// What a navigation request did.
#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    /// Nothing happened (first/last-page boundary, or already finalized).
    Unchanged,
    /// The current page moved; the surface should re-render.
    PageChanged,
    /// Navigating next from the last page submitted the attempt.
    Finalized(ScoreReport),
}

/// What one countdown tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The attempt is already finalized; the tick was ignored.
    Halted,
    /// Time left on the clock, for the live display.
    Running { remaining: u32 },
    /// The countdown ran out and the attempt was submitted.
    Finalized(ScoreReport),
}

/// Label for the combined next/submit control, derived from the page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceLabel {
    Next,
    Submit,
}

impl AdvanceLabel {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            AdvanceLabel::Next => "Next",
            AdvanceLabel::Submit => "Submit",
        }
    }
}

/// Pagination control state. Derived from the session on every call, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub previous_enabled: bool,
    pub advance_label: AdvanceLabel,
    pub submit_visible: bool,
}

/// One quiz attempt: the question bank, its pagination, the countdown, and
/// scoring against the answer key.
///
/// The engine never touches a concrete UI toolkit. It emits [`PagePlan`]s for
/// the surface to render and pulls answers back through a [`ResponseReader`]
/// at scoring time. Several engines can run side by side; there is no shared
/// state.
pub struct QuizEngine {
    attempt_id: AttemptId,
    questions: Vec<Question>,
    paging: Paging,
    session: QuizSession,
    clock: Clock,
    started_at: DateTime<Utc>,
    report: Option<ScoreReport>,
}

impl QuizEngine {
    /// Start a new attempt on page 0 with a full countdown.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyBank` for an empty question list and
    /// `EngineError::Paging` for a zero page size.
    pub fn start(
        questions: Vec<Question>,
        config: EngineConfig,
        clock: Clock,
    ) -> Result<Self, EngineError> {
        if questions.is_empty() {
            return Err(EngineError::EmptyBank);
        }
        let paging = Paging::new(config.page_size, questions.len())?;
        let session = QuizSession::new(paging, config.duration_secs);
        let attempt_id = AttemptId::new();

        tracing::info!(
            attempt = %attempt_id,
            questions = questions.len(),
            pages = paging.page_count(),
            duration_secs = config.duration_secs,
            "quiz attempt started"
        );

        Ok(Self {
            attempt_id,
            questions,
            paging,
            session,
            clock,
            started_at: clock.now(),
            report: None,
        })
    }

    #[must_use]
    pub fn attempt_id(&self) -> AttemptId {
        self.attempt_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds()
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.session.is_finalized()
    }

    /// The score, once the attempt has been finalized.
    #[must_use]
    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    /// Declarative plan for the page currently on screen.
    #[must_use]
    pub fn current_page_plan(&self) -> PagePlan {
        plan_page(&self.questions, self.paging, self.session.current_page())
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            page_number: self.session.current_page() + 1,
            page_count: self.paging.page_count(),
            total_questions: self.questions.len(),
        }
    }

    /// Control state for the pagination footer.
    #[must_use]
    pub fn controls(&self) -> PageControls {
        let last = self.session.is_last_page();
        PageControls {
            previous_enabled: !self.session.is_first_page(),
            advance_label: if last {
                AdvanceLabel::Submit
            } else {
                AdvanceLabel::Next
            },
            submit_visible: last,
        }
    }

    /// Handle a previous/next request from the surface.
    ///
    /// Previous below page 0 is a no-op. Next on the last page submits the
    /// attempt, which is why navigation needs the response reader.
    pub fn navigate(
        &mut self,
        direction: NavDirection,
        responses: &dyn ResponseReader,
    ) -> NavOutcome {
        if self.session.is_finalized() {
            return NavOutcome::Unchanged;
        }
        match direction {
            NavDirection::Previous => {
                if self.session.retreat() {
                    tracing::debug!(attempt = %self.attempt_id, page = self.session.current_page(), "page changed");
                    NavOutcome::PageChanged
                } else {
                    NavOutcome::Unchanged
                }
            }
            NavDirection::Next => match self.session.advance() {
                AdvanceOutcome::Moved => {
                    tracing::debug!(attempt = %self.attempt_id, page = self.session.current_page(), "page changed");
                    NavOutcome::PageChanged
                }
                AdvanceOutcome::AtEnd => match self.submit(responses) {
                    Some(report) => NavOutcome::Finalized(report),
                    None => NavOutcome::Unchanged,
                },
            },
        }
    }

    /// Finalize the attempt and score it.
    ///
    /// Idempotent: only the call that performs the active-to-finalized
    /// transition scores and returns a report; every later call is a no-op
    /// returning `None`. Finalizing also halts the countdown, so a tick
    /// scheduled before submission can never fire a second scoring pass.
    pub fn submit(&mut self, responses: &dyn ResponseReader) -> Option<ScoreReport> {
        if !self.session.finalize() {
            return None;
        }

        let marks: Vec<bool> = self
            .questions
            .iter()
            .map(|question| question.grade(response_for(responses, question).as_ref()))
            .collect();
        let report = ScoreReport::from_marks(&marks, self.started_at, self.clock.now());

        tracing::info!(
            attempt = %self.attempt_id,
            correct = report.correct,
            total = report.total,
            percentage = report.percentage(),
            "quiz attempt finalized"
        );

        self.report = Some(report.clone());
        Some(report)
    }

    /// Advance the countdown by one second.
    ///
    /// Expiry submits the attempt with whatever the surface holds at that
    /// moment.
    pub fn tick(&mut self, responses: &dyn ResponseReader) -> TickOutcome {
        match self.session.tick() {
            SessionTick::Halted => TickOutcome::Halted,
            SessionTick::Running { remaining } => TickOutcome::Running { remaining },
            SessionTick::Expired => {
                tracing::info!(attempt = %self.attempt_id, "countdown expired");
                match self.submit(responses) {
                    Some(report) => TickOutcome::Finalized(report),
                    // Unreachable in practice: an expired tick implies the
                    // session was still active.
                    None => TickOutcome::Halted,
                }
            }
        }
    }
}
