use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::Question;
use services::EngineConfig;

/// What the composition root (the binary, or a test harness) supplies to the
/// quiz views: the bank, the engine knobs, and the time source.
pub trait QuizApp: Send + Sync {
    fn questions(&self) -> Vec<Question>;
    fn config(&self) -> EngineConfig;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<Vec<Question>>,
    config: EngineConfig,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn QuizApp>) -> Self {
        Self {
            questions: Arc::new(app.questions()),
            config: app.config(),
            clock: app.clock(),
        }
    }

    /// A fresh copy of the bank, ready to hand to a new engine.
    #[must_use]
    pub fn questions(&self) -> Vec<Question> {
        self.questions.as_ref().clone()
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn QuizApp>) -> AppContext {
    AppContext::new(app)
}
