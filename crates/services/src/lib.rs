#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::EngineError;

pub use quiz::{
    AdvanceLabel, EngineConfig, NavDirection, NavOutcome, PageControls, PagePlan, QuizEngine,
    QuizProgress, RecordedResponses, RenderInstruction, ResponseReader, TickOutcome, WidgetSpec,
    default_bank, response_for,
};
