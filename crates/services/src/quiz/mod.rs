mod bank;
mod engine;
mod plan;
mod progress;
mod reader;

pub use bank::default_bank;
pub use engine::{
    AdvanceLabel, EngineConfig, NavDirection, NavOutcome, PageControls, QuizEngine, TickOutcome,
};
pub use plan::{PagePlan, RenderInstruction, WidgetSpec, plan_page};
pub use progress::QuizProgress;
pub use reader::{RecordedResponses, ResponseReader, response_for};
