mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm, ScoreVm, map_score};
pub use time_fmt::{format_datetime, format_remaining};
