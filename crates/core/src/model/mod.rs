mod ids;
mod question;
mod response;
mod score;
mod session;

pub use ids::{AttemptId, ParseIdError, QuestionId};
pub use question::{AnswerKey, Question, QuestionKind};
pub use response::Response;
pub use score::ScoreReport;
pub use session::{AdvanceOutcome, QuizSession, SessionTick};
