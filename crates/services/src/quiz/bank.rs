use quiz_core::model::{Question, QuestionId};

/// The built-in general-knowledge bank shipped with the desktop app.
///
/// One question of each kind plus a second free-text entry, with the answer
/// key alongside.
#[must_use]
pub fn default_bank() -> Vec<Question> {
    vec![
        Question::free_text(QuestionId::new(0), "What is the capital of France?", "Paris"),
        Question::multi_select(
            QuestionId::new(1),
            "Which of the following are primary colors?",
            ["Red", "Green", "Blue", "Yellow"],
            ["Red", "Blue", "Yellow"],
        ),
        Question::single_select(
            QuestionId::new(2),
            "What is 2 + 2?",
            ["3", "4", "5", "6"],
            "4",
        ),
        Question::dropdown(
            QuestionId::new(3),
            "Select the largest planet in our solar system:",
            ["Mars", "Venus", "Jupiter", "Saturn"],
            "Jupiter",
        ),
        Question::free_text(
            QuestionId::new(4),
            "What is the chemical symbol for water?",
            "H2O",
        ),
    ]
}
