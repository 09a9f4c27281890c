use quiz_core::model::QuestionId;

use super::test_harness::{drive_dom, setup_view_harness};
use crate::vm::QuizIntent;

fn qid(id: u32) -> QuestionId {
    QuestionId::new(id)
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_page_only() {
    let mut harness = setup_view_harness(2, 300);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("What is the capital of France?"), "missing q1 in {html}");
    assert!(
        html.contains("Which of the following are primary colors?"),
        "missing q2 in {html}"
    );
    assert!(!html.contains("What is 2 + 2?"), "page 1 leaked q3 into {html}");

    assert!(html.contains("Page 1 / 3"), "missing progress in {html}");
    assert!(html.contains("Time remaining: 5:00"), "missing timer in {html}");
    assert!(html.contains("Next"), "missing advance label in {html}");
    assert!(!html.contains("quiz-submit"), "explicit submit visible early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_relabels_advance_on_last_page() {
    let mut harness = setup_view_harness(2, 300);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Next);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("What is 2 + 2?"), "missing q3 in {html}");
    assert!(html.contains("Page 2 / 3"), "missing progress in {html}");
    assert!(!html.contains("quiz-submit"), "explicit submit visible early in {html}");

    dispatch.call(QuizIntent::Next);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Page 3 / 3"), "missing progress in {html}");
    assert!(html.contains("Submit"), "missing submit label in {html}");
    assert!(html.contains("quiz-submit"), "missing explicit submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_keeps_answers_across_navigation() {
    let mut harness = setup_view_harness(2, 300);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::EditText(qid(0), "Paris".to_string()));
    dispatch.call(QuizIntent::Next);
    dispatch.call(QuizIntent::Previous);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Paris"), "revisited page lost its answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_scores_and_shows_the_dialog_once() {
    let mut harness = setup_view_harness(5, 300);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::EditText(qid(0), "Paris".to_string()));
    for color in ["Yellow", "Red", "Blue"] {
        dispatch.call(QuizIntent::ToggleChoice(qid(1), color.to_string()));
    }
    dispatch.call(QuizIntent::PickChoice(qid(2), "4".to_string()));
    dispatch.call(QuizIntent::SelectOption(qid(3), "Jupiter".to_string()));
    dispatch.call(QuizIntent::EditText(qid(4), "h2o".to_string()));
    drive_dom(&mut harness.dom);

    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        html.contains("Your score: 4/5 (80.00%)"),
        "missing score in {html}"
    );

    // A second submit must not stack a second dialog.
    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert_eq!(html.matches("Quiz complete").count(), 1, "dialog duplicated in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_submits_with_nothing_answered() {
    let mut harness = setup_view_harness(5, 300);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    // "Next" on the only page doubles as submit.
    dispatch.call(QuizIntent::Next);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        html.contains("Your score: 0/5 (0.00%)"),
        "missing zero score in {html}"
    );
}
