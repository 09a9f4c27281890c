use dioxus::prelude::*;

use services::{RenderInstruction, WidgetSpec};

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm, ScoreVm, format_remaining};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || QuizVm::start(ctx.questions(), ctx.config(), ctx.clock()).ok());

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(quiz) = vm.write().as_mut() {
            quiz.apply(intent);
        }
    });

    // Countdown driver: one tick per second while the attempt is active.
    // The loop re-checks the finalized flag before each tick and exits at
    // finalization, so the scheduled callback is released with the attempt;
    // the engine treats any tick that slips through as a no-op anyway.
    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            let mut vm = vm;
            let mut guard = vm.write();
            let Some(quiz) = guard.as_mut() else { break };
            if quiz.is_finalized() {
                break;
            }
            quiz.apply(QuizIntent::Tick);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let Some(quiz) = vm_guard.as_ref() else {
        return rsx! {
            div { class: "page quiz-page",
                p { "No questions available." }
            }
        };
    };
    let plan = quiz.page_plan();
    let controls = quiz.controls();
    let progress = quiz.progress();
    let timer_label = format!("Time remaining: {}", format_remaining(quiz.remaining_seconds()));
    let score = quiz.score();
    drop(vm_guard);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root",
            header { class: "quiz-header",
                h2 { class: "quiz-title", "Quiz" }
                span { class: "quiz-timer", id: "quiz-timer", "{timer_label}" }
            }
            // Each render fully replaces the page content; nothing accumulates.
            div { class: "quiz-questions", id: "quiz-questions",
                for instruction in plan.instructions.clone() {
                    QuestionBlock {
                        key: "{instruction.question}",
                        instruction: instruction.clone(),
                        vm,
                        on_intent: dispatch,
                    }
                }
            }
            footer { class: "quiz-footer",
                span { class: "quiz-footer__item", "Page {progress.page_number} / {progress.page_count}" }
                span { class: "quiz-footer__item", "{progress.total_questions} Questions" }
                div { class: "quiz-nav",
                    button {
                        class: "quiz-nav__btn",
                        id: "quiz-previous",
                        r#type: "button",
                        disabled: !controls.previous_enabled,
                        onclick: move |_| dispatch.call(QuizIntent::Previous),
                        "Previous"
                    }
                    button {
                        class: "quiz-nav__btn quiz-nav__btn--primary",
                        id: "quiz-advance",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Next),
                        "{controls.advance_label.text()}"
                    }
                    if controls.submit_visible {
                        button {
                            class: "quiz-nav__btn quiz-nav__btn--primary",
                            id: "quiz-submit",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Submit),
                            "Submit"
                        }
                    }
                }
            }
            if let Some(score) = score {
                ScoreDialog { score }
            }
        }
    }
}

#[component]
fn QuestionBlock(
    instruction: RenderInstruction,
    vm: Signal<Option<QuizVm>>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let id = instruction.question;

    let widget = match &instruction.widget {
        WidgetSpec::TextInput => {
            let value = vm
                .read()
                .as_ref()
                .map_or_else(String::new, |quiz| quiz.text_value(id));
            rsx! {
                input {
                    class: "quiz-input",
                    id: "question-{id}",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |evt| on_intent.call(QuizIntent::EditText(id, evt.value())),
                }
            }
        }
        WidgetSpec::CheckboxGroup { options } => {
            let boxes = options.iter().map(|option| {
                let checked = vm
                    .read()
                    .as_ref()
                    .is_some_and(|quiz| quiz.is_checked(id, option));
                let value = option.clone();
                rsx! {
                    label { class: "quiz-option",
                        input {
                            r#type: "checkbox",
                            name: "question-{id}",
                            value: "{option}",
                            checked: checked,
                            onchange: move |_| {
                                on_intent.call(QuizIntent::ToggleChoice(id, value.clone()));
                            },
                        }
                        "{option}"
                    }
                }
            });
            rsx! {
                div { class: "quiz-options", {boxes} }
            }
        }
        WidgetSpec::RadioGroup { options } => {
            let buttons = options.iter().map(|option| {
                let picked = vm
                    .read()
                    .as_ref()
                    .is_some_and(|quiz| quiz.is_picked(id, option));
                let value = option.clone();
                rsx! {
                    label { class: "quiz-option",
                        input {
                            r#type: "radio",
                            name: "question-{id}",
                            value: "{option}",
                            checked: picked,
                            onchange: move |_| {
                                on_intent.call(QuizIntent::PickChoice(id, value.clone()));
                            },
                        }
                        "{option}"
                    }
                }
            });
            rsx! {
                div { class: "quiz-options", {buttons} }
            }
        }
        WidgetSpec::Dropdown { options } => {
            let selected = vm
                .read()
                .as_ref()
                .map_or_else(String::new, |quiz| quiz.selected_value(id));
            let entries = options.iter().map(|option| {
                rsx! {
                    option { value: "{option}", selected: *option == selected, "{option}" }
                }
            });
            rsx! {
                select {
                    class: "quiz-select",
                    id: "question-{id}",
                    onchange: move |evt| on_intent.call(QuizIntent::SelectOption(id, evt.value())),
                    // Untouched dropdowns stay unanswered instead of silently
                    // submitting the first option.
                    option { value: "", disabled: true, selected: selected.is_empty(), "Select an answer" }
                    {entries}
                }
            }
        }
    };

    rsx! {
        div { class: "question-container",
            p { class: "question-prompt", "{instruction.number}. {instruction.prompt}" }
            {widget}
        }
    }
}

#[component]
fn ScoreDialog(score: ScoreVm) -> Element {
    rsx! {
        div { class: "quiz-overlay",
            div {
                class: "quiz-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "quiz-score-title",
                h3 { class: "quiz-modal__title", id: "quiz-score-title", "Quiz complete" }
                p { class: "quiz-modal__score",
                    "Your score: {score.correct}/{score.total} ({score.percentage}%)"
                }
                p { class: "quiz-modal__completed", "Completed at {score.completed_at_str}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
