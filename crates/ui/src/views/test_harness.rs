use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::Clock;
use quiz_core::model::Question;
use quiz_core::time::fixed_clock;
use services::{EngineConfig, default_bank};

use crate::context::{QuizApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

struct TestQuizApp {
    questions: Vec<Question>,
    config: EngineConfig,
}

impl QuizApp for TestQuizApp {
    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn config(&self) -> EngineConfig {
        self.config
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestQuizApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn QuizApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(page_size: usize, duration_secs: u32) -> ViewHarness {
    let app = Arc::new(TestQuizApp {
        questions: default_bank(),
        config: EngineConfig {
            page_size,
            duration_secs,
        },
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
