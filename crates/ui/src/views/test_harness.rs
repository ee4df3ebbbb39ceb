use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use recall_core::Clock;
use recall_core::model::Verdict;
use recall_core::time::fixed_clock;
use services::{
    AnswerCheck, BackendGateway, GatewayError, PreferencesService, StoryPackage,
};
use storage::repository::InMemoryPreferences;

use crate::context::{UiApp, build_app_context};
use crate::views::{AboutView, AssessmentView};

/// Canned backend so view tests never touch the network.
pub struct FakeGateway;

#[async_trait]
impl BackendGateway for FakeGateway {
    async fn process_audio(&self, _audio: &str) -> Result<StoryPackage, GatewayError> {
        Ok(StoryPackage {
            story: "A short test story.".into(),
            questions: vec!["What happened?".into()],
        })
    }

    async fn check_answer(
        &self,
        _story: &str,
        _question: &str,
        _answer: &str,
    ) -> Result<AnswerCheck, GatewayError> {
        Ok(AnswerCheck {
            verdict: Verdict::Consistent,
            feedback: "fine".into(),
        })
    }

    async fn analyze(
        &self,
        _transcript_s1: &str,
        _metrics: serde_json::Value,
        _transcript_s2: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        Ok(serde_json::Value::Null)
    }
}

struct TestApp {
    gateway: Arc<dyn BackendGateway>,
    preferences: PreferencesService,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn gateway(&self) -> Arc<dyn BackendGateway> {
        Arc::clone(&self.gateway)
    }

    fn preferences(&self) -> PreferencesService {
        self.preferences.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Assessment,
    About,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

fn ViewHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    let view = props.view;
    rsx! {
        match view {
            ViewKind::Assessment => rsx! { AssessmentView {} },
            ViewKind::About => rsx! { AboutView {} },
        }
    }
}

pub struct Harness {
    pub dom: VirtualDom,
}

impl Harness {
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

pub fn setup_view_harness(view: ViewKind) -> Harness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        gateway: Arc::new(FakeGateway),
        preferences: PreferencesService::new(Arc::new(InMemoryPreferences::new())),
    });

    let dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app, view });
    Harness { dom }
}
