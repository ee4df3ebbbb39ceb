use std::sync::Arc;

use recall_core::Clock;
use services::{BackendGateway, PreferencesService, QuizService};

/// What the composition root must provide for the UI to run.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn gateway(&self) -> Arc<dyn BackendGateway>;
    fn preferences(&self) -> PreferencesService;
}

/// Service handles shared by every view through Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    gateway: Arc<dyn BackendGateway>,
    quiz: QuizService,
    preferences: PreferencesService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let gateway = app.gateway();
        Self {
            clock: app.clock(),
            quiz: QuizService::new(Arc::clone(&gateway)),
            gateway,
            preferences: app.preferences(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn gateway(&self) -> Arc<dyn BackendGateway> {
        Arc::clone(&self.gateway)
    }

    #[must_use]
    pub fn quiz(&self) -> QuizService {
        self.quiz.clone()
    }

    #[must_use]
    pub fn preferences(&self) -> PreferencesService {
        self.preferences.clone()
    }
}

/// Build an `AppContext` from a composition-root app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
