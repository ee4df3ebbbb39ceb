use dioxus::prelude::*;

use recall_core::model::Participant;
use recall_core::phase::{Phase, PhaseMachine};
use services::{GameOrchestrator, StoryPackage};

use crate::context::AppContext;
use crate::views::{GameView, IntakeView, QuizView, ResultsView, StorytellingView};

/// Root of the assessment flow: renders exactly one phase at a time and
/// owns the state that outlives a phase (the orchestrated session and
/// the story package).
#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();

    let phases = use_signal(PhaseMachine::new);
    let orchestrator = use_signal(|| None::<GameOrchestrator>);
    let story = use_signal(|| None::<StoryPackage>);

    let on_intake_complete = use_callback(move |participant: Participant| {
        let mut phases = phases;
        let mut orchestrator = orchestrator;
        orchestrator.set(Some(GameOrchestrator::new(participant, clock.now())));
        let _ = phases.write().begin_storytelling();
    });

    let on_begin_games = use_callback(move |package: StoryPackage| {
        let mut phases = phases;
        let mut story = story;
        story.set(Some(package));
        let _ = phases.write().begin_games();
    });

    let on_games_done = use_callback(move |()| {
        let mut phases = phases;
        let _ = phases.write().begin_quiz();
    });

    let on_show_results = use_callback(move |()| {
        let mut phases = phases;
        let _ = phases.write().show_results();
    });

    // Start over: drop everything, exactly like a page reload would.
    let on_restart = use_callback(move |()| {
        let mut phases = phases;
        let mut orchestrator = orchestrator;
        let mut story = story;
        phases.set(PhaseMachine::new());
        orchestrator.set(None);
        story.set(None);
    });

    let current = phases.read().current();
    let story_package = story.read().as_ref().cloned();

    rsx! {
        div { class: "page assessment-page", id: "view-{current.id()}",
            match current {
                Phase::Start => rsx! {
                    IntakeView { on_complete: on_intake_complete }
                },
                Phase::Storytelling => rsx! {
                    StorytellingView { on_begin_games }
                },
                Phase::Game => rsx! {
                    GameView { orchestrator, on_games_done }
                },
                Phase::Quiz => rsx! {
                    if let Some(package) = story_package {
                        QuizView { story: package, orchestrator, on_show_results }
                    } else {
                        p { class: "quiz-empty",
                            "No questions were generated earlier. Please record a story again."
                        }
                    }
                },
                Phase::Results => rsx! {
                    ResultsView { orchestrator, on_restart }
                },
            }
        }
    }
}
