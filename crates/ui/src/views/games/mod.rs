mod digit_span;
mod matching;
mod naming;
mod trail;

use dioxus::prelude::*;

use recall_core::model::{GameKind, GameMetrics};
use services::{ADVANCE_DELAY, GameOrchestrator, NextStep};

use digit_span::DigitSpanGameView;
use matching::MatchingGameView;
use naming::NamingGameView;
use trail::TrailGameView;

/// Hosts whichever mini-game is active and relays each completion
/// payload into the orchestrator. Between games it shows a short
/// interlude for [`ADVANCE_DELAY`] before mounting the next one.
#[component]
pub fn GameView(
    orchestrator: Signal<Option<GameOrchestrator>>,
    on_games_done: EventHandler<()>,
) -> Element {
    let mut advancing = use_signal(|| false);

    let on_complete = use_callback(move |payload: GameMetrics| {
        let mut orchestrator = orchestrator;
        let next = {
            let mut guard = orchestrator.write();
            let Some(orch) = guard.as_mut() else { return };
            match orch.record_completion(payload) {
                Ok(next) => next,
                // A duplicate completion must never skew the run; drop it.
                Err(_) => return,
            }
        };

        advancing.set(true);
        spawn(async move {
            tokio::time::sleep(ADVANCE_DELAY).await;
            advancing.set(false);
            if next == NextStep::Quiz {
                on_games_done.call(());
            }
        });
    });

    let (title, current) = {
        let guard = orchestrator.read();
        let Some(orch) = guard.as_ref() else {
            return rsx! {
                p { class: "game-view__empty", "No active session." }
            };
        };
        (
            format!(
                "Cognitive Game {} of {}",
                orch.game_number().min(orch.games_total()),
                orch.games_total()
            ),
            orch.current_game(),
        )
    };

    rsx! {
        div { class: "game-view",
            h2 { class: "game-view__title", id: "game-title", "{title}" }
            if advancing() {
                p { class: "game-view__interlude", "Nice work. The next game is coming up..." }
            } else {
                match current {
                    Some(GameKind::Naming) => rsx! { NamingGameView { on_complete } },
                    Some(GameKind::DigitSpan) => rsx! { DigitSpanGameView { on_complete } },
                    Some(GameKind::Trail) => rsx! { TrailGameView { on_complete } },
                    Some(GameKind::Matching) => rsx! { MatchingGameView { on_complete } },
                    None => rsx! {},
                }
            }
        }
    }
}
