use dioxus::prelude::*;

use recall_core::games::matching::{self, FlipOutcome, MatchingGame};
use recall_core::model::GameMetrics;

#[component]
pub fn MatchingGameView(on_complete: EventHandler<GameMetrics>) -> Element {
    let mut game = use_signal(|| MatchingGame::new(&mut rand::rng()));
    let mut done = use_signal(|| false);

    let on_card = use_callback(move |index: usize| {
        if done() {
            return;
        }
        let outcome = game.write().flip(index);
        match outcome {
            FlipOutcome::Mismatched { .. } => {
                spawn(async move {
                    tokio::time::sleep(matching::FLIP_BACK_DELAY).await;
                    game.write().settle();
                });
            }
            FlipOutcome::Completed => {
                done.set(true);
                let metrics = game.read().metrics();
                spawn(async move {
                    tokio::time::sleep(matching::FINISH_DELAY).await;
                    on_complete.call(GameMetrics::Matching(metrics));
                });
            }
            FlipOutcome::Ignored | FlipOutcome::Flipped | FlipOutcome::Matched => {}
        }
    });

    let guard = game.read();
    let errors = guard.errors();
    let cards: Vec<(usize, &'static str, bool, &'static str)> = guard
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let class = if card.is_matched() {
                "card card--matched"
            } else if card.is_flipped() {
                "card card--flipped"
            } else {
                "card"
            };
            let face_up = card.is_flipped() || card.is_matched();
            (i, card.icon(), face_up, class)
        })
        .collect();
    drop(guard);

    rsx! {
        div { class: "game matching-game", id: "game-memory-container",
            p { class: "matching-game__hint", "Find all four matching pairs." }
            p { class: "matching-game__errors",
                "Errors: "
                span { id: "memory-errors", "{errors}" }
            }
            div { class: "matching-game__grid", id: "memory-grid-container",
                for (index, icon, face_up, class) in cards {
                    button {
                        class: "{class}",
                        r#type: "button",
                        onclick: move |_| on_card.call(index),
                        if face_up {
                            span { class: "card__icon material-symbols-rounded", "{icon}" }
                        }
                    }
                }
            }
        }
    }
}
