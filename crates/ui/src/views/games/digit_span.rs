use dioxus::prelude::*;

use recall_core::games::digit_span::{self, DigitSpanGame};
use recall_core::model::{DigitSpanMetrics, GameMetrics};

#[component]
pub fn DigitSpanGameView(on_complete: EventHandler<GameMetrics>) -> Element {
    let game = use_signal(|| DigitSpanGame::new(&mut rand::rng()));
    let mut display = use_signal(|| "\u{2013}".to_string());
    let mut playing = use_signal(|| false);
    let mut played = use_signal(|| false);
    let mut answer = use_signal(String::new);
    let mut result = use_signal(|| None::<DigitSpanMetrics>);

    let on_play = move |_| {
        if playing() || played() {
            return;
        }
        playing.set(true);
        answer.set(String::new());
        result.set(None);
        let targets = game.read().targets().to_vec();
        spawn(async move {
            for digit in targets {
                display.set(digit.to_string());
                tokio::time::sleep(digit_span::DIGIT_SHOW).await;
                display.set("\u{2022}".to_string());
                tokio::time::sleep(digit_span::DIGIT_GAP).await;
            }
            display.set("\u{2713}".to_string());
            playing.set(false);
            played.set(true);
        });
    };

    let on_check = move |_| {
        if playing() || !played() || result.read().is_some() {
            return;
        }
        let metrics = game.read().score_text(&answer());
        result.set(Some(metrics));
        spawn(async move {
            tokio::time::sleep(digit_span::RESULT_DELAY).await;
            on_complete.call(GameMetrics::DigitSpan(metrics));
        });
    };

    let scored = result.read().is_some();
    let input_locked = playing() || !played() || scored;
    let result_line = (*result.read()).map(|metrics| {
        let percent = if metrics.total > 0 {
            (f64::from(metrics.correct) / f64::from(metrics.total) * 100.0).round()
        } else {
            0.0
        };
        format!(
            "Result: {} / {} correct ({percent:.0}%)",
            metrics.correct, metrics.total
        )
    });

    rsx! {
        div { class: "game digit-span", id: "game-sequence-container",
            p { class: "digit-span__hint",
                "Watch the digits, then type them back in the same order."
            }
            div { class: "digit-span__display", id: "sequence-display", "{display}" }
            button {
                class: "btn btn-primary",
                id: "sequence-start-btn",
                r#type: "button",
                disabled: playing() || played(),
                onclick: on_play,
                "Play the Digits"
            }
            div { class: "digit-span__entry",
                input {
                    class: "field__input",
                    id: "sequence-answer",
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "e.g. 41583",
                    disabled: input_locked,
                    value: "{answer}",
                    oninput: move |evt| answer.set(evt.value()),
                }
                button {
                    class: "btn btn-secondary",
                    id: "sequence-check-btn",
                    r#type: "button",
                    disabled: input_locked,
                    onclick: on_check,
                    "Check"
                }
            }
            if let Some(line) = result_line {
                div { class: "digit-span__result", id: "sequence-result", "{line}" }
            }
        }
    }
}
