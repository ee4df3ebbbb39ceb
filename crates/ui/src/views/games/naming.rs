use dioxus::document;
use dioxus::prelude::*;

use recall_core::games::naming::{self, NamingGame, TranscriptOutcome};
use recall_core::model::GameMetrics;

use crate::views::scripts::{self, SpeechResult};

#[component]
pub fn NamingGameView(on_complete: EventHandler<GameMetrics>) -> Element {
    let mut game = use_signal(NamingGame::new);
    let mut feedback = use_signal(String::new);
    let mut listening = use_signal(|| false);
    let mut waiting = use_signal(|| false);
    let mut typed = use_signal(String::new);

    let apply_transcript = use_callback(move |transcript: String| {
        let outcome = game.write().submit_transcript(&transcript);
        let Some(outcome) = outcome else { return };

        let mark = match outcome {
            TranscriptOutcome::Correct => "Correct!",
            TranscriptOutcome::Incorrect => "Incorrect.",
        };
        feedback.set(format!("You said: \"{}\" \u{2014} {mark}", transcript.trim()));
        waiting.set(true);

        spawn(async move {
            tokio::time::sleep(naming::ADVANCE_DELAY).await;
            let done = {
                let mut guard = game.write();
                guard.advance();
                guard.is_complete()
            };
            feedback.set(String::new());
            typed.set(String::new());
            waiting.set(false);
            if done {
                on_complete.call(GameMetrics::Naming(game.read().metrics()));
            }
        });
    });

    let on_speak = move |_| {
        if listening() || waiting() {
            return;
        }
        listening.set(true);
        feedback.set("Listening...".into());
        spawn(async move {
            let mut recognizer = document::eval(scripts::SPEECH_RECOGNITION_JS);
            let heard = recognizer.recv::<SpeechResult>().await;
            listening.set(false);
            match heard {
                Ok(result) if result.ok => {
                    apply_transcript.call(result.transcript.unwrap_or_default());
                }
                _ => {
                    feedback.set(
                        "Could not hear you. Try again, or type the answer below.".into(),
                    );
                }
            }
        });
    };

    let on_typed_submit = move |_| {
        if listening() || waiting() {
            return;
        }
        let text = typed();
        if text.trim().is_empty() {
            return;
        }
        apply_transcript.call(text);
    };

    let guard = game.read();
    let prompt = guard.current_prompt();
    let label = format!("Question {} of {}", guard.question_number(), guard.total());
    drop(guard);

    rsx! {
        div { class: "game naming-game", id: "game-animal-container",
            if let Some(prompt) = prompt {
                p { class: "naming-game__label", id: "animal-quiz-label", "{label}" }
                img {
                    class: "naming-game__img",
                    id: "animal-quiz-img",
                    src: "{prompt.image}",
                    alt: "animal to name",
                }
                p { class: "naming-game__hint", "Say the name of this animal out loud." }
                button {
                    class: "btn btn-primary",
                    id: "animal-quiz-btn",
                    r#type: "button",
                    disabled: listening() || waiting(),
                    onclick: on_speak,
                    "Speak the Answer"
                }
                div { class: "naming-game__typed",
                    input {
                        class: "field__input",
                        r#type: "text",
                        placeholder: "...or type it here",
                        value: "{typed}",
                        oninput: move |evt| typed.set(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: listening() || waiting(),
                        onclick: on_typed_submit,
                        "Submit"
                    }
                }
                if !feedback().is_empty() {
                    p { class: "naming-game__feedback", id: "animal-quiz-feedback", "{feedback}" }
                }
            } else {
                p { class: "naming-game__feedback", "Quiz complete!" }
            }
        }
    }
}
