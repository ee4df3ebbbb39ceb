use dioxus::document;
use dioxus::prelude::*;

use services::StoryPackage;

use crate::context::AppContext;
use crate::views::{Modal, ModalMessage};
use crate::views::scripts::{self, RecordingResult};
use crate::vm::{StoryOutcome, StoryVm};

#[component]
pub fn StorytellingView(on_begin_games: EventHandler<StoryPackage>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(StoryVm::new);
    let mut modal = use_signal(|| None::<ModalMessage>);

    let on_record_toggle = move |_| {
        if vm.read().is_recording() {
            // Stop: the in-flight script resolves with the captured audio.
            vm.write().begin_processing();
            let _ = document::eval(scripts::STOP_RECORDING_JS);
            return;
        }
        if vm.read().is_processing() {
            return;
        }

        vm.write().begin_recording();
        let gateway = ctx.gateway();
        spawn(async move {
            let mut recording = document::eval(scripts::RECORD_AUDIO_JS);
            let captured = recording.recv::<RecordingResult>().await;

            let audio = match captured {
                Ok(result) if result.ok => result.audio.unwrap_or_default(),
                _ => {
                    vm.write().reset();
                    modal.set(Some(ModalMessage::error(
                        "Failed to access microphone. Please check your permissions.",
                    )));
                    return;
                }
            };

            match gateway.process_audio(&audio).await {
                Ok(package) => {
                    if vm.write().package_received(package) == StoryOutcome::NoQuestions {
                        modal.set(Some(ModalMessage::info(
                            "Could not generate meaningful questions from the story. \
                             Try recording a longer story.",
                        )));
                    }
                }
                Err(_) => {
                    vm.write().reset();
                    modal.set(Some(ModalMessage::error(
                        "Failed to process story on the server. Please try again.",
                    )));
                }
            }
        });
    };

    let on_start_games = move |_| {
        if let Some(package) = vm.read().package().cloned() {
            on_begin_games.call(package);
        }
    };

    let is_recording = vm.read().is_recording();
    let is_processing = vm.read().is_processing();
    let can_start_games = vm.read().can_start_games();
    let story_line = vm.read().story_line().to_string();
    let record_label = if is_recording {
        "Stop Recording"
    } else {
        "Start Recording"
    };
    let record_class = if is_recording {
        "btn record-btn record-btn--live"
    } else {
        "btn btn-primary record-btn"
    };

    rsx! {
        div { class: "storytelling",
            h2 { class: "storytelling__title", "Tell me a story" }
            p { class: "storytelling__subtitle",
                "Speak for a minute or two about something you remember well. \
                 A few questions about it come later."
            }

            button {
                class: "{record_class}",
                id: "record-button",
                r#type: "button",
                disabled: is_processing,
                onclick: on_record_toggle,
                "{record_label}"
            }

            if is_processing {
                p { class: "storytelling__loading", id: "loading-indicator", "Processing your story..." }
            }

            p { class: "storytelling__story", id: "story-text", "{story_line}" }

            if can_start_games {
                div { class: "storytelling__transition", id: "transition-area",
                    p { "Story saved. Ready for a few short games?" }
                    button {
                        class: "btn btn-primary",
                        id: "start-games-button",
                        r#type: "button",
                        onclick: on_start_games,
                        "Start the Games"
                    }
                }
            }

            if let Some(message) = modal.read().as_ref().cloned() {
                Modal {
                    message,
                    on_dismiss: move |()| modal.set(None),
                }
            }
        }
    }
}
