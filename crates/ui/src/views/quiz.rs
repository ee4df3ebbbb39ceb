use dioxus::prelude::*;

use recall_core::model::{QuizBoard, Verdict};
use services::{GameOrchestrator, QuizServiceError, StoryPackage};

use crate::context::AppContext;
use crate::views::{Modal, ModalMessage};
use crate::vm::QuizVm;

fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Consistent => "quiz-verdict quiz-verdict--consistent",
        Verdict::Inconsistent => "quiz-verdict quiz-verdict--inconsistent",
        Verdict::NeedsElaboration => "quiz-verdict quiz-verdict--elaborate",
        Verdict::Unrecognized => "quiz-verdict quiz-verdict--neutral",
    }
}

#[component]
pub fn QuizView(
    story: StoryPackage,
    orchestrator: Signal<Option<GameOrchestrator>>,
    on_show_results: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let question_count = story.questions.len();

    let board = use_signal(|| QuizBoard::new(story.questions.clone()));
    let mut vm = use_signal(|| QuizVm::new(question_count));
    let mut modal = use_signal(|| None::<ModalMessage>);

    // Fresh tally for this round, even after a re-recorded story.
    use_hook(|| {
        if let Some(orch) = orchestrator.write().as_mut() {
            orch.begin_quiz(question_count as u32);
        }
    });

    let story_text = story.story.clone();
    let quiz_service = ctx.quiz();
    let on_check = use_callback(move |index: usize| {
        let answer = vm.read().answer(index).trim().to_string();
        if answer.is_empty() {
            modal.set(Some(ModalMessage::error(
                "Please enter an answer before checking!",
            )));
            return;
        }
        if !vm.write().begin_check(index) {
            return;
        }

        let story_text = story_text.clone();
        let quiz_service = quiz_service.clone();
        let mut board = board;
        let mut orchestrator = orchestrator;
        spawn(async move {
            // Take the session and board out while the check runs; the
            // single in-flight guard in the vm keeps this exclusive.
            let Some(mut orch) = orchestrator.write().take() else {
                vm.write().abort_check(index);
                return;
            };
            let mut working_board = QuizBoard::clone(&board.read());

            let outcome = quiz_service
                .check(&story_text, &mut working_board, &mut orch, index, &answer)
                .await;

            board.set(working_board);
            orchestrator.set(Some(orch));

            match outcome {
                Ok(checked) => {
                    vm.write().finish_check(index, checked);
                }
                Err(err) => {
                    vm.write().abort_check(index);
                    let message = match err {
                        QuizServiceError::EmptyAnswer => {
                            ModalMessage::error("Please enter an answer before checking!")
                        }
                        QuizServiceError::MissingStory => {
                            ModalMessage::error("Error: Original story context is missing.")
                        }
                        QuizServiceError::AlreadyChecked { .. } => {
                            ModalMessage::info("That question was already checked.")
                        }
                        _ => ModalMessage::error(
                            "An error occurred while communicating with the checker.",
                        ),
                    };
                    modal.set(Some(message));
                }
            }
        });
    });

    let board_guard = board.read();
    let rows: Vec<(usize, String, crate::vm::QuestionState)> = vm
        .read()
        .rows(&board_guard)
        .into_iter()
        .enumerate()
        .map(|(index, row)| (index, format!("{}. {}", index + 1, row.question), row))
        .collect();
    let complete = board_guard.is_complete();
    let has_questions = board_guard.total() > 0;
    drop(board_guard);

    rsx! {
        div { class: "quiz",
            h2 { class: "quiz__title", "A few questions about your story" }

            if !has_questions {
                p { class: "quiz-empty",
                    "No questions were generated earlier. Please record a story again."
                }
            }

            ul { class: "quiz__list", id: "questions-list",
                for (index, numbered, row) in rows {
                    li { class: "quiz__item", key: "{index}",
                        p { class: "quiz__question", "{numbered}" }
                        div { class: "quiz__entry",
                            input {
                                class: "field__input",
                                id: "answer-input-{index}",
                                r#type: "text",
                                placeholder: "Your answer...",
                                readonly: row.checked.is_some(),
                                value: "{row.answer}",
                                oninput: move |evt| vm.write().set_answer(index, evt.value()),
                            }
                            button {
                                class: "btn btn-primary",
                                id: "check-btn-{index}",
                                r#type: "button",
                                disabled: row.checking || row.checked.is_some(),
                                onclick: move |_| on_check.call(index),
                                if row.checking {
                                    "Checking..."
                                } else if row.checked.is_some() {
                                    "Answer Checked"
                                } else {
                                    "Check Answer"
                                }
                            }
                        }
                        if let Some(checked) = row.checked {
                            div { class: "quiz__result", id: "result-{index}",
                                p { class: verdict_class(checked.verdict), "{checked.verdict.label()}" }
                                p { class: "quiz__feedback", "{checked.feedback}" }
                            }
                        }
                    }
                }
            }

            if complete {
                div { class: "quiz__completion", id: "quiz-completion",
                    p { "All questions answered." }
                    button {
                        class: "btn btn-primary",
                        id: "show-results-button",
                        r#type: "button",
                        onclick: move |_| on_show_results.call(()),
                        "Show Final Results"
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
