use dioxus::prelude::*;

use recall_core::model::{EducationLevel, Participant};

use crate::vm::IntakeVm;

#[component]
pub fn IntakeView(on_complete: EventHandler<Participant>) -> Element {
    let mut vm = use_signal(IntakeVm::new);

    let on_start = move |_| {
        if let Ok(participant) = vm.read().submit() {
            on_complete.call(participant);
        }
    };

    let can_start = vm.read().can_start();
    let education = vm.read().education();
    let status = vm.read().education_status();
    let education_class = |level: EducationLevel| {
        if education == Some(level) {
            "btn btn-primary"
        } else {
            "btn btn-secondary"
        }
    };

    rsx! {
        div { class: "intake",
            h2 { class: "intake__title", "Before we begin" }
            p { class: "intake__subtitle",
                "A few details so the results can be read against the right benchmarks."
            }

            label { class: "field",
                span { class: "field__label", "Your name" }
                input {
                    class: "field__input",
                    id: "name-input",
                    r#type: "text",
                    value: "{vm.read().name()}",
                    oninput: move |evt| vm.write().set_name(evt.value()),
                }
            }

            label { class: "field",
                span { class: "field__label", "Your age (18\u{2013}120)" }
                input {
                    class: "field__input",
                    id: "age-input",
                    r#type: "number",
                    min: "18",
                    max: "120",
                    value: "{vm.read().age_text()}",
                    oninput: move |evt| vm.write().set_age_text(evt.value()),
                }
            }

            div { class: "field",
                span { class: "field__label", "Do you have 12 or more years of education?" }
                div { class: "intake__education",
                    button {
                        class: education_class(EducationLevel::TwelveYearsOrMore),
                        id: "education-yes-btn",
                        r#type: "button",
                        onclick: move |_| {
                            vm.write().choose_education(EducationLevel::TwelveYearsOrMore);
                        },
                        "Yes, 12+ years"
                    }
                    button {
                        class: education_class(EducationLevel::LessThanTwelveYears),
                        id: "education-no-btn",
                        r#type: "button",
                        onclick: move |_| {
                            vm.write().choose_education(EducationLevel::LessThanTwelveYears);
                        },
                        "No, less than 12 years"
                    }
                }
                if !status.is_empty() {
                    p { class: "intake__education-status", "{status}" }
                }
            }

            button {
                class: "btn btn-primary intake__start",
                id: "start-story-button",
                r#type: "button",
                disabled: !can_start,
                onclick: on_start,
                "Start the Assessment"
            }
        }
    }
}
