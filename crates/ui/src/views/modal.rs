use dioxus::prelude::*;

/// A blocking message over the current view. Errors get the red accent,
/// informational notes the green one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalMessage {
    pub text: String,
    pub is_error: bool,
}

impl ModalMessage {
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }
}

#[component]
pub fn Modal(message: ModalMessage, on_dismiss: EventHandler<()>) -> Element {
    let accent = if message.is_error {
        "modal__card--error"
    } else {
        "modal__card--info"
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal__card {accent}", role: "dialog",
                p { class: "modal__text", "{message.text}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
