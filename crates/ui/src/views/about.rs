use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page about-page",
            h2 { "About Recall" }
            p {
                "Recall walks through a short scripted screening: you tell a story, \
                 play four quick games, answer a few questions about your story, and \
                 get a composite score read against age-banded benchmarks."
            }
            p {
                "The score is a screening aid, not a diagnosis. Nothing you do here \
                 is stored beyond your theme preference; closing the app discards \
                 the whole session."
            }
        }
    }
}
