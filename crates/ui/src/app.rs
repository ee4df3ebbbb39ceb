use dioxus::prelude::*;
use dioxus_router::Router;

use recall_core::model::Theme;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    // The persisted theme is the only thing restored between launches.
    let mut theme = use_signal(Theme::default);
    let preferences = ctx.preferences();
    use_future(move || {
        let preferences = preferences.clone();
        async move {
            if let Ok(stored) = preferences.theme().await {
                theme.set(stored);
            }
        }
    });
    use_context_provider(|| theme);

    let theme_class = theme().as_str();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Recall" }

        div { class: "app-root theme-{theme_class}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
