use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use recall_core::model::Theme;

use crate::context::AppContext;
use crate::views::{AboutView, AssessmentView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AssessmentView)] Assessment {},
        #[route("/about", AboutView)] About {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "topbar__title", "Recall" }
                nav { class: "topbar__nav",
                    Link { to: Route::Assessment {}, "Assessment" }
                    Link { to: Route::About {}, "About" }
                }
                ThemeSwitcher {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn ThemeSwitcher() -> Element {
    let ctx = use_context::<AppContext>();
    let mut theme = use_context::<Signal<Theme>>();

    let on_toggle = move |_| {
        let next = theme().toggled();
        theme.set(next);
        let preferences = ctx.preferences();
        spawn(async move {
            // Losing the preference is harmless; the toggle already
            // applied in-memory.
            let _ = preferences.save_theme(next).await;
        });
    };

    rsx! {
        button {
            class: "theme-switcher",
            id: "theme-switcher",
            r#type: "button",
            onclick: on_toggle,
            span { class: "theme-switcher__label", "{theme().as_str()}" }
        }
    }
}
