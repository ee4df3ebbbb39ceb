use dioxus::document;
use dioxus::prelude::*;

use services::GameOrchestrator;

use crate::views::scripts;
use crate::vm::ResultsVm;

#[component]
pub fn ResultsView(
    orchestrator: Signal<Option<GameOrchestrator>>,
    on_restart: EventHandler<()>,
) -> Element {
    let vm = {
        let guard = orchestrator.read();
        let Some(orch) = guard.as_ref() else {
            return rsx! {
                p { class: "results__empty", "No results available." }
            };
        };
        ResultsVm::new(
            orch.results(),
            orch.session().participant().name().to_string(),
        )
    };

    let on_print = move |_| {
        let _ = document::eval(scripts::PRINT_JS);
    };

    let total = vm.total_text();
    let max = vm.max_text();
    let risk_label = vm.risk_label();
    let risk_class = vm.risk_class();
    let total_row = vm.total_row_text();
    let name = vm.participant_name().to_string();
    let rows = vm.rows();

    rsx! {
        div { class: "results",
            h2 { class: "results__title", "Assessment Results" }
            p { class: "results__name", "Results for " strong { id: "result-user-name", "{name}" } }

            div { class: "results__headline",
                span { class: "results__total", id: "final-total-score", "{total}" }
                span { class: "results__max", id: "final-max-score", "{max}" }
            }
            p { class: "results__risk {risk_class}", id: "risk-level-display", "{risk_label}" }

            ul { class: "results__breakdown", id: "score-breakdown-list",
                for row in rows {
                    li { class: "results__row",
                        span { "{row.label}:" }
                        strong { "{row.score_text()}" }
                    }
                }
                li { class: "results__row results__row--total",
                    span { "TOTAL SCORE:" }
                    strong { "{total_row}" }
                }
            }
            p { class: "results__note",
                "Risk analysis is based on the standard 30-point score \
                 (excluding the 1-point education bonus)."
            }

            div { class: "results__actions",
                button {
                    class: "btn btn-primary",
                    id: "start-over-button",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Start Over"
                }
                button {
                    class: "btn btn-secondary",
                    id: "print-results-button",
                    r#type: "button",
                    onclick: on_print,
                    "Print Results"
                }
            }
        }
    }
}
