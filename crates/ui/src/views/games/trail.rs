use std::time::Duration;

use dioxus::prelude::*;

use recall_core::games::trail::{self, Board, Point, TapOutcome, TrailGame, TrailPhase};
use recall_core::model::GameMetrics;

use crate::context::AppContext;

/// Fixed board size; the SVG is rendered at exactly these CSS pixels so
/// pointer coordinates map straight onto board coordinates.
const BOARD_WIDTH: f64 = 600.0;
const BOARD_HEIGHT: f64 = 420.0;
const TICK: Duration = Duration::from_millis(100);

#[component]
pub fn TrailGameView(on_complete: EventHandler<GameMetrics>) -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();

    let mut game = use_signal(|| {
        let mut game = TrailGame::new(Board::new(BOARD_WIDTH, BOARD_HEIGHT));
        game.start(&mut rand::rng());
        game
    });
    let started_at = use_signal(|| clock.now());
    let mut elapsed = use_signal(|| 0.0_f64);
    let mut finished = use_signal(|| false);

    // Keep the time readout moving while the run is live.
    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            if finished() {
                break;
            }
            elapsed.set(clock.elapsed_secs(started_at()));
        }
    });

    let on_board_down = move |evt: Event<MouseData>| {
        if finished() {
            return;
        }
        let coords = evt.data.element_coordinates();
        let outcome = game.write().tap(Point::new(coords.x, coords.y));
        if outcome == TapOutcome::Completed {
            let secs = clock.elapsed_secs(started_at());
            elapsed.set(secs);
            finished.set(true);
            let metrics = game.read().metrics(secs);
            spawn(async move {
                tokio::time::sleep(trail::FINISH_DELAY).await;
                on_complete.call(GameMetrics::Trail(metrics));
            });
        }
    };

    let guard = game.read();
    let radius = guard.board().radius();
    let expected = guard.expected_label();
    let running = guard.phase() == TrailPhase::Running;
    let accuracy_pct = format!("{:.0}%", guard.accuracy() * 100.0);
    let dots: Vec<(f64, f64, u8, &'static str)> = guard
        .dots()
        .iter()
        .map(|dot| {
            let class = if running && expected == Some(dot.label) {
                "trail-dot trail-dot--active"
            } else {
                "trail-dot"
            };
            (dot.center.x, dot.center.y, dot.label, class)
        })
        .collect();
    let lines: Vec<(f64, f64, f64, f64, &'static str, &'static str)> = guard
        .segments()
        .iter()
        .filter_map(|segment| {
            let a = guard.dots().iter().find(|d| d.label == segment.from_label)?;
            let b = guard.dots().iter().find(|d| d.label == segment.to_label)?;
            let (class, dash) = if segment.correct {
                ("trail-line trail-line--correct", "none")
            } else {
                ("trail-line trail-line--wrong", "8 6")
            };
            Some((a.center.x, a.center.y, b.center.x, b.center.y, class, dash))
        })
        .collect();
    drop(guard);

    let elapsed_text = format!("{:.1}s", elapsed());

    rsx! {
        div { class: "game trail-game", id: "game-dots-container",
            p { class: "trail-game__hint", "Tap the dots in order, 1 through 8, as fast as you can." }
            div { class: "trail-game__hud",
                span { "Time: " span { id: "dots-time", "{elapsed_text}" } }
                span { "Accuracy: " span { id: "dots-accuracy", "{accuracy_pct}" } }
            }
            svg {
                class: "trail-game__board",
                id: "dots-board",
                width: "{BOARD_WIDTH}",
                height: "{BOARD_HEIGHT}",
                view_box: "0 0 {BOARD_WIDTH} {BOARD_HEIGHT}",
                onmousedown: on_board_down,

                for (x1, y1, x2, y2, class, dash) in lines {
                    line {
                        x1: "{x1}",
                        y1: "{y1}",
                        x2: "{x2}",
                        y2: "{y2}",
                        class: "{class}",
                        stroke_dasharray: "{dash}",
                    }
                }
                for (x, y, label, class) in dots {
                    circle {
                        cx: "{x}",
                        cy: "{y}",
                        r: "{radius}",
                        class: "{class}",
                    }
                    text {
                        x: "{x}",
                        y: "{y}",
                        class: "trail-dot__label",
                        text_anchor: "middle",
                        dominant_baseline: "central",
                        "{label}"
                    }
                }
            }
        }
    }
}
