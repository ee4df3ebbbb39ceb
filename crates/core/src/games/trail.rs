use rand::Rng;
use std::time::Duration;

use crate::model::TrailMetrics;

/// Dots placed per run. Dense boards may end up with fewer when placement
/// gives up (see `PLACEMENT_ATTEMPTS`).
pub const DOT_COUNT: u8 = 8;
/// Reference dot radius at a 600px board.
pub const BASE_RADIUS: f64 = 18.0;
/// Radius never shrinks below this on small boards.
pub const MIN_RADIUS: f64 = 14.0;
/// Fraction of the shorter board side kept clear around the edge.
pub const MARGIN_FRAC: f64 = 0.08;
/// Rejection-sampling budget per dot. A dot that cannot be placed within
/// the budget is omitted without surfacing an error.
pub const PLACEMENT_ATTEMPTS: u32 = 5_000;
/// Pause between clearing the last dot and reporting completion.
pub const FINISH_DELAY: Duration = Duration::from_millis(800);

//
// ─── GEOMETRY ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One labeled dot on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub label: u8,
}

/// A drawn connection between two labels. Wrong segments render dashed;
/// segments are only ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from_label: u8,
    pub to_label: u8,
    pub correct: bool,
}

/// Board dimensions with the derived placement parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    width: f64,
    height: f64,
    radius: f64,
    margin: f64,
}

impl Board {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let min_side = width.min(height);
        Self {
            width,
            height,
            radius: (BASE_RADIUS * (min_side / 600.0)).max(MIN_RADIUS),
            margin: MARGIN_FRAC * min_side,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Dot radius used for both rendering and hit testing.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn min_gap(&self) -> f64 {
        self.radius * 3.5
    }
}

fn generate_dots<R: Rng>(board: &Board, rng: &mut R) -> Vec<Dot> {
    let lo_x = board.margin + board.radius;
    let hi_x = board.width - board.margin - board.radius;
    let lo_y = board.margin + board.radius;
    let hi_y = board.height - board.margin - board.radius;
    if lo_x >= hi_x || lo_y >= hi_y {
        return Vec::new();
    }

    let min_gap = board.min_gap();
    let mut dots: Vec<Dot> = Vec::with_capacity(DOT_COUNT as usize);
    for label in 1..=DOT_COUNT {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let candidate = Point::new(rng.random_range(lo_x..hi_x), rng.random_range(lo_y..hi_y));
            if dots
                .iter()
                .all(|d| d.center.distance_to(candidate) > min_gap)
            {
                dots.push(Dot {
                    center: candidate,
                    label,
                });
                break;
            }
        }
        // Budget exhausted: the label is skipped and the run is one dot
        // shorter.
    }
    dots
}

//
// ─── GAME ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailPhase {
    Idle,
    Running,
    Finished,
}

/// Result of one pointer tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap landed outside every dot, or the game is not running.
    Ignored,
    /// The expected dot was hit; the trail advanced.
    Correct { label: u8 },
    /// A dot was hit out of order; a wrong segment may have been drawn.
    Wrong { label: u8 },
    /// The final dot was hit; the game is finished.
    Completed,
}

/// Connect-the-dots in label order, against the clock.
///
/// Taps that miss every dot are ignored entirely; taps on the wrong dot
/// count against accuracy and draw a dashed segment from the last correct
/// dot. Clearing the last placed dot finishes the run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailGame {
    board: Board,
    dots: Vec<Dot>,
    segments: Vec<Segment>,
    phase: TrailPhase,
    taps: u32,
    correct: u32,
    next_index: usize,
}

impl TrailGame {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            dots: Vec::new(),
            segments: Vec::new(),
            phase: TrailPhase::Idle,
            taps: 0,
            correct: 0,
            next_index: 0,
        }
    }

    /// Place the dots and start accepting taps.
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.dots = generate_dots(&self.board, rng);
        self.segments.clear();
        self.taps = 0;
        self.correct = 0;
        self.next_index = 0;
        self.phase = if self.dots.is_empty() {
            // Nothing fit on the board; treat the run as instantly over.
            TrailPhase::Finished
        } else {
            TrailPhase::Running
        };
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn phase(&self) -> TrailPhase {
        self.phase
    }

    /// Label the participant should tap next, `None` when finished.
    #[must_use]
    pub fn expected_label(&self) -> Option<u8> {
        self.dots.get(self.next_index).map(|d| d.label)
    }

    #[must_use]
    pub fn taps(&self) -> u32 {
        self.taps
    }

    /// Correct taps over total taps; 1.0 before the first tap.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.taps == 0 {
            1.0
        } else {
            f64::from(self.correct) / f64::from(self.taps)
        }
    }

    /// Taps that did not advance the trail.
    #[must_use]
    pub fn errors(&self) -> u32 {
        self.taps - self.correct
    }

    /// Hit-test a pointer position and apply the tap.
    pub fn tap(&mut self, position: Point) -> TapOutcome {
        if self.phase != TrailPhase::Running {
            return TapOutcome::Ignored;
        }
        let Some(hit) = self
            .dots
            .iter()
            .find(|d| d.center.distance_to(position) <= self.board.radius)
            .copied()
        else {
            return TapOutcome::Ignored;
        };

        self.taps += 1;
        let expected = self.dots[self.next_index].label;
        if hit.label == expected {
            if self.next_index > 0 {
                self.segments.push(Segment {
                    from_label: self.dots[self.next_index - 1].label,
                    to_label: hit.label,
                    correct: true,
                });
            }
            self.next_index += 1;
            self.correct += 1;

            if self.next_index == self.dots.len() {
                self.phase = TrailPhase::Finished;
                return TapOutcome::Completed;
            }
            TapOutcome::Correct { label: hit.label }
        } else {
            let from_label = if self.next_index == 0 {
                self.dots[0].label
            } else {
                self.dots[self.next_index - 1].label
            };
            if from_label != hit.label {
                self.segments.push(Segment {
                    from_label,
                    to_label: hit.label,
                    correct: false,
                });
            }
            TapOutcome::Wrong { label: hit.label }
        }
    }

    /// Completion payload; the caller supplies the measured elapsed time.
    #[must_use]
    pub fn metrics(&self, elapsed_secs: f64) -> TrailMetrics {
        TrailMetrics {
            elapsed_secs,
            accuracy: self.accuracy(),
            errors: self.errors(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn running_game(seed: u64) -> TrailGame {
        let mut game = TrailGame::new(Board::new(600.0, 600.0));
        game.start(&mut StdRng::seed_from_u64(seed));
        game
    }

    #[test]
    fn placement_respects_margin_and_gap() {
        for seed in 0..20 {
            let game = running_game(seed);
            let board = *game.board();
            let dots = game.dots();
            assert_eq!(dots.len(), DOT_COUNT as usize, "seed {seed}");

            for dot in dots {
                assert!(dot.center.x >= MARGIN_FRAC * 600.0 + board.radius());
                assert!(dot.center.x <= 600.0 - MARGIN_FRAC * 600.0 - board.radius());
                assert!(dot.center.y >= MARGIN_FRAC * 600.0 + board.radius());
                assert!(dot.center.y <= 600.0 - MARGIN_FRAC * 600.0 - board.radius());
            }
            for (i, a) in dots.iter().enumerate() {
                for b in &dots[i + 1..] {
                    assert!(a.center.distance_to(b.center) > board.radius() * 3.5);
                }
            }
        }
    }

    #[test]
    fn labels_come_out_in_order() {
        let game = running_game(1);
        let labels: Vec<u8> = game.dots().iter().map(|d| d.label).collect();
        assert_eq!(labels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(game.expected_label(), Some(1));
    }

    #[test]
    fn tapping_every_dot_in_order_completes_cleanly() {
        let mut game = running_game(2);
        let dots: Vec<Dot> = game.dots().to_vec();

        for (i, dot) in dots.iter().enumerate() {
            let outcome = game.tap(dot.center);
            if i + 1 == dots.len() {
                assert_eq!(outcome, TapOutcome::Completed);
            } else {
                assert_eq!(outcome, TapOutcome::Correct { label: dot.label });
            }
        }

        assert_eq!(game.phase(), TrailPhase::Finished);
        assert_eq!(game.errors(), 0);
        assert_eq!(game.accuracy(), 1.0);
        // Seven solid segments connect the eight dots.
        assert_eq!(game.segments().len(), 7);
        assert!(game.segments().iter().all(|s| s.correct));

        let metrics = game.metrics(21.5);
        assert_eq!(metrics.errors, 0);
        assert_eq!(metrics.elapsed_secs, 21.5);
    }

    #[test]
    fn wrong_dot_draws_dashed_segment_without_advancing() {
        let mut game = running_game(3);
        let dots: Vec<Dot> = game.dots().to_vec();

        // First expected label is 1; tap dot 3 instead.
        let outcome = game.tap(dots[2].center);
        assert_eq!(outcome, TapOutcome::Wrong { label: 3 });
        assert_eq!(game.expected_label(), Some(1));
        assert_eq!(game.errors(), 1);
        assert_eq!(
            game.segments(),
            [Segment {
                from_label: 1,
                to_label: 3,
                correct: false
            }]
            .as_slice()
        );

        // Recover: tap 1 then 2, accuracy reflects the miss.
        game.tap(dots[0].center);
        game.tap(dots[1].center);
        assert!((game.accuracy() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn miss_is_ignored_and_untracked() {
        let mut game = running_game(4);
        let far_corner = Point::new(1.0, 1.0);
        assert!(
            game.dots()
                .iter()
                .all(|d| d.center.distance_to(far_corner) > game.board().radius())
        );

        assert_eq!(game.tap(far_corner), TapOutcome::Ignored);
        assert_eq!(game.taps(), 0);
        assert_eq!(game.accuracy(), 1.0);
    }

    #[test]
    fn taps_after_finish_are_ignored() {
        let mut game = running_game(5);
        let dots: Vec<Dot> = game.dots().to_vec();
        for dot in &dots {
            game.tap(dot.center);
        }
        assert_eq!(game.phase(), TrailPhase::Finished);
        assert_eq!(game.tap(dots[0].center), TapOutcome::Ignored);
        assert_eq!(game.taps(), dots.len() as u32);
    }

    #[test]
    fn cramped_board_omits_dots_instead_of_failing() {
        // A board barely bigger than one dot cannot hold eight of them.
        let mut game = TrailGame::new(Board::new(60.0, 60.0));
        game.start(&mut StdRng::seed_from_u64(6));
        assert!(game.dots().len() < DOT_COUNT as usize);
    }

    #[test]
    fn tiny_board_finishes_immediately() {
        let mut game = TrailGame::new(Board::new(10.0, 10.0));
        game.start(&mut StdRng::seed_from_u64(7));
        assert!(game.dots().is_empty());
        assert_eq!(game.phase(), TrailPhase::Finished);
    }
}
