use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points per question by verdict: Consistent 4, Needs Elaboration 2,
/// everything else 0. Three questions make the 12-point recall maximum.
pub const POINTS_CONSISTENT: f64 = 4.0;
pub const POINTS_NEEDS_ELABORATION: f64 = 2.0;

//
// ─── VERDICT ───────────────────────────────────────────────────────────────────
//

/// Consistency verdict returned by the answer checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Consistent,
    Inconsistent,
    NeedsElaboration,
    /// Any verdict string the checker sends that we do not recognize.
    Unrecognized,
}

impl Verdict {
    /// Maps the checker's wire string onto a verdict.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "Consistent" => Verdict::Consistent,
            "Inconsistent" => Verdict::Inconsistent,
            "Needs Elaboration" => Verdict::NeedsElaboration,
            _ => Verdict::Unrecognized,
        }
    }

    /// Point value credited for this verdict.
    #[must_use]
    pub fn points(self) -> f64 {
        match self {
            Verdict::Consistent => POINTS_CONSISTENT,
            Verdict::NeedsElaboration => POINTS_NEEDS_ELABORATION,
            Verdict::Inconsistent | Verdict::Unrecognized => 0.0,
        }
    }

    /// Display label for the result line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Consistent => "Consistent",
            Verdict::Inconsistent => "Inconsistent",
            Verdict::NeedsElaboration => "Needs Elaboration",
            Verdict::Unrecognized => "Unrecognized",
        }
    }
}

//
// ─── QUIZ BOARD ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no question at index {index}")]
    UnknownQuestion { index: usize },
}

/// What happened when a verdict was applied to a question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    /// First verdict for this question; `points` were credited.
    Scored { points: f64 },
    /// The question had already been scored; the tally is unchanged.
    AlreadyScored,
}

#[derive(Debug, Clone, PartialEq)]
struct QuestionSlot {
    question: String,
    verdict: Option<Verdict>,
}

/// Per-question scoring state for the recall quiz.
///
/// Each question is scored at most once: applying a second verdict to the
/// same slot is a no-op, so repeated check clicks or duplicated network
/// responses cannot inflate the tally.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizBoard {
    slots: Vec<QuestionSlot>,
}

impl QuizBoard {
    #[must_use]
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            slots: questions
                .into_iter()
                .map(|question| QuestionSlot {
                    question,
                    verdict: None,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.slots.len() as u32
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.slots.iter().filter(|s| s.verdict.is_some()).count() as u32
    }

    /// Accumulated points across scored questions.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.slots
            .iter()
            .filter_map(|s| s.verdict)
            .map(Verdict::points)
            .sum()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|s| s.question.as_str())
    }

    #[must_use]
    pub fn verdict(&self, index: usize) -> Option<Verdict> {
        self.slots.get(index).and_then(|s| s.verdict)
    }

    #[must_use]
    pub fn is_scored(&self, index: usize) -> bool {
        self.verdict(index).is_some()
    }

    /// All questions have a verdict (and there is at least one question).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.answered() == self.total()
    }

    /// Apply a verdict to a question, crediting its points at most once.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` for an out-of-range index.
    pub fn record(&mut self, index: usize, verdict: Verdict) -> Result<ScoreOutcome, QuizError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(QuizError::UnknownQuestion { index })?;

        if slot.verdict.is_some() {
            return Ok(ScoreOutcome::AlreadyScored);
        }

        slot.verdict = Some(verdict);
        Ok(ScoreOutcome::Scored {
            points: verdict.points(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> QuizBoard {
        QuizBoard::new(vec![
            "Where did the story start?".into(),
            "Who was mentioned?".into(),
            "What happened at the end?".into(),
        ])
    }

    #[test]
    fn wire_strings_map_to_verdicts() {
        assert_eq!(Verdict::from_wire("Consistent"), Verdict::Consistent);
        assert_eq!(Verdict::from_wire("Inconsistent"), Verdict::Inconsistent);
        assert_eq!(
            Verdict::from_wire("Needs Elaboration"),
            Verdict::NeedsElaboration
        );
        assert_eq!(Verdict::from_wire("Maybe"), Verdict::Unrecognized);
    }

    #[test]
    fn points_follow_the_rubric() {
        assert_eq!(Verdict::Consistent.points(), 4.0);
        assert_eq!(Verdict::NeedsElaboration.points(), 2.0);
        assert_eq!(Verdict::Inconsistent.points(), 0.0);
        assert_eq!(Verdict::Unrecognized.points(), 0.0);
    }

    #[test]
    fn scoring_accumulates_across_questions() {
        let mut board = board();
        board.record(0, Verdict::Consistent).unwrap();
        board.record(1, Verdict::NeedsElaboration).unwrap();
        board.record(2, Verdict::Inconsistent).unwrap();

        assert_eq!(board.score(), 6.0);
        assert_eq!(board.answered(), 3);
        assert!(board.is_complete());
    }

    #[test]
    fn rescoring_a_question_never_changes_the_tally() {
        let mut board = board();
        assert_eq!(
            board.record(0, Verdict::Consistent).unwrap(),
            ScoreOutcome::Scored { points: 4.0 }
        );
        assert_eq!(
            board.record(0, Verdict::Consistent).unwrap(),
            ScoreOutcome::AlreadyScored
        );
        // Even a different verdict cannot overwrite the first one.
        assert_eq!(
            board.record(0, Verdict::Inconsistent).unwrap(),
            ScoreOutcome::AlreadyScored
        );
        assert_eq!(board.score(), 4.0);
        assert_eq!(board.answered(), 1);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut board = board();
        let err = board.record(9, Verdict::Consistent).unwrap_err();
        assert_eq!(err, QuizError::UnknownQuestion { index: 9 });
    }

    #[test]
    fn empty_board_is_never_complete() {
        let board = QuizBoard::new(Vec::new());
        assert!(!board.is_complete());
        assert_eq!(board.total(), 0);
    }
}
