use recall_core::scoring::{
    FinalResults, MAX_DIGIT_SPAN, MAX_MATCHING, MAX_NAMING, MAX_STORY_RECALL, MAX_TRAIL,
};

/// One line of the score breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub score: f64,
    pub max: f64,
}

impl BreakdownRow {
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("{:.1} / {:.1}", self.score, self.max)
    }
}

/// Display mapping for the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsVm {
    results: FinalResults,
    participant_name: String,
}

impl ResultsVm {
    #[must_use]
    pub fn new(results: FinalResults, participant_name: String) -> Self {
        Self {
            results,
            participant_name,
        }
    }

    #[must_use]
    pub fn participant_name(&self) -> &str {
        &self.participant_name
    }

    #[must_use]
    pub fn total_text(&self) -> String {
        format!("{:.1}", self.results.total)
    }

    #[must_use]
    pub fn max_text(&self) -> String {
        format!("/ {:.0}", self.results.max_score)
    }

    #[must_use]
    pub fn risk_label(&self) -> &'static str {
        self.results.risk.label()
    }

    #[must_use]
    pub fn risk_class(&self) -> &'static str {
        self.results.risk.accent_class()
    }

    /// Breakdown rows in the order they appear on screen.
    #[must_use]
    pub fn rows(&self) -> Vec<BreakdownRow> {
        let categories = self.results.categories;
        vec![
            BreakdownRow {
                label: "Story Recall Quiz",
                score: categories.story_recall,
                max: MAX_STORY_RECALL,
            },
            BreakdownRow {
                label: "Trail Connecting Game",
                score: categories.trail_connecting,
                max: MAX_TRAIL,
            },
            BreakdownRow {
                label: "Card Game (Memory)",
                score: categories.card_game,
                max: MAX_MATCHING,
            },
            BreakdownRow {
                label: "Digit Span (Attention)",
                score: categories.digit_span,
                max: MAX_DIGIT_SPAN,
            },
            BreakdownRow {
                label: "Naming Animals (Fluency)",
                score: categories.naming_animals,
                max: MAX_NAMING,
            },
            BreakdownRow {
                label: "Education Bonus",
                score: self.results.education_bonus,
                max: 1.0,
            },
        ]
    }

    #[must_use]
    pub fn total_row_text(&self) -> String {
        format!("{:.1} / {:.0}", self.results.total, self.results.max_score)
    }
}
