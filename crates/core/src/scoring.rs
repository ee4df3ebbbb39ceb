//! Pure scoring: raw game metrics in, composite score and risk band out.
//!
//! Nothing here touches I/O or the clock; a missing game payload falls
//! back to worst-case sentinels so an abandoned run still produces the
//! category floor instead of failing.

use crate::model::{AssessmentSession, GameKind, GameMetrics};

/// Per-category maxima. Together with the 0–1 education adjustment these
/// bound the composite score.
pub const MAX_STORY_RECALL: f64 = 12.0;
pub const MAX_TRAIL: f64 = 5.0;
pub const MAX_MATCHING: f64 = 6.0;
pub const MAX_DIGIT_SPAN: f64 = 4.0;
pub const MAX_NAMING: f64 = 3.0;
/// Composite maximum before the education adjustment.
pub const MAX_UNBONUSED: f64 =
    MAX_STORY_RECALL + MAX_TRAIL + MAX_MATCHING + MAX_DIGIT_SPAN + MAX_NAMING;

/// Sentinels substituted for a game that never reported.
const SENTINEL_ERRORS: u32 = 99;
const SENTINEL_SECS: f64 = 999.0;

//
// ─── CATEGORY SCORES ───────────────────────────────────────────────────────────
//

/// Trail connecting: joint error/time ceilings, floor of 1.
#[must_use]
pub fn trail_score(errors: u32, elapsed_secs: f64) -> f64 {
    if errors == 0 && elapsed_secs <= 30.0 {
        5.0
    } else if errors <= 2 && elapsed_secs <= 45.0 {
        4.0
    } else if errors <= 4 && elapsed_secs <= 60.0 {
        3.0
    } else if errors <= 6 && elapsed_secs <= 75.0 {
        2.0
    } else {
        1.0
    }
}

/// Card matching: errors only, floor of 1.
#[must_use]
pub fn matching_score(errors: u32) -> f64 {
    match errors {
        0..=2 => 6.0,
        3..=4 => 5.0,
        5..=6 => 4.0,
        7..=8 => 3.0,
        9..=10 => 2.0,
        _ => 1.0,
    }
}

/// Digit span: one point per aligned digit, capped at 4.
#[must_use]
pub fn digit_span_score(correct: u32) -> f64 {
    f64::from(correct).min(MAX_DIGIT_SPAN)
}

/// Naming: the raw correct count, untransformed.
#[must_use]
pub fn naming_score(correct: u32) -> f64 {
    f64::from(correct)
}

//
// ─── RISK BANDS ────────────────────────────────────────────────────────────────
//

/// Age-adjusted classification of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Mild,
    Low,
    /// Ages under 50 have no published benchmark.
    NotApplicable,
}

impl RiskLevel {
    /// Full label shown on the results screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk (Dementia Range)",
            RiskLevel::Mild => "Mild Risk (MCI Range)",
            RiskLevel::Low => "Low Risk (Normal Range)",
            RiskLevel::NotApplicable => "Standard score (age benchmarks apply from 50+)",
        }
    }

    /// Accent class the results view attaches to the risk line.
    #[must_use]
    pub fn accent_class(self) -> &'static str {
        match self {
            RiskLevel::High => "risk-high",
            RiskLevel::Mild => "risk-mild",
            RiskLevel::Low => "risk-low",
            RiskLevel::NotApplicable => "risk-na",
        }
    }
}

/// Classify a composite score for a given age.
///
/// The score is floored first and excludes the education adjustment;
/// thresholds follow the standard 30-point screening benchmarks per age
/// band.
#[must_use]
pub fn risk_level(unbonused_score: f64, age: u16) -> RiskLevel {
    let score = unbonused_score.floor();
    let (high_below, mild_at_most) = match age {
        50..=59 => (22.0, 25.0),
        60..=69 => (22.0, 24.0),
        70..=79 => (20.0, 23.0),
        80.. => (19.0, 22.0),
        _ => return RiskLevel::NotApplicable,
    };

    if score < high_below {
        RiskLevel::High
    } else if score <= mild_at_most {
        RiskLevel::Mild
    } else {
        RiskLevel::Low
    }
}

//
// ─── FINAL RESULTS ─────────────────────────────────────────────────────────────
//

/// The five category scores, in results-screen order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScores {
    pub story_recall: f64,
    pub trail_connecting: f64,
    pub card_game: f64,
    pub digit_span: f64,
    pub naming_animals: f64,
}

impl CategoryScores {
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.story_recall
            + self.trail_connecting
            + self.card_game
            + self.digit_span
            + self.naming_animals
    }
}

/// Everything the results screen needs, computed in one shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalResults {
    pub categories: CategoryScores,
    pub education_bonus: f64,
    pub total: f64,
    pub max_score: f64,
    pub risk: RiskLevel,
}

/// Map a finished session onto its final results.
///
/// Games that never reported score as if they went maximally badly
/// (errors 99, time 999, zero correct); the category floors keep the
/// total nonzero either way.
#[must_use]
pub fn evaluate(session: &AssessmentSession) -> FinalResults {
    let trail = match session.metrics(GameKind::Trail) {
        Some(GameMetrics::Trail(m)) => trail_score(m.errors, m.elapsed_secs),
        _ => trail_score(SENTINEL_ERRORS, SENTINEL_SECS),
    };
    let matching = match session.metrics(GameKind::Matching) {
        Some(GameMetrics::Matching(m)) => matching_score(m.errors),
        _ => matching_score(SENTINEL_ERRORS),
    };
    let digit_span = match session.metrics(GameKind::DigitSpan) {
        Some(GameMetrics::DigitSpan(m)) => digit_span_score(m.correct),
        _ => digit_span_score(0),
    };
    let naming = match session.metrics(GameKind::Naming) {
        Some(GameMetrics::Naming(m)) => naming_score(m.correct),
        _ => naming_score(0),
    };

    let categories = CategoryScores {
        story_recall: session.quiz_score(),
        trail_connecting: trail,
        card_game: matching,
        digit_span,
        naming_animals: naming,
    };

    let education_bonus = session.participant().education_bonus();
    let unbonused = categories.sum();

    FinalResults {
        categories,
        education_bonus,
        total: unbonused + education_bonus,
        max_score: if education_bonus > 0.0 {
            MAX_UNBONUSED + 1.0
        } else {
            MAX_UNBONUSED
        },
        risk: risk_level(unbonused, session.participant().age()),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
