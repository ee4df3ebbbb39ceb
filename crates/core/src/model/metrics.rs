use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── GAME KIND ─────────────────────────────────────────────────────────────────
//

/// The four cognitive mini-games, in no particular order.
///
/// The fixed run order lives in [`GameKind::SEQUENCE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Naming,
    DigitSpan,
    Trail,
    Matching,
}

impl GameKind {
    /// The order games are presented during an assessment.
    pub const SEQUENCE: [GameKind; 4] = [
        GameKind::Naming,
        GameKind::DigitSpan,
        GameKind::Trail,
        GameKind::Matching,
    ];

    /// Short key used on the analyze wire payload.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            GameKind::Naming => "animal",
            GameKind::DigitSpan => "sequence",
            GameKind::Trail => "dots",
            GameKind::Matching => "memory",
        }
    }

    /// Human-readable title for the game header.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Naming => "Naming Animals",
            GameKind::DigitSpan => "Digit Span",
            GameKind::Trail => "Trail Connecting",
            GameKind::Matching => "Card Matching",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

//
// ─── METRICS PAYLOADS ──────────────────────────────────────────────────────────
//

/// Outcome of one trail-connecting run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailMetrics {
    pub elapsed_secs: f64,
    /// Correct taps over total taps, in [0, 1].
    pub accuracy: f64,
    pub errors: u32,
}

/// Outcome of one card-matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingMetrics {
    pub errors: u32,
}

/// Outcome of one digit-span run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSpanMetrics {
    /// Index-aligned matches against the target sequence.
    pub correct: u32,
    pub total: u32,
}

/// Outcome of one naming run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingMetrics {
    pub correct: u32,
    pub out_of: u32,
}

/// A completed game's metrics, tagged by game.
///
/// Produced exactly once per game instance and immutable afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameMetrics {
    Trail(TrailMetrics),
    Matching(MatchingMetrics),
    DigitSpan(DigitSpanMetrics),
    Naming(NamingMetrics),
}

impl GameMetrics {
    /// The game this payload belongs to.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            GameMetrics::Trail(_) => GameKind::Trail,
            GameMetrics::Matching(_) => GameKind::Matching,
            GameMetrics::DigitSpan(_) => GameKind::DigitSpan,
            GameMetrics::Naming(_) => GameKind::Naming,
        }
    }
}
