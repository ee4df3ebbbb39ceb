//! The four mini-game state machines.
//!
//! Each game owns only its transient run state and produces a single
//! immutable metrics payload at completion. Timing (playback pacing,
//! flip-back and finish delays) is expressed as constants here and
//! executed by the caller, which keeps every state machine synchronous
//! and deterministic under test.

pub mod digit_span;
pub mod matching;
pub mod naming;
pub mod trail;

pub use digit_span::DigitSpanGame;
pub use matching::{FlipOutcome, MatchingGame};
pub use naming::{NamingGame, NamingPrompt, TranscriptOutcome};
pub use trail::{Board, Dot, Point, Segment, TapOutcome, TrailGame, TrailPhase};
