use rand::Rng;
use std::time::Duration;

use crate::model::DigitSpanMetrics;

/// Digits played back per run.
pub const SEQUENCE_LEN: usize = 5;
/// How long each digit stays on screen during playback.
pub const DIGIT_SHOW: Duration = Duration::from_millis(800);
/// Blank gap between digits.
pub const DIGIT_GAP: Duration = Duration::from_millis(250);
/// How long the result stays visible before the game reports completion.
pub const RESULT_DELAY: Duration = Duration::from_millis(2_500);

/// Repeat-the-digits short-term memory task.
///
/// The target sequence is fixed at construction; playback pacing and input
/// locking are the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSpanGame {
    targets: Vec<u8>,
}

impl DigitSpanGame {
    /// Draw a fresh random sequence of `SEQUENCE_LEN` digits.
    #[must_use]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            targets: (0..SEQUENCE_LEN).map(|_| rng.random_range(0..10)).collect(),
        }
    }

    #[must_use]
    pub fn targets(&self) -> &[u8] {
        &self.targets
    }

    /// Strip everything but digits from a raw entry.
    #[must_use]
    pub fn sanitize_entry(raw: &str) -> Vec<u8> {
        raw.chars()
            .filter_map(|ch| ch.to_digit(10))
            .map(|d| d as u8)
            .collect()
    }

    /// Score an entry positionally: a digit only counts when it sits at
    /// the same index as in the target. Shifted-but-correct digits earn
    /// nothing.
    #[must_use]
    pub fn score(&self, entry: &[u8]) -> DigitSpanMetrics {
        let correct = self
            .targets
            .iter()
            .zip(entry.iter())
            .filter(|(target, entered)| target == entered)
            .count() as u32;

        DigitSpanMetrics {
            correct,
            total: self.targets.len() as u32,
        }
    }

    /// Convenience for raw text entries.
    #[must_use]
    pub fn score_text(&self, raw: &str) -> DigitSpanMetrics {
        self.score(&Self::sanitize_entry(raw))
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

    fn fixed_game(targets: &[u8]) -> DigitSpanGame {
        DigitSpanGame {
            targets: targets.to_vec(),
        }
    }

    #[test]
    fn generated_sequence_has_five_digits() {
        for seed in 0..20 {
            let game = DigitSpanGame::new(&mut StdRng::seed_from_u64(seed));
            assert_eq!(game.targets().len(), SEQUENCE_LEN);
            assert!(game.targets().iter().all(|d| *d < 10));
        }
    }

    #[test]
    fn sanitize_keeps_only_digits() {
        assert_eq!(
            DigitSpanGame::sanitize_entry(" 4 8 a15x-2 "),
            vec![4, 8, 1, 5, 2]
        );
        assert!(DigitSpanGame::sanitize_entry("abc").is_empty());
        assert!(DigitSpanGame::sanitize_entry("").is_empty());
    }

    #[test]
    fn scoring_is_strictly_positional() {
        let game = fixed_game(&[1, 2, 3, 4, 5]);
        assert_eq!(game.score(&[1, 2, 3, 4, 5]).correct, 5);
        // Every digit present but shifted by one: nothing aligns.
        assert_eq!(game.score(&[2, 3, 4, 5, 1]).correct, 0);
        assert_eq!(game.score(&[1, 9, 3, 9, 5]).correct, 3);
    }

    #[test]
    fn short_and_long_entries_are_bounded() {
        let game = fixed_game(&[7, 7, 7, 7, 7]);
        assert_eq!(game.score(&[7, 7]).correct, 2);
        assert_eq!(game.score(&[]).correct, 0);
        // Extra digits beyond the target length are ignored.
        let long = game.score(&[7, 7, 7, 7, 7, 7, 7, 7]);
        assert_eq!(long.correct, 5);
        assert_eq!(long.total, 5);
    }

    #[test]
    fn score_text_sanitizes_before_comparing() {
        let game = fixed_game(&[3, 1, 4, 1, 5]);
        let metrics = game.score_text(" 3 1 4 1 5 ");
        assert_eq!(metrics.correct, 5);
        assert_eq!(metrics.total, 5);
    }
}
