use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Duration;

use crate::model::MatchingMetrics;

/// The four icons; each appears on exactly two cards.
pub const ICONS: [&str; 4] = ["sports_esports", "eco", "pets", "photo_camera"];
/// Pairs to find before the game completes.
pub const PAIR_COUNT: u32 = ICONS.len() as u32;
/// Cards dealt per run.
pub const CARD_COUNT: usize = ICONS.len() * 2;
/// How long a mismatched pair stays face up before flipping back.
pub const FLIP_BACK_DELAY: Duration = Duration::from_millis(1_200);
/// Pause between the last match and reporting completion.
pub const FINISH_DELAY: Duration = Duration::from_millis(800);

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// One card on the table. Flips are transient; a match is permanent for
/// the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    icon: &'static str,
    flipped: bool,
    matched: bool,
}

impl Card {
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }
}

//
// ─── GAME ──────────────────────────────────────────────────────────────────────
//

/// Result of one card flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The flip was refused: unresolved pair on the table, or the card is
    /// already face up or matched.
    Ignored,
    /// First card of a pair turned face up.
    Flipped,
    /// Second card matched the first.
    Matched,
    /// Second card did not match; both flip back after `FLIP_BACK_DELAY`
    /// once the caller invokes [`MatchingGame::settle`].
    Mismatched { first: usize, second: usize },
    /// The last pair was just matched.
    Completed,
}

/// Icon-matching memory game over eight shuffled cards.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingGame {
    cards: Vec<Card>,
    face_up: Option<usize>,
    pending_mismatch: Option<(usize, usize)>,
    pairs_matched: u32,
    errors: u32,
}

impl MatchingGame {
    /// Deal a uniformly shuffled table of card pairs.
    #[must_use]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = ICONS
            .iter()
            .chain(ICONS.iter())
            .map(|&icon| Card {
                icon,
                flipped: false,
                matched: false,
            })
            .collect();
        cards.shuffle(rng);

        Self {
            cards,
            face_up: None,
            pending_mismatch: None,
            pairs_matched: 0,
            errors: 0,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn errors(&self) -> u32 {
        self.errors
    }

    #[must_use]
    pub fn pairs_matched(&self) -> u32 {
        self.pairs_matched
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pairs_matched == PAIR_COUNT
    }

    /// True while a mismatched pair waits to be flipped back.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending_mismatch.is_some()
    }

    /// Flip the card at `index`.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.pending_mismatch.is_some() {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.cards.get(index) else {
            return FlipOutcome::Ignored;
        };
        if card.flipped || card.matched {
            return FlipOutcome::Ignored;
        }

        self.cards[index].flipped = true;

        let Some(first) = self.face_up.take() else {
            self.face_up = Some(index);
            return FlipOutcome::Flipped;
        };

        if self.cards[first].icon == self.cards[index].icon {
            self.cards[first].matched = true;
            self.cards[index].matched = true;
            self.pairs_matched += 1;
            if self.is_complete() {
                FlipOutcome::Completed
            } else {
                FlipOutcome::Matched
            }
        } else {
            self.errors += 1;
            self.pending_mismatch = Some((first, index));
            FlipOutcome::Mismatched {
                first,
                second: index,
            }
        }
    }

    /// Flip a pending mismatched pair back down. The caller schedules this
    /// after `FLIP_BACK_DELAY`; it is a no-op when nothing is pending.
    pub fn settle(&mut self) {
        if let Some((a, b)) = self.pending_mismatch.take() {
            self.cards[a].flipped = false;
            self.cards[b].flipped = false;
        }
    }

    /// Completion payload.
    #[must_use]
    pub fn metrics(&self) -> MatchingMetrics {
        MatchingMetrics {
            errors: self.errors,
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
    use std::collections::HashMap;

    fn game(seed: u64) -> MatchingGame {
        MatchingGame::new(&mut StdRng::seed_from_u64(seed))
    }

    fn positions_by_icon(game: &MatchingGame) -> HashMap<&'static str, Vec<usize>> {
        let mut map: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (i, card) in game.cards().iter().enumerate() {
            map.entry(card.icon()).or_default().push(i);
        }
        map
    }

    #[test]
    fn every_icon_appears_exactly_twice() {
        for seed in 0..50 {
            let game = game(seed);
            assert_eq!(game.cards().len(), CARD_COUNT);
            let by_icon = positions_by_icon(&game);
            assert_eq!(by_icon.len(), ICONS.len(), "seed {seed}");
            for icon in ICONS {
                assert_eq!(by_icon[icon].len(), 2, "seed {seed}, icon {icon}");
            }
        }
    }

    #[test]
    fn matching_both_cards_of_a_pair_is_permanent() {
        let mut game = game(1);
        let by_icon = positions_by_icon(&game);
        let pair = &by_icon[ICONS[0]];

        assert_eq!(game.flip(pair[0]), FlipOutcome::Flipped);
        assert_eq!(game.flip(pair[1]), FlipOutcome::Matched);
        assert!(game.cards()[pair[0]].is_matched());
        assert!(game.cards()[pair[1]].is_matched());
        assert_eq!(game.pairs_matched(), 1);
        assert_eq!(game.errors(), 0);

        // A matched card cannot be flipped again.
        assert_eq!(game.flip(pair[0]), FlipOutcome::Ignored);
    }

    #[test]
    fn mismatch_counts_an_error_and_flips_back_on_settle() {
        let mut game = game(2);
        let by_icon = positions_by_icon(&game);
        let a = by_icon[ICONS[0]][0];
        let b = by_icon[ICONS[1]][0];

        game.flip(a);
        assert_eq!(game.flip(b), FlipOutcome::Mismatched { first: a, second: b });
        assert_eq!(game.errors(), 1);
        assert!(game.is_settling());

        // Clicks are refused while the pair is face up and unresolved.
        let c = by_icon[ICONS[2]][0];
        assert_eq!(game.flip(c), FlipOutcome::Ignored);

        game.settle();
        assert!(!game.cards()[a].is_flipped());
        assert!(!game.cards()[b].is_flipped());
        assert!(!game.is_settling());
        assert_eq!(game.flip(c), FlipOutcome::Flipped);
    }

    #[test]
    fn double_clicking_the_same_card_is_ignored() {
        let mut game = game(3);
        game.flip(0);
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
        assert_eq!(game.errors(), 0);
    }

    #[test]
    fn clearing_all_pairs_completes_with_error_count() {
        let mut game = game(4);
        let by_icon = positions_by_icon(&game);

        // One deliberate mismatch first.
        game.flip(by_icon[ICONS[0]][0]);
        game.flip(by_icon[ICONS[1]][0]);
        game.settle();

        for (i, icon) in ICONS.iter().enumerate() {
            let pair = &by_icon[*icon];
            game.flip(pair[0]);
            let outcome = game.flip(pair[1]);
            if i + 1 == ICONS.len() {
                assert_eq!(outcome, FlipOutcome::Completed);
            } else {
                assert_eq!(outcome, FlipOutcome::Matched);
            }
        }

        assert!(game.is_complete());
        assert_eq!(game.metrics(), MatchingMetrics { errors: 1 });
    }

    #[test]
    fn score_never_changes_after_completion_flips() {
        let mut game = game(5);
        let by_icon = positions_by_icon(&game);
        for icon in ICONS {
            let pair = &by_icon[icon];
            game.flip(pair[0]);
            game.flip(pair[1]);
        }
        assert!(game.is_complete());
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
        assert_eq!(game.errors(), 0);
    }
}
