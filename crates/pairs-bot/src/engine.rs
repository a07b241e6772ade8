use crate::knowledge::KnowledgeTracker;
use pairs_core::model::card::{CardId, CardSide};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{Level, event};

/// Picks the machine opponent's next flip from its accumulated
/// knowledge. One call per flip; the turn state machine paces the calls
/// with its thinking delays, so an opponent turn is an explicit
/// sequence of steps rather than recursive scheduling.
#[derive(Debug)]
pub struct DecisionEngine {
    rng: StdRng,
    seed: u64,
}

impl DecisionEngine {
    pub fn new() -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The next card to flip, or `None` when no move can be deduced.
    ///
    /// With no card selected yet: claim a fully known pair if one
    /// exists (its `original` side goes first), otherwise explore a
    /// uniformly random unseen card. With a first card already face up:
    /// flip its partner when the partner's face is known, otherwise
    /// explore again. `None` is only reachable when the bookkeeping has
    /// diverged from the board; callers reconcile before asking.
    pub fn choose_flip(
        &mut self,
        knowledge: &KnowledgeTracker,
        first: Option<CardId>,
    ) -> Option<CardId> {
        let choice = match first {
            None => {
                if let Some(pair) = knowledge.find_known_pair() {
                    let card = CardId::new(pair, CardSide::Original);
                    log_choice("known_pair", Some(card));
                    return Some(card);
                }
                self.random_unseen(knowledge, None)
                    .inspect(|card| log_choice("probe", Some(*card)))
            }
            Some(first) => {
                let partner = first.partner();
                if knowledge.knows(partner) {
                    log_choice("partner", Some(partner));
                    return Some(partner);
                }
                self.random_unseen(knowledge, Some(first))
                    .inspect(|card| log_choice("probe_second", Some(*card)))
            }
        };

        if choice.is_none() {
            event!(
                Level::WARN,
                known = knowledge.known().len(),
                unknown = knowledge.unknown().len(),
                "opponent has no deducible flip"
            );
        }
        choice
    }

    fn random_unseen(
        &mut self,
        knowledge: &KnowledgeTracker,
        exclude: Option<CardId>,
    ) -> Option<CardId> {
        let candidates: Vec<CardId> = knowledge
            .unknown()
            .iter()
            .copied()
            .filter(|id| Some(*id) != exclude)
            .collect();
        candidates.choose(&mut self.rng).copied()
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn log_choice(stage: &str, card: Option<CardId>) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    if let Some(card) = card {
        event!(Level::DEBUG, stage, card = %card, "opponent flip chosen");
    }
}

#[cfg(test)]
mod tests {
    use super::DecisionEngine;
    use crate::knowledge::KnowledgeTracker;
    use pairs_core::model::card::{CardId, CardSide};
    use pairs_core::model::catalog::Catalog;
    use pairs_core::model::deck::Deck;

    fn tracker_for(pairs: usize, seed: u64) -> (KnowledgeTracker, Deck) {
        let catalog = Catalog::builtin();
        let deck = Deck::deal_with_seed(&catalog, pairs, seed).unwrap();
        let mut tracker = KnowledgeTracker::new();
        tracker.reset(&deck);
        (tracker, deck)
    }

    #[test]
    fn known_pair_is_claimed_before_exploring() {
        let (mut tracker, deck) = tracker_for(9, 1);
        let id = deck.cards()[0].id();
        tracker.observe(id);
        tracker.observe(id.partner());

        let mut engine = DecisionEngine::with_seed(7);
        let choice = engine.choose_flip(&tracker, None);
        assert_eq!(choice, Some(CardId::new(id.pair, CardSide::Original)));
    }

    #[test]
    fn known_partner_completes_the_turn() {
        let (mut tracker, deck) = tracker_for(9, 2);
        let first = deck.cards()[0].id();
        tracker.observe(first.partner());
        tracker.observe(first);

        let mut engine = DecisionEngine::with_seed(7);
        let choice = engine.choose_flip(&tracker, Some(first));
        assert_eq!(choice, Some(first.partner()));
    }

    #[test]
    fn lone_known_card_is_never_reflipped() {
        let (mut tracker, deck) = tracker_for(9, 3);
        let lone = deck.cards()[0].id();
        tracker.observe(lone);
        assert_eq!(tracker.find_known_pair(), None);

        let mut engine = DecisionEngine::with_seed(11);
        for _ in 0..50 {
            let choice = engine.choose_flip(&tracker, None).unwrap();
            assert_ne!(choice, lone);
            assert!(tracker.unknown().contains(&choice));
        }
    }

    #[test]
    fn second_probe_never_repeats_the_first() {
        let (tracker, deck) = tracker_for(9, 4);
        let first = deck.cards()[0].id();

        let mut engine = DecisionEngine::with_seed(13);
        for _ in 0..50 {
            let choice = engine.choose_flip(&tracker, Some(first)).unwrap();
            assert_ne!(choice, first);
        }
    }

    #[test]
    fn exhausted_knowledge_yields_no_flip() {
        let tracker = KnowledgeTracker::new();
        let mut engine = DecisionEngine::with_seed(5);
        assert_eq!(engine.choose_flip(&tracker, None), None);
    }

    #[test]
    fn choices_are_deterministic_for_a_seed() {
        let (tracker, _) = tracker_for(16, 6);
        let mut engine_a = DecisionEngine::with_seed(21);
        let mut engine_b = DecisionEngine::with_seed(21);
        for _ in 0..10 {
            assert_eq!(
                engine_a.choose_flip(&tracker, None),
                engine_b.choose_flip(&tracker, None)
            );
        }
    }
}
