use pairs_core::model::card::{CardId, PairId};
use pairs_core::model::deck::Deck;

/// What the machine opponent has inferred about the board so far.
///
/// Three disjoint sets partition the unclaimed cards: `known` holds
/// faces the opponent has observed, `unknown` holds faces it has never
/// seen, and `rest` is their union in stable board order. Insertion
/// order of `known` is meaningful: it decides which pair is claimed
/// first when several are deducible.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTracker {
    rest: Vec<CardId>,
    known: Vec<CardId>,
    unknown: Vec<CardId>,
}

impl KnowledgeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything and repopulates from a freshly dealt deck:
    /// every card unclaimed and unseen.
    pub fn reset(&mut self, deck: &Deck) {
        self.rest = deck
            .cards()
            .iter()
            .filter(|card| !card.is_matched())
            .map(|card| card.id())
            .collect();
        self.unknown = self.rest.clone();
        self.known.clear();
        debug_assert!(self.is_consistent());
    }

    /// Records a face the opponent has seen. Idempotent; a claimed card
    /// is ignored.
    pub fn observe(&mut self, card: CardId) {
        if !self.rest.contains(&card) || self.known.contains(&card) {
            return;
        }
        self.unknown.retain(|id| *id != card);
        self.known.push(card);
        debug_assert!(self.is_consistent());
    }

    /// Drops claimed cards from all bookkeeping, whoever matched them.
    pub fn discard(&mut self, cards: &[CardId]) {
        self.rest.retain(|id| !cards.contains(id));
        self.known.retain(|id| !cards.contains(id));
        self.unknown.retain(|id| !cards.contains(id));
        debug_assert!(self.is_consistent());
    }

    /// First pair whose both faces are currently known, scanning
    /// `known` in insertion order.
    pub fn find_known_pair(&self) -> Option<PairId> {
        self.known
            .iter()
            .find(|id| self.known.contains(&id.partner()))
            .map(|id| id.pair)
    }

    /// Re-derives the sets from the authoritative deck. Claimed cards
    /// are dropped and any unclaimed card that slipped out of the
    /// bookkeeping is restored as unseen, so a turn never starts from
    /// divergent state.
    pub fn reconcile(&mut self, deck: &Deck) {
        let in_play: Vec<CardId> = deck
            .cards()
            .iter()
            .filter(|card| !card.is_matched())
            .map(|card| card.id())
            .collect();
        self.known.retain(|id| in_play.contains(id));
        self.unknown.retain(|id| in_play.contains(id));
        for id in &in_play {
            if !self.known.contains(id) && !self.unknown.contains(id) {
                self.unknown.push(*id);
            }
        }
        self.rest = in_play;
        debug_assert!(self.is_consistent());
    }

    pub fn rest(&self) -> &[CardId] {
        &self.rest
    }

    pub fn known(&self) -> &[CardId] {
        &self.known
    }

    pub fn unknown(&self) -> &[CardId] {
        &self.unknown
    }

    pub fn knows(&self, card: CardId) -> bool {
        self.known.contains(&card)
    }

    /// `rest` must equal the disjoint union of `known` and `unknown`.
    pub fn is_consistent(&self) -> bool {
        self.known.iter().all(|id| !self.unknown.contains(id))
            && self.rest.len() == self.known.len() + self.unknown.len()
            && self
                .rest
                .iter()
                .all(|id| self.known.contains(id) || self.unknown.contains(id))
    }
}
