use crate::settings::AudioSettings;
use pairs_bot::{DecisionEngine, KnowledgeTracker};
use pairs_core::game::session::{GameEvent, GameSession, OpponentMode};
use pairs_core::model::card::{CardId, CardSide};
use pairs_core::model::catalog::Catalog;
use pairs_core::model::deck::{DeckError, DeckSize};
use tracing::{Level, event};

/// Glue between the turn state machine, the machine opponent and the
/// host shell. The session emits events; the controller routes them to
/// the knowledge tracker, answers `OpponentToMove` with engine flips
/// and raises audio cues, then hands the full event stream back to the
/// caller for rendering.
#[derive(Debug)]
pub struct GameController {
    session: GameSession,
    tracker: KnowledgeTracker,
    engine: DecisionEngine,
    audio: AudioSettings,
}

impl GameController {
    pub fn new(catalog: Catalog) -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(catalog, seed)
    }

    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self {
            session: GameSession::with_seed(catalog, seed),
            tracker: KnowledgeTracker::new(),
            engine: DecisionEngine::with_seed(seed ^ 0x9e37_79b9_7f4a_7c15),
            audio: AudioSettings::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn tracker(&self) -> &KnowledgeTracker {
        &self.tracker
    }

    pub fn audio(&self) -> &AudioSettings {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioSettings {
        &mut self.audio
    }

    pub fn start_game(
        &mut self,
        size: DeckSize,
        mode: OpponentMode,
    ) -> Result<Vec<GameEvent>, DeckError> {
        let events = self.session.start_game(size, mode)?;
        self.tracker.reset(self.session.deck());
        Ok(self.dispatch(events))
    }

    /// A board click from the human side.
    pub fn click(&mut self, card: CardId) -> Vec<GameEvent> {
        let events = self.session.select_card(card);
        self.dispatch(events)
    }

    /// Advances simulated time and reacts to whatever fires.
    pub fn tick(&mut self, elapsed: std::time::Duration) -> Vec<GameEvent> {
        let events = self.session.tick(elapsed);
        self.dispatch(events)
    }

    /// Routes events to the tracker and the engine. Flips made in
    /// response to `OpponentToMove` append their own events, which are
    /// routed in turn, so the caller always sees the complete stream.
    fn dispatch(&mut self, mut events: Vec<GameEvent>) -> Vec<GameEvent> {
        let mut index = 0;
        while index < events.len() {
            match events[index] {
                GameEvent::CardFlipped { card, .. } => {
                    self.tracker.observe(card);
                    self.cue("flip");
                }
                GameEvent::MatchClaimed { pair, .. } => {
                    let original = CardId::new(pair, CardSide::Original);
                    self.tracker.discard(&[original, original.partner()]);
                    self.cue("match");
                }
                GameEvent::CardsFlippedBack { .. } => self.cue("flip"),
                GameEvent::GameEnded { .. } => self.cue("fanfare"),
                GameEvent::OpponentToMove => {
                    self.tracker.reconcile(self.session.deck());
                    let first = self.session.first_selected();
                    match self.engine.choose_flip(&self.tracker, first) {
                        Some(card) => {
                            let produced = self.session.opponent_flip(card);
                            events.extend(produced);
                        }
                        None => {
                            event!(Level::WARN, "opponent passed; no flip available");
                        }
                    }
                }
                _ => {}
            }
            index += 1;
        }
        events
    }

    fn cue(&self, name: &str) {
        if self.audio.sound_on && tracing::enabled!(Level::DEBUG) {
            event!(Level::DEBUG, cue = name, "audio cue");
        }
    }
}
