use crate::game::scheduler::Scheduler;
use crate::model::card::{CardId, PairId};
use crate::model::catalog::Catalog;
use crate::model::deck::{Deck, DeckError, DeckSize};
use crate::model::ladder::{GameResult, Ladder};
use crate::model::player::PlayerSide;
use crate::model::score::ScoreBoard;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::str::FromStr;
use std::time::Duration;

/// How long mismatched cards stay face up before flipping back.
pub const FLIP_BACK_DELAY: Duration = Duration::from_millis(800);
/// UI settle time between the final match and the end-of-game check.
pub const END_CHECK_DELAY: Duration = Duration::from_millis(1500);
/// Thinking pause before the machine opponent's next flip.
pub const OPPONENT_THINK_DELAY: Duration = Duration::from_millis(2000);
/// Pause between the machine's first and second flip of a turn.
pub const OPPONENT_REVEAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Ended,
}

impl GameStatus {
    /// Status labels consumed by the rendering collaborator.
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::NotStarted => "gamestart",
            GameStatus::InProgress => "inprogress",
            GameStatus::Ended => "gameend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMode {
    User,
    Computer,
}

impl OpponentMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            OpponentMode::User => "user",
            OpponentMode::Computer => "computer",
        }
    }
}

impl fmt::Display for OpponentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpponentMode {
    type Err = ParseOpponentModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(OpponentMode::User),
            "computer" => Ok(OpponentMode::Computer),
            _ => Err(ParseOpponentModeError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOpponentModeError;

impl fmt::Display for ParseOpponentModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("opponent must be `user` or `computer`")
    }
}

impl std::error::Error for ParseOpponentModeError {}

/// Everything collaborators need to render, sonify or react to. Every
/// `CardFlipped` doubles as the flip sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        size: DeckSize,
        mode: OpponentMode,
    },
    CardFlipped {
        card: CardId,
        by: PlayerSide,
    },
    Mismatch {
        first: CardId,
        second: CardId,
        by: PlayerSide,
    },
    CardsFlippedBack {
        first: CardId,
        second: CardId,
    },
    TurnChanged {
        now: PlayerSide,
    },
    MatchClaimed {
        pair: PairId,
        by: PlayerSide,
    },
    /// It is the machine's turn and the thinking delay has elapsed; the
    /// decision engine should be consulted for the next flip.
    OpponentToMove,
    GameEnded {
        result: GameResult,
    },
}

#[derive(Debug, Clone, Copy)]
enum PendingTask {
    FlipBack { first: CardId, second: CardId },
    EndCheck,
    OpponentTurn,
}

/// The turn state machine. Owns the deck, turn ownership, scoring, the
/// delayed-transition scheduler and the session ladder; it is the sole
/// mutator of all of them.
#[derive(Debug)]
pub struct GameSession {
    catalog: Catalog,
    deck: Deck,
    size: DeckSize,
    mode: OpponentMode,
    status: GameStatus,
    current: PlayerSide,
    first_selected: Option<CardId>,
    resolving: bool,
    scores: ScoreBoard,
    ladder: Ladder,
    scheduler: Scheduler<PendingTask>,
    rng: StdRng,
    seed: u64,
}

impl GameSession {
    pub fn new(catalog: Catalog) -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(catalog, seed)
    }

    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            deck: Deck::empty(),
            size: DeckSize::Eighteen,
            mode: OpponentMode::User,
            status: GameStatus::NotStarted,
            current: PlayerSide::A,
            first_selected: None,
            resolving: false,
            scores: ScoreBoard::new(),
            ladder: Ladder::new(),
            scheduler: Scheduler::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> OpponentMode {
        self.mode
    }

    pub fn deck_size(&self) -> DeckSize {
        self.size
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_player(&self) -> PlayerSide {
        self.current
    }

    pub fn first_selected(&self) -> Option<CardId> {
        self.first_selected
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Time until the next pending delayed transition, if any.
    pub fn next_transition_in(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    /// Deals a fresh deck and resets per-game state. Pending delayed
    /// transitions from an earlier game are dropped so they cannot
    /// corrupt the new one. The ladder survives.
    pub fn start_game(
        &mut self,
        size: DeckSize,
        mode: OpponentMode,
    ) -> Result<Vec<GameEvent>, DeckError> {
        self.deck = Deck::deal(&self.catalog, size.pair_count(), &mut self.rng)?;
        self.size = size;
        self.mode = mode;
        self.status = GameStatus::InProgress;
        self.current = PlayerSide::A;
        self.first_selected = None;
        self.resolving = false;
        self.scores.reset();
        self.scheduler.clear();
        Ok(vec![GameEvent::GameStarted { size, mode }])
    }

    /// A card click from the board. Every invalid input is a silent
    /// no-op: stale UI events must never corrupt the state machine.
    pub fn select_card(&mut self, card: CardId) -> Vec<GameEvent> {
        if self.status != GameStatus::InProgress || self.resolving {
            return Vec::new();
        }
        if self.mode == OpponentMode::Computer && self.current == PlayerSide::B {
            return Vec::new();
        }
        match self.deck.card(card) {
            Some(found) if !found.is_flipped() => {}
            _ => return Vec::new(),
        }
        self.flip_and_advance(card)
    }

    /// A flip chosen by the decision engine on the machine's turn.
    pub fn opponent_flip(&mut self, card: CardId) -> Vec<GameEvent> {
        if self.status != GameStatus::InProgress || self.resolving {
            return Vec::new();
        }
        if self.mode != OpponentMode::Computer || self.current != PlayerSide::B {
            return Vec::new();
        }
        match self.deck.card(card) {
            Some(found) if !found.is_flipped() => {}
            _ => return Vec::new(),
        }
        self.flip_and_advance(card)
    }

    /// Advances simulated time, firing every delayed transition that
    /// comes due within `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let deadline = self.scheduler.now() + elapsed;
        let mut events = Vec::new();
        while let Some(task) = self.scheduler.pop_due(deadline) {
            self.run_task(task, &mut events);
        }
        self.scheduler.finish(deadline);
        events
    }

    fn flip_and_advance(&mut self, card: CardId) -> Vec<GameEvent> {
        let by = self.current;
        self.deck.set_flipped(card, true);
        let mut events = vec![GameEvent::CardFlipped { card, by }];

        match self.first_selected.take() {
            None => {
                self.first_selected = Some(card);
                if by == PlayerSide::B && self.mode == OpponentMode::Computer {
                    self.scheduler
                        .schedule(OPPONENT_REVEAL_DELAY, PendingTask::OpponentTurn);
                }
            }
            Some(first) => self.resolve_turn(first, card, by, &mut events),
        }

        events
    }

    fn resolve_turn(
        &mut self,
        first: CardId,
        second: CardId,
        by: PlayerSide,
        events: &mut Vec<GameEvent>,
    ) {
        if first.pair == second.pair {
            self.deck.mark_matched(first);
            self.deck.mark_matched(second);
            self.scores.add_point(by);
            events.push(GameEvent::MatchClaimed {
                pair: first.pair,
                by,
            });
            self.scheduler.schedule(END_CHECK_DELAY, PendingTask::EndCheck);
            // A match keeps the turn; the machine starts a fresh cycle.
            if by == PlayerSide::B && self.mode == OpponentMode::Computer {
                self.scheduler
                    .schedule(OPPONENT_THINK_DELAY, PendingTask::OpponentTurn);
            }
        } else {
            self.resolving = true;
            events.push(GameEvent::Mismatch { first, second, by });
            self.scheduler
                .schedule(FLIP_BACK_DELAY, PendingTask::FlipBack { first, second });
        }
    }

    fn run_task(&mut self, task: PendingTask, events: &mut Vec<GameEvent>) {
        match task {
            PendingTask::FlipBack { first, second } => {
                // Flips back exactly the two ids captured when the
                // mismatch resolved, not whatever is selected now.
                self.deck.set_flipped(first, false);
                self.deck.set_flipped(second, false);
                self.resolving = false;
                self.current = self.current.other();
                events.push(GameEvent::CardsFlippedBack { first, second });
                events.push(GameEvent::TurnChanged { now: self.current });
                if self.mode == OpponentMode::Computer && self.current == PlayerSide::B {
                    self.scheduler
                        .schedule(OPPONENT_THINK_DELAY, PendingTask::OpponentTurn);
                }
            }
            PendingTask::EndCheck => {
                if self.status == GameStatus::InProgress
                    && self.scores.total() as usize == self.size.pair_count()
                {
                    self.status = GameStatus::Ended;
                    let result = self.winner();
                    self.ladder.record(result);
                    events.push(GameEvent::GameEnded { result });
                }
            }
            PendingTask::OpponentTurn => {
                if self.status == GameStatus::InProgress
                    && self.mode == OpponentMode::Computer
                    && self.current == PlayerSide::B
                    && !self.resolving
                {
                    events.push(GameEvent::OpponentToMove);
                }
            }
        }
    }

    fn winner(&self) -> GameResult {
        use std::cmp::Ordering;
        match self
            .scores
            .score(PlayerSide::A)
            .cmp(&self.scores.score(PlayerSide::B))
        {
            Ordering::Greater => GameResult::PlayerAWins,
            Ordering::Equal => GameResult::Tie,
            Ordering::Less => match self.mode {
                OpponentMode::User => GameResult::PlayerBWins,
                OpponentMode::Computer => GameResult::ComputerWins,
            },
        }
    }
}
