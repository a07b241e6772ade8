use core::fmt;

/// Outcome of one finished game, labelled the way the statistics
/// overlay shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    PlayerAWins,
    PlayerBWins,
    ComputerWins,
    Tie,
}

impl GameResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::PlayerAWins => "Player A wins",
            GameResult::PlayerBWins => "Player B wins",
            GameResult::ComputerWins => "Computer wins",
            GameResult::Tie => "Tie",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded most-recent-first history of game outcomes. Lives for the
/// whole session and is lost on reload.
#[derive(Debug, Clone, Default)]
pub struct Ladder {
    entries: Vec<GameResult>,
}

impl Ladder {
    pub const MAX_ENTRIES: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        self.entries.insert(0, result);
        self.entries.truncate(Self::MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[GameResult] {
        &self.entries
    }

    pub fn latest(&self) -> Option<GameResult> {
        self.entries.first().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
