use super::session::GameSession;
use crate::model::player::PlayerSide;
use serde::{Deserialize, Serialize};

/// One-way export of the scoreboard and statistics surface; consumed by
/// the rendering collaborator and the CLI's `--json` flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub status: String,
    pub current_player: PlayerSide,
    pub scores: [u32; 2],
    pub deck_size: usize,
    pub claimed_pairs: usize,
    pub ladder: Vec<String>,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        SessionSnapshot {
            seed: session.seed(),
            status: session.status().as_str().to_string(),
            current_player: session.current_player(),
            scores: *session.scores().totals(),
            deck_size: session.deck().len(),
            claimed_pairs: session.deck().claimed_pairs(),
            ladder: session
                .ladder()
                .entries()
                .iter()
                .map(|result| result.as_str().to_string())
                .collect(),
        }
    }

    pub fn to_json(session: &GameSession) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
