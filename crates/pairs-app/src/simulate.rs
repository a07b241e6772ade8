use crate::controller::GameController;
use anyhow::{Result, bail};
use pairs_core::game::session::{GameStatus, OpponentMode};
use pairs_core::model::card::CardId;
use pairs_core::model::deck::DeckSize;
use pairs_core::model::ladder::GameResult;
use pairs_core::model::player::PlayerSide;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{Level, event};

/// Upper bound on simulation steps per game. A correct session always
/// terminates far below this; hitting it means a stalled state machine.
const MAX_STEPS: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    pub result: GameResult,
    pub score_a: u32,
    pub score_b: u32,
    pub steps: u32,
}

/// Plays one game to completion with a random clicker standing in for
/// the human side(s). Pending delayed transitions are always drained
/// before the next click, so the pacing matches real play.
pub fn run_game(
    controller: &mut GameController,
    size: DeckSize,
    mode: OpponentMode,
    click_seed: u64,
) -> Result<SimulationReport> {
    let mut rng = StdRng::seed_from_u64(click_seed);
    controller.start_game(size, mode)?;

    let mut steps = 0u32;
    while controller.session().status() == GameStatus::InProgress {
        steps += 1;
        if steps > MAX_STEPS {
            bail!("simulation stalled after {MAX_STEPS} steps");
        }
        match controller.session().next_transition_in() {
            Some(wait) => {
                controller.tick(wait);
            }
            None => {
                let Some(card) = random_face_down(controller, &mut rng) else {
                    bail!("no transition pending and no card left to click");
                };
                controller.click(card);
            }
        }
    }

    let Some(result) = controller.session().ladder().latest() else {
        bail!("ended game recorded no result");
    };
    let scores = controller.session().scores();
    let report = SimulationReport {
        result,
        score_a: scores.score(PlayerSide::A),
        score_b: scores.score(PlayerSide::B),
        steps,
    };
    event!(
        Level::INFO,
        result = report.result.as_str(),
        score_a = report.score_a,
        score_b = report.score_b,
        steps = report.steps,
        "game finished"
    );
    Ok(report)
}

fn random_face_down(controller: &GameController, rng: &mut StdRng) -> Option<CardId> {
    let candidates: Vec<CardId> = controller
        .session()
        .deck()
        .cards()
        .iter()
        .filter(|card| !card.is_flipped())
        .map(|card| card.id())
        .collect();
    candidates.choose(rng).copied()
}
