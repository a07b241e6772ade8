use pairs_app::GameController;
use pairs_core::game::session::{END_CHECK_DELAY, FLIP_BACK_DELAY, GameEvent, OpponentMode};
use pairs_core::model::card::CardId;
use pairs_core::model::catalog::Catalog;
use pairs_core::model::deck::DeckSize;
use pairs_core::model::ladder::GameResult;
use pairs_core::model::player::PlayerSide;

fn started(mode: OpponentMode) -> GameController {
    let mut controller = GameController::with_seed(Catalog::builtin(), 42);
    controller.start_game(DeckSize::Eighteen, mode).unwrap();
    controller
}

fn unmatched_pair(controller: &GameController) -> (CardId, CardId) {
    let card = controller
        .session()
        .deck()
        .cards()
        .iter()
        .find(|card| !card.is_matched())
        .expect("an unmatched card");
    (card.id(), card.id().partner())
}

fn two_different_pairs(controller: &GameController) -> (CardId, CardId) {
    let first = controller
        .session()
        .deck()
        .cards()
        .iter()
        .find(|card| !card.is_matched())
        .expect("an unmatched card");
    let second = controller
        .session()
        .deck()
        .cards()
        .iter()
        .find(|card| !card.is_matched() && card.pair() != first.pair())
        .expect("a second pair");
    (first.id(), second.id())
}

#[test]
fn match_scores_and_keeps_the_turn() {
    let mut controller = started(OpponentMode::User);
    let (a, b) = unmatched_pair(&controller);
    controller.click(a);
    let events = controller.click(b);
    assert!(
        events
            .iter()
            .any(|event| matches!(event, GameEvent::MatchClaimed { by: PlayerSide::A, .. }))
    );
    assert_eq!(controller.session().current_player(), PlayerSide::A);
    assert_eq!(controller.session().scores().score(PlayerSide::A), 1);
}

#[test]
fn mismatch_switches_player_after_flip_back() {
    let mut controller = started(OpponentMode::User);
    let (a, b) = two_different_pairs(&controller);
    controller.click(a);
    controller.click(b);
    assert_eq!(controller.session().current_player(), PlayerSide::A);

    let events = controller.tick(FLIP_BACK_DELAY);
    assert!(events.contains(&GameEvent::CardsFlippedBack { first: a, second: b }));
    assert!(events.contains(&GameEvent::TurnChanged {
        now: PlayerSide::B
    }));
    assert!(!controller.session().deck().card(a).unwrap().is_flipped());
}

#[test]
fn finished_game_prepends_to_the_ladder() {
    let mut controller = started(OpponentMode::User);
    for _ in 0..9 {
        let (a, b) = unmatched_pair(&controller);
        controller.click(a);
        controller.click(b);
    }
    let events = controller.tick(END_CHECK_DELAY);
    assert!(events.contains(&GameEvent::GameEnded {
        result: GameResult::PlayerAWins
    }));
    assert_eq!(
        controller.session().ladder().latest(),
        Some(GameResult::PlayerAWins)
    );

    // Another sweep lands in front of the first result.
    controller
        .start_game(DeckSize::Eighteen, OpponentMode::User)
        .unwrap();
    for _ in 0..9 {
        let (a, b) = unmatched_pair(&controller);
        controller.click(a);
        controller.click(b);
    }
    controller.tick(END_CHECK_DELAY);
    assert_eq!(controller.session().ladder().len(), 2);
    assert_eq!(
        controller.session().ladder().entries()[0],
        GameResult::PlayerAWins
    );
}
