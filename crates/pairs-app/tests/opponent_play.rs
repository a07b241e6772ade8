use pairs_app::GameController;
use pairs_core::game::session::{
    FLIP_BACK_DELAY, GameEvent, OPPONENT_REVEAL_DELAY, OPPONENT_THINK_DELAY, OpponentMode,
};
use pairs_core::model::catalog::Catalog;
use pairs_core::model::deck::DeckSize;
use pairs_core::model::player::PlayerSide;

fn handed_to_computer(seed: u64) -> GameController {
    let mut controller = GameController::with_seed(Catalog::builtin(), seed);
    controller
        .start_game(DeckSize::Eighteen, OpponentMode::Computer)
        .unwrap();

    let first = controller.session().deck().cards()[0].id();
    let second = controller
        .session()
        .deck()
        .cards()
        .iter()
        .find(|card| card.pair() != first.pair)
        .unwrap()
        .id();
    controller.click(first);
    controller.click(second);
    controller.tick(FLIP_BACK_DELAY);
    assert_eq!(controller.session().current_player(), PlayerSide::B);
    controller
}

#[test]
fn computer_completes_a_whole_turn() {
    let mut controller = handed_to_computer(42);

    let mut events = controller.tick(OPPONENT_THINK_DELAY);
    events.extend(controller.tick(OPPONENT_REVEAL_DELAY));

    let machine_flips = events
        .iter()
        .filter(|event| {
            matches!(
                event,
                GameEvent::CardFlipped {
                    by: PlayerSide::B,
                    ..
                }
            )
        })
        .count();
    assert_eq!(machine_flips, 2);
    let resolved = events.iter().any(|event| {
        matches!(
            event,
            GameEvent::MatchClaimed { .. } | GameEvent::Mismatch { .. }
        )
    });
    assert!(resolved, "two flips must resolve the turn: {events:?}");
}

#[test]
fn computer_turn_ends_back_at_the_human_on_a_miss() {
    let mut controller = handed_to_computer(7);

    controller.tick(OPPONENT_THINK_DELAY);
    let events = controller.tick(OPPONENT_REVEAL_DELAY);
    if events
        .iter()
        .any(|event| matches!(event, GameEvent::Mismatch { .. }))
    {
        let events = controller.tick(FLIP_BACK_DELAY);
        assert!(events.contains(&GameEvent::TurnChanged {
            now: PlayerSide::A
        }));
        assert_eq!(controller.session().current_player(), PlayerSide::A);
    } else {
        // Lucky probe; the machine keeps the turn instead.
        assert_eq!(controller.session().current_player(), PlayerSide::B);
        assert_eq!(controller.session().scores().score(PlayerSide::B), 1);
    }
}

#[test]
fn computer_remembers_what_the_human_revealed() {
    let mut controller = GameController::with_seed(Catalog::builtin(), 11);
    controller
        .start_game(DeckSize::Eighteen, OpponentMode::Computer)
        .unwrap();

    // A mismatch shows the machine two faces it has never probed.
    let first = controller.session().deck().cards()[0].id();
    let second = controller
        .session()
        .deck()
        .cards()
        .iter()
        .find(|card| card.pair() != first.pair)
        .unwrap()
        .id();
    controller.click(first);
    controller.click(second);
    assert!(controller.tracker().knows(first));
    assert!(controller.tracker().knows(second));
    controller.tick(FLIP_BACK_DELAY);
    assert!(controller.tracker().knows(first));
}
