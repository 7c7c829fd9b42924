use holdem_engine::bot::{BotContext, BotPolicy};
use holdem_engine::table::{GamePhase, PlayerAction, Table};

#[test]
fn default_bot_plays_whole_hands_legally() {
    let mut t = Table::with_seed(10, 20, 12);
    t.fill_with_bots(6);
    t.start_new_hand();

    let mut steps = 0;
    while !t.is_hand_over() && steps < 1000 {
        if t.betting_round_complete() {
            t.advance_phase();
            steps += 1;
            continue;
        }
        let seat = t.current_player();
        let (action, amount) = t.get_bot_action(seat);
        assert!(
            t.execute_action(seat, action, amount),
            "illegal bot action {action:?} ({amount}) at seat {seat}"
        );
        steps += 1;
    }
    assert!(t.is_hand_over(), "hand did not terminate");
    assert_eq!(t.phase(), GamePhase::Finished);
    let total: u64 = t.players().iter().map(|p| p.chips()).sum();
    assert_eq!(total, 6000);
}

#[test]
fn tournaments_end_with_one_funded_player_or_run_forever_capped() {
    let mut t = Table::with_seed(5, 10, 99);
    t.fill_with_bots(4);

    for _ in 0..200 {
        t.start_new_hand();
        if t.phase() == GamePhase::Finished {
            // Fewer than two funded seats remain.
            break;
        }
        while !t.is_hand_over() {
            if t.betting_round_complete() {
                t.advance_phase();
                continue;
            }
            let seat = t.current_player();
            let (action, amount) = t.get_bot_action(seat);
            assert!(t.execute_action(seat, action, amount));
        }
    }
    let total: u64 = t.players().iter().map(|p| p.chips()).sum::<u64>() + t.pot();
    assert_eq!(total, 4000, "chips never leave the table");
}

/// Policy that calls when it can and otherwise checks or folds, for
/// deterministic table-driving from tests.
struct Caller;

impl BotPolicy for Caller {
    fn decide(&mut self, ctx: &BotContext) -> (PlayerAction, u64) {
        for action in [PlayerAction::Call, PlayerAction::Check, PlayerAction::Fold] {
            if ctx.valid_actions.contains(&action) {
                return (action, 0);
            }
        }
        (PlayerAction::Fold, 0)
    }
}

#[test]
fn custom_policies_plug_into_the_table() {
    let mut t = Table::with_seed(10, 20, 4);
    t.set_bot_policy(Box::new(Caller));
    t.add_player("Alice", 1000, false);
    t.add_player("Bob", 1000, false);
    t.start_new_hand();

    while !t.is_hand_over() {
        if t.betting_round_complete() {
            t.advance_phase();
            continue;
        }
        let seat = t.current_player();
        let (action, amount) = t.get_bot_action(seat);
        assert_ne!(action, PlayerAction::Raise, "the caller policy never raises");
        assert!(t.execute_action(seat, action, amount));
    }

    // Pure calling always reaches showdown.
    assert_eq!(t.community_cards().len(), 5);
    assert!(t.last_hand_results()[0].ranking.is_some());
}
