use holdem_engine::table::{GamePhase, PlayerAction, Table};

fn three_handed(seed: u64) -> Table {
    let mut t = Table::with_seed(10, 20, seed);
    t.add_player("Alice", 1000, false);
    t.add_player("Bob", 1000, false);
    t.add_player("Carol", 1000, false);
    t.start_new_hand();
    t
}

fn call_or_check(t: &mut Table) {
    let seat = t.current_player();
    let actions = t.get_valid_actions(seat);
    let action = if actions.contains(&PlayerAction::Call) {
        PlayerAction::Call
    } else {
        PlayerAction::Check
    };
    assert!(t.execute_action(seat, action, 0));
}

#[test]
fn calls_around_complete_the_preflop_round() {
    let mut t = three_handed(7);
    assert_eq!(t.phase(), GamePhase::PreFlop);
    assert!(!t.betting_round_complete());

    for _ in 0..3 {
        call_or_check(&mut t);
    }
    assert!(t.betting_round_complete());
    assert_eq!(t.pot(), 60);
}

#[test]
fn new_street_resets_bets_and_first_actor() {
    let mut t = three_handed(7);
    for _ in 0..3 {
        call_or_check(&mut t);
    }
    t.advance_phase();

    assert_eq!(t.phase(), GamePhase::Flop);
    assert_eq!(t.current_bet(), 0);
    assert!(t.players().iter().all(|p| p.current_bet() == 0));
    assert_eq!(t.current_player(), (t.dealer_position() + 1) % 3);
    assert!(!t.betting_round_complete());
    assert_eq!(t.pot(), 60, "street change must not touch the pot");
}

#[test]
fn raise_reopens_the_round() {
    let mut t = three_handed(7);
    for _ in 0..3 {
        call_or_check(&mut t);
    }
    t.advance_phase();

    // First player bets, so the remaining two owe a call again.
    let seat = t.current_player();
    assert!(t.execute_action(seat, PlayerAction::Raise, 40));
    assert!(!t.betting_round_complete());
    assert_eq!(t.current_bet(), 40);

    call_or_check(&mut t);
    assert!(!t.betting_round_complete());
    call_or_check(&mut t);
    assert!(t.betting_round_complete());
    assert_eq!(t.pot(), 180);
}

#[test]
fn check_only_street_completes_after_everyone_checks() {
    let mut t = three_handed(7);
    for _ in 0..3 {
        call_or_check(&mut t);
    }
    t.advance_phase();

    for i in 0..3 {
        let seat = t.current_player();
        let actions = t.get_valid_actions(seat);
        assert!(actions.contains(&PlayerAction::Check));
        assert!(!actions.contains(&PlayerAction::Call));
        assert!(t.execute_action(seat, PlayerAction::Check, 0));
        if i < 2 {
            assert!(!t.betting_round_complete());
        }
    }
    assert!(t.betting_round_complete());
}

#[test]
fn total_chips_are_conserved_across_a_full_hand() {
    let mut t = three_handed(11);
    let total = |t: &Table| -> u64 {
        t.players().iter().map(|p| p.chips()).sum::<u64>() + t.pot()
    };
    assert_eq!(total(&t), 3000);

    while !t.is_hand_over() {
        if t.betting_round_complete() {
            t.advance_phase();
        } else {
            call_or_check(&mut t);
        }
        assert_eq!(total(&t), 3000);
    }
    assert_eq!(t.phase(), GamePhase::Finished);
    assert_eq!(t.pot(), 0);
    assert_eq!(total(&t), 3000);
}
