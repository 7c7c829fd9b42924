use holdem_engine::table::{PlayerAction, Table};

fn fold_to_a_winner(t: &mut Table) {
    while !t.is_hand_over() {
        let seat = t.current_player();
        assert!(t.execute_action(seat, PlayerAction::Fold, 0));
    }
}

#[test]
fn dealer_button_moves_one_seat_per_hand() {
    let mut t = Table::with_seed(10, 20, 17);
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        t.add_player(name, 10_000, false);
    }

    let mut seen = Vec::new();
    for _ in 0..8 {
        t.start_new_hand();
        seen.push(t.dealer_position());
        fold_to_a_winner(&mut t);
    }
    // No bust-outs at these stacks, so the button walks 1,2,3,0,1,...
    for w in seen.windows(2) {
        assert_eq!(w[1], (w[0] + 1) % 4);
    }
}

#[test]
fn blinds_follow_the_button() {
    let mut t = Table::with_seed(10, 20, 17);
    for name in ["Alice", "Bob", "Carol"] {
        t.add_player(name, 10_000, false);
    }

    for _ in 0..6 {
        t.start_new_hand();
        let n = t.players().len();
        let sb = (t.dealer_position() + 1) % n;
        let bb = (t.dealer_position() + 2) % n;
        assert_eq!(t.players()[sb].current_bet(), 10);
        assert_eq!(t.players()[bb].current_bet(), 20);
        assert_eq!(t.players()[t.dealer_position()].current_bet(), 0);
        fold_to_a_winner(&mut t);
    }
}

#[test]
fn positions_stay_dense_across_many_hands() {
    let mut t = Table::with_seed(5, 10, 23);
    t.add_player("Alice", 500, false);
    t.add_player("Bob", 500, false);
    t.add_player("Carol", 500, false);

    for _ in 0..10 {
        t.start_new_hand();
        assert!(t.dealer_position() < t.players().len());
        for (i, p) in t.players().iter().enumerate() {
            assert_eq!(p.position(), i);
        }
        fold_to_a_winner(&mut t);
    }
}

#[test]
fn heads_up_roles_alternate_every_hand() {
    let mut t = Table::with_seed(10, 20, 31);
    t.add_player("Alice", 5_000, false);
    t.add_player("Bob", 5_000, false);

    let mut dealers = Vec::new();
    for _ in 0..4 {
        t.start_new_hand();
        dealers.push(t.dealer_position());
        // Dealer posts the small blind and the other seat acts first.
        let d = t.dealer_position();
        assert_eq!(t.players()[d].current_bet(), 10);
        assert_eq!(t.current_player(), (d + 1) % 2);
        fold_to_a_winner(&mut t);
    }
    assert_eq!(dealers, vec![1, 0, 1, 0]);
}
