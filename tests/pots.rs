//! Side pot settlement tests.

use pkrs::{PlayerId, Seats, SidePot, create_pots};

/// Seats players as `(name, bet_placed, dark_bet, still_active, is_all_in)`.
fn seat(rows: &[(&str, usize, usize, bool, bool)]) -> (Seats, Vec<PlayerId>) {
    let mut seats = Seats::new();
    for &(name, bet, dark, active, all_in) in rows {
        let id = seats.join(name);
        let player = &mut seats[id];
        player.bet_placed = bet;
        player.dark_bet = dark;
        player.still_active = active;
        player.is_all_in = all_in;
    }
    let ids = seats.ids();
    (seats, ids)
}

fn total(pots: &[SidePot]) -> usize {
    pots.iter().map(|pot| pot.pot_size).sum()
}

#[test]
fn folded_raiser_funds_both_pots() {
    let (seats, ids) = seat(&[
        ("a", 100, 0, false, false),
        ("b", 50, 0, true, true),
        ("c", 150, 0, true, false),
    ]);
    let [_, b, c] = [ids[0], ids[1], ids[2]];

    let pots = create_pots(&seats, &ids);

    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].bet_size, 50);
    assert_eq!(pots[0].pot_size, 150);
    assert_eq!(pots[0].contestors, [b, c]);
    assert_eq!(pots[1].bet_size, 100);
    assert_eq!(pots[1].pot_size, 150);
    assert_eq!(pots[1].contestors, [c]);
    assert_eq!(total(&pots), 300);
}

#[test]
fn dark_bets_count_toward_contributions() {
    let (seats, ids) = seat(&[
        ("sb", 8, 1, true, false),
        ("bb", 8, 2, true, false),
        ("btn", 10, 0, true, false),
    ]);

    let pots = create_pots(&seats, &ids);

    assert_eq!(pots.len(), 2);
    assert_eq!((pots[0].bet_size, pots[0].pot_size), (9, 27));
    assert_eq!(pots[0].contestors, [ids[0], ids[1], ids[2]]);
    assert_eq!((pots[1].bet_size, pots[1].pot_size), (1, 2));
    assert_eq!(pots[1].contestors, [ids[1], ids[2]]);
    // bet_size is the step above the previous tier: thresholds 9 then 10.
    assert_eq!(pots[0].bet_size + pots[1].bet_size, 10);
    assert_eq!(total(&pots), seats.total_committed());
}

#[test]
fn money_folded_above_every_caller_joins_the_top_pot() {
    let (seats, ids) = seat(&[("a", 100, 0, false, false), ("b", 50, 0, true, true)]);

    let pots = create_pots(&seats, &ids);

    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].bet_size, 50);
    assert_eq!(pots[0].pot_size, 150);
    assert_eq!(pots[0].contestors, [ids[1]]);
}

#[test]
fn blinds_folded_to_a_player_who_put_in_nothing() {
    let (seats, ids) = seat(&[
        ("sb", 0, 1, false, false),
        ("bb", 0, 2, false, false),
        ("btn", 0, 0, true, false),
    ]);

    let pots = create_pots(&seats, &ids);

    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].bet_size, 0);
    assert_eq!(pots[0].pot_size, 3);
    assert_eq!(pots[0].contestors, [ids[2]]);
}

#[test]
fn nothing_committed_makes_no_pots() {
    let (seats, ids) = seat(&[("a", 0, 0, true, false), ("b", 0, 0, true, false)]);
    assert!(create_pots(&seats, &ids).is_empty());
}

#[test]
fn multiway_all_ins_nest_contestants() {
    let (seats, ids) = seat(&[
        ("a", 500, 0, true, false),
        ("b", 120, 0, true, true),
        ("c", 300, 0, false, false),
        ("d", 40, 0, true, true),
        ("e", 500, 0, true, false),
        ("f", 120, 0, true, true),
    ]);

    let pots = create_pots(&seats, &ids);

    let levels: Vec<usize> = pots
        .iter()
        .scan(0, |level, pot| {
            *level += pot.bet_size;
            Some(*level)
        })
        .collect();
    assert_eq!(levels, [40, 120, 500]);
    assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(total(&pots), seats.total_committed());

    for pair in pots.windows(2) {
        assert!(
            pair[1]
                .contestors
                .iter()
                .all(|id| pair[0].contestors.contains(id))
        );
    }
    for pot in &pots {
        assert!(pot.contestors.iter().all(|&id| seats[id].still_active));
    }
    assert_eq!(pots[0].contestors.len(), 5);
    assert_eq!(pots[2].contestors, [ids[0], ids[4]]);
    // c folded at 300: 40 + 80 + 180 across the tiers.
    assert_eq!(pots[2].pot_size, 380 * 2 + 180);
}

#[test]
fn settlement_leaves_players_untouched() {
    let (seats, ids) = seat(&[("a", 70, 5, true, false), ("b", 30, 5, true, true)]);
    let before = seats.clone();

    let _ = create_pots(&seats, &ids);

    for id in ids {
        assert_eq!(seats[id], before[id]);
    }
}

#[test]
fn notation_names_the_contestants() {
    let (seats, ids) = seat(&[("alice", 20, 0, true, false), ("bob", 20, 0, true, false)]);

    let pots = create_pots(&seats, &ids);
    let notation = pots[0].notation(&seats);

    assert_eq!(notation.bet_size, 20);
    assert_eq!(notation.pot_size, 40);
    assert_eq!(notation.players, ["alice", "bob"]);
}
