//! Side pot settlement.

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::{PlayerId, Seats};

/// A pot tier only players who reached it can win.
///
/// A tier's threshold is the sum of `bet_size` over it and every tier before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePot {
    /// Contribution each contestant made to this tier, above the previous one.
    pub bet_size: usize,
    /// Chips in this tier, including money from folded players.
    pub pot_size: usize,
    /// Players still in the hand who can win this tier.
    pub contestors: Vec<PlayerId>,
}

/// Reporting view of a [`SidePot`] with nicknames in place of IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotNotation {
    /// Contribution each contestant made to this tier.
    pub bet_size: usize,
    /// Chips in this tier.
    pub pot_size: usize,
    /// Nicknames of the contestants.
    pub players: Vec<String>,
}

impl SidePot {
    const fn new(bet_size: usize) -> Self {
        Self {
            bet_size,
            pot_size: 0,
            contestors: Vec::new(),
        }
    }

    /// Returns the pot with contestant nicknames for display.
    #[must_use]
    pub fn notation(&self, seats: &Seats) -> PotNotation {
        PotNotation {
            bet_size: self.bet_size,
            pot_size: self.pot_size,
            players: self
                .contestors
                .iter()
                .filter_map(|&id| seats.get(id))
                .map(|player| player.nickname.clone())
                .collect(),
        }
    }
}

/// Splits the money committed by `ids` into side pots.
///
/// Each player's dark bet counts toward their contribution. Pots come out
/// lowest tier first: every `bet_size` after the first is positive, so the
/// running thresholds strictly increase, and every pot's contestants are a
/// subset of the previous pot's. Folded players fund the pots they reached but never
/// contest them; their money above the last active contribution goes to the
/// top pot. The sum of all `pot_size` equals everything committed by `ids`.
///
/// Player records are not modified.
///
/// # Example
///
/// ```
/// use pkrs::{Seats, create_pots};
///
/// let mut seats = Seats::new();
/// let a = seats.join("a");
/// let b = seats.join("b");
/// seats[a].bet_placed = 100;
/// seats[b].bet_placed = 40;
/// seats[b].is_all_in = true;
///
/// let pots = create_pots(&seats, &[a, b]);
/// assert_eq!(pots[0].pot_size, 80);
/// assert_eq!(pots[0].contestors, [b, a]);
/// assert_eq!(pots[1].pot_size, 60);
/// assert_eq!(pots[1].contestors, [a]);
/// ```
#[must_use]
pub fn create_pots(seats: &Seats, ids: &[PlayerId]) -> Vec<SidePot> {
    let mut entries: Vec<(PlayerId, usize, bool)> = ids
        .iter()
        .filter_map(|&id| {
            seats
                .get(id)
                .map(|player| (id, player.committed(), player.still_active))
        })
        .collect();
    // Stable, so equal contributions keep seating order.
    entries.sort_by_key(|&(_, committed, _)| committed);

    let mut side_pots: Vec<SidePot> = Vec::new();
    // Folded money waiting for the next pot.
    let mut excess_cash = 0;

    for (id, committed, still_active) in entries {
        let mut remaining = committed;
        for side_pot in &mut side_pots {
            remaining -= side_pot.bet_size;
            side_pot.pot_size += side_pot.bet_size;
            if still_active {
                side_pot.contestors.push(id);
            }
        }

        if !still_active {
            excess_cash += remaining;
            continue;
        }

        if remaining > 0 {
            let mut side_pot = SidePot::new(remaining);
            side_pot.pot_size = remaining + excess_cash;
            side_pot.contestors.push(id);
            side_pots.push(side_pot);
            excess_cash = 0;
        }
    }

    if excess_cash > 0 {
        match side_pots.last_mut() {
            Some(top) => top.pot_size += excess_cash,
            None => {
                // Every active player is in for nothing.
                let mut side_pot = SidePot::new(0);
                side_pot.pot_size = excess_cash;
                side_pot.contestors = ids
                    .iter()
                    .copied()
                    .filter(|&id| seats.get(id).is_some_and(|player| player.still_active))
                    .collect();
                side_pots.push(side_pot);
            }
        }
    }

    side_pots
}
