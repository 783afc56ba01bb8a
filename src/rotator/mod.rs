//! Betting round turn rotation and state management.

use alloc::vec::Vec;

use crate::error::{ActionError, RoundError, SettleError};
use crate::options::RoundOptions;
use crate::player::{Player, PlayerId, Seats};
use crate::pot::{self, SidePot};

mod actions;
mod bet;
mod sweep;
pub mod state;

pub use state::{Outcome, RoundPhase, Turn};

use state::{Pending, Progress};

/// Turn-order and legal-action state machine for one betting round.
///
/// The rotator only holds [`PlayerId`]s. The round driver owns the [`Seats`]
/// and lends them in at each step:
///
/// 1. [`next_turn`](Self::next_turn) suspends on the next player who must act.
/// 2. The driver updates that player's record (and no one else's).
/// 3. [`resume`](Self::resume) classifies the new bet.
///
/// Repeat until `next_turn` returns `None`, then settle with
/// [`create_pots`](Self::create_pots).
///
/// # Example
///
/// ```
/// use pkrs::{RoundOptions, Rotator, Seats};
///
/// let mut seats = Seats::new();
/// let a = seats.join("a");
/// let b = seats.join("b");
///
/// let mut rotator = Rotator::new(&seats, [a, b], RoundOptions::default()).unwrap();
/// while let Some(turn) = rotator.next_turn(&seats).unwrap() {
///     rotator.check_or_call(&mut seats, turn.player).unwrap();
/// }
/// assert!(rotator.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct Rotator {
    /// Seating order for the round, first to act first.
    order: Vec<PlayerId>,
    /// Player whose bet defines the price to call.
    last_bettor: Option<PlayerId>,
    /// Price to call set by the last full bet.
    last_bet: usize,
    /// Size of the last full raise increment.
    last_raise: usize,
    /// Player all-in for less than a full raise.
    cap_bettor: Option<PlayerId>,
    /// Price the acting player must reach, including any cap.
    current_bet: usize,
    progress: Progress,
    /// Next seat of the sweep.
    cursor: usize,
    pending: Option<Pending>,
}

impl Rotator {
    /// Creates a rotator for the given seating order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are seated, a seat is not
    /// in `seats`, or a player is seated twice.
    pub fn new<I>(seats: &Seats, order: I, options: RoundOptions) -> Result<Self, RoundError>
    where
        I: IntoIterator<Item = PlayerId>,
    {
        let order: Vec<PlayerId> = order.into_iter().collect();
        if order.len() < 2 {
            return Err(RoundError::NotEnoughPlayers);
        }

        for (i, &id) in order.iter().enumerate() {
            if !seats.contains(id) {
                return Err(RoundError::PlayerNotFound);
            }
            if order[..i].contains(&id) {
                return Err(RoundError::DuplicateSeat);
            }
        }

        Ok(Self {
            order,
            last_bettor: None,
            last_bet: options.bet_size,
            last_raise: options.opening_raise(),
            cap_bettor: None,
            current_bet: options.bet_size,
            progress: Progress::default(),
            cursor: 0,
            pending: None,
        })
    }

    /// Creates a rotator over every seated player in join order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are seated.
    pub fn for_table(seats: &Seats, options: RoundOptions) -> Result<Self, RoundError> {
        Self::new(seats, seats.ids(), options)
    }

    /// Returns the seating order.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Returns the player whose bet currently defines the price.
    #[must_use]
    pub const fn last_bettor(&self) -> Option<PlayerId> {
        self.last_bettor
    }

    /// Returns the price set by the last full bet.
    #[must_use]
    pub const fn last_bet(&self) -> usize {
        self.last_bet
    }

    /// Returns the last full raise increment.
    #[must_use]
    pub const fn last_raise(&self) -> usize {
        self.last_raise
    }

    /// Returns the player capping the betting, if any.
    #[must_use]
    pub const fn cap_bettor(&self) -> Option<PlayerId> {
        self.cap_bettor
    }

    /// Returns the smallest total that counts as a full raise.
    ///
    /// A capping all-in does not reset the raise increment, so while one is
    /// active the increment counts twice.
    #[must_use]
    pub const fn min_raise(&self) -> usize {
        if self.cap_bettor.is_some() {
            self.last_bet + 2 * self.last_raise
        } else {
            self.last_bet + self.last_raise
        }
    }

    /// Returns the total the acting player must reach to call.
    #[must_use]
    pub const fn call(&self) -> usize {
        self.current_bet
    }

    /// Returns the turn waiting to be resumed, if any.
    #[must_use]
    pub fn pending_turn(&self) -> Option<PlayerId> {
        self.pending.map(|pending| pending.player)
    }

    /// Returns whether the round has finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.progress.finished
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        if self.progress.finished {
            RoundPhase::Finished
        } else if self.progress.in_cap_lap() {
            RoundPhase::CapLap
        } else {
            RoundPhase::Betting
        }
    }

    /// Splits the round's money into side pots.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not finished.
    pub fn create_pots(&self, seats: &Seats) -> Result<Vec<SidePot>, SettleError> {
        if !self.progress.finished {
            return Err(SettleError::RoundInProgress);
        }

        let pots = pot::create_pots(seats, &self.order);
        log::info!(
            "settled {} chips into {} pot(s)",
            pots.iter().map(|pot| pot.pot_size).sum::<usize>(),
            pots.len()
        );
        Ok(pots)
    }

    fn finish(&mut self) {
        if !self.progress.finished {
            log::info!("betting round finished at {}", self.last_bet);
        }
        self.progress.finished = true;
    }

    /// Active players left in the round.
    fn active_count(&self, seats: &Seats) -> usize {
        seats.active_count(&self.order)
    }

    /// Whether at most one player is left who could still put chips in.
    fn one_betting_player(&self, seats: &Seats) -> bool {
        seats.betting_count(&self.order) < 2
    }
}

fn player(seats: &Seats, id: PlayerId) -> Result<&Player, ActionError> {
    seats.get(id).ok_or(ActionError::PlayerNotFound)
}

fn player_mut(seats: &mut Seats, id: PlayerId) -> Result<&mut Player, ActionError> {
    seats.get_mut(id).ok_or(ActionError::PlayerNotFound)
}
