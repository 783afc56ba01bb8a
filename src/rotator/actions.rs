use crate::error::ActionError;
use crate::player::{Player, PlayerId, Seats};

use super::state::{Outcome, Pending, Turn};
use super::{Rotator, player, player_mut};

impl Rotator {
    fn ensure_player_turn(&self, id: PlayerId) -> Result<Pending, ActionError> {
        if self.progress.finished {
            return Err(ActionError::RoundFinished);
        }

        let pending = self.pending.ok_or(ActionError::NoPendingTurn)?;
        if pending.player != id {
            return Err(ActionError::NotYourTurn);
        }

        Ok(pending)
    }

    fn ensure_not_below_committed(seats: &Seats, id: PlayerId, total: usize) -> Result<(), ActionError> {
        if total < player(seats, id)?.bet_placed {
            return Err(ActionError::BetBelowCommitted);
        }
        Ok(())
    }

    /// Player action: Fold.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn fold(&mut self, seats: &mut Seats, id: PlayerId) -> Result<Outcome, ActionError> {
        self.ensure_player_turn(id)?;

        player_mut(seats, id)?.still_active = false;
        self.resume(seats)
    }

    /// Player action: Check, or call the current price.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or the player already
    /// committed more than the price (which cannot happen when the rotator is
    /// driven through these actions).
    pub fn check_or_call(&mut self, seats: &mut Seats, id: PlayerId) -> Result<Outcome, ActionError> {
        self.ensure_player_turn(id)?;

        let price = self.call();
        Self::ensure_not_below_committed(seats, id, price)?;

        player_mut(seats, id)?.bet_placed = price;
        self.resume(seats)
    }

    /// Player action: Raise the player's total for the round to `total`.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, betting is capped, or
    /// `total` is below the minimum raise.
    pub fn raise_to(
        &mut self,
        seats: &mut Seats,
        id: PlayerId,
        total: usize,
    ) -> Result<Outcome, ActionError> {
        let pending = self.ensure_player_turn(id)?;

        if pending.capped {
            return Err(ActionError::RaiseNotAllowed);
        }

        let min_raise = self.min_raise();
        if total < min_raise {
            return Err(ActionError::RaiseTooSmall { min_raise });
        }
        Self::ensure_not_below_committed(seats, id, total)?;

        player_mut(seats, id)?.bet_placed = total;
        self.resume(seats)
    }

    /// Player action: Go all-in, bringing the total for the round to `total`.
    ///
    /// An all-in at or above the minimum raise counts as a full raise; one
    /// below it caps the betting, and one below the price stays in for what
    /// it covers.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, `total` is below
    /// what the player already committed, or betting is capped and `total`
    /// exceeds the price to call.
    pub fn all_in(
        &mut self,
        seats: &mut Seats,
        id: PlayerId,
        total: usize,
    ) -> Result<Outcome, ActionError> {
        let pending = self.ensure_player_turn(id)?;
        Self::ensure_not_below_committed(seats, id, total)?;

        if pending.capped && total > self.call() {
            return Err(ActionError::RaiseNotAllowed);
        }

        let seat = player_mut(seats, id)?;
        seat.bet_placed = total;
        seat.is_all_in = true;
        self.resume(seats)
    }

    /// Plays the whole round, asking `decide` for every turn.
    ///
    /// `decide` receives the turn and the acting player's record, which it
    /// updates the same way a driver would before [`resume`](Self::resume).
    ///
    /// # Errors
    ///
    /// Stops at the first error from [`next_turn`](Self::next_turn) or
    /// [`resume`](Self::resume).
    pub fn drive<F>(&mut self, seats: &mut Seats, mut decide: F) -> Result<(), ActionError>
    where
        F: FnMut(&Turn, &mut Player),
    {
        while let Some(turn) = self.next_turn(seats)? {
            decide(&turn, player_mut(seats, turn.player)?);
            self.resume(seats)?;
        }
        Ok(())
    }
}
