use core::cmp::Ordering;

use crate::error::ActionError;
use crate::player::{PlayerId, Seats};

use super::state::{Outcome, Pending};
use super::{Rotator, player, player_mut};

impl Rotator {
    /// Classifies the pending player's new bet and moves the round on.
    ///
    /// Before resuming, the driver sets the acting player's `bet_placed` to
    /// their new total for the round, and `is_all_in` / `still_active` as
    /// appropriate.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is pending or the bet fits no legal action.
    /// On error the turn stays pending and nothing is changed, so the driver
    /// can correct the record and resume again.
    pub fn resume(&mut self, seats: &mut Seats) -> Result<Outcome, ActionError> {
        let pending = self.pending.ok_or(ActionError::NoPendingTurn)?;
        let outcome = if pending.cap_lap {
            self.resume_cap_lap(seats, pending)?
        } else {
            self.resume_betting(seats, pending)?
        };
        self.pending = None;

        log::debug!("{} -> {outcome:?}", pending.player);
        Ok(outcome)
    }

    /// Only the capped amount may be called. Anything else from a player
    /// who is not all-in folds, and an all-in over the cap is rejected.
    fn resume_cap_lap(&mut self, seats: &mut Seats, pending: Pending) -> Result<Outcome, ActionError> {
        let current_bet = self.current_bet;
        let last_bet = self.last_bet;
        let seat = player_mut(seats, pending.player)?;

        if seat.is_all_in {
            let bet = seat.bet_placed;
            return match bet.cmp(&current_bet) {
                Ordering::Equal => Ok(Outcome::Call),
                Ordering::Less => Ok(Outcome::ShortAllIn),
                Ordering::Greater => {
                    log::warn!(
                        "{} went all-in for {bet} over the cap of {current_bet}",
                        pending.player
                    );
                    Err(ActionError::InvalidBet {
                        bet,
                        last_bet,
                        current_bet,
                    })
                }
            };
        }
        if seat.still_active && seat.bet_placed == current_bet {
            return Ok(Outcome::Call);
        }

        seat.still_active = false;
        self.check_one_player(seats);
        Ok(Outcome::Fold)
    }

    fn resume_betting(&mut self, seats: &mut Seats, pending: Pending) -> Result<Outcome, ActionError> {
        let id = pending.player;
        let seat = player(seats, id)?;
        let bet = seat.bet_placed;

        if bet < self.last_bet || !seat.still_active {
            let outcome = self.deactivate(seats, id)?;
            self.check_one_player(seats);
            return Ok(outcome);
        }

        if bet == self.current_bet {
            return Ok(Outcome::Call);
        }

        if bet > self.last_bet && bet >= self.min_raise() {
            // Full raise, action re-opens for everyone.
            self.cap_bettor = None;
            self.last_raise = bet - self.last_bet;
            self.last_bet = bet;
            self.last_bettor = Some(id);
            return Ok(Outcome::Raise);
        }

        if bet > self.last_bet && (self.cap_bettor.is_none() || bet > self.current_bet) {
            // Anything short of a full raise is an all-in that caps betting.
            player_mut(seats, id)?.is_all_in = true;
            self.cap_bettor = Some(id);
            return Ok(Outcome::UnderRaiseAllIn);
        }

        // Under an active cap the bet reached the old price but not the cap.
        // Only a player who ran out of chips can stop there.
        if seat.is_all_in {
            return Ok(Outcome::ShortAllIn);
        }

        log::warn!(
            "{id} committed {bet} against a price of {} (capped at {})",
            self.last_bet,
            self.current_bet
        );
        Err(ActionError::InvalidBet {
            bet,
            last_bet: self.last_bet,
            current_bet: self.current_bet,
        })
    }

    /// Folds the player. An all-in player short of the price stays in.
    fn deactivate(&mut self, seats: &mut Seats, id: PlayerId) -> Result<Outcome, ActionError> {
        let seat = player_mut(seats, id)?;
        if seat.is_all_in {
            if !seat.still_active {
                log::warn!("{id} is all-in and cannot fold, keeping them in");
                seat.still_active = true;
            }
            return Ok(Outcome::ShortAllIn);
        }

        seat.still_active = false;
        if self.last_bettor == Some(id) {
            self.last_bettor = None;
        }
        Ok(Outcome::Fold)
    }

    fn check_one_player(&mut self, seats: &Seats) {
        if self.active_count(seats) < 2 {
            log::debug!("one player left");
            self.finish();
        }
    }
}
