use crate::error::ActionError;
use crate::player::{PlayerId, Seats};

use super::state::{Pending, Turn};
use super::{Rotator, player};

impl Rotator {
    /// Action has come back to `id`. Closes the betting if `id` made the
    /// last unchallenged bet, granting one more lap when a short all-in
    /// capped it.
    ///
    /// Returns `true` once the round is finished.
    fn finish_betting(&mut self, id: PlayerId) -> bool {
        if self.last_bettor != Some(id) {
            return false;
        }

        self.progress.closed = true;
        // Everyone after the cap bettor already faced the capped price.
        if self.cap_bettor.is_some_and(|cap| cap != id) && !self.progress.reopened {
            log::debug!("action closed under a cap, reopening for one lap");
            self.progress.reopened = true;
            false
        } else {
            self.finish();
            true
        }
    }

    /// Advances to the next player who must act and suspends on them.
    ///
    /// Returns `Ok(None)` once the round has finished. The driver must update
    /// the returned player's record and call [`resume`](Self::resume) before
    /// asking for another turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the previous turn has not been resumed, a seat is
    /// missing from `seats`, or the capping bet has dropped to the price.
    pub fn next_turn(&mut self, seats: &Seats) -> Result<Option<Turn>, ActionError> {
        if self.pending.is_some() {
            return Err(ActionError::TurnPending);
        }

        if !self.progress.finished && seats.betting_count(&self.order) == 0 {
            log::debug!("no player left who can act");
            self.finish();
        }

        while !self.progress.finished {
            let id = self.order[self.cursor];
            self.cursor = (self.cursor + 1) % self.order.len();

            if self.progress.in_cap_lap() && self.cap_bettor == Some(id) {
                // The lap ends at the cap: seats past it already called it.
                log::debug!("cap lap back at {id}");
                self.finish();
                break;
            }

            let seat = player(seats, id)?;
            if !seat.still_active {
                log::trace!("skipping folded {seat}");
                continue;
            }

            if seat.is_all_in {
                if !self.progress.in_cap_lap() {
                    self.finish_betting(id);
                }
                continue;
            }

            if self.last_bettor.is_none() {
                // First to act marks where a full lap ends.
                self.last_bettor = Some(id);
            } else if self.finish_betting(id) {
                break;
            }

            if self.progress.in_cap_lap() {
                let cap = self.cap_price(seats)?;
                self.current_bet = cap;
                return Ok(Some(self.suspend(id, true, true)));
            }

            self.current_bet = match self.cap_bettor {
                Some(_) => {
                    let cap = self.cap_price(seats)?;
                    if cap <= self.last_bet {
                        return Err(ActionError::CapBelowPrice);
                    }
                    cap
                }
                None => self.last_bet,
            };

            let capped = self.one_betting_player(seats);
            return Ok(Some(self.suspend(id, false, capped)));
        }

        Ok(None)
    }

    fn cap_price(&self, seats: &Seats) -> Result<usize, ActionError> {
        match self.cap_bettor {
            Some(cap) => Ok(player(seats, cap)?.bet_placed),
            None => Ok(self.last_bet),
        }
    }

    fn suspend(&mut self, id: PlayerId, cap_lap: bool, capped: bool) -> Turn {
        self.pending = Some(Pending {
            player: id,
            cap_lap,
            capped,
        });

        let turn = Turn {
            player: id,
            capped,
            to_call: self.current_bet,
            min_raise: self.min_raise(),
        };
        log::debug!(
            "{} to act: call {} min raise {} capped {}",
            id,
            turn.to_call,
            turn.min_raise,
            capped
        );
        turn
    }
}
