//! Error types for betting round operations.

use thiserror::Error;

/// Errors that can occur when starting a betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Fewer than two players were seated for the round.
    #[error("a betting round needs at least two players")]
    NotEnoughPlayers,
    /// A seat refers to a player that is not in the arena.
    #[error("player not found")]
    PlayerNotFound,
    /// The same player was seated twice.
    #[error("player is seated more than once")]
    DuplicateSeat,
}

/// Errors that can occur while producing or resuming turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A turn was requested while the previous one has not been resumed.
    #[error("the previous turn has not been resumed")]
    TurnPending,
    /// The round was resumed without a pending turn.
    #[error("no turn is waiting to be resumed")]
    NoPendingTurn,
    /// The round has already finished.
    #[error("the betting round has finished")]
    RoundFinished,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The committed amount fits no legal action.
    #[error("bet of {bet} is neither a call of {current_bet}, a raise over {last_bet} nor a fold")]
    InvalidBet {
        /// Amount the player committed.
        bet: usize,
        /// Price set by the last full bet.
        last_bet: usize,
        /// Price the player had to reach to call.
        current_bet: usize,
    },
    /// The capping all-in no longer exceeds the price to call.
    #[error("capped bet does not exceed the price to call")]
    CapBelowPrice,
    /// Raise is smaller than the minimum legal raise.
    #[error("raise is smaller than the minimum of {min_raise}")]
    RaiseTooSmall {
        /// Smallest legal raise total.
        min_raise: usize,
    },
    /// Only calling or folding is allowed on this turn.
    #[error("betting is capped, only call or fold is allowed")]
    RaiseNotAllowed,
    /// The new total is below what the player already committed.
    #[error("bet is below the amount already committed")]
    BetBelowCommitted,
}

/// Errors that can occur during pot settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The betting round is still in progress.
    #[error("the betting round is still in progress")]
    RoundInProgress,
}
