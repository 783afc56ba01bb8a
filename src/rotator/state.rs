//! Turn and round state types.

use crate::player::PlayerId;

/// Betting round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Players may call, raise or fold.
    Betting,
    /// Action closed under an all-in cap. Each remaining player gets one
    /// more chance to call the cap or fold.
    CapLap,
    /// No one else acts this round.
    Finished,
}

/// A request for one player to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The acting player.
    pub player: PlayerId,
    /// Only calling or folding is legal.
    pub capped: bool,
    /// Total the player must have committed to call.
    pub to_call: usize,
    /// Smallest total that counts as a full raise.
    pub min_raise: usize,
}

/// How a resumed turn was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player folded and can no longer win.
    Fold,
    /// Player matched the price to call.
    Call,
    /// Player made a full raise and re-opened action.
    Raise,
    /// Player went all-in for less than a full raise, capping the betting.
    UnderRaiseAllIn,
    /// Player went all-in without reaching the price to call.
    ShortAllIn,
}

/// Progress through the "one more lap to call the cap" protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Progress {
    /// Action came back round to the last bettor unchallenged.
    pub closed: bool,
    /// The extra lap to call a capping all-in has been granted.
    pub reopened: bool,
    pub finished: bool,
}

impl Progress {
    pub const fn in_cap_lap(self) -> bool {
        self.closed && self.reopened
    }
}

/// The turn the rotator is suspended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pending {
    pub player: PlayerId,
    /// Produced during the cap lap rather than normal action.
    pub cap_lap: bool,
    pub capped: bool,
}
