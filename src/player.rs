//! Player records and the seat arena that owns them.

use core::fmt;
use core::ops::{Index, IndexMut};

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Stable index of a player inside [`Seats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Returns the arena index of this player.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Betting state of one seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name. Only used for reporting, never for ordering.
    pub nickname: String,
    /// Has not folded.
    pub still_active: bool,
    /// Has committed every remaining chip and cannot act again.
    pub is_all_in: bool,
    /// Total chips committed in the current betting round.
    pub bet_placed: usize,
    /// Chips committed before the current betting round (blinds, earlier streets).
    pub dark_bet: usize,
}

impl Player {
    /// Creates a new active player with nothing committed.
    #[must_use]
    pub const fn new(nickname: String) -> Self {
        Self {
            nickname,
            still_active: true,
            is_all_in: false,
            bet_placed: 0,
            dark_bet: 0,
        }
    }

    /// Returns whether the player may still take a betting action.
    #[must_use]
    pub const fn can_act(&self) -> bool {
        self.still_active && !self.is_all_in
    }

    /// Returns everything the player has put in the pot so far.
    #[must_use]
    pub const fn committed(&self) -> usize {
        self.bet_placed + self.dark_bet
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nickname)
    }
}

/// Arena of players at a table.
///
/// Players keep their [`PlayerId`] for as long as the arena lives, so a
/// [`Rotator`](crate::Rotator) can refer to them by index while the round
/// driver holds the records.
#[derive(Debug, Clone, Default)]
pub struct Seats {
    players: Vec<Player>,
    by_name: HashMap<String, PlayerId>,
}

impl Seats {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a player and returns their ID.
    ///
    /// Joining with a nickname that is already seated returns the existing ID.
    pub fn join(&mut self, nickname: &str) -> PlayerId {
        if let Some(&id) = self.by_name.get(nickname) {
            return id;
        }

        let id = PlayerId(self.players.len());
        self.players.push(Player::new(String::from(nickname)));
        self.by_name.insert(String::from(nickname), id);
        id
    }

    /// Looks up a player by nickname.
    #[must_use]
    pub fn find(&self, nickname: &str) -> Option<PlayerId> {
        self.by_name.get(nickname).copied()
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    /// Returns the player with the given ID mutably.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0)
    }

    /// Returns whether the ID belongs to this arena.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        id.0 < self.players.len()
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether no one is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns every player ID in seating order.
    #[must_use]
    pub fn ids(&self) -> Vec<PlayerId> {
        (0..self.players.len()).map(PlayerId).collect()
    }

    /// Iterates over players with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| (PlayerId(index), player))
    }

    /// Posts a forced bet (such as a blind) made before the round starts.
    ///
    /// Returns `false` if the player is not seated.
    pub fn post_dark_bet(&mut self, id: PlayerId, amount: usize) -> bool {
        match self.get_mut(id) {
            Some(player) => {
                player.dark_bet += amount;
                true
            }
            None => false,
        }
    }

    /// Counts players among `ids` who have not folded.
    #[must_use]
    pub fn active_count(&self, ids: &[PlayerId]) -> usize {
        ids.iter()
            .filter_map(|&id| self.get(id))
            .filter(|player| player.still_active)
            .count()
    }

    /// Counts players among `ids` who can still bet (not folded, not all-in).
    #[must_use]
    pub fn betting_count(&self, ids: &[PlayerId]) -> usize {
        ids.iter()
            .filter_map(|&id| self.get(id))
            .filter(|player| player.can_act())
            .count()
    }

    /// Returns every chip committed by every player, this round and before.
    #[must_use]
    pub fn total_committed(&self) -> usize {
        self.players.iter().map(Player::committed).sum()
    }

    /// Closes a street: this round's bets become dark bets for the next one.
    ///
    /// Folded and all-in flags carry over.
    pub fn end_round(&mut self) {
        for player in &mut self.players {
            player.dark_bet += player.bet_placed;
            player.bet_placed = 0;
        }
    }

    /// Resets every player for a new hand.
    pub fn clear_hand(&mut self) {
        for player in &mut self.players {
            player.still_active = true;
            player.is_all_in = false;
            player.bet_placed = 0;
            player.dark_bet = 0;
        }
    }
}

impl Index<PlayerId> for Seats {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.0]
    }
}

impl IndexMut<PlayerId> for Seats {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        &mut self.players[id.0]
    }
}
