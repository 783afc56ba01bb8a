//! A poker betting-round engine with optional `no_std` support.
//!
//! The crate provides a [`Rotator`] that decides, in seating order, who acts
//! next and what they may do, including capped betting after a short all-in,
//! and [`create_pots`] which splits the committed money into side pots.
//!
//! # Example
//!
//! ```
//! use pkrs::{RoundOptions, Rotator, Seats};
//!
//! let mut seats = Seats::new();
//! let a = seats.join("a");
//! let b = seats.join("b");
//! let c = seats.join("c");
//!
//! let options = RoundOptions::default().with_bet_size(10);
//! let mut rotator = Rotator::new(&seats, [a, b, c], options).unwrap();
//!
//! let turn = rotator.next_turn(&seats).unwrap().unwrap();
//! rotator.raise_to(&mut seats, turn.player, 30).unwrap();
//! while let Some(turn) = rotator.next_turn(&seats).unwrap() {
//!     rotator.check_or_call(&mut seats, turn.player).unwrap();
//! }
//!
//! let pots = rotator.create_pots(&seats).unwrap();
//! assert_eq!(pots[0].pot_size, 90);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod options;
pub mod player;
pub mod pot;
pub mod rotator;

// Re-export main types
pub use error::{ActionError, RoundError, SettleError};
pub use options::RoundOptions;
pub use player::{Player, PlayerId, Seats};
pub use pot::{PotNotation, SidePot, create_pots};
pub use rotator::{Outcome, RoundPhase, Rotator, Turn};
