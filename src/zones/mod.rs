//! Card locations.
//!
//! Each round zone (remaining pool, hands, crib, run, played cards) is a
//! separately owned `Pile`. Transfers are moves: a card leaving one pile
//! lands in exactly one other.

pub mod pile;

pub use pile::Pile;
