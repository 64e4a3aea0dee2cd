//! Request handlers, grouped by resource.

pub mod decks;
pub mod reading;
pub mod spreads;
