//! Core utilities: deterministic randomness.

mod rng;

pub use rng::DrawRng;
