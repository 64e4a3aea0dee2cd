//! Persistence: file-backed decks and the read-only spread catalog.

mod decks;
mod spreads;

pub use decks::DeckStore;
pub use spreads::SpreadCatalog;
