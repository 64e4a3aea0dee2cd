//! Data model: cards, decks, and spread layouts.

mod card;
mod deck;
mod spread;

pub use card::{Arcana, Card, CardPatch, Suit};
pub use deck::{is_valid_deck_id, Deck, DeckPatch, DeckSummary, DECK_ID_PATTERN};
pub use spread::{Spread, SpreadPosition, SNAP_RADIUS};
