//! The virtual table: placed cards, draw bookkeeping, and the
//! reading-session state machine.

mod ledger;
mod placed;
mod state;

pub use ledger::DrawLedger;
pub use placed::PlacedCard;
pub use state::{draw_from_deck, TableState};
