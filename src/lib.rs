//! # tarot-table
//!
//! A tarot-reading table engine: file-backed deck storage, spread
//! layouts, an in-memory table state machine for one reading session,
//! and an HTTP API that proxies interpretation requests to an external
//! generative-language collaborator.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG behind every shuffle and orientation roll
//! - `model`: cards, decks, and spread layouts
//! - `store`: one-file-per-deck persistence and the read-only spread catalog
//! - `table`: placed cards, snapping, draw bookkeeping, the reading-session
//!   state machine
//! - `reading`: reading order, prompt assembly, the interpreter boundary,
//!   deterministic placeholder art
//! - `http`: axum REST surface
//! - `config`: server configuration

pub mod config;
pub mod core;
pub mod error;
pub mod http;
pub mod model;
pub mod reading;
pub mod store;
pub mod table;

// Re-export commonly used types
pub use crate::config::ServerConfig;
pub use crate::core::DrawRng;
pub use crate::error::{Error, Result};
pub use crate::http::{router, AppState};
pub use crate::model::{
    Arcana, Card, CardPatch, Deck, DeckPatch, DeckSummary, Spread, SpreadPosition, Suit,
    SNAP_RADIUS,
};
pub use crate::reading::{
    can_generate, reading_order, GenerativeClient, Interpreter, Reading, ReadingOrchestrator,
};
pub use crate::store::{DeckStore, SpreadCatalog};
pub use crate::table::{draw_from_deck, DrawLedger, PlacedCard, TableState};
