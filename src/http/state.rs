//! Shared handler state.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::core::DrawRng;
use crate::reading::ReadingOrchestrator;
use crate::store::{DeckStore, SpreadCatalog};

/// Everything a request handler can reach.
///
/// The deck store sits behind an async `RwLock` so concurrent editor
/// requests to the same deck serialize instead of racing the whole-file
/// read-modify-write cycle. The RNG is shared so shuffle results draw
/// from one seedable sequence.
#[derive(Clone)]
pub struct AppState {
    pub decks: Arc<RwLock<DeckStore>>,
    pub spreads: Arc<SpreadCatalog>,
    pub orchestrator: Arc<ReadingOrchestrator>,
    pub rng: Arc<Mutex<DrawRng>>,
}

impl AppState {
    /// Assemble handler state from its parts.
    #[must_use]
    pub fn new(
        decks: DeckStore,
        spreads: SpreadCatalog,
        orchestrator: ReadingOrchestrator,
        rng: DrawRng,
    ) -> Self {
        Self {
            decks: Arc::new(RwLock::new(decks)),
            spreads: Arc::new(spreads),
            orchestrator: Arc::new(orchestrator),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
