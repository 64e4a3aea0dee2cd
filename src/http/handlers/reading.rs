//! Reading generation and card placeholder handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::reading::{svg_placeholder, Reading};
use crate::table::PlacedCard;

use super::super::state::AppState;

/// `POST /reading` payload: the table state to interpret.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReadingRequest {
    pub deck_id: String,
    #[serde(default)]
    pub spread_id: Option<String>,
    pub cards: Vec<PlacedCard>,
}

/// `GET /card-placeholder/{deckId}/{cardId}` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderResponse {
    pub image_url: String,
    pub deck_id: String,
    pub card_id: String,
}

/// `POST /reading`
///
/// Delegates the revealed cards to the interpretation collaborator.
/// An unknown spread id is a 404 before any collaborator call is made.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<ReadingRequest>,
) -> Result<Json<Reading>> {
    let spread = match &request.spread_id {
        Some(id) => Some(state.spreads.get_by_id(id)?),
        None => None,
    };
    let has_positions = spread.is_some_and(|s| !s.positions.is_empty());

    let reading = state
        .orchestrator
        .generate(
            &request.deck_id,
            request.spread_id.as_deref(),
            has_positions,
            &request.cards,
        )
        .await?;
    Ok(Json(reading))
}

/// `GET /card-placeholder/{deckId}/{cardId}`
///
/// Always answers with the deterministic local placeholder; the same
/// card id yields the same image URL on every call.
pub async fn placeholder(
    Path((deck_id, card_id)): Path<(String, String)>,
) -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse {
        image_url: svg_placeholder(&card_id),
        deck_id,
        card_id,
    })
}
