//! Spread catalog handlers. Read-only.

use axum::extract::{Path, State};
use axum::Json;

use crate::error::Result;
use crate::model::Spread;

use super::super::state::AppState;

/// `GET /spreads`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Spread>> {
    Json(state.spreads.list_all().to_vec())
}

/// `GET /spreads/{spreadId}`
pub async fn get_spread(
    State(state): State<AppState>,
    Path(spread_id): Path<String>,
) -> Result<Json<Spread>> {
    Ok(Json(state.spreads.get_by_id(&spread_id)?.clone()))
}
