use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::ScoreRecord;
use crate::AppState;

/// List every stored score record
///
/// Returns a JSON array in store order. Store failures surface as a 500 with
/// an `{"error": ...}` body.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Vec<ScoreRecord>>> {
    let records = state.store.list_all().await?;

    tracing::debug!("Listing {} score records", records.len());

    Ok(Json(records))
}
