use axum::{extract::State, Json};
use serde::Serialize;

use crate::constants::{MSG_SAVE_SCORE_USE_POST, MSG_SCORES_CREATED, MSG_SCORES_UPDATED};
use crate::error::Result;
use crate::models::ScoreSubmission;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SaveScoreResponse {
    pub message: String,
}

/// Save or update the caller's high scores
///
/// The row key is resolved server-side (machine hostname), never taken from
/// the request. Fields missing from the body count as 0, and an absent or
/// malformed body is treated as the all-zero submission, so no request shape
/// can lower a stored score or crash the service.
pub async fn save_score(
    State(state): State<AppState>,
    payload: Option<Json<ScoreSubmission>>,
) -> Result<Json<SaveScoreResponse>> {
    let submission = payload.map(|Json(s)| s).unwrap_or_default();
    let userid = state.identity.resolve();

    tracing::info!(
        "Score submission from {}: p={}, a={}, gdp={}",
        userid,
        submission.highscore_p,
        submission.highscore_a,
        submission.highscore_gdp
    );

    let (record, created) = state.store.upsert_max(&userid, &submission).await?;

    let message = if created {
        tracing::info!("Created score record for {}", record.userid);
        MSG_SCORES_CREATED
    } else {
        tracing::info!(
            "Updated score record for {}: p={}, a={}, gdp={}",
            record.userid,
            record.highscore_p,
            record.highscore_a,
            record.highscore_gdp
        );
        MSG_SCORES_UPDATED
    };

    Ok(Json(SaveScoreResponse {
        message: message.to_string(),
    }))
}

/// Informational GET for the save route; performs no write
pub async fn save_score_info() -> &'static str {
    MSG_SAVE_SCORE_USE_POST
}
