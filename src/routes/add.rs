use axum::extract::State;

use crate::constants::MSG_SAMPLE_ADDED;
use crate::error::Result;
use crate::AppState;

/// Insert the fixed sample row
///
/// Manual smoke-test route. Returns 400 with an `{"error": ...}` body when the
/// sample row already exists.
pub async fn add_sample(State(state): State<AppState>) -> Result<&'static str> {
    state.store.insert_sample().await?;

    Ok(MSG_SAMPLE_ADDED)
}
