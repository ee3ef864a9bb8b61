use axum::extract::State;
use axum::Json;

use vocab_wordgen::WordRecord;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn health() -> &'static str {
    "OK"
}

/// `GET /api/word`: one freshly generated vocabulary word.
pub async fn get_word(State(state): State<AppState>) -> Result<Json<WordRecord>, ApiError> {
    let record = state.generator.generate().await?;
    tracing::info!(word = record.word().unwrap_or_default(), "generated word");
    Ok(Json(record))
}
