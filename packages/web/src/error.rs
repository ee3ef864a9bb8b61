use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use vocab_wordgen::{ErrorKind, WordGenError};

pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse response from AI model";
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate word";

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Failure of `GET /api/word`.
///
/// Every failure is a 500 with a fixed message; the underlying error is only
/// logged, never sent to the client.
#[derive(Debug)]
pub struct ApiError(WordGenError);

impl From<WordGenError> for ApiError {
    fn from(err: WordGenError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        tracing::error!(error = %self.0, ?kind, "error generating word");

        let message = match kind {
            ErrorKind::MalformedUpstreamResponse => PARSE_FAILURE_MESSAGE,
            _ => GENERATION_FAILURE_MESSAGE,
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}
