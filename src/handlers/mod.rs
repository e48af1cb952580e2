pub mod record;
pub mod statz;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::chart::RenderError;

// ─── Unified error type ──────────────────────────────────────────

/// Handlers return `Result<_, AppError>`; this impl turns the error half
/// into a plain-text status response so no handler formats errors itself.
#[derive(Debug)]
pub enum AppError {
    Render(RenderError),
    Internal(String),
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Render(e) => {
                tracing::warn!(stage = e.stage(), error = %e, "chart render failed");
                e.to_string()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                msg
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
