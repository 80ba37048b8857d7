//! HTTP API for the ticket board
//!
//! Thin translation layer: routes map onto [`TicketService`] calls, and the
//! crate's error taxonomy maps onto status codes. Every error response body
//! is `{"error": <machine-readable kind>, "message": <human text>}`.

use crate::error::WorkManagerError;
use crate::service::TicketService;
use crate::storage::JsonFileStore;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::Router;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

mod handlers;

/// Shared state handed to every handler
pub struct AppState {
    pub service: TicketService<JsonFileStore>,
}

/// Builds the REST router: `/api/tickets` plus optional static board assets.
///
/// When `public_dir` is given, anything outside `/api` is served from it so
/// the browser client and its API share one origin.
pub fn build_router(service: TicketService<JsonFileStore>, public_dir: Option<&Path>) -> Router {
    let state = Arc::new(AppState { service });

    let mut router = Router::new()
        .route(
            "/api/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route("/api/tickets/:id", patch(handlers::update_ticket))
        .with_state(state);

    if let Some(dir) = public_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Response-side wrapper for [`WorkManagerError`]
pub struct ApiError(WorkManagerError);

impl ApiError {
    /// 400 for a request body that is not valid JSON for the expected shape
    fn bad_body(detail: impl std::fmt::Display) -> Self {
        Self(WorkManagerError::validation(format!(
            "request body must be a JSON object: {detail}"
        )))
    }

    /// 400 for a path id that is not a positive integer
    fn bad_id(raw: &str) -> Self {
        Self(WorkManagerError::validation(format!(
            "ticket id must be a positive integer (got `{raw}`)"
        )))
    }

    const fn status(&self) -> StatusCode {
        match &self.0 {
            WorkManagerError::Validation { .. } => StatusCode::BAD_REQUEST,
            WorkManagerError::TicketNotFound { .. } => StatusCode::NOT_FOUND,
            WorkManagerError::CorruptStore { .. }
            | WorkManagerError::Persistence { .. }
            | WorkManagerError::Config(_)
            | WorkManagerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WorkManagerError> for ApiError {
    fn from(err: WorkManagerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(kind = self.0.kind(), "request failed: {}", self.0);
        }
        let body = Json(json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_map_to_contract_status_codes() {
        let cases = [
            (WorkManagerError::validation("x"), StatusCode::BAD_REQUEST),
            (
                WorkManagerError::TicketNotFound { id: 9 },
                StatusCode::NOT_FOUND,
            ),
            (
                WorkManagerError::Persistence {
                    path: "tickets.json".into(),
                    source: std::io::Error::other("disk full"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError(err).status(), expected);
        }
    }

    #[test]
    fn test_bad_id_is_a_validation_error() {
        let err = ApiError::bad_id("abc");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.0.kind(), "validation_error");
    }
}
