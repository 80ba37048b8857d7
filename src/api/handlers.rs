//! Request handlers for the ticket endpoints

use super::{ApiError, AppState};
use crate::core::{CreateTicketRequest, Ticket, UpdateTicketRequest};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// `GET /api/tickets` — the full board, in file order
pub(crate) async fn list_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = state.service.list_tickets()?;
    Ok(Json(tickets))
}

/// `POST /api/tickets` — create a ticket, 201 on success
pub(crate) async fn create_ticket(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateTicketRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    let Json(input) = body.map_err(|rejection| ApiError::bad_body(rejection.body_text()))?;
    let ticket = state.service.create_ticket(input).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// `PATCH /api/tickets/:id` — partial update plus optional comment append
pub(crate) async fn update_ticket(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateTicketRequest>, JsonRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let id: u64 = raw_id.parse().map_err(|_| ApiError::bad_id(&raw_id))?;
    let Json(input) = body.map_err(|rejection| ApiError::bad_body(rejection.body_text()))?;
    let ticket = state.service.update_ticket(id, input).await?;
    Ok(Json(ticket))
}
