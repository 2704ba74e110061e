//! Payment API route handlers

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

use super::responses::{PaymentSessionResponse, StartPaymentRequest};
use super::services;

pub const IDEMPOTENCY_HEADER: &str = "idempotency-key";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/payments", post(start))
        .route("/api/payments/:id", get(show).delete(abandon))
}

/// Start a simulated payment; 201 for a new session, 200 for an idempotent replay
async fn start(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<StartPaymentRequest>,
) -> Result<(StatusCode, Json<PaymentSessionResponse>), ApiError> {
    let key = headers
        .get(IDEMPOTENCY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    let started = services::start_payment(&state, &request.booking, &request.card, key).await?;
    let status = if started.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(started.session.into())))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentSessionResponse>, ApiError> {
    let session = services::get_payment(&state.cache, id).await?;
    Ok(Json(session.into()))
}

async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::abandon_payment(&state.cache, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
