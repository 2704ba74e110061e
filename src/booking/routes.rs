//! Booking API route handlers

use axum::{routing::post, Json, Router};
use serde::Serialize;
use validator::Validate;

use crate::catalog::DEFAULT_CURRENCY;
use crate::pricing::responses::PriceBreakdownResponse;
use crate::AppState;

use super::selection::BookingSelection;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/bookings/validate", post(validate))
}

/// Response for booking form validation
#[derive(Debug, Serialize)]
pub struct BookingValidationResponse {
    /// Every required field is present
    pub is_form_valid: bool,
    /// Form is valid and contact details are well formed
    pub ready_for_payment: bool,
    pub missing: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
    pub pricing: PriceBreakdownResponse,
}

/// Gate a booking form and price it in one round trip
async fn validate(Json(selection): Json<BookingSelection>) -> Json<BookingValidationResponse> {
    let missing = selection.missing_fields();
    let errors = selection
        .contact
        .validate()
        .err()
        .and_then(|e| serde_json::to_value(e).ok());
    let is_form_valid = missing.is_empty();
    let quote = selection.quote(DEFAULT_CURRENCY);

    Json(BookingValidationResponse {
        is_form_valid,
        ready_for_payment: is_form_valid && errors.is_none(),
        missing,
        errors,
        pricing: PriceBreakdownResponse::from(&quote),
    })
}
