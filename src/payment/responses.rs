//! Request and response DTOs for payment API endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::BookingSelection;
use crate::pricing::MoneyResponse;

use super::card::CardDetails;
use super::session::PaymentSession;
use super::state::PaymentStep;

/// Request to start a payment
#[derive(Debug, Deserialize)]
pub struct StartPaymentRequest {
    pub booking: BookingSelection,
    #[serde(default)]
    pub card: CardDetails,
}

/// Response for a payment session
#[derive(Debug, Serialize)]
pub struct PaymentSessionResponse {
    pub session_id: Uuid,
    pub step: PaymentStep,
    pub amount: MoneyResponse,
    pub package_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub group_size: Option<String>,
    pub service_ids: Vec<String>,
    pub cardholder_name: String,
    pub card_last4: String,
    pub booking_reference: Option<String>,
    pub confirmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PaymentSession> for PaymentSessionResponse {
    fn from(session: PaymentSession) -> Self {
        Self {
            session_id: session.id,
            step: session.step,
            amount: MoneyResponse::new(session.amount, &session.currency),
            package_name: session.package_name,
            date: session.date,
            group_size: session.group_size,
            service_ids: session.service_ids,
            cardholder_name: session.cardholder_name,
            card_last4: session.card_last4,
            booking_reference: session.booking_reference,
            confirmed: session.confirmed,
            last_error: session.last_error,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
