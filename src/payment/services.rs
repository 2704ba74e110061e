//! Payment service functions.
//!
//! Starting a payment validates the booking, prices it, stores the session
//! and spawns the task that walks it through the timed steps.

use std::sync::Arc;

use tokio::time::sleep;
use tracing::{info, warn};
use uuid::Uuid;

use crate::booking::BookingSelection;
use crate::cache::AppCache;
use crate::catalog::DEFAULT_CURRENCY;
use crate::config::PaymentTiming;
use crate::error::ApiError;
use crate::AppState;

use super::card::CardDetails;
use super::gateway::{Charge, PaymentGateway};
use super::session::PaymentSession;
use super::state::PaymentStep;

/// Outcome of a start request
#[derive(Debug, Clone)]
pub struct StartedPayment {
    pub session: PaymentSession,
    /// False when an idempotency key matched an existing session
    pub created: bool,
}

/// Validate a booking and start its simulated payment.
///
/// # Arguments
/// * `state` - Application state (cache, gateway, timing)
/// * `selection` - The booking being paid for
/// * `card` - Card form as typed; input masks are applied here
/// * `idempotency_key` - Optional client key; a repeat returns the first session
pub async fn start_payment(
    state: &AppState,
    selection: &BookingSelection,
    card: &CardDetails,
    idempotency_key: Option<String>,
) -> Result<StartedPayment, ApiError> {
    if let Some(key) = idempotency_key.as_deref() {
        if let Some(session) = state.cache.session_for_key(key).await {
            info!("Idempotent replay of payment session {}", session.id);
            return Ok(StartedPayment {
                session,
                created: false,
            });
        }
    }

    selection.ensure_ready_for_payment()?;
    let card = card.normalized();
    card.ensure_complete()?;

    let quote = selection.quote(DEFAULT_CURRENCY);
    let mut session = PaymentSession::new(selection, &quote, &card);
    session.submit()?;

    // Stored before the key is claimed, so a concurrent retry that loses the
    // claim always finds the winner's session
    state.cache.store_session(session.clone()).await;
    if let Some(key) = idempotency_key {
        if let Some(winner) = state.cache.claim_key(key, session.id).await {
            state.cache.payment_sessions.invalidate(&session.id).await;
            info!("Idempotent replay of payment session {}", winner);
            let session = get_payment(&state.cache, winner).await?;
            return Ok(StartedPayment {
                session,
                created: false,
            });
        }
    }

    info!(
        "Payment session {} processing {} {} via {} gateway",
        session.id,
        session.amount,
        session.currency,
        state.gateway.name()
    );

    tokio::spawn(run_simulation(
        state.cache.clone(),
        Arc::clone(&state.gateway),
        state.config.payment_timing,
        session.id,
    ));

    Ok(StartedPayment {
        session,
        created: true,
    })
}

/// Drive one session through processing, success and confirmation.
///
/// A session missing from the cache was abandoned; the task then stops
/// without touching anything.
pub async fn run_simulation(
    cache: AppCache,
    gateway: Arc<dyn PaymentGateway>,
    timing: PaymentTiming,
    session_id: Uuid,
) {
    sleep(timing.processing).await;

    let Some(mut session) = cache.session(session_id).await else {
        info!("Payment session {} gone before charge, stopping", session_id);
        return;
    };

    let charge = Charge {
        session_id,
        amount: session.amount,
        currency: session.currency.clone(),
    };

    let charged = match gateway.charge(&charge) {
        Ok(receipt) => session.succeed(receipt.booking_reference),
        Err(e) => {
            warn!("Payment session {} failed: {}", session_id, e);
            session.fail(e.to_string())
        }
    };
    if let Err(e) = charged {
        warn!("Payment session {}: {}", session_id, e);
        return;
    }

    let succeeded = session.step == PaymentStep::Success;
    if succeeded {
        info!(
            "Payment session {} succeeded, reference {}",
            session_id,
            session.booking_reference.as_deref().unwrap_or("-")
        );
    }
    if !cache.update_session(session).await {
        info!("Payment session {} abandoned during charge", session_id);
        return;
    }
    if !succeeded {
        return;
    }

    sleep(timing.success_hold).await;

    let Some(mut session) = cache.session(session_id).await else {
        info!("Payment session {} gone before confirmation", session_id);
        return;
    };
    match session.confirm() {
        Ok(()) => {
            if cache.update_session(session).await {
                info!("Booking confirmed for payment session {}", session_id);
            } else {
                info!("Payment session {} abandoned before confirmation", session_id);
            }
        }
        Err(e) => warn!("Payment session {}: {}", session_id, e),
    }
}

/// Look up a session
pub async fn get_payment(cache: &AppCache, session_id: Uuid) -> Result<PaymentSession, ApiError> {
    cache
        .session(session_id)
        .await
        .ok_or(ApiError::SessionNotFound(session_id))
}

/// Drop a session; a pending timer finds nothing and stops
pub async fn abandon_payment(cache: &AppCache, session_id: Uuid) -> Result<(), ApiError> {
    if cache.abandon_session(session_id).await {
        Ok(())
    } else {
        Err(ApiError::SessionNotFound(session_id))
    }
}
