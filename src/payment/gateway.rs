//! Payment gateway seam.
//!
//! Only a simulated gateway exists. A real integration implements
//! [`PaymentGateway`] and is swapped into `AppState`.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::ApiError;

use super::session::generate_booking_reference;

/// What the gateway is asked to charge
#[derive(Debug, Clone)]
pub struct Charge {
    pub session_id: Uuid,
    pub amount: Decimal,
    pub currency: String,
}

/// Successful charge
#[derive(Debug, Clone)]
pub struct GatewayReceipt {
    pub booking_reference: String,
}

pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &'static str;

    fn charge(&self, charge: &Charge) -> Result<GatewayReceipt, ApiError>;
}

/// Accepts every charge
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedGateway;

impl PaymentGateway for SimulatedGateway {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn charge(&self, charge: &Charge) -> Result<GatewayReceipt, ApiError> {
        tracing::debug!(
            "Simulated charge of {} {} for session {}",
            charge.amount,
            charge.currency,
            charge.session_id
        );
        Ok(GatewayReceipt {
            booking_reference: generate_booking_reference(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_simulated_gateway_always_succeeds() {
        let charge = Charge {
            session_id: Uuid::new_v4(),
            amount: dec!(4320),
            currency: "INR".to_string(),
        };
        let receipt = SimulatedGateway.charge(&charge).unwrap();
        assert!(receipt.booking_reference.starts_with("MO"));
    }
}
