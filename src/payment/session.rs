//! One run of the payment flow for a booking.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::booking::BookingSelection;
use crate::catalog;
use crate::error::ApiError;
use crate::pricing::PriceBreakdown;

use super::card::CardDetails;
use super::state::PaymentStep;

const REFERENCE_PREFIX: &str = "MO";
const REFERENCE_LEN: usize = 9;

/// New booking reference: `MO` followed by 9 uppercase alphanumerics.
pub fn generate_booking_reference() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}{}", REFERENCE_PREFIX, token[..REFERENCE_LEN].to_uppercase())
}

/// Payment session snapshot
///
/// The amount is priced server-side from the catalog when the session starts.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSession {
    pub id: Uuid,
    pub step: PaymentStep,
    pub amount: Decimal,
    pub currency: String,
    pub package_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub group_size: Option<String>,
    pub service_ids: Vec<String>,
    pub cardholder_name: String,
    pub card_last4: String,
    pub booking_reference: Option<String>,
    pub confirmed: bool,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PaymentSession {
    pub fn new(selection: &BookingSelection, quote: &PriceBreakdown, card: &CardDetails) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            step: PaymentStep::Details,
            amount: quote.total,
            currency: quote.currency.clone(),
            package_name: selection
                .package_id
                .as_deref()
                .and_then(catalog::find_package)
                .map(|p| p.name.to_string()),
            date: selection.date,
            group_size: selection.group_size.clone(),
            service_ids: selection.service_ids.iter().cloned().collect(),
            cardholder_name: card.cardholder_name.clone(),
            card_last4: card.last4(),
            booking_reference: None,
            confirmed: false,
            last_error: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn move_to(&mut self, to: PaymentStep) -> Result<(), ApiError> {
        self.step = self.step.transition(to)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Details -> Processing
    pub fn submit(&mut self) -> Result<(), ApiError> {
        self.move_to(PaymentStep::Processing)?;
        self.last_error = None;
        Ok(())
    }

    /// Processing -> Success, recording the reference issued by the gateway
    pub fn succeed(&mut self, booking_reference: String) -> Result<(), ApiError> {
        self.move_to(PaymentStep::Success)?;
        self.booking_reference = Some(booking_reference);
        Ok(())
    }

    /// Processing -> Details after a gateway error
    pub fn fail(&mut self, reason: String) -> Result<(), ApiError> {
        self.move_to(PaymentStep::Details)?;
        self.last_error = Some(reason);
        Ok(())
    }

    /// Success -> Details with the booking confirmed
    pub fn confirm(&mut self) -> Result<(), ApiError> {
        self.move_to(PaymentStep::Details)?;
        self.confirmed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::ContactInfo;
    use rust_decimal_macros::dec;

    fn session() -> PaymentSession {
        let mut selection = BookingSelection::new();
        selection.select_package("pemayangtse");
        selection.select_group_size("2-4");
        selection.select_date(NaiveDate::from_ymd_opt(2025, 7, 8).unwrap());
        selection.toggle_service("guide");
        selection.contact = ContactInfo {
            name: "Sonam".to_string(),
            email: "sonam@example.com".to_string(),
            phone: "9876543210".to_string(),
            special_requests: String::new(),
        };

        let card = CardDetails {
            cardholder_name: "Sonam".to_string(),
            card_number: "4000 0000 0000 0002".to_string(),
            expiry_date: "01/27".to_string(),
            cvv: "999".to_string(),
        };

        PaymentSession::new(&selection, &selection.quote("INR"), &card)
    }

    #[test]
    fn test_booking_reference_format() {
        let reference = generate_booking_reference();
        assert_eq!(reference.len(), 11);
        assert!(reference.starts_with("MO"));
        assert!(reference[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_booking_references_differ() {
        assert_ne!(generate_booking_reference(), generate_booking_reference());
    }

    #[test]
    fn test_new_session_is_priced_from_catalog() {
        let session = session();
        // (2200 + 800) * 0.95
        assert_eq!(session.amount, dec!(2850));
        assert_eq!(session.package_name.as_deref(), Some("Pemayangtse Monastery"));
        assert_eq!(session.card_last4, "0002");
        assert_eq!(session.step, PaymentStep::Details);
        assert!(!session.confirmed);
    }

    #[test]
    fn test_happy_path() {
        let mut session = session();
        session.submit().unwrap();
        session.succeed("MOABCDEF123".to_string()).unwrap();
        assert_eq!(session.step, PaymentStep::Success);
        session.confirm().unwrap();

        assert_eq!(session.step, PaymentStep::Details);
        assert!(session.confirmed);
        assert_eq!(session.booking_reference.as_deref(), Some("MOABCDEF123"));
    }

    #[test]
    fn test_gateway_failure_returns_to_details() {
        let mut session = session();
        session.submit().unwrap();
        session.fail("card declined".to_string()).unwrap();

        assert_eq!(session.step, PaymentStep::Details);
        assert_eq!(session.last_error.as_deref(), Some("card declined"));
        assert!(!session.confirmed);

        // Retry clears the error
        session.submit().unwrap();
        assert!(session.last_error.is_none());
    }

    #[test]
    fn test_cannot_confirm_before_success() {
        let mut session = session();
        session.submit().unwrap();
        assert!(session.confirm().is_err());
        assert!(!session.confirmed);
    }
}
