//! Payment step state machine.
//!
//! ```text
//! Details --submit--> Processing --charged--> Success --hold elapsed--> Details
//!                        |                                               ^
//!                        +------------- gateway error -------------------+
//! ```
//!
//! The shipped gateway never fails, so in practice the flow is linear.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStep {
    /// Collecting card details
    #[default]
    Details,
    /// Waiting on the gateway
    Processing,
    /// Charged; shown briefly before the booking is confirmed
    Success,
}

impl PaymentStep {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Processing => "processing",
            Self::Success => "success",
        }
    }

    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Details, Self::Processing)
                | (Self::Processing, Self::Success)
                | (Self::Processing, Self::Details)
                | (Self::Success, Self::Details)
        )
    }

    /// Validated transition
    pub fn transition(self, to: Self) -> Result<Self, ApiError> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(ApiError::InvalidTransition { from: self, to })
        }
    }
}

impl fmt::Display for PaymentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_flow() {
        let step = PaymentStep::default();
        let step = step.transition(PaymentStep::Processing).unwrap();
        let step = step.transition(PaymentStep::Success).unwrap();
        let step = step.transition(PaymentStep::Details).unwrap();
        assert_eq!(step, PaymentStep::Details);
    }

    #[test]
    fn test_cannot_skip_processing() {
        let err = PaymentStep::Details
            .transition(PaymentStep::Success)
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidTransition {
                from: PaymentStep::Details,
                to: PaymentStep::Success
            }
        ));
    }

    #[test]
    fn test_no_self_transitions() {
        for step in [
            PaymentStep::Details,
            PaymentStep::Processing,
            PaymentStep::Success,
        ] {
            assert!(!step.can_transition_to(step), "{} -> {}", step, step);
        }
    }

    #[test]
    fn test_success_cannot_return_to_processing() {
        assert!(!PaymentStep::Success.can_transition_to(PaymentStep::Processing));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentStep::Processing).unwrap(),
            "\"processing\""
        );
        let step: PaymentStep = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(step, PaymentStep::Success);
    }
}
