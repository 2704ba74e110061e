//! In-progress booking selection and the gate that guards payment.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiError;
use crate::pricing::{compute_price, PriceBreakdown};

use super::contact::ContactInfo;

/// Everything the visitor has chosen so far.
///
/// Ids are kept as given; an id that is not in the catalog still counts as a
/// selection for the gate but prices at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingSelection {
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub service_ids: BTreeSet<String>,
    #[serde(default)]
    pub group_size: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_package(&mut self, package_id: impl Into<String>) {
        self.package_id = Some(package_id.into());
    }

    pub fn select_group_size(&mut self, group_size: impl Into<String>) {
        self.group_size = Some(group_size.into());
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Add the service if absent, remove it if present.
    ///
    /// Returns whether the service is selected afterwards.
    pub fn toggle_service(&mut self, service_id: &str) -> bool {
        if self.service_ids.remove(service_id) {
            false
        } else {
            self.service_ids.insert(service_id.to_string());
            true
        }
    }

    /// Required fields that are still unset, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_set(&self.package_id) {
            missing.push("package");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if !is_set(&self.group_size) {
            missing.push("group_size");
        }
        missing.extend(self.contact.missing_fields());
        missing
    }

    /// True only when every required field is set
    pub fn is_form_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn quote(&self, currency: &str) -> PriceBreakdown {
        compute_price(
            self.package_id.as_deref(),
            self.service_ids.iter().map(String::as_str),
            self.group_size.as_deref(),
            currency,
        )
    }

    /// Gate for entering payment: all required fields present and contact
    /// details well formed.
    pub fn ensure_ready_for_payment(&self) -> Result<(), ApiError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::IncompleteForm { missing });
        }
        self.contact.validate()?;
        Ok(())
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
